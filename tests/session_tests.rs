//! Session tests - key actions driving the engine and cursor

use topolife::core::{Cursor, LifeSnapshot};
use topolife::engine::{Life, LifeConfig};
use topolife::session::{Outcome, Session};
use topolife::types::{Direction, Geometry, LifeAction, Mode};

fn drawing(rows: usize, cols: usize, geometry: Geometry) -> Session {
    let life = Life::new(
        &LifeConfig::new(rows, cols)
            .with_geometry(geometry)
            .with_seed(11),
    )
    .unwrap();
    Session::new(life, Mode::Drawing, 60).unwrap()
}

fn walk(s: &mut Session, direction: Direction, steps: usize) -> Outcome {
    let mut last = Outcome::Continue;
    for _ in 0..steps {
        last = s.apply(LifeAction::Move(direction));
    }
    last
}

#[test]
fn test_draw_blinker_then_run() {
    let mut s = drawing(5, 5, Geometry::Rectangle);
    assert_eq!(s.cursor(), Cursor::new(2, 2));

    s.apply(LifeAction::Move(Direction::Left));
    s.apply(LifeAction::Toggle);
    s.apply(LifeAction::Move(Direction::Right));
    s.apply(LifeAction::Toggle);
    s.apply(LifeAction::Move(Direction::Right));
    s.apply(LifeAction::Toggle);
    assert_eq!(s.life().population(), 3);

    // Nothing evolves while drawing.
    assert!(!s.tick());
    assert_eq!(s.life().generation(), 0);

    s.apply(LifeAction::StartPause);
    assert!(s.tick());
    assert_eq!(s.life().board().get(1, 2), Some(true));
    assert_eq!(s.life().board().get(2, 1), Some(false));
}

#[test]
fn test_plane_edges_block_the_cursor() {
    let mut s = drawing(3, 3, Geometry::Rectangle);
    assert_eq!(walk(&mut s, Direction::Up, 1), Outcome::Continue);
    assert_eq!(walk(&mut s, Direction::Up, 1), Outcome::Blocked);
    assert_eq!(s.cursor(), Cursor::new(0, 1));
}

#[test]
fn test_torus_cursor_wraps() {
    let mut s = drawing(3, 4, Geometry::Torus);
    walk(&mut s, Direction::Right, 2);
    assert_eq!(s.cursor(), Cursor::new(1, 0));
    walk(&mut s, Direction::Up, 2);
    assert_eq!(s.cursor(), Cursor::new(2, 0));
}

#[test]
fn test_mobius_cursor_flips_row() {
    let mut s = drawing(5, 4, Geometry::MobiusStrip);
    walk(&mut s, Direction::Up, 2);
    assert_eq!(s.cursor(), Cursor::new(0, 2));
    // Off the right edge onto the left, mirrored.
    walk(&mut s, Direction::Right, 2);
    assert_eq!(s.cursor(), Cursor::new(4, 0));
    // Rows are not glued.
    assert_eq!(walk(&mut s, Direction::Down, 1), Outcome::Blocked);
}

#[test]
fn test_step_pauses_a_running_session() {
    let mut s = drawing(4, 4, Geometry::Torus);
    s.apply(LifeAction::StartPause);
    assert_eq!(s.mode(), Mode::Running);
    s.apply(LifeAction::Step);
    assert_eq!(s.mode(), Mode::Paused);
    assert_eq!(s.life().generation(), 1);
    assert!(!s.tick());
}

#[test]
fn test_randomize_clear_and_cycle() {
    let mut s = drawing(10, 10, Geometry::Torus);
    s.apply(LifeAction::Randomize);
    assert!(s.life().population() > 0);
    s.apply(LifeAction::Clear);
    assert_eq!(s.life().population(), 0);

    s.apply(LifeAction::CycleGeometry);
    assert_eq!(s.geometry(), Geometry::MobiusStrip);
}

#[test]
fn test_view_state_hides_cursor_outside_drawing() {
    let mut s = drawing(3, 3, Geometry::Torus);
    let mut snap = LifeSnapshot::default();

    let state = s.view_into(&mut snap);
    assert_eq!(state.cursor, Some(Cursor::new(1, 1)));
    assert_eq!(state.mode, Mode::Drawing);
    assert_eq!(snap.seed, Some(11));

    s.apply(LifeAction::StartPause);
    let state = s.view_into(&mut snap);
    assert_eq!(state.cursor, None);
    assert_eq!(state.delay_ms, 60);
}
