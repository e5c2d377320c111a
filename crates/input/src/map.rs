//! Key mapping from terminal events to session actions.

use crate::types::{Direction, LifeAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to session actions.
pub fn handle_key_event(key: KeyEvent) -> Option<LifeAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        // Cursor
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(LifeAction::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(LifeAction::Move(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(LifeAction::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(LifeAction::Move(Direction::Right))
        }
        KeyCode::Enter => Some(LifeAction::Toggle),

        // Simulation
        KeyCode::Char(' ') => Some(LifeAction::StartPause),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(LifeAction::Draw),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('.') => Some(LifeAction::Step),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(LifeAction::Randomize),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(LifeAction::Clear),
        KeyCode::Char('g') | KeyCode::Char('G') => Some(LifeAction::CycleGeometry),

        // Speed
        KeyCode::Char('+') | KeyCode::Char('=') => Some(LifeAction::Faster),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(LifeAction::Slower),

        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_cursor_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(LifeAction::Move(Direction::Up))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(LifeAction::Move(Direction::Down))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('h'))),
            Some(LifeAction::Move(Direction::Left))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('L'))),
            Some(LifeAction::Move(Direction::Right))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Enter)),
            Some(LifeAction::Toggle)
        );
    }

    #[test]
    fn test_simulation_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(LifeAction::StartPause)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('.'))),
            Some(LifeAction::Step)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('R'))),
            Some(LifeAction::Randomize)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('g'))),
            Some(LifeAction::CycleGeometry)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('+'))),
            Some(LifeAction::Faster)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_ctrl_c_is_not_clear() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(key), None);
        assert!(should_quit(key));
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('c'))),
            Some(LifeAction::Clear)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
