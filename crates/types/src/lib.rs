//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation core, terminal rendering, input mapping).
//!
//! # Geometries
//!
//! A board is a rectangle whose opposite edges may be glued together. The
//! gluing decides which cells count as neighbors across an edge:
//!
//! | Geometry | Left/right edges | Top/bottom edges |
//! |----------|------------------|------------------|
//! | `Rectangle` | open | open |
//! | `Cylinder` | glued | open |
//! | `Torus` | glued | glued |
//! | `MobiusStrip` | glued with a twist | open |
//! | `KleinBottle` | glued with a twist | glued |
//! | `ProjectivePlane` | glued with a twist | glued with a twist |
//!
//! # Host Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_PROB` | 0.25 | Chance of a cell starting out alive |
//! | `DEFAULT_DELAY_MS` | 60 | Pause between generations |
//! | `MIN_DELAY_MS` | 10 | Fastest speed reachable with `+` |
//! | `MAX_DELAY_MS` | 2000 | Slowest speed reachable with `-` |
//!
//! # Examples
//!
//! ```
//! use topolife_types::{Direction, Geometry, LifeAction};
//!
//! // Parse from string (case-insensitive, several spellings)
//! assert_eq!(Geometry::from_str("Klein bottle"), Some(Geometry::KleinBottle));
//! assert_eq!(Geometry::from_str("mobius"), Some(Geometry::MobiusStrip));
//!
//! // Cycle through all six geometries
//! assert_eq!(Geometry::ProjectivePlane.next(), Geometry::Rectangle);
//!
//! // Actions carry their direction
//! let action = LifeAction::Move(Direction::Up);
//! assert_eq!(action, LifeAction::Move(Direction::Up));
//! ```

/// Default probability of a cell starting out alive
pub const DEFAULT_PROB: f64 = 0.25;

/// Default pause between generations in milliseconds
pub const DEFAULT_DELAY_MS: u64 = 60;

/// Lower bound for the generation delay
pub const MIN_DELAY_MS: u64 = 10;

/// Upper bound for the generation delay
pub const MAX_DELAY_MS: u64 = 2000;

/// Character drawn for a living cell
pub const CH_ALIVE: char = '@';

/// Character drawn for a dead cell
pub const CH_DEAD: char = ' ';

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_defaults() {
        assert_eq!(DEFAULT_PROB, 0.25);
        assert_eq!(DEFAULT_DELAY_MS, 60);
        assert!(MIN_DELAY_MS <= DEFAULT_DELAY_MS && DEFAULT_DELAY_MS <= MAX_DELAY_MS);
        assert_eq!(CH_ALIVE, '@');
        assert_eq!(CH_DEAD, ' ');
    }

    #[test]
    fn geometry_names_round_trip() {
        for geometry in Geometry::ALL {
            assert_eq!(Geometry::from_str(geometry.as_str()), Some(geometry));
            assert_eq!(Geometry::from_str(geometry.label()), Some(geometry));
        }
    }

    #[test]
    fn geometry_parse_aliases() {
        assert_eq!(Geometry::from_str("plane"), Some(Geometry::Rectangle));
        assert_eq!(Geometry::from_str("TORUS"), Some(Geometry::Torus));
        assert_eq!(Geometry::from_str("Mobius strip"), Some(Geometry::MobiusStrip));
        assert_eq!(Geometry::from_str("möbius"), Some(Geometry::MobiusStrip));
        assert_eq!(Geometry::from_str("klein_bottle"), Some(Geometry::KleinBottle));
        assert_eq!(Geometry::from_str("real-projective-plane"), Some(Geometry::ProjectivePlane));
        assert_eq!(Geometry::from_str("sphere"), None);
        assert_eq!(Geometry::from_str(""), None);
    }

    #[test]
    fn geometry_next_visits_every_variant() {
        let mut g = Geometry::Rectangle;
        let mut seen = Vec::new();
        for _ in 0..Geometry::ALL.len() {
            seen.push(g);
            g = g.next();
        }
        assert_eq!(seen, Geometry::ALL.to_vec());
        assert_eq!(g, Geometry::Rectangle);
    }

    #[test]
    fn direction_deltas_are_unit_steps() {
        assert_eq!(Direction::Up.delta(), (-1, 0));
        assert_eq!(Direction::Down.delta(), (1, 0));
        assert_eq!(Direction::Left.delta(), (0, -1));
        assert_eq!(Direction::Right.delta(), (0, 1));
    }
}

/// The six supported board topologies
///
/// Orientable surfaces (cylinder, torus) glue edges without reflection.
/// Non-orientable surfaces (Möbius strip, Klein bottle, projective plane)
/// glue one or both pairs of edges with a reflection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Geometry {
    Rectangle,
    Cylinder,
    #[default]
    Torus,
    MobiusStrip,
    KleinBottle,
    ProjectivePlane,
}

impl Geometry {
    /// All geometries, in cycling order
    pub const ALL: [Geometry; 6] = [
        Geometry::Rectangle,
        Geometry::Cylinder,
        Geometry::Torus,
        Geometry::MobiusStrip,
        Geometry::KleinBottle,
        Geometry::ProjectivePlane,
    ];

    /// Parse geometry from string
    ///
    /// Case-insensitive; spaces, hyphens and underscores are ignored, so
    /// "Klein bottle", "klein-bottle" and "klein" all parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use topolife_types::Geometry;
    ///
    /// assert_eq!(Geometry::from_str("torus"), Some(Geometry::Torus));
    /// assert_eq!(Geometry::from_str("projective plane"), Some(Geometry::ProjectivePlane));
    /// assert_eq!(Geometry::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .flat_map(char::to_lowercase)
            .map(|c| if c == 'ö' { 'o' } else { c })
            .collect();
        match key.as_str() {
            "rectangle" | "plane" => Some(Geometry::Rectangle),
            "cylinder" => Some(Geometry::Cylinder),
            "torus" => Some(Geometry::Torus),
            "mobius" | "mobiusstrip" => Some(Geometry::MobiusStrip),
            "klein" | "kleinbottle" => Some(Geometry::KleinBottle),
            "projective" | "projectiveplane" | "realprojectiveplane" => {
                Some(Geometry::ProjectivePlane)
            }
            _ => None,
        }
    }

    /// Short lowercase name, as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Geometry::Rectangle => "rectangle",
            Geometry::Cylinder => "cylinder",
            Geometry::Torus => "torus",
            Geometry::MobiusStrip => "mobius",
            Geometry::KleinBottle => "klein",
            Geometry::ProjectivePlane => "projective",
        }
    }

    /// Human-readable name for status lines
    pub fn label(&self) -> &'static str {
        match self {
            Geometry::Rectangle => "rectangle",
            Geometry::Cylinder => "cylinder",
            Geometry::Torus => "torus",
            Geometry::MobiusStrip => "Mobius strip",
            Geometry::KleinBottle => "Klein bottle",
            Geometry::ProjectivePlane => "projective plane",
        }
    }

    /// The next geometry in cycling order, wrapping after the last one
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|g| g == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Whether the left and right edges are glued together
    pub fn glues_columns(&self) -> bool {
        !matches!(self, Geometry::Rectangle)
    }

    /// Whether the top and bottom edges are glued together
    pub fn glues_rows(&self) -> bool {
        matches!(
            self,
            Geometry::Torus | Geometry::KleinBottle | Geometry::ProjectivePlane
        )
    }
}

/// Cursor movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// `(row, col)` offset of one step in this direction
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// What the host loop is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Editing the board with the cursor; no evolution
    Drawing,
    /// Evolving one generation per delay
    Running,
    /// Frozen; single steps still allowed
    Paused,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Drawing => "DRAW",
            Mode::Running => "RUN",
            Mode::Paused => "PAUSED",
        }
    }
}

/// User actions that can be applied to a running session
///
/// Key mapping lives in `topolife-input`; the session decides what each
/// action means in the current [`Mode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeAction {
    /// Move the drawing cursor one cell
    Move(Direction),
    /// Flip the cell under the cursor
    Toggle,
    /// Start evolving, or pause/resume
    StartPause,
    /// Enter drawing mode
    Draw,
    /// Advance exactly one generation
    Step,
    /// Re-seed every cell at random
    Randomize,
    /// Kill every cell
    Clear,
    /// Switch to the next geometry
    CycleGeometry,
    /// Halve the generation delay
    Faster,
    /// Double the generation delay
    Slower,
}
