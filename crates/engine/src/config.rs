//! Engine construction parameters.

use topolife_core::types::{Geometry, DEFAULT_PROB};
use topolife_core::{parse_geometry, LifeError, Result};

/// Everything needed to build a [`Life`](crate::Life)
///
/// ```
/// use topolife_engine::LifeConfig;
/// use topolife_engine::types::Geometry;
///
/// let config = LifeConfig::new(20, 40)
///     .with_geometry_name("Mobius strip")
///     .unwrap()
///     .with_prob(0.3)
///     .with_seed(7);
/// assert_eq!(config.geometry, Geometry::MobiusStrip);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LifeConfig {
    pub rows: usize,
    pub cols: usize,
    pub geometry: Geometry,
    /// Chance of each cell being alive after `randomize`, in `[0, 1]`
    pub prob: f64,
    /// Generator seed; None draws one from the thread RNG
    pub seed: Option<u64>,
}

impl LifeConfig {
    /// Torus of the given size with the default probability and no seed.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            geometry: Geometry::default(),
            prob: DEFAULT_PROB,
            seed: None,
        }
    }

    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Set the geometry by name ("torus", "Klein bottle", ...).
    pub fn with_geometry_name(mut self, name: &str) -> Result<Self> {
        self.geometry = parse_geometry(name)?;
        Ok(self)
    }

    pub fn with_prob(mut self, prob: f64) -> Self {
        self.prob = prob;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every construction rule without building anything.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 {
            return Err(LifeError::ZeroDimension { name: "rows" });
        }
        if self.cols == 0 {
            return Err(LifeError::ZeroDimension { name: "cols" });
        }
        check_probability(self.prob)
    }
}

/// `prob` must be a number in `[0, 1]`; NaN is rejected.
pub fn check_probability(prob: f64) -> Result<()> {
    if (0.0..=1.0).contains(&prob) {
        Ok(())
    } else {
        Err(LifeError::InvalidProbability(prob))
    }
}
