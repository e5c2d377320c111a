//! Life engine - owns a board, a seeded generator, and the generation count
//!
//! All operations run to completion before returning. Mutations go through
//! the board, which resynchronizes its border every time, so `evolve` can
//! always read the padded buffer as-is.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use topolife_core::types::Geometry;
use topolife_core::{Board, LifeSnapshot, Result};
use tracing::{debug, info, trace};

use crate::config::{check_probability, LifeConfig};
use crate::rule::next_generation;

/// Conway's Game of Life on one of six compact surfaces
///
/// The generator is owned by the engine and never shared. With a fixed seed,
/// `randomize` reproduces the same boards in the same order.
#[derive(Debug, Clone)]
pub struct Life<R = ChaCha8Rng> {
    board: Board,
    rng: R,
    prob: f64,
    seed: Option<u64>,
    generation: u64,
    /// Next interior, reused across generations
    scratch: Vec<bool>,
}

impl Life<ChaCha8Rng> {
    /// Build an all-dead engine from `config`.
    ///
    /// Without a seed in the config one is drawn from the thread RNG and
    /// kept, so [`Life::seed`] always reports what the run can be replayed
    /// with.
    pub fn new(config: &LifeConfig) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let mut life = Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))?;
        life.seed = Some(seed);
        info!(
            rows = config.rows,
            cols = config.cols,
            geometry = config.geometry.as_str(),
            prob = config.prob,
            seed,
            "life engine created"
        );
        Ok(life)
    }
}

impl<R: Rng> Life<R> {
    /// Build an all-dead engine around a caller-owned generator.
    ///
    /// `config.seed` is ignored; the generator is used as given.
    pub fn with_rng(config: &LifeConfig, rng: R) -> Result<Self> {
        check_probability(config.prob)?;
        let board = Board::new(config.rows, config.cols, config.geometry)?;
        Ok(Self {
            scratch: Vec::with_capacity(config.rows * config.cols),
            board,
            rng,
            prob: config.prob,
            seed: None,
            generation: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rows(&self) -> usize {
        self.board.rows()
    }

    pub fn cols(&self) -> usize {
        self.board.cols()
    }

    pub fn geometry(&self) -> Geometry {
        self.board.geometry()
    }

    pub fn prob(&self) -> f64 {
        self.prob
    }

    /// Seed the generator was built from, if known
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Generations evolved since the last clear, randomize or set_state
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.board.population()
    }

    /// Copy of the interior, one `Vec` per row
    pub fn state(&self) -> Vec<Vec<bool>> {
        self.board.state()
    }

    /// Replace the interior; see [`Board::set_state`].
    pub fn set_state<G: AsRef<[bool]>>(&mut self, grid: &[G]) -> Result<()> {
        self.board.set_state(grid)?;
        self.generation = 0;
        Ok(())
    }

    /// Flip one cell; the generation count is unchanged.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<()> {
        self.board.toggle_cell(row, col)
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.board.clear();
        self.generation = 0;
    }

    /// Make each cell alive independently with probability `prob`.
    ///
    /// Cells draw from the generator in row-major order.
    pub fn randomize(&mut self) {
        let prob = self.prob;
        let rng = &mut self.rng;
        self.board.fill_with(|_, _| rng.random_bool(prob));
        self.generation = 0;
        debug!(prob, population = self.board.population(), "board randomized");
    }

    /// Advance one generation.
    pub fn evolve(&mut self) {
        next_generation(&self.board, &mut self.scratch);
        let cols = self.board.cols();
        let next = &self.scratch;
        self.board.fill_with(|r, c| next[r * cols + c]);
        self.generation += 1;
        trace!(generation = self.generation, "evolved");
    }

    /// Switch to another geometry, keeping the cells.
    pub fn set_geometry(&mut self, geometry: Geometry) {
        self.board.set_geometry(geometry);
        debug!(geometry = geometry.as_str(), "geometry changed");
    }

    /// Switch to the next geometry in [`Geometry::ALL`] order.
    pub fn cycle_geometry(&mut self) -> Geometry {
        let next = self.geometry().next();
        self.set_geometry(next);
        next
    }

    /// Copy board, generation and seed into `snap`.
    pub fn snapshot_into(&self, snap: &mut LifeSnapshot) {
        self.board.snapshot_into(snap);
        snap.generation = self.generation;
        snap.seed = self.seed;
    }

    pub fn snapshot(&self) -> LifeSnapshot {
        let mut snap = LifeSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
