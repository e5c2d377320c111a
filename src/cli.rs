//! Command-line and environment configuration for the `topolife` binary.
//!
//! Arguments are parsed by hand. Every setting can also come from a
//! `TOPOLIFE_*` environment variable; flags win over the environment, the
//! environment wins over defaults.

use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};

use crate::core::parse_geometry;
use crate::engine::config::check_probability;
use crate::engine::LifeConfig;
use crate::session::check_delay;
use crate::types::{Geometry, DEFAULT_DELAY_MS, DEFAULT_PROB};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HELP_TEXT: &str = "\
topolife - Conway's Game of Life on compact surfaces

USAGE:
    topolife [OPTIONS]

OPTIONS:
    --geometry=NAME   Surface to play on (default: torus)
    --prob=P          Chance of each cell starting alive, 0 to 1 (default: 0.25)
    --seed=N          Random seed for reproducible boards (default: random)
    --delay=MS        Milliseconds between generations, 10 to 2000 (default: 60)
    --draw            Start with an empty board in drawing mode
    --help, -h        Show this help message
    --version, -V     Show version

GEOMETRIES:
    rectangle         Plane; everything past the edge is dead
    cylinder          Left and right edges glued
    torus             Both pairs of edges glued
    mobius            Left and right edges glued with a flip
    klein             Torus with the left/right gluing flipped
    projective        Both pairs of edges glued with a flip

KEYBINDINGS:
    arrows, hjkl      Move the cursor (drawing mode)
    Enter             Toggle the cell under the cursor
    Space             Start, pause or resume
    d                 Back to drawing mode
    n, .              Advance one generation
    r                 Randomize the board
    c                 Clear the board
    g                 Switch to the next geometry
    + / -             Faster / slower
    q, Esc, Ctrl+C    Quit

ENVIRONMENT VARIABLES:
    TOPOLIFE_GEOMETRY     Override --geometry
    TOPOLIFE_PROB         Override --prob
    TOPOLIFE_SEED         Override --seed
    TOPOLIFE_DELAY_MS     Override --delay
    TOPOLIFE_DRAW         Override --draw (1/0, true/false)
    TOPOLIFE_LOG          Write logs to this file (default: no logging)
    TOPOLIFE_LOG_FILTER   Log filter directives (default: info)";

/// Parsed options for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Opts {
    pub geometry: Geometry,
    pub prob: f64,
    /// None picks a random seed at startup.
    pub seed: Option<u64>,
    pub delay_ms: u64,
    /// Start in drawing mode with an empty board.
    pub draw: bool,
    /// Log file; None disables logging.
    pub log_file: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            geometry: Geometry::default(),
            prob: DEFAULT_PROB,
            seed: None,
            delay_ms: DEFAULT_DELAY_MS,
            draw: false,
            log_file: None,
            log_filter: "info".into(),
        }
    }
}

/// What the command line asked for
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(Opts),
    Help,
    Version,
}

impl Opts {
    /// Parse the process arguments and environment.
    pub fn parse() -> Result<Command> {
        Self::parse_from(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Parse `args` (without the program name), reading the environment
    /// through `env`.
    pub fn parse_from<I, S, F>(args: I, env: F) -> Result<Command>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        if let Some(val) = env("TOPOLIFE_GEOMETRY") {
            opts.set("TOPOLIFE_GEOMETRY", "geometry", &val)?;
        }
        if let Some(val) = env("TOPOLIFE_PROB") {
            opts.set("TOPOLIFE_PROB", "prob", &val)?;
        }
        if let Some(val) = env("TOPOLIFE_SEED") {
            opts.set("TOPOLIFE_SEED", "seed", &val)?;
        }
        if let Some(val) = env("TOPOLIFE_DELAY_MS") {
            opts.set("TOPOLIFE_DELAY_MS", "delay", &val)?;
        }
        if let Some(val) = env("TOPOLIFE_DRAW") {
            opts.draw = parse_bool(&val).context("invalid TOPOLIFE_DRAW")?;
        }
        if let Some(val) = env("TOPOLIFE_LOG").filter(|v| !v.is_empty()) {
            opts.log_file = Some(PathBuf::from(val));
        }
        if let Some(val) = env("TOPOLIFE_LOG_FILTER").filter(|v| !v.is_empty()) {
            opts.log_filter = val;
        }

        let mut args = args.into_iter().map(Into::into);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-V" => return Ok(Command::Version),
                "--draw" => opts.draw = true,
                other => {
                    let Some(flag) = other.strip_prefix("--") else {
                        bail!("unexpected argument: {other}");
                    };
                    let (name, val) = match flag.split_once('=') {
                        Some((name, val)) => (name, val.to_string()),
                        None => {
                            let val = args
                                .next()
                                .ok_or_else(|| anyhow!("missing value for --{flag}"))?;
                            (flag, val)
                        }
                    };
                    let label = format!("--{name}");
                    opts.set(&label, name, &val)?;
                }
            }
        }

        Ok(Command::Run(opts))
    }

    fn set(&mut self, source: &str, name: &str, val: &str) -> Result<()> {
        match name {
            "geometry" => {
                self.geometry = parse_geometry(val).with_context(|| format!("invalid {source}"))?;
            }
            "prob" => {
                let prob: f64 = val
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid {source} value: {val}"))?;
                check_probability(prob).with_context(|| format!("invalid {source}"))?;
                self.prob = prob;
            }
            "seed" => {
                let seed = val
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid {source} value: {val}"))?;
                self.seed = Some(seed);
            }
            "delay" => {
                let delay: u64 = val
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid {source} value: {val}"))?;
                check_delay(delay).with_context(|| format!("invalid {source}"))?;
                self.delay_ms = delay;
            }
            _ => bail!("unknown option: {source}"),
        }
        Ok(())
    }

    /// Engine configuration for a board of the given size.
    pub fn life_config(&self, rows: usize, cols: usize) -> LifeConfig {
        let config = LifeConfig::new(rows, cols)
            .with_geometry(self.geometry)
            .with_prob(self.prob);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn parse_bool(val: &str) -> Result<bool> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn run(args: &[&str]) -> Opts {
        match Opts::parse_from(args.iter().copied(), no_env).unwrap() {
            Command::Run(opts) => opts,
            other => panic!("expected Run, got {other:?}"),
        }
    }

    #[test]
    fn default_opts() {
        let opts = run(&[]);
        assert_eq!(opts, Opts::default());
        assert_eq!(opts.geometry, Geometry::Torus);
        assert_eq!(opts.prob, 0.25);
        assert_eq!(opts.delay_ms, 60);
        assert!(!opts.draw);
        assert_eq!(opts.log_file, None);
    }

    #[test]
    fn help_text_lists_every_geometry() {
        for geometry in Geometry::ALL {
            assert!(HELP_TEXT.contains(geometry.as_str()), "{geometry:?}");
        }
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn parse_bool_values() {
        assert!(parse_bool("TRUE").unwrap());
        assert!(parse_bool(" 1 ").unwrap());
        assert!(!parse_bool("off").unwrap());
        assert!(parse_bool("maybe").is_err());
    }
}
