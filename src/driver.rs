// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! One run of the puzzle: pick F, search for it both ways, report.

use crate::error::{Error, Result};
use crate::oracle::{CountingOracle, Oracle};
use crate::search::{BoundedBinarySearch, ExponentialProbe, Strategy};
use crate::Floor;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fmt;
use tracing::{debug, info, warn};

/// Default building height.
pub const DEFAULT_FLOORS: Floor = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Building height N. F is sampled from `[0, N)`.
    pub floors: Floor,
    /// Seed for the threshold sample; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Print probe counts after the report.
    pub show_stats: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            floors: DEFAULT_FLOORS,
            seed: None,
            show_stats: false,
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<()> {
        if self.floors <= 0 {
            return Err(Error::InvalidBuilding(self.floors));
        }
        Ok(())
    }
}

/// Result of one strategy against the oracle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub strategy: String,
    pub floor: Floor,
    pub probes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub threshold: Floor,
    pub bounded: Outcome,
    pub exponential: Outcome,
}

impl Report {
    /// True if both strategies found the sampled threshold.
    pub fn verified(&self) -> bool {
        self.bounded.floor == self.threshold && self.exponential.floor == self.threshold
    }

    pub fn probe_summary(&self) -> String {
        format!(
            "{}: {} probes\n{}: {} probes",
            self.bounded.strategy,
            self.bounded.probes,
            self.exponential.strategy,
            self.exponential.probes
        )
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The random floor F is: {}", self.threshold)?;
        writeln!(f, "Floor F found in lgN: {}", self.bounded.floor)?;
        write!(f, "Floor F found in 2lgF: {}", self.exponential.floor)
    }
}

/// Sample a threshold for the configured building and search for it.
pub fn run(config: &RunConfig) -> Result<Report> {
    config.validate()?;
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };
    let oracle = Oracle::random(config.floors, &mut rng)?;
    search_both(&oracle, config.floors)
}

/// Run both strategies against the same oracle in a building of `floors`.
pub fn search_both(oracle: &Oracle, floors: Floor) -> Result<Report> {
    debug!(floors, threshold = oracle.threshold(), "starting run");
    let bounded = measure(&BoundedBinarySearch::new(floors), oracle)?;
    let exponential = measure(&ExponentialProbe, oracle)?;

    let report = Report {
        threshold: oracle.threshold(),
        bounded,
        exponential,
    };
    if !report.verified() {
        warn!(
            threshold = report.threshold,
            bounded = report.bounded.floor,
            exponential = report.exponential.floor,
            "strategies disagree with the oracle"
        );
    }
    Ok(report)
}

fn measure<S: Strategy>(strategy: &S, oracle: &Oracle) -> Result<Outcome> {
    let counting = CountingOracle::new(oracle);
    let floor = strategy.locate(&counting)?;
    let probes = counting.probes();
    info!(strategy = strategy.name(), floor, probes, "search finished");
    Ok(Outcome {
        strategy: strategy.name().to_string(),
        floor,
        probes,
    })
}
