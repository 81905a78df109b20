// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The probe oracle.
//!
//! An oracle answers one question: does a ball dropped from `floor` break?
//! Both search strategies are generic over [`BreakTest`], so anything that
//! answers monotonically (never breaking below some floor, always breaking
//! at or above it) can stand in for the building.
//!
//! [`Oracle`] is the plain implementation holding the hidden threshold.
//! [`CountingOracle`] wraps any oracle to count and record probes.

pub mod counting;

pub use counting::CountingOracle;

use crate::error::{Error, Result};
use crate::{Floor, MAX_FLOOR};
use rand::Rng;
use tracing::debug;

/// Answers whether a ball dropped from a given floor breaks.
///
/// Implementations must be monotonic in `floor`. The searches rely on this
/// but never verify it.
pub trait BreakTest {
    fn breaks(&self, floor: Floor) -> bool;
}

/// Immutable oracle holding the hidden threshold floor F.
///
/// A ball breaks iff it is dropped from `floor >= threshold`. A threshold of
/// 0 means every floor breaks the ball; a threshold equal to the building
/// height means none does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Oracle {
    threshold: Floor,
}

impl Oracle {
    /// Create an oracle with a fixed threshold.
    ///
    /// The threshold must lie in `[0, MAX_FLOOR]`; above that the doubling
    /// phase of the exponential probe could not bracket it.
    pub fn new(threshold: Floor) -> Result<Self> {
        if !(0..=MAX_FLOOR).contains(&threshold) {
            return Err(Error::ThresholdOutOfRange {
                threshold,
                max: MAX_FLOOR,
            });
        }
        Ok(Self { threshold })
    }

    /// Sample a threshold uniformly in `[0, floors)`.
    pub fn random<R: Rng + ?Sized>(floors: Floor, rng: &mut R) -> Result<Self> {
        if floors <= 0 {
            return Err(Error::InvalidBuilding(floors));
        }
        let threshold = rng.random_range(0..floors);
        debug!(floors, threshold, "sampled threshold");
        Self::new(threshold)
    }

    pub fn threshold(&self) -> Floor {
        self.threshold
    }
}

impl BreakTest for Oracle {
    fn breaks(&self, floor: Floor) -> bool {
        floor >= self.threshold
    }
}
