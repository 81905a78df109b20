// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search strategies for the threshold floor.
//!
//! Two strategies share the same oracle:
//!
//! - [`BoundedBinarySearch`]: bisects a known closed range `[min, max]`,
//!   O(log(max - min)) probes.
//! - [`ExponentialProbe`]: needs no upper bound. Probes floors 1, 2, 4, ...
//!   until one breaks, then bisects the last doubling, O(log F) probes.
//!
//! # Example
//!
//! ```
//! use throwing_balls::oracle::Oracle;
//! use throwing_balls::search::{BoundedBinarySearch, ExponentialProbe, Strategy};
//!
//! let oracle = Oracle::new(37).unwrap();
//! assert_eq!(BoundedBinarySearch::new(1000).locate(&oracle), Ok(37));
//! assert_eq!(ExponentialProbe.locate(&oracle), Ok(37));
//! ```

pub mod bounded;
pub mod exponential;

pub use bounded::{find_threshold, try_find_threshold, BoundedBinarySearch};
pub use exponential::{checked_power, power, ExponentialProbe};

use crate::error::Result;
use crate::oracle::BreakTest;
use crate::Floor;

/// Sentinel returned by [`find_threshold`] for a malformed range.
pub const MALFORMED_RANGE: Floor = -1;

/// A way of locating the threshold floor against an oracle.
///
/// Searches are pure: running one twice against the same oracle gives the
/// same answer and the same probe sequence.
pub trait Strategy {
    fn locate<B: BreakTest + ?Sized>(&self, oracle: &B) -> Result<Floor>;

    /// Name used in logs and reports.
    fn name(&self) -> &str;
}

/// The current bracket of a bounded search.
///
/// The threshold lies in `(min_floor, max_floor]`, where `min_floor` has been
/// seen not to break, or is 0 and has not been probed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRange {
    pub max_floor: Floor,
    pub min_floor: Floor,
}

impl SearchRange {
    pub fn new(max_floor: Floor, min_floor: Floor) -> Self {
        Self {
            max_floor,
            min_floor,
        }
    }

    pub fn is_malformed(&self) -> bool {
        self.max_floor < self.min_floor || self.min_floor < 0
    }

    pub fn is_adjacent(&self) -> bool {
        self.max_floor - self.min_floor == 1
    }

    /// `floor((max + min) / 2)` without overflowing near `Floor::MAX`.
    /// Only meaningful for a well-formed range.
    pub fn midpoint(&self) -> Floor {
        self.min_floor + (self.max_floor - self.min_floor) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed() {
        assert!(SearchRange::new(3, 5).is_malformed());
        assert!(SearchRange::new(3, -1).is_malformed());
        assert!(!SearchRange::new(5, 5).is_malformed());
        assert!(!SearchRange::new(0, 0).is_malformed());
    }

    #[test]
    fn test_adjacent() {
        assert!(SearchRange::new(1, 0).is_adjacent());
        assert!(SearchRange::new(64, 63).is_adjacent());
        assert!(!SearchRange::new(64, 32).is_adjacent());
    }

    #[test]
    fn test_midpoint_rounds_down() {
        assert_eq!(SearchRange::new(1000, 0).midpoint(), 500);
        assert_eq!(SearchRange::new(64, 32).midpoint(), 48);
        assert_eq!(SearchRange::new(7, 4).midpoint(), 5);
        assert_eq!(
            SearchRange::new(Floor::MAX, Floor::MAX - 2).midpoint(),
            Floor::MAX - 1
        );
    }
}
