// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Probe accounting.
//!
//! Probes are the unit of cost the searches minimise, so the driver and the
//! tests wrap the oracle in a [`CountingOracle`] to see how many were spent
//! and at which floors.

use super::BreakTest;
use crate::state::{Counters, Statistics};
use crate::Floor;
use std::cell::RefCell;
use tracing::trace;

/// Wraps an oracle, counting and recording every probe.
///
/// `BreakTest::breaks` takes `&self`, so the counters use interior
/// mutability. A counting oracle belongs to one search run; share the inner
/// oracle instead of the wrapper.
#[derive(Debug)]
pub struct CountingOracle<'a, B: BreakTest + ?Sized> {
    inner: &'a B,
    statistics: RefCell<Statistics>,
    floors: RefCell<Vec<Floor>>,
}

impl<'a, B: BreakTest + ?Sized> CountingOracle<'a, B> {
    pub fn new(inner: &'a B) -> Self {
        Self {
            inner,
            statistics: RefCell::new(Statistics::new()),
            floors: RefCell::new(Vec::new()),
        }
    }

    /// Number of probes made so far.
    pub fn probes(&self) -> u64 {
        self.statistics.borrow().get(Counters::Probes)
    }

    /// Snapshot of the counters.
    pub fn statistics(&self) -> Statistics {
        self.statistics.borrow().clone()
    }

    /// Floors probed, in order.
    pub fn probed_floors(&self) -> Vec<Floor> {
        self.floors.borrow().clone()
    }
}

impl<B: BreakTest + ?Sized> BreakTest for CountingOracle<'_, B> {
    fn breaks(&self, floor: Floor) -> bool {
        let broke = self.inner.breaks(floor);
        trace!(floor, broke, "probe");
        self.statistics.borrow_mut().record_probe(broke);
        self.floors.borrow_mut().push(floor);
        broke
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracle::Oracle;

    #[test]
    fn test_counts_and_records_probes() {
        let oracle = Oracle::new(5).unwrap();
        let counting = CountingOracle::new(&oracle);
        assert_eq!(counting.probes(), 0);
        assert!(counting.probed_floors().is_empty());

        assert!(!counting.breaks(4));
        assert!(counting.breaks(5));
        assert!(counting.breaks(9));

        assert_eq!(counting.probes(), 3);
        assert_eq!(counting.probed_floors(), vec![4, 5, 9]);

        let stats = counting.statistics();
        assert_eq!(stats.get(Counters::Breaks), 2);
        assert_eq!(stats.get(Counters::Survivals), 1);
    }

    #[test]
    fn test_wrappers_are_independent() {
        let oracle = Oracle::new(5).unwrap();
        let first = CountingOracle::new(&oracle);
        let second = CountingOracle::new(&oracle);
        first.breaks(1);
        first.breaks(2);
        second.breaks(3);
        assert_eq!(first.probes(), 2);
        assert_eq!(second.probes(), 1);
    }
}
