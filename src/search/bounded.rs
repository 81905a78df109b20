// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Binary search over a known closed range of floors.

use super::{SearchRange, Strategy, MALFORMED_RANGE};
use crate::error::{Error, Result};
use crate::oracle::BreakTest;
use crate::Floor;
use tracing::{debug, trace};

/// Locate the threshold within `[min_floor, max_floor]`.
///
/// The caller guarantees the threshold lies in that range and that
/// `min_floor` does not break (0 is accepted unprobed). Returns
/// [`MALFORMED_RANGE`] when `max_floor < min_floor` or `min_floor < 0`.
///
/// Each step probes the midpoint and keeps the half holding the threshold
/// until the range shrinks to two adjacent floors. There, if `max_floor`
/// does not break the answer is `min_floor`; if it does, the answer is
/// `max_floor`, except that an unprobed `min_floor` of 0 is probed once so
/// that a threshold of 0 is reported as 0.
pub fn find_threshold<B: BreakTest + ?Sized>(
    oracle: &B,
    max_floor: Floor,
    min_floor: Floor,
) -> Floor {
    let mut range = SearchRange::new(max_floor, min_floor);
    if range.is_malformed() {
        debug!(max_floor, min_floor, "malformed range");
        return MALFORMED_RANGE;
    }

    loop {
        if range.max_floor == 0 {
            return 0;
        }
        if range.max_floor == range.min_floor {
            return range.min_floor;
        }
        if range.is_adjacent() {
            return resolve_adjacent(oracle, range);
        }

        let mid = range.midpoint();
        range = if oracle.breaks(mid) {
            SearchRange::new(mid, range.min_floor)
        } else {
            SearchRange::new(range.max_floor, mid)
        };
        trace!(max = range.max_floor, min = range.min_floor, "narrowed");
    }
}

fn resolve_adjacent<B: BreakTest + ?Sized>(oracle: &B, range: SearchRange) -> Floor {
    if !oracle.breaks(range.max_floor) {
        return range.min_floor;
    }
    if range.min_floor == 0 && oracle.breaks(0) {
        return 0;
    }
    range.max_floor
}

/// [`find_threshold`] with the sentinel mapped to [`Error::MalformedRange`].
pub fn try_find_threshold<B: BreakTest + ?Sized>(
    oracle: &B,
    max_floor: Floor,
    min_floor: Floor,
) -> Result<Floor> {
    match find_threshold(oracle, max_floor, min_floor) {
        MALFORMED_RANGE => Err(Error::MalformedRange {
            max_floor,
            min_floor,
        }),
        floor => Ok(floor),
    }
}

/// Binary search over a building of known height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedBinarySearch {
    max_floor: Floor,
    min_floor: Floor,
}

impl BoundedBinarySearch {
    /// Search the whole building `[0, floors]`.
    pub fn new(floors: Floor) -> Self {
        Self::with_range(floors, 0)
    }

    pub fn with_range(max_floor: Floor, min_floor: Floor) -> Self {
        Self {
            max_floor,
            min_floor,
        }
    }
}

impl Strategy for BoundedBinarySearch {
    fn locate<B: BreakTest + ?Sized>(&self, oracle: &B) -> Result<Floor> {
        try_find_threshold(oracle, self.max_floor, self.min_floor)
    }

    fn name(&self) -> &str {
        "BoundedBinarySearch"
    }
}
