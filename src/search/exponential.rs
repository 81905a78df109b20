// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exponential probing: bracket the threshold by doubling, then bisect.

use super::bounded::try_find_threshold;
use super::{SearchRange, Strategy};
use crate::error::{Error, Result};
use crate::oracle::BreakTest;
use crate::{Floor, MAX_FLOOR};
use tracing::debug;

/// `base^exponent` by repeated multiplication.
///
/// # Panics
///
/// Overflow panics in debug builds; use [`checked_power`] when the result
/// may not fit.
pub fn power(base: Floor, exponent: u32) -> Floor {
    let mut result = 1;
    for _ in 0..exponent {
        result *= base;
    }
    result
}

/// `base^exponent`, or `None` on overflow.
pub fn checked_power(base: Floor, exponent: u32) -> Option<Floor> {
    (0..exponent).try_fold(1 as Floor, |acc, _| acc.checked_mul(base))
}

/// Locates the threshold without knowing the building height.
///
/// Probes floors `2^0, 2^1, 2^2, ...` until one breaks at `2^i`, then runs
/// the bounded search over `[2^(i-1), 2^i]`, or `[0, 1]` if floor 1 already
/// breaks. The doubling stops at [`MAX_FLOOR`]; an oracle that has not broken
/// by then yields [`Error::Unbounded`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExponentialProbe;

impl ExponentialProbe {
    pub fn locate_threshold<B: BreakTest + ?Sized>(&self, oracle: &B) -> Result<Floor> {
        let bracket = Self::bracket(oracle)?;
        try_find_threshold(oracle, bracket.max_floor, bracket.min_floor)
    }

    /// The doubling phase: the smallest `2^i` that breaks, paired with the
    /// floor below it in the sequence.
    pub fn bracket<B: BreakTest + ?Sized>(oracle: &B) -> Result<SearchRange> {
        let mut i: u32 = 0;
        loop {
            let floor = match checked_power(2, i) {
                Some(floor) if floor <= MAX_FLOOR => floor,
                _ => {
                    return Err(Error::Unbounded {
                        last_safe_floor: power(2, i - 1),
                    })
                }
            };
            if oracle.breaks(floor) {
                break;
            }
            i += 1;
        }

        let range = if i == 0 {
            SearchRange::new(1, 0)
        } else {
            SearchRange::new(power(2, i), power(2, i - 1))
        };
        debug!(
            doublings = i,
            max = range.max_floor,
            min = range.min_floor,
            "bracketed threshold"
        );
        Ok(range)
    }
}

impl Strategy for ExponentialProbe {
    fn locate<B: BreakTest + ?Sized>(&self, oracle: &B) -> Result<Floor> {
        self.locate_threshold(oracle)
    }

    fn name(&self) -> &str {
        "ExponentialProbe"
    }
}
