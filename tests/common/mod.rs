// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use throwing_balls::{Floor, Oracle};

/// An oracle with the given threshold; panics on an out-of-range threshold.
pub fn oracle(threshold: Floor) -> Oracle {
    Oracle::new(threshold).unwrap()
}

/// Deterministic `(floors, threshold)` pairs with `0 <= threshold <= floors`.
pub fn sampled_buildings(seed: u64, count: usize, max_floors: Floor) -> Vec<(Floor, Floor)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let floors = rng.random_range(0..=max_floors);
            let threshold = rng.random_range(0..=floors);
            (floors, threshold)
        })
        .collect()
}

/// Ceiling of log2, with `ceil_log2(0) == ceil_log2(1) == 0`.
pub fn ceil_log2(n: Floor) -> u64 {
    if n <= 1 {
        0
    } else {
        (64 - (n - 1).leading_zeros()) as u64
    }
}
