// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Throwing balls from an N-storey building.
//!
//! A ball dropped from floor `f` breaks iff `f >= F` for some hidden
//! threshold F. This crate finds F with as few throws (probes) as possible.
//!
//! # Architecture
//!
//! - [`oracle`]: the immutable [`Oracle`] holding F, behind the
//!   [`BreakTest`] trait, plus a [`CountingOracle`] wrapper that tallies
//!   probes.
//! - [`search`]: the two strategies, [`BoundedBinarySearch`] (O(log N)
//!   probes over a known height) and [`ExponentialProbe`] (O(log F) probes,
//!   no height needed).
//! - [`driver`]: samples F for a building, runs both strategies against the
//!   same oracle and reports the results.
//!
//! The oracle is never mutated, so one instance can be shared by any number
//! of searches, including from parallel tests.

pub mod driver;
pub mod error;
pub mod oracle;
pub mod search;
pub mod state;

/// A floor number. Floors below 0 never break a ball.
pub type Floor = i64;

/// Highest floor the exponential probe can reach by doubling from 1.
pub const MAX_FLOOR: Floor = 1 << 62;

// Re-export commonly used types
pub use driver::{run, Report, RunConfig};
pub use error::{Error, Result};
pub use oracle::{BreakTest, CountingOracle, Oracle};
pub use search::{BoundedBinarySearch, ExponentialProbe, Strategy};
