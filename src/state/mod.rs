// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-run mutable state.
//!
//! The oracle itself never changes; anything that does (probe counters) lives
//! here and is owned by a single search run.

pub mod statistics;

pub use statistics::{Counters, Statistics};
