// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error type shared by the oracle, the search strategies and the driver.

use crate::Floor;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("threshold {threshold} outside [0, {max}]")]
    ThresholdOutOfRange { threshold: Floor, max: Floor },

    #[error("building must have at least one floor, got {0}")]
    InvalidBuilding(Floor),

    #[error("malformed range: max floor {max_floor} below min floor {min_floor}")]
    MalformedRange { max_floor: Floor, min_floor: Floor },

    #[error("no break found up to floor {last_safe_floor}")]
    Unbounded { last_safe_floor: Floor },
}

pub type Result<T> = std::result::Result<T, Error>;
