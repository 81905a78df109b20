// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Probe counters, incremented by the counting oracle each time a search
//! strategy drops a ball.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    Probes,
    Breaks,
    Survivals,
}

const COUNT: usize = Counters::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Record the outcome of one probe.
    pub(crate) fn record_probe(&mut self, broke: bool) {
        self.increment_counter(Counters::Probes);
        if broke {
            self.increment_counter(Counters::Breaks);
        } else {
            self.increment_counter(Counters::Survivals);
        }
    }

    /// Increment the specified counter by 1.
    fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}
