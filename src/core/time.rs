// Author: Dustin Pilgrim
// License: MIT

use crate::core::constants::{SEC_MAX, SEC_PER_TICK};

/// Bounded seconds counter. Always within `[0, SEC_MAX]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeCounter {
    runtime: u32,
}

impl TimeCounter {
    pub fn new() -> Self {
        Self { runtime: 0 }
    }

    pub fn get(&self) -> u32 {
        self.runtime
    }

    /// Adds one tick worth of seconds, clamping at `SEC_MAX`.
    pub fn increment(&mut self) {
        self.runtime = (self.runtime + SEC_PER_TICK).min(SEC_MAX);
    }

    /// Subtracts one tick worth of seconds, flooring at zero.
    pub fn decrement(&mut self) {
        self.runtime = self.runtime.saturating_sub(SEC_PER_TICK);
    }

    pub fn reset(&mut self) {
        self.runtime = 0;
    }

    pub fn set(&mut self, secs: u32) {
        self.runtime = secs.min(SEC_MAX);
    }
}
