// Author: Dustin Pilgrim
// License: MIT

/// Largest runtime the counter can hold, in seconds.
pub const SEC_MAX: u32 = 99;

/// Seconds represented by one clock tick.
pub const SEC_PER_TICK: u32 = 1;

/// Ticks without a button press before Incrementing commits to Running.
pub const TICK_WAIT: u32 = 3;
