// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

/// Display identifier of a state, handed to the listener on every entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateId {
    Stopped,
    Incrementing,
    Running,
    Alarming,
}

impl StateId {
    pub fn as_str(&self) -> &'static str {
        match self {
            StateId::Stopped => "stopped",
            StateId::Incrementing => "incrementing",
            StateId::Running => "running",
            StateId::Alarming => "alarming",
        }
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outbound interface of the stopwatch.
///
/// Every method is called synchronously while the stopwatch holds its lock,
/// so implementations must never call back into the stopwatch.
pub trait ModelListener: Send {
    fn on_time_update(&mut self, seconds: u32);

    fn on_state_update(&mut self, state: StateId);

    fn sound_alarm(&mut self);

    /// Seconds the user has entered, or `None` when nothing is pending.
    fn user_runtime(&mut self) -> Option<u32>;
}
