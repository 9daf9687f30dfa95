// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An event arrived that the current state can never legally receive.
    ///
    /// This is a programming invariant violation, not a recoverable
    /// condition: the machine is left as it was and the caller is expected
    /// to end the session.
    InvalidState(StateError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// A tick was delivered while Stopped (the clock should be inactive).
    TickWhileStopped,
}

// ---------------- Display ----------------

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidState(e) => write!(f, "invalid state: {e}"),
        }
    }
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::TickWhileStopped =>
                write!(f, "tick delivered while stopped (clock was not stopped)"),
        }
    }
}

impl std::error::Error for Error {}
