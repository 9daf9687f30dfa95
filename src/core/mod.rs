// Author: Dustin Pilgrim
// License: MIT

pub mod clock;
pub mod constants;
pub mod error;
pub mod listener;
pub mod machine;
pub mod state;
pub mod time;
