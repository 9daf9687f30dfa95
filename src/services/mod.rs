// Author: Dustin Pilgrim
// License: MIT

pub mod input;
pub mod ticker;
