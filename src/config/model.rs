// Author: Dustin Pilgrim
// License: MIT

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickwatchConfig {
    /// Length of one tick in milliseconds (one second of runtime).
    pub tick_interval_ms: u64,
    pub alarm_bell: bool,
    pub output: OutputFormat,
    pub log_file: bool,
}

impl TickwatchConfig {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for TickwatchConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 1000,
            alarm_bell: true,
            output: OutputFormat::Text,
            log_file: true,
        }
    }
}
