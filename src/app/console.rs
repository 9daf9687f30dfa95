// Author: Dustin Pilgrim
// License: MIT

use std::io::{self, Write};

use serde_json::json;

use crate::config::OutputFormat;
use crate::core::listener::{ModelListener, StateId};
use crate::services::input::UserEntry;
use crate::swarn;

/// Terminal rendering of the stopwatch.
pub struct ConsoleListener<W: Write + Send> {
    out: W,
    format: OutputFormat,
    bell: bool,
    entry: UserEntry,
}

impl ConsoleListener<io::Stdout> {
    pub fn stdout(format: OutputFormat, bell: bool, entry: UserEntry) -> Self {
        Self::new(io::stdout(), format, bell, entry)
    }
}

impl<W: Write + Send> ConsoleListener<W> {
    pub fn new(out: W, format: OutputFormat, bell: bool, entry: UserEntry) -> Self {
        Self { out, format, bell, entry }
    }

    fn emit(&mut self, text: String, value: serde_json::Value) {
        let line = match self.format {
            OutputFormat::Text => text,
            OutputFormat::Json => value.to_string(),
        };
        if let Err(e) = writeln!(self.out, "{line}").and_then(|_| self.out.flush()) {
            swarn!("console", "failed to write to terminal: {}", e);
        }
    }
}

pub fn format_seconds(seconds: u32) -> String {
    format!("{:02}", seconds)
}

impl<W: Write + Send> ModelListener for ConsoleListener<W> {
    fn on_time_update(&mut self, seconds: u32) {
        self.emit(
            format!("time  {}", format_seconds(seconds)),
            json!({ "event": "time", "seconds": seconds }),
        );
    }

    fn on_state_update(&mut self, state: StateId) {
        self.emit(
            format!("state {}", state.as_str().to_uppercase()),
            json!({ "event": "state", "state": state.as_str() }),
        );
    }

    fn sound_alarm(&mut self) {
        if self.bell && self.format == OutputFormat::Text {
            let _ = self.out.write_all(b"\x07");
        }
        self.emit("ALARM".to_string(), json!({ "event": "alarm" }));
    }

    fn user_runtime(&mut self) -> Option<u32> {
        self.entry.get()
    }
}
