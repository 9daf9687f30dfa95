// Author: Dustin Pilgrim
// License: MIT

use std::io::{self, BufRead};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;

use tokio::sync::mpsc::UnboundedSender;

use crate::core::constants::SEC_MAX;
use crate::session::SessionMsg;
use crate::{sdebug, swarn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    /// Button press, optionally with seconds typed on the same line.
    Press { entry: Option<u32> },
    Quit,
    Unknown(String),
}

/// Seconds the user typed along with the current press, shared between the
/// session loop (writer) and the listener (reader).
#[derive(Debug, Clone, Default)]
pub struct UserEntry {
    inner: Arc<Mutex<Option<u32>>>,
}

impl UserEntry {
    pub fn set(&self, entry: Option<u32>) {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner) = entry;
    }

    pub fn get(&self) -> Option<u32> {
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub fn parse_line(line: &str) -> InputCommand {
    let line = line.trim();

    match line.to_ascii_lowercase().as_str() {
        "" | "b" | "button" => return InputCommand::Press { entry: None },
        "q" | "quit" | "exit" => return InputCommand::Quit,
        _ => {}
    }

    match line.parse::<i64>() {
        Ok(n) => InputCommand::Press {
            entry: Some(n.clamp(0, SEC_MAX as i64) as u32),
        },
        Err(_) => InputCommand::Unknown(line.to_string()),
    }
}

/// Reads stdin on its own thread and forwards presses to the session.
/// EOF or `quit` ends the session.
pub fn spawn_input_reader(tx: UnboundedSender<SessionMsg>) -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("tickwatch-input".into())
        .spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(l) => l,
                    Err(e) => {
                        swarn!("input", "stdin read failed: {}", e);
                        break;
                    }
                };

                let msg = match parse_line(&line) {
                    InputCommand::Press { entry } => SessionMsg::Button { entry },
                    InputCommand::Quit => break,
                    InputCommand::Unknown(s) => {
                        swarn!("input", "ignoring input {:?} (enter, a number, or q)", s);
                        continue;
                    }
                };

                if tx.send(msg).is_err() {
                    sdebug!("input", "session gone, input reader exiting");
                    return;
                }
            }

            let _ = tx.send(SessionMsg::Shutdown);
        })
}
