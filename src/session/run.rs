// Author: Dustin Pilgrim
// License: MIT

use tokio::sync::watch;

use crate::core::error::Error;
use crate::{sdebug, serror, sinfo};

use super::{Session, SessionMsg};

impl Session {
    /// Processes queued events one at a time until shutdown.
    ///
    /// A tick that reaches a stopped machine ends the session with an error.
    pub async fn run(&mut self, mut shutdown: watch::Receiver<bool>) -> Result<(), Error> {
        sinfo!("session", "session starting");
        self.stopwatch.start();

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        sinfo!("session", "session stopping (shutdown requested)");
                        break;
                    }
                }

                maybe = self.rx.recv() => {
                    let Some(msg) = maybe else {
                        sinfo!("session", "session stopping (event channel closed)");
                        break;
                    };

                    match msg {
                        SessionMsg::Button { entry } => {
                            sdebug!("session", "button (entry={:?})", entry);
                            self.entry.set(entry);
                            self.stopwatch.on_button();
                        }

                        SessionMsg::Tick => {
                            if let Err(e) = self.stopwatch.on_tick() {
                                serror!("session", "{}", e);
                                self.stopwatch.halt_clock();
                                return Err(e);
                            }
                        }

                        SessionMsg::Shutdown => {
                            sinfo!("session", "session stopping (input closed)");
                            break;
                        }
                    }
                }
            }
        }

        self.stopwatch.halt_clock();
        sinfo!(
            "session",
            "session ended in {} at {}s",
            self.stopwatch.state_id(),
            self.stopwatch.runtime()
        );
        Ok(())
    }
}
