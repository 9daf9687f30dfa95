// Author: Dustin Pilgrim
// License: MIT

mod run;

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::core::{
    clock::TickListener,
    listener::ModelListener,
    machine::Stopwatch,
};
use crate::services::{input::UserEntry, ticker::TickEmitter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMsg {
    /// Button press from the input thread, with any seconds typed alongside.
    Button { entry: Option<u32> },

    /// One period of the tick emitter has elapsed.
    Tick,

    Shutdown,
}

/// Forwards ticks from the emitter task into the session queue.
///
/// The queue is unbounded so that a tick is never dropped or merged.
struct ChannelTickSink {
    tx: UnboundedSender<SessionMsg>,
}

impl TickListener for ChannelTickSink {
    fn on_tick(&self) {
        let _ = self.tx.send(SessionMsg::Tick);
    }
}

/// One stopwatch session: the stopwatch plus the single queue that both
/// event sources feed.
pub struct Session {
    stopwatch: Stopwatch,
    entry: UserEntry,
    tx: UnboundedSender<SessionMsg>,
    rx: UnboundedReceiver<SessionMsg>,
}

impl Session {
    pub fn new(
        runtime: Handle,
        tick_period: Duration,
        listener: Box<dyn ModelListener>,
        entry: UserEntry,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let sink: Arc<dyn TickListener> = Arc::new(ChannelTickSink { tx: tx.clone() });
        let clock = TickEmitter::new(runtime, tick_period, sink);

        Self {
            stopwatch: Stopwatch::new(listener, Box::new(clock)),
            entry,
            tx,
            rx,
        }
    }

    pub fn sender(&self) -> UnboundedSender<SessionMsg> {
        self.tx.clone()
    }
}
