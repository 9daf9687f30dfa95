// Author: Dustin Pilgrim
// License: MIT

/// The active clock as seen by the state machine.
///
/// `start` while running and `stop` while stopped are no-ops. Stopping does
/// not retract ticks that were already dispatched.
pub trait Clock: Send {
    fn start(&mut self);
    fn stop(&mut self);
    fn is_running(&self) -> bool;
}

/// Receiver of ticks from a running clock. Called from the clock's own task.
pub trait TickListener: Send + Sync + 'static {
    fn on_tick(&self);
}

impl<F> TickListener for F
where
    F: Fn() + Send + Sync + 'static,
{
    fn on_tick(&self) {
        self()
    }
}
