// Author: Dustin Pilgrim
// License: MIT

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};

use crate::core::clock::{Clock, TickListener};
use crate::sdebug;

/// Periodic tick source backed by a tokio task.
///
/// At most one ticking task exists at a time. Ticks are delivered from the
/// runtime's worker threads, never from the caller of `start`/`stop`.
pub struct TickEmitter {
    period: Duration,
    listener: Arc<dyn TickListener>,
    runtime: Handle,
    task: Option<JoinHandle<()>>,
}

impl TickEmitter {
    pub fn new(runtime: Handle, period: Duration, listener: Arc<dyn TickListener>) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            listener,
            runtime,
            task: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

async fn run_ticker(period: Duration, listener: Arc<dyn TickListener>) {
    sdebug!("ticker", "ticker started ({} ms)", period.as_millis());

    // First tick one full period after start. Late ticks are delivered in a
    // burst so that none are skipped.
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Burst);

    loop {
        interval.tick().await;
        listener.on_tick();
    }
}

impl Clock for TickEmitter {
    fn start(&mut self) {
        if self.is_running() {
            return;
        }
        let task = self.runtime.spawn(run_ticker(self.period, self.listener.clone()));
        self.task = Some(task);
    }

    fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            sdebug!("ticker", "ticker stopped");
        }
    }

    fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for TickEmitter {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_emitter(period_ms: u64) -> (TickEmitter, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        let listener = {
            let count = count.clone();
            move || {
                count.fetch_add(1, Ordering::SeqCst);
            }
        };
        let emitter = TickEmitter::new(
            Handle::current(),
            Duration::from_millis(period_ms),
            Arc::new(listener),
        );
        (emitter, count)
    }

    #[tokio::test(start_paused = true)]
    async fn delivers_one_tick_per_period() {
        let (mut emitter, count) = counting_emitter(1000);
        emitter.start();
        assert!(emitter.is_running());

        tokio::time::sleep(Duration::from_millis(3500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn start_twice_does_not_double_ticks() {
        let (mut emitter, count) = counting_emitter(1000);
        emitter.start();
        emitter.start();

        tokio::time::sleep(Duration::from_millis(2500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn stop_ends_delivery_and_is_idempotent() {
        let (mut emitter, count) = counting_emitter(1000);
        emitter.start();
        tokio::time::sleep(Duration::from_millis(1500)).await;

        emitter.stop();
        emitter.stop();
        assert!(!emitter.is_running());

        let seen = count.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert_eq!(count.load(Ordering::SeqCst), seen);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_begins_a_new_period() {
        let (mut emitter, count) = counting_emitter(1000);
        emitter.start();
        tokio::time::sleep(Duration::from_millis(1500)).await;
        emitter.stop();

        emitter.start();
        tokio::time::sleep(Duration::from_millis(900)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn zero_period_is_raised_to_one_millisecond() {
        let (emitter, _count) = counting_emitter(0);
        assert_eq!(emitter.period(), Duration::from_millis(1));
    }
}
