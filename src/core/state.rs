// Author: Dustin Pilgrim
// License: MIT

use crate::core::constants::{SEC_MAX, TICK_WAIT};
use crate::core::error::{Error, StateError};
use crate::core::listener::StateId;

/// Grace countdown owned by the Incrementing state.
///
/// Created fresh on every entry from Stopped; carried along on
/// Incrementing self-transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticker {
    remaining: u32,
}

impl Ticker {
    pub fn fresh() -> Self {
        Self { remaining: TICK_WAIT }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Counts one tick down. Returns true once the wait has run out.
    pub fn count_down(&mut self) -> bool {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining == 0
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::fresh()
    }
}

/// Transition and action primitives the states are allowed to use.
///
/// States never see the machine itself, only this handle.
pub trait StateView {
    fn runtime(&self) -> u32;
    fn entered_time(&mut self) -> Option<u32>;
    fn enter_time(&mut self, secs: u32);

    // ---------------- transitions ----------------

    fn to_stopped(&mut self);
    fn to_incrementing(&mut self, ticker: Ticker);
    fn to_running(&mut self);
    fn to_alarming(&mut self);

    // ---------------- actions ----------------

    fn action_init(&mut self);
    fn action_reset(&mut self);
    fn action_inc(&mut self);
    fn action_dec(&mut self);
    fn action_start(&mut self);
    fn action_stop(&mut self);
    fn action_alarm(&mut self);
    fn action_update_view(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    #[default]
    Stopped,
    Incrementing(Ticker),
    Running,
    Alarming,
}

impl State {
    pub fn id(&self) -> StateId {
        match self {
            State::Stopped => StateId::Stopped,
            State::Incrementing(_) => StateId::Incrementing,
            State::Running => StateId::Running,
            State::Alarming => StateId::Alarming,
        }
    }

    pub fn on_button(self, sm: &mut dyn StateView) {
        match self {
            State::Stopped => match sm.entered_time() {
                None => {
                    sm.action_inc();
                    sm.action_start();
                    sm.to_incrementing(Ticker::fresh());
                }
                Some(secs) => {
                    sm.enter_time(secs);
                    sm.action_update_view();
                    sm.action_alarm();
                    sm.action_start();
                    sm.to_running();
                }
            },

            State::Incrementing(_) => {
                sm.action_inc();
                if sm.runtime() >= SEC_MAX {
                    sm.action_alarm();
                    sm.to_running();
                } else {
                    sm.to_incrementing(Ticker::fresh());
                }
            }

            State::Running => {
                sm.action_stop();
                sm.action_alarm();
                sm.action_init();
            }

            State::Alarming => {
                sm.action_stop();
                sm.action_init();
            }
        }
    }

    pub fn on_tick(self, sm: &mut dyn StateView) -> Result<(), Error> {
        match self {
            State::Stopped => return Err(Error::InvalidState(StateError::TickWhileStopped)),

            State::Incrementing(mut ticker) => {
                if ticker.count_down() {
                    sm.action_alarm();
                    sm.to_running();
                } else {
                    sm.to_incrementing(ticker);
                }
            }

            State::Running => {
                if sm.runtime() == 0 {
                    sm.to_alarming();
                } else {
                    sm.action_dec();
                    sm.to_running();
                }
            }

            State::Alarming => {
                sm.action_alarm();
                sm.to_alarming();
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        EnterTime(u32),
        ToStopped,
        ToIncrementing(u32),
        ToRunning,
        ToAlarming,
        Init,
        Reset,
        Inc,
        Dec,
        Start,
        Stop,
        Alarm,
        UpdateView,
    }

    #[derive(Default)]
    struct MockView {
        runtime: u32,
        entered: Option<u32>,
        calls: Vec<Call>,
    }

    impl StateView for MockView {
        fn runtime(&self) -> u32 {
            self.runtime
        }
        fn entered_time(&mut self) -> Option<u32> {
            self.entered
        }
        fn enter_time(&mut self, secs: u32) {
            self.runtime = secs;
            self.calls.push(Call::EnterTime(secs));
        }
        fn to_stopped(&mut self) {
            self.calls.push(Call::ToStopped);
        }
        fn to_incrementing(&mut self, ticker: Ticker) {
            self.calls.push(Call::ToIncrementing(ticker.remaining()));
        }
        fn to_running(&mut self) {
            self.calls.push(Call::ToRunning);
        }
        fn to_alarming(&mut self) {
            self.calls.push(Call::ToAlarming);
        }
        fn action_init(&mut self) {
            self.runtime = 0;
            self.calls.push(Call::Init);
        }
        fn action_reset(&mut self) {
            self.runtime = 0;
            self.calls.push(Call::Reset);
        }
        fn action_inc(&mut self) {
            self.runtime += 1;
            self.calls.push(Call::Inc);
        }
        fn action_dec(&mut self) {
            self.runtime -= 1;
            self.calls.push(Call::Dec);
        }
        fn action_start(&mut self) {
            self.calls.push(Call::Start);
        }
        fn action_stop(&mut self) {
            self.calls.push(Call::Stop);
        }
        fn action_alarm(&mut self) {
            self.calls.push(Call::Alarm);
        }
        fn action_update_view(&mut self) {
            self.calls.push(Call::UpdateView);
        }
    }

    #[test]
    fn ticker_runs_out_after_tick_wait() {
        let mut t = Ticker::fresh();
        for _ in 1..TICK_WAIT {
            assert!(!t.count_down());
        }
        assert!(t.count_down());
        assert_eq!(t.remaining(), 0);
    }

    #[test]
    fn stopped_button_without_entry_starts_incrementing() {
        let mut sm = MockView::default();
        State::Stopped.on_button(&mut sm);
        assert_eq!(
            sm.calls,
            vec![Call::Inc, Call::Start, Call::ToIncrementing(TICK_WAIT)]
        );
        assert_eq!(sm.runtime, 1);
    }

    #[test]
    fn stopped_button_with_entry_goes_straight_to_running() {
        let mut sm = MockView {
            entered: Some(30),
            ..Default::default()
        };
        State::Stopped.on_button(&mut sm);
        assert_eq!(
            sm.calls,
            vec![
                Call::EnterTime(30),
                Call::UpdateView,
                Call::Alarm,
                Call::Start,
                Call::ToRunning,
            ]
        );
    }

    #[test]
    fn stopped_tick_is_an_invariant_violation() {
        let mut sm = MockView::default();
        let res = State::Stopped.on_tick(&mut sm);
        assert_eq!(res, Err(Error::InvalidState(StateError::TickWhileStopped)));
        assert!(sm.calls.is_empty());
    }

    #[test]
    fn incrementing_button_restarts_the_grace_window() {
        let mut sm = MockView {
            runtime: 5,
            ..Default::default()
        };
        let mut ticker = Ticker::fresh();
        ticker.count_down();

        State::Incrementing(ticker).on_button(&mut sm);
        assert_eq!(sm.calls, vec![Call::Inc, Call::ToIncrementing(TICK_WAIT)]);
    }

    #[test]
    fn incrementing_button_at_max_commits_to_running() {
        let mut sm = MockView {
            runtime: SEC_MAX - 1,
            ..Default::default()
        };
        State::Incrementing(Ticker::fresh()).on_button(&mut sm);
        assert_eq!(sm.calls, vec![Call::Inc, Call::Alarm, Call::ToRunning]);
    }

    #[test]
    fn incrementing_tick_counts_down_then_runs() {
        let mut sm = MockView::default();
        let mut ticker = Ticker::fresh();
        ticker.count_down();

        State::Incrementing(ticker).on_tick(&mut sm).unwrap();
        assert_eq!(sm.calls, vec![Call::ToIncrementing(TICK_WAIT - 2)]);

        ticker.count_down();
        sm.calls.clear();
        State::Incrementing(ticker).on_tick(&mut sm).unwrap();
        assert_eq!(sm.calls, vec![Call::Alarm, Call::ToRunning]);
    }

    #[test]
    fn running_tick_decrements_until_zero_then_alarms() {
        let mut sm = MockView {
            runtime: 1,
            ..Default::default()
        };
        State::Running.on_tick(&mut sm).unwrap();
        assert_eq!(sm.calls, vec![Call::Dec, Call::ToRunning]);
        assert_eq!(sm.runtime, 0);

        sm.calls.clear();
        State::Running.on_tick(&mut sm).unwrap();
        assert_eq!(sm.calls, vec![Call::ToAlarming]);
        assert_eq!(sm.runtime, 0);
    }

    #[test]
    fn running_button_stops_alarms_then_inits() {
        let mut sm = MockView {
            runtime: 40,
            ..Default::default()
        };
        State::Running.on_button(&mut sm);
        assert_eq!(sm.calls, vec![Call::Stop, Call::Alarm, Call::Init]);
    }

    #[test]
    fn alarming_handlers() {
        let mut sm = MockView::default();
        State::Alarming.on_tick(&mut sm).unwrap();
        assert_eq!(sm.calls, vec![Call::Alarm, Call::ToAlarming]);

        sm.calls.clear();
        State::Alarming.on_button(&mut sm);
        assert_eq!(sm.calls, vec![Call::Stop, Call::Init]);
    }

    #[test]
    fn ids_match_variants() {
        assert_eq!(State::Stopped.id(), StateId::Stopped);
        assert_eq!(State::Incrementing(Ticker::fresh()).id(), StateId::Incrementing);
        assert_eq!(State::Running.id(), StateId::Running);
        assert_eq!(State::Alarming.id(), StateId::Alarming);
    }
}
