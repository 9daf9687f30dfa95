// Author: Dustin Pilgrim
// License: MIT

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::core::{
    clock::Clock,
    error::Error,
    listener::{ModelListener, StateId},
    state::{State, StateView, Ticker},
    time::TimeCounter,
};
use crate::sdebug;

/// Single-threaded stopwatch core.
///
/// Owns the current state, the time counter, the clock and the listener.
/// Events are dispatched to the current state, which drives the machine
/// back through `StateView`.
pub struct StateMachine {
    state: State,
    time: TimeCounter,
    clock: Box<dyn Clock>,
    listener: Box<dyn ModelListener>,
}

impl StateMachine {
    pub fn new(listener: Box<dyn ModelListener>, clock: Box<dyn Clock>) -> Self {
        Self {
            state: State::Stopped,
            time: TimeCounter::new(),
            clock,
            listener,
        }
    }

    pub fn set_model_listener(&mut self, listener: Box<dyn ModelListener>) {
        self.listener = listener;
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn on_button(&mut self) {
        let current = self.state;
        sdebug!("machine", "button in {}", current.id());
        current.on_button(self);
    }

    pub fn on_tick(&mut self) -> Result<(), Error> {
        let current = self.state;
        sdebug!("machine", "tick in {}", current.id());
        current.on_tick(self)
    }

    fn set_state(&mut self, next: State) {
        if self.state.id() != next.id() {
            sdebug!("machine", "{} -> {}", self.state.id(), next.id());
        }
        self.state = next;
        self.listener.on_state_update(next.id());
    }

    fn update_ui_runtime(&mut self) {
        self.listener.on_time_update(self.time.get());
    }
}

impl StateView for StateMachine {
    fn runtime(&self) -> u32 {
        self.time.get()
    }

    fn entered_time(&mut self) -> Option<u32> {
        self.listener.user_runtime()
    }

    fn enter_time(&mut self, secs: u32) {
        self.time.set(secs);
    }

    // ---------------- transitions ----------------

    fn to_stopped(&mut self) {
        self.set_state(State::Stopped);
    }

    fn to_incrementing(&mut self, ticker: Ticker) {
        self.set_state(State::Incrementing(ticker));
    }

    fn to_running(&mut self) {
        self.set_state(State::Running);
    }

    fn to_alarming(&mut self) {
        self.set_state(State::Alarming);
    }

    // ---------------- actions ----------------

    fn action_init(&mut self) {
        self.to_stopped();
        self.action_reset();
    }

    fn action_reset(&mut self) {
        self.time.reset();
        self.action_update_view();
    }

    fn action_inc(&mut self) {
        self.time.increment();
        self.action_update_view();
    }

    fn action_dec(&mut self) {
        self.time.decrement();
        self.action_update_view();
    }

    fn action_start(&mut self) {
        self.clock.start();
    }

    fn action_stop(&mut self) {
        self.clock.stop();
    }

    fn action_alarm(&mut self) {
        sdebug!("machine", "alarm at {}s", self.time.get());
        self.listener.sound_alarm();
    }

    fn action_update_view(&mut self) {
        self.update_ui_runtime();
    }
}

/// Shared handle to a `StateMachine`.
///
/// Button presses and ticks may arrive from different threads; each event
/// runs to completion under one lock before the next is looked at.
#[derive(Clone)]
pub struct Stopwatch {
    inner: Arc<Mutex<StateMachine>>,
}

impl Stopwatch {
    pub fn new(listener: Box<dyn ModelListener>, clock: Box<dyn Clock>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StateMachine::new(listener, clock))),
        }
    }

    fn lock(&self) -> MutexGuard<'_, StateMachine> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Brings the machine to Stopped with a zero runtime and tells the
    /// listener so.
    pub fn start(&self) {
        self.lock().action_init();
    }

    pub fn set_model_listener(&self, listener: Box<dyn ModelListener>) {
        self.lock().set_model_listener(listener);
    }

    pub fn on_button(&self) {
        self.lock().on_button();
    }

    pub fn on_tick(&self) -> Result<(), Error> {
        self.lock().on_tick()
    }

    pub fn runtime(&self) -> u32 {
        self.lock().runtime()
    }

    pub fn entered_time(&self) -> Option<u32> {
        self.lock().entered_time()
    }

    /// Forces the runtime; the listener hears about it on the next view update.
    pub fn enter_time(&self, secs: u32) {
        self.lock().enter_time(secs);
    }

    pub fn update_view(&self) {
        self.lock().action_update_view();
    }

    pub fn state_id(&self) -> StateId {
        self.lock().state().id()
    }

    /// Stops the clock without touching the state.
    pub fn halt_clock(&self) {
        self.lock().action_stop();
    }
}
