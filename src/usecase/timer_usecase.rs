use std::time::Instant;

use crate::domain::model::{CountdownTimer, Direction};
use crate::domain::primitive::{Digit, RemainingTime};
use crate::interface_adapter::port::ClockPort;

/// Owns the single countdown and the clock it is measured against.
pub struct TimerUsecase<C: ClockPort> {
    clock: C,
    timer: CountdownTimer,
    default_interval: RemainingTime,
}

impl<C: ClockPort> TimerUsecase<C> {
    /// Start a countdown of `default_interval`, which Enter also falls back to.
    pub fn new(clock: C, default_interval: RemainingTime) -> Self {
        let timer = CountdownTimer::new(default_interval, clock.now());
        tracing::info!(duration = %default_interval, "countdown started");
        Self {
            clock,
            timer,
            default_interval,
        }
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    pub fn timer(&self) -> &CountdownTimer {
        &self.timer
    }

    pub fn remaining(&self) -> RemainingTime {
        self.timer.remaining(self.clock.now())
    }

    pub fn toggle_pause(&mut self) {
        let now = self.clock.now();
        self.timer.toggle_pause(now);
        tracing::debug!(
            mode = ?self.timer.mode(),
            remaining = %self.timer.remaining(now),
            "pause toggled"
        );
    }

    pub fn push_digit(&mut self, digit: Digit) {
        let now = self.clock.now();
        self.timer.push_digit(digit, now);
        tracing::trace!(prefix = self.timer.prefix().current(now), "digit typed");
    }

    pub fn toggle_seconds_unit(&mut self) {
        let now = self.clock.now();
        self.timer.toggle_seconds_unit(now);
        tracing::trace!(prefix = self.timer.prefix().current(now), "prefix read as seconds");
    }

    /// Enter: set to the typed value, or the default interval.
    pub fn set_time(&mut self) {
        let now = self.clock.now();
        let value = self.timer.set_from_prefix_or(self.default_interval, now);
        tracing::debug!(value = %value, paused = self.timer.is_paused(), "time set");
    }

    /// Plus/Minus: shift by the typed value, or one minute.
    pub fn adjust_time(&mut self, direction: Direction) {
        let now = self.clock.now();
        let delta = self.timer.adjust_with_prefix(direction, now);
        tracing::debug!(
            delta_ms = delta.as_millis(),
            remaining = %self.timer.remaining(now),
            "time adjusted"
        );
    }
}
