use std::time::Instant;

use crate::domain::primitive::{Digit, PrefixBuffer, RemainingTime};

/// Amount `+`/`-` adjust by when nothing was typed.
pub const DEFAULT_ADJUST_SECS: u64 = 60;

/// Value an empty prefix buffer is seeded with before `s` divides it.
pub const SECONDS_UNIT_SEED_SECS: u64 = 10 * 60;

/// Which field of the timer is authoritative.
///
/// A running timer keeps its deadline as an anchor instant plus the time that
/// was left at that instant, so the deadline can sit arbitrarily far in the
/// past without underflowing `Instant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerMode {
    Running {
        anchored_at: Instant,
        remaining_at_anchor: RemainingTime,
    },
    Paused {
        remaining: RemainingTime,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Add,
    Subtract,
}

/// The countdown and its typed-ahead prefix buffer.
pub struct CountdownTimer {
    mode: TimerMode,
    prefix: PrefixBuffer,
}

impl CountdownTimer {
    /// Start running with `duration` left.
    pub fn new(duration: RemainingTime, now: Instant) -> Self {
        Self {
            mode: running(now, duration),
            prefix: PrefixBuffer::new(),
        }
    }

    pub fn mode(&self) -> &TimerMode {
        &self.mode
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.mode, TimerMode::Paused { .. })
    }

    pub fn prefix(&self) -> &PrefixBuffer {
        &self.prefix
    }

    pub fn remaining(&self, now: Instant) -> RemainingTime {
        match self.mode {
            TimerMode::Running {
                anchored_at,
                remaining_at_anchor,
            } => remaining_at_anchor.saturating_add(RemainingTime::between(now, anchored_at)),
            TimerMode::Paused { remaining } => remaining,
        }
    }

    /// Freeze a running countdown, or resume a paused one where it stopped.
    pub fn toggle_pause(&mut self, now: Instant) {
        self.mode = match self.mode {
            TimerMode::Running { .. } => TimerMode::Paused {
                remaining: self.remaining(now),
            },
            TimerMode::Paused { remaining } => running(now, remaining),
        };
    }

    pub fn push_digit(&mut self, digit: Digit, now: Instant) {
        self.prefix.push_digit(digit, now);
    }

    pub fn toggle_seconds_unit(&mut self, now: Instant) {
        self.prefix.to_seconds_unit(SECONDS_UNIT_SEED_SECS, now);
    }

    /// Set the countdown to the typed value, or `default` if nothing was typed.
    ///
    /// A paused timer stays paused at the new value.
    pub fn set_from_prefix_or(&mut self, default: RemainingTime, now: Instant) -> RemainingTime {
        let default_secs = u64::try_from(default.ceil_secs()).unwrap_or(0);
        let value = secs_to_remaining(self.prefix.take_or(default_secs, now));
        self.mode = match self.mode {
            TimerMode::Running { .. } => running(now, value),
            TimerMode::Paused { .. } => TimerMode::Paused { remaining: value },
        };
        value
    }

    /// Shift the remaining time by `delta`.
    ///
    /// An expired countdown is first brought back to zero so the delta applies
    /// from now rather than on top of the overdue backlog.
    pub fn adjust(&mut self, delta: RemainingTime, now: Instant) {
        let current = self.remaining(now);
        let baseline = if current.is_negative() { RemainingTime::ZERO } else { current };
        self.mode = match self.mode {
            TimerMode::Running { .. } => running(now, baseline.saturating_add(delta)),
            TimerMode::Paused { .. } => TimerMode::Paused {
                remaining: baseline.saturating_add(delta),
            },
        };
    }

    /// `adjust` by the typed value (or one minute) in `direction`.
    pub fn adjust_with_prefix(&mut self, direction: Direction, now: Instant) -> RemainingTime {
        let amount = secs_to_remaining(self.prefix.take_or(DEFAULT_ADJUST_SECS, now));
        let delta = match direction {
            Direction::Add => amount,
            Direction::Subtract => RemainingTime::ZERO.saturating_sub(amount),
        };
        self.adjust(delta, now);
        delta
    }
}

fn running(now: Instant, remaining: RemainingTime) -> TimerMode {
    TimerMode::Running {
        anchored_at: now,
        remaining_at_anchor: remaining,
    }
}

fn secs_to_remaining(secs: u64) -> RemainingTime {
    RemainingTime::from_secs(i64::try_from(secs).unwrap_or(i64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn digit(value: u8) -> Digit {
        Digit::new(value).unwrap()
    }

    fn twenty_minutes() -> RemainingTime {
        RemainingTime::from_mins(20)
    }

    // =========================================================================
    // Tests: construction and remaining()
    // =========================================================================

    #[test]
    fn new_timer_is_running_with_full_duration() {
        let now = Instant::now();
        let timer = CountdownTimer::new(twenty_minutes(), now);
        assert!(!timer.is_paused());
        assert_eq!(timer.remaining(now), twenty_minutes());
    }

    #[test]
    fn running_timer_counts_down() {
        let now = Instant::now();
        let timer = CountdownTimer::new(RemainingTime::from_secs(10), now);
        let later = now + Duration::from_secs(4);
        assert_eq!(timer.remaining(later), RemainingTime::from_secs(6));
    }

    #[test]
    fn running_timer_goes_negative_after_expiry() {
        let now = Instant::now();
        let timer = CountdownTimer::new(RemainingTime::from_secs(10), now);
        let later = now + Duration::from_secs(15);
        assert_eq!(timer.remaining(later), RemainingTime::from_secs(-5));
    }

    // =========================================================================
    // Tests: toggle_pause
    // =========================================================================

    #[test]
    fn pause_freezes_remaining_time() {
        let now = Instant::now();
        let mut timer = CountdownTimer::new(RemainingTime::from_secs(100), now);
        timer.toggle_pause(now + Duration::from_secs(30));
        assert!(timer.is_paused());
        assert_eq!(
            timer.remaining(now + Duration::from_secs(500)),
            RemainingTime::from_secs(70)
        );
    }

    #[test]
    fn pause_then_resume_preserves_remaining() {
        let now = Instant::now();
        let mut timer = CountdownTimer::new(RemainingTime::from_millis(83_250), now);
        let paused_at = now + Duration::from_secs(3);
        timer.toggle_pause(paused_at);
        let before = timer.remaining(paused_at);
        let resumed_at = paused_at + Duration::from_secs(600);
        timer.toggle_pause(resumed_at);
        assert!(!timer.is_paused());
        assert_eq!(timer.remaining(resumed_at), before);
    }

    #[test]
    fn pause_after_expiry_keeps_negative_value() {
        let now = Instant::now();
        let mut timer = CountdownTimer::new(RemainingTime::from_secs(1), now);
        timer.toggle_pause(now + Duration::from_secs(4));
        assert_eq!(timer.remaining(now), RemainingTime::from_secs(-3));
    }

    // =========================================================================
    // Tests: set_from_prefix_or
    // =========================================================================

    #[test]
    fn set_without_prefix_uses_default() {
        let now = Instant::now();
        let mut timer = CountdownTimer::new(RemainingTime::from_secs(5), now);
        let later = now + Duration::from_secs(100);
        timer.set_from_prefix_or(twenty_minutes(), later);
        assert_eq!(timer.remaining(later), twenty_minutes());
    }

    #[test]
    fn set_with_prefix_uses_typed_minutes() {
        let now = Instant::now();
        let mut timer = CountdownTimer::new(twenty_minutes(), now);
        timer.push_digit(digit(1), now);
        timer.push_digit(digit(5), now);
        let value = timer.set_from_prefix_or(twenty_minutes(), now);
        assert_eq!(value, RemainingTime::from_mins(15));
        assert_eq!(timer.remaining(now), RemainingTime::from_mins(15));
    }

    #[test]
    fn set_while_paused_stays_paused() {
        let now = Instant::now();
        let mut timer = CountdownTimer::new(twenty_minutes(), now);
        timer.toggle_pause(now);
        timer.push_digit(digit(7), now);
        timer.set_from_prefix_or(twenty_minutes(), now);
        assert!(timer.is_paused());
        assert_eq!(
            timer.remaining(now + Duration::from_secs(30)),
            RemainingTime::from_mins(7)
        );
    }

    #[test]
    fn set_clears_prefix() {
        let now = Instant::now();
        let mut timer = CountdownTimer::new(twenty_minutes(), now);
        timer.push_digit(digit(3), now);
        timer.set_from_prefix_or(twenty_minutes(), now);
        assert_eq!(timer.prefix().current(now), 0);
    }

    #[test]
    fn set_with_seconds_unit_uses_seconds() {
        let now = Instant::now();
        let mut timer = CountdownTimer::new(twenty_minutes(), now);
        timer.push_digit(digit(9), now);
        timer.push_digit(digit(0), now);
        timer.toggle_seconds_unit(now);
        timer.set_from_prefix_or(twenty_minutes(), now);
        assert_eq!(timer.remaining(now), RemainingTime::from_secs(90));
    }

    #[test]
    fn set_ignores_expired_prefix() {
        let now = Instant::now();
        let mut timer = CountdownTimer::new(twenty_minutes(), now);
        timer.push_digit(digit(3), now);
        let later = now + Duration::from_secs(2);
        timer.set_from_prefix_or(twenty_minutes(), later);
        assert_eq!(timer.remaining(later), twenty_minutes());
    }

    // =========================================================================
    // Tests: toggle_seconds_unit
    // =========================================================================

    #[test]
    fn seconds_unit_on_fifteen_gives_fifteen_seconds() {
        let now = Instant::now();
        let mut timer = CountdownTimer::new(twenty_minutes(), now);
        timer.push_digit(digit(1), now);
        timer.push_digit(digit(5), now);
        assert_eq!(timer.prefix().current(now), 900);
        timer.toggle_seconds_unit(now);
        assert_eq!(timer.prefix().current(now), 15);
    }

    #[test]
    fn seconds_unit_alone_seeds_ten_seconds() {
        let now = Instant::now();
        let mut timer = CountdownTimer::new(twenty_minutes(), now);
        timer.toggle_seconds_unit(now);
        assert_eq!(timer.prefix().current(now), 10);
    }

    // =========================================================================
    // Tests: adjust
    // =========================================================================

    #[test]
    fn adjust_running_adds_to_deadline() {
        let now = Instant::now();
        let mut timer = CountdownTimer::new(RemainingTime::from_secs(100), now);
        timer.adjust(RemainingTime::from_secs(60), now);
        assert_eq!(timer.remaining(now), RemainingTime::from_secs(160));
    }

    #[test]
    fn adjust_after_expiry_clamps_backlog_first() {
        let now = Instant::now();
        let mut timer = CountdownTimer::new(RemainingTime::ZERO, now);
        let later = now + Duration::from_secs(500);
        assert_eq!(timer.remaining(later), RemainingTime::from_secs(-500));
        timer.adjust(RemainingTime::from_secs(60), later);
        assert_eq!(timer.remaining(later), RemainingTime::from_secs(60));
    }

    #[test]
    fn adjust_paused_after_expiry_clamps_to_zero_first() {
        let now = Instant::now();
        let mut timer = CountdownTimer::new(RemainingTime::ZERO, now);
        timer.toggle_pause(now + Duration::from_secs(30));
        timer.adjust(RemainingTime::from_secs(60), now + Duration::from_secs(40));
        assert!(timer.is_paused());
        assert_eq!(timer.remaining(now), RemainingTime::from_secs(60));
    }

    #[test]
    fn adjust_can_push_remaining_negative() {
        let now = Instant::now();
        let mut timer = CountdownTimer::new(RemainingTime::from_secs(30), now);
        timer.adjust(RemainingTime::from_secs(-60), now);
        assert_eq!(timer.remaining(now), RemainingTime::from_secs(-30));
    }

    // =========================================================================
    // Tests: adjust_with_prefix
    // =========================================================================

    #[test]
    fn add_without_prefix_adds_one_minute() {
        let now = Instant::now();
        let mut timer = CountdownTimer::new(twenty_minutes(), now);
        timer.adjust_with_prefix(Direction::Add, now);
        assert_eq!(timer.remaining(now), RemainingTime::from_mins(21));
    }

    #[test]
    fn subtract_with_prefix_subtracts_typed_minutes() {
        let now = Instant::now();
        let mut timer = CountdownTimer::new(twenty_minutes(), now);
        timer.push_digit(digit(5), now);
        let delta = timer.adjust_with_prefix(Direction::Subtract, now);
        assert_eq!(delta, RemainingTime::from_mins(-5));
        assert_eq!(timer.remaining(now), RemainingTime::from_mins(15));
        assert_eq!(timer.prefix().current(now), 0);
    }

    #[test]
    fn add_while_paused_changes_frozen_value() {
        let now = Instant::now();
        let mut timer = CountdownTimer::new(twenty_minutes(), now);
        timer.toggle_pause(now);
        timer.adjust_with_prefix(Direction::Add, now);
        assert!(timer.is_paused());
        assert_eq!(
            timer.remaining(now + Duration::from_secs(90)),
            RemainingTime::from_mins(21)
        );
    }

    // =========================================================================
    // Tests: key sequence scenario
    // =========================================================================

    #[test]
    fn plus_five_times_then_pause_then_set_ten() {
        let now = Instant::now();
        let mut timer = CountdownTimer::new(twenty_minutes(), now);
        for _ in 0..5 {
            timer.adjust_with_prefix(Direction::Add, now);
        }
        assert_eq!(timer.remaining(now), RemainingTime::from_mins(25));

        timer.toggle_pause(now);
        assert_eq!(
            timer.remaining(now + Duration::from_secs(5)),
            RemainingTime::from_mins(25)
        );

        let typed = now + Duration::from_secs(6);
        timer.push_digit(digit(1), typed);
        timer.push_digit(digit(0), typed);
        timer.set_from_prefix_or(twenty_minutes(), typed);
        assert!(timer.is_paused());
        assert_eq!(
            timer.remaining(typed + Duration::from_secs(10)),
            RemainingTime::from_mins(10)
        );
    }
}
