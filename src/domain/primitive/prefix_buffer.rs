use std::time::{Duration, Instant};

use super::Digit;

/// How long typed input stays live without a further keystroke.
pub const PREFIX_EXPIRY: Duration = Duration::from_secs(1);

/// Seconds typed ahead of a command key (e.g. "15" before Enter).
///
/// Digits accumulate as whole minutes. The buffer reads as zero once
/// `expires_at` has passed, so stale partial input is discarded on next use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrefixBuffer {
    seconds: u64,
    expires_at: Option<Instant>,
}

impl PrefixBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live value at `now`; zero once expired.
    pub fn current(&self, now: Instant) -> u64 {
        match self.expires_at {
            Some(expires_at) if expires_at > now => self.seconds,
            _ => 0,
        }
    }

    /// Append a digit, shifting earlier input one decimal place.
    pub fn push_digit(&mut self, digit: Digit, now: Instant) {
        let base = self.current(now);
        self.seconds = base
            .saturating_mul(10)
            .saturating_add(u64::from(digit.value()) * 60);
        self.expires_at = Some(now + PREFIX_EXPIRY);
    }

    /// Reinterpret the typed value as seconds instead of minutes.
    ///
    /// An empty buffer is seeded with `seed_secs` first.
    pub fn to_seconds_unit(&mut self, seed_secs: u64, now: Instant) {
        let base = match self.current(now) {
            0 => seed_secs,
            value => value,
        };
        self.seconds = base / 60;
        self.expires_at = Some(now + PREFIX_EXPIRY);
    }

    /// Consume the buffer, falling back to `default_secs` when empty.
    pub fn take_or(&mut self, default_secs: u64, now: Instant) -> u64 {
        let value = self.current(now);
        self.seconds = 0;
        if value == 0 { default_secs } else { value }
    }
}
