use std::fmt;
use std::time::{Duration, Instant};

/// Signed amount of countdown time, in milliseconds.
///
/// Negative values mean the countdown has run past zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct RemainingTime(i64);

impl RemainingTime {
    pub const ZERO: Self = Self(0);

    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub fn from_secs(secs: i64) -> Self {
        Self(secs.saturating_mul(1000))
    }

    pub fn from_mins(mins: i64) -> Self {
        Self::from_secs(mins.saturating_mul(60))
    }

    /// Time left from `now` until `end`, negative if `end` has passed.
    pub fn between(now: Instant, end: Instant) -> Self {
        match end.checked_duration_since(now) {
            Some(ahead) => Self(duration_millis(ahead)),
            None => Self(duration_millis(now.duration_since(end)).saturating_neg()),
        }
    }

    pub fn as_millis(&self) -> i64 {
        self.0
    }

    /// Whole seconds, rounded towards positive infinity.
    pub fn ceil_secs(&self) -> i64 {
        let whole = self.0.div_euclid(1000);
        if self.0.rem_euclid(1000) > 0 { whole + 1 } else { whole }
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

fn duration_millis(duration: Duration) -> i64 {
    i64::try_from(duration.as_millis()).unwrap_or(i64::MAX)
}

impl fmt::Display for RemainingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.ceil_secs();
        let sign = if secs < 0 { "-" } else { "" };
        let abs = secs.unsigned_abs();
        write!(f, "{sign}{}:{:02}", abs / 60, abs % 60)
    }
}
