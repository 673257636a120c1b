/// Abstract colors used by the display. The TUI maps them to terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paint {
    /// Canvas background while time remains.
    Background,
    /// Canvas background on the "on" beat after expiry.
    Alarm,
    /// Digits above the warn threshold.
    Foreground,
    /// Digits at or below the warn threshold.
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Normal,
    Alarm,
}

impl Background {
    pub fn paint(&self) -> Paint {
        match self {
            Self::Normal => Paint::Background,
            Self::Alarm => Paint::Alarm,
        }
    }
}

/// How true remaining seconds map to the 10-second display buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayRounding {
    /// Round up to the next multiple of ten: 125 shows as 2:10.
    #[default]
    Up,
    /// Truncate down to the multiple of ten: 125 shows as 2:00.
    Down,
}

/// Width of a display bucket, in seconds.
pub const DISPLAY_BUCKET_SECS: i64 = 10;

impl DisplayRounding {
    /// Bucketed, non-negative seconds to show for `remaining_secs`.
    pub fn apply(&self, remaining_secs: i64) -> u64 {
        let buckets = match self {
            Self::Up => {
                let q = remaining_secs.div_euclid(DISPLAY_BUCKET_SECS);
                if remaining_secs.rem_euclid(DISPLAY_BUCKET_SECS) > 0 { q + 1 } else { q }
            }
            Self::Down => remaining_secs.div_euclid(DISPLAY_BUCKET_SECS),
        };
        u64::try_from(buckets.saturating_mul(DISPLAY_BUCKET_SECS)).unwrap_or(0)
    }
}

/// Everything the digit renderer needs for one repaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFrame {
    pub minutes: u64,
    pub seconds: u64,
    pub show_colon: bool,
    pub warn: bool,
    pub background: Background,
}

impl DisplayFrame {
    pub fn foreground(&self) -> Paint {
        if self.warn { Paint::Warning } else { Paint::Foreground }
    }
}
