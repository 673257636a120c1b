use std::time::Instant;

use crate::domain::model::CountdownTimer;
use crate::domain::primitive::{
    Background, CanvasSize, DisplayFrame, DisplayRounding, Paint, RemainingTime,
};
use crate::domain::service::{DigitLayout, digit_display};
use crate::interface_adapter::port::RenderPort;

/// Turns timer state into display frames and repaints only on change.
pub struct RenderUsecase {
    warn_threshold: RemainingTime,
    rounding: DisplayRounding,
    last_drawn: Option<(DigitLayout, DisplayFrame)>,
}

impl RenderUsecase {
    pub fn new(warn_threshold: RemainingTime, rounding: DisplayRounding) -> Self {
        Self {
            warn_threshold,
            rounding,
            last_drawn: None,
        }
    }

    /// Derive what should be on screen for `timer` at `now`.
    pub fn frame_for(&self, timer: &CountdownTimer, now: Instant) -> DisplayFrame {
        let remaining_secs = timer.remaining(now).ceil_secs();
        let paused = timer.is_paused();
        let even = remaining_secs.rem_euclid(2) == 0;
        let shown = self.rounding.apply(remaining_secs);
        DisplayFrame {
            minutes: shown / 60,
            seconds: shown % 60,
            show_colon: even || paused,
            warn: remaining_secs <= self.warn_threshold.ceil_secs(),
            background: if remaining_secs <= 0 && even {
                Background::Alarm
            } else {
                Background::Normal
            },
        }
    }

    /// One tick of the render loop.
    ///
    /// Repaints `ctx` when the frame or layout changed since the last paint, or
    /// when `force` is set. Returns whether anything was painted.
    pub fn tick<R: RenderPort>(
        &mut self,
        timer: &CountdownTimer,
        now: Instant,
        canvas: CanvasSize,
        force: bool,
        ctx: &mut R,
    ) -> bool {
        let Some(layout) = DigitLayout::fit(canvas) else {
            if force {
                ctx.clear();
                ctx.set_background(Paint::Background);
                self.last_drawn = None;
                return true;
            }
            return false;
        };

        let frame = self.frame_for(timer, now);
        if !force && self.last_drawn == Some((layout, frame)) {
            return false;
        }

        ctx.clear();
        ctx.set_background(frame.background.paint());
        let paint = frame.foreground();
        for polygon in digit_display::time_polygons(&layout, &frame) {
            ctx.draw_polygon(&polygon, paint);
        }
        self.last_drawn = Some((layout, frame));
        tracing::trace!(?frame, "frame painted");
        true
    }
}
