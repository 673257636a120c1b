//! Lays out `MM:SS` as seven-segment glyphs on a canvas.

use crate::domain::primitive::{CanvasSize, DisplayFrame, Polygon};
use crate::domain::service::seven_segment::{self, GlyphBox};

/// Canvas width divided by this gives the width of a minutes digit.
const WIDTH_DIVISOR: f64 = 4.3;

/// Size of the colon and seconds relative to the minutes digits.
const SMALL_SCALE: f64 = 0.6;

/// Seconds segments are drawn a little heavier than their box scale.
const SECONDS_SEGMENT_SCALE: f64 = 0.8;

/// Smaller digits are not legible on the pixel grid.
const MIN_DIGIT_WIDTH: f64 = 6.0;

/// Placement of the whole `MM:SS` block on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DigitLayout {
    pub x: f64,
    pub y: f64,
    pub digit_width: f64,
    pub digit_height: f64,
    pub segment_width: f64,
    pub spacing: f64,
}

impl DigitLayout {
    /// Largest layout that fits `canvas`, centered; `None` if it would be illegible.
    pub fn fit(canvas: CanvasSize) -> Option<Self> {
        if canvas.is_empty() {
            return None;
        }
        let digit_width = (canvas.width / WIDTH_DIVISOR).min(canvas.height / 2.0);
        if digit_width < MIN_DIGIT_WIDTH {
            return None;
        }
        let digit_height = 2.0 * digit_width;
        let segment_width = digit_width / 6.0;
        let spacing = segment_width;
        let content_width = 2.0 * digit_width
            + (3.0 + SMALL_SCALE) * spacing
            + 2.0 * SMALL_SCALE * digit_width
            + spacing;
        Some(Self {
            x: 0.5 * (canvas.width - content_width),
            y: 0.5 * (canvas.height - digit_height),
            digit_width,
            digit_height,
            segment_width,
            spacing,
        })
    }

    fn minutes_box(&self) -> GlyphBox {
        GlyphBox::new(
            self.x,
            self.y,
            self.digit_width,
            self.digit_height,
            self.segment_width,
        )
    }

    fn colon_box(&self) -> GlyphBox {
        GlyphBox::new(
            self.x + 2.0 * self.digit_width + 2.0 * self.spacing,
            self.y + 0.4 * self.digit_height,
            SMALL_SCALE * self.digit_width,
            SMALL_SCALE * self.digit_height,
            SMALL_SCALE * self.segment_width,
        )
    }

    fn seconds_box(&self) -> GlyphBox {
        GlyphBox::new(
            self.x + 2.0 * self.digit_width + (3.0 + SMALL_SCALE) * self.spacing,
            self.y + 0.4 * self.digit_height,
            SMALL_SCALE * self.digit_width,
            SMALL_SCALE * self.digit_height,
            SECONDS_SEGMENT_SCALE * self.segment_width,
        )
    }
}

/// Polygons for the digits (and colon, when shown) of `frame`.
pub fn time_polygons(layout: &DigitLayout, frame: &DisplayFrame) -> Vec<Polygon> {
    let mut polygons = two_digit_polygons(&layout.minutes_box(), frame.minutes, layout.spacing);
    if frame.show_colon {
        polygons.extend(seven_segment::colon_polygons(&layout.colon_box()));
    }
    polygons.extend(two_digit_polygons(
        &layout.seconds_box(),
        frame.seconds,
        layout.spacing,
    ));
    polygons
}

/// Two side-by-side digits for `value`, clamped to 99.
fn two_digit_polygons(glyph: &GlyphBox, value: u64, spacing: f64) -> Vec<Polygon> {
    let value = value.min(99) as u8;
    let mut polygons = seven_segment::digit_polygons(glyph, value / 10);
    polygons.extend(seven_segment::digit_polygons(
        &glyph.shifted(glyph.width + spacing),
        value % 10,
    ));
    polygons
}
