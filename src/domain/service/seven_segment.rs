//! Seven-segment glyph geometry.
//!
//! Segment numbering:
//!
//! ```text
//!  1
//! 4 5
//!  2
//! 6 7
//!  3
//! ```
//!
//! Every function here is pure: the same box and segment width always give
//! the same polygons.

use crate::domain::primitive::{Point, Polygon};

/// Inset that keeps neighbouring segments from touching.
pub const SEGMENT_MARGIN: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Top,
    Middle,
    Bottom,
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

impl Segment {
    /// Conventional 1-based segment number.
    pub fn number(&self) -> u8 {
        match self {
            Self::Top => 1,
            Self::Middle => 2,
            Self::Bottom => 3,
            Self::UpperLeft => 4,
            Self::UpperRight => 5,
            Self::LowerLeft => 6,
            Self::LowerRight => 7,
        }
    }
}

use Segment::*;

/// Lit segments per digit, indexed by digit value.
pub const DIGIT_SEGMENTS: [&[Segment]; 10] = [
    &[Top, Bottom, UpperLeft, UpperRight, LowerLeft, LowerRight],
    &[UpperRight, LowerRight],
    &[Top, Middle, Bottom, UpperRight, LowerLeft],
    &[Top, Middle, Bottom, UpperRight, LowerRight],
    &[Middle, UpperLeft, UpperRight, LowerRight],
    &[Top, Middle, Bottom, UpperLeft, LowerRight],
    &[Top, Middle, Bottom, UpperLeft, LowerLeft, LowerRight],
    &[Top, UpperRight, LowerRight],
    &[Top, Middle, Bottom, UpperLeft, UpperRight, LowerLeft, LowerRight],
    &[Top, Middle, Bottom, UpperLeft, UpperRight, LowerRight],
];

/// Box a single glyph is drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub segment_width: f64,
}

impl GlyphBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64, segment_width: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            segment_width,
        }
    }

    /// Same size, moved right by `dx`.
    pub fn shifted(&self, dx: f64) -> Self {
        Self {
            x: self.x + dx,
            ..*self
        }
    }

    fn margin(&self) -> f64 {
        SEGMENT_MARGIN.min(self.segment_width / 4.0)
    }
}

/// Polygons for `digit` (values above 9 draw nothing).
pub fn digit_polygons(glyph: &GlyphBox, digit: u8) -> Vec<Polygon> {
    DIGIT_SEGMENTS
        .get(usize::from(digit))
        .map(|segments| segments.iter().map(|s| segment_polygon(glyph, *s)).collect())
        .unwrap_or_default()
}

pub fn segment_polygon(glyph: &GlyphBox, segment: Segment) -> Polygon {
    match segment {
        Top => horizontal_segment(glyph, 0.0),
        Middle => horizontal_segment(glyph, 0.5),
        Bottom => horizontal_segment(glyph, 1.0),
        UpperLeft => vertical_segment(glyph, 0.0, false),
        UpperRight => vertical_segment(glyph, 1.0, false),
        LowerLeft => vertical_segment(glyph, 0.0, true),
        LowerRight => vertical_segment(glyph, 1.0, true),
    }
}

/// Horizontal bar; `y_offset` 0, 0.5 or 1 selects top, middle or bottom.
fn horizontal_segment(glyph: &GlyphBox, y_offset: f64) -> Polygon {
    let sw = glyph.segment_width;
    let m = glyph.margin();
    let x = glyph.x;
    let y = glyph.y + y_offset * (glyph.height - sw);
    let w = glyph.width;
    Polygon::new(vec![
        Point::new(x + 0.5 * sw + m, y + 0.5 * sw),
        Point::new(x + sw, y + sw - m),
        Point::new(x + w - sw, y + sw - m),
        Point::new(x + w - 0.5 * sw - m, y + 0.5 * sw),
        Point::new(x + w - sw, y + m),
        Point::new(x + sw, y + m),
    ])
}

/// Vertical bar; `x_offset` 0 or 1 selects left or right column.
fn vertical_segment(glyph: &GlyphBox, x_offset: f64, lower: bool) -> Polygon {
    let sw = glyph.segment_width;
    let m = glyph.margin();
    let x = glyph.x + x_offset * (glyph.width - sw);
    let half = glyph.height / 2.0;
    let y = if lower { glyph.y + half } else { glyph.y + 0.5 * sw };
    let h = half - 0.5 * sw;
    Polygon::new(vec![
        Point::new(x + 0.5 * sw, y + m),
        Point::new(x + m, y + 0.5 * sw),
        Point::new(x + m, y + h - 0.5 * sw),
        Point::new(x + 0.5 * sw, y + h - m),
        Point::new(x + sw - m, y + h - 0.5 * sw),
        Point::new(x + sw - m, y + 0.5 * sw),
    ])
}

/// Two diamonds above and below the vertical center of the box.
pub fn colon_polygons(glyph: &GlyphBox) -> [Polygon; 2] {
    let spacing = glyph.height / 6.0;
    let center = glyph.y + 0.5 * glyph.height - 0.5 * glyph.segment_width;
    [
        diamond(glyph.x, center - spacing, glyph.segment_width),
        diamond(glyph.x, center + spacing, glyph.segment_width),
    ]
}

fn diamond(x: f64, y: f64, size: f64) -> Polygon {
    Polygon::new(vec![
        Point::new(x + 0.5 * size, y),
        Point::new(x + size, y + 0.5 * size),
        Point::new(x + 0.5 * size, y + size),
        Point::new(x, y + 0.5 * size),
    ])
}
