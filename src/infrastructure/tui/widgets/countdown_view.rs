use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Painter, Shape};

use crate::domain::primitive::{CanvasSize, Paint, Point, Polygon};
use crate::interface_adapter::port::RenderPort;
use crate::shared::config::CanvasMarker;

/// Retained drawing of the countdown, rebuilt by the render usecase and
/// replayed onto the terminal canvas.
#[derive(Debug, Default)]
pub struct Scene {
    background: Option<Paint>,
    polygons: Vec<(Polygon, Paint)>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(&self) -> Option<Paint> {
        self.background
    }

    pub fn polygons(&self) -> &[(Polygon, Paint)] {
        &self.polygons
    }
}

impl RenderPort for Scene {
    fn clear(&mut self) {
        self.background = None;
        self.polygons.clear();
    }

    fn set_background(&mut self, paint: Paint) {
        self.background = Some(paint);
    }

    fn draw_polygon(&mut self, polygon: &Polygon, paint: Paint) {
        self.polygons.push((polygon.clone(), paint));
    }
}

/// Terminal color for each display paint.
pub fn paint_color(paint: Paint) -> Color {
    match paint {
        Paint::Background => Color::Blue,
        Paint::Alarm => Color::Red,
        Paint::Foreground => Color::White,
        Paint::Warning => Color::Red,
    }
}

pub fn marker_symbol(marker: CanvasMarker) -> Marker {
    match marker {
        CanvasMarker::HalfBlock => Marker::HalfBlock,
        CanvasMarker::Braille => Marker::Braille,
        CanvasMarker::Block => Marker::Block,
    }
}

/// Pixel grid size of a canvas covering `area` with `marker`.
pub fn canvas_size(area: Rect, marker: CanvasMarker) -> CanvasSize {
    let (per_col, per_row) = match marker {
        CanvasMarker::HalfBlock => (1.0, 2.0),
        CanvasMarker::Braille => (2.0, 4.0),
        CanvasMarker::Block => (1.0, 1.0),
    };
    CanvasSize::new(
        f64::from(area.width) * per_col,
        f64::from(area.height) * per_row,
    )
}

/// Render `scene` full-size into `area`.
pub fn render(frame: &mut Frame, area: Rect, scene: &Scene, marker: CanvasMarker) {
    let size = canvas_size(area, marker);
    let background = paint_color(scene.background().unwrap_or(Paint::Background));

    // Bounds match the pixel grid one-to-one, so canvas units are pixels.
    let canvas = Canvas::default()
        .marker(marker_symbol(marker))
        .background_color(background)
        .x_bounds([0.0, (size.width - 1.0).max(0.0)])
        .y_bounds([0.0, (size.height - 1.0).max(0.0)])
        .paint(|ctx| {
            for (polygon, paint) in scene.polygons() {
                ctx.draw(&FilledPolygon {
                    polygon,
                    color: paint_color(*paint),
                    canvas: size,
                });
            }
        });
    frame.render_widget(canvas, area);
}

/// Scanline-free polygon fill: every pixel whose center lies inside is lit.
struct FilledPolygon<'a> {
    polygon: &'a Polygon,
    color: Color,
    canvas: CanvasSize,
}

impl Shape for FilledPolygon<'_> {
    fn draw(&self, painter: &mut Painter) {
        let Some((min, max)) = self.polygon.bounds() else {
            return;
        };
        let x_start = min.x.floor().max(0.0) as usize;
        let x_end = max.x.ceil().min(self.canvas.width) as usize;
        let y_start = min.y.floor().max(0.0) as usize;
        let y_end = max.y.ceil().min(self.canvas.height) as usize;

        for py in y_start..y_end {
            for px in x_start..x_end {
                let center = Point::new(px as f64 + 0.5, py as f64 + 0.5);
                if !self.polygon.contains(center) {
                    continue;
                }
                // Canvas y grows upwards; scene y grows downwards.
                let canvas_y = self.canvas.height - 1.0 - py as f64;
                if let Some((x, y)) = painter.get_point(px as f64, canvas_y) {
                    painter.paint(x, y, self.color);
                }
            }
        }
    }
}
