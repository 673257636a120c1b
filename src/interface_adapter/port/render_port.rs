use crate::domain::primitive::{Paint, Polygon};

/// Drawing surface port.
///
/// Defines the boundary between usecase and infrastructure for painting the
/// countdown. Concrete implementations (e.g., the TUI `Scene`) live in
/// infrastructure.
pub trait RenderPort {
    /// Remove everything drawn so far.
    fn clear(&mut self);

    /// Fill the whole surface with `paint`.
    fn set_background(&mut self, paint: Paint);

    /// Draw a filled polygon in canvas pixel coordinates.
    fn draw_polygon(&mut self, polygon: &Polygon, paint: Paint);
}
