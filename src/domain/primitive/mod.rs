pub mod remaining_time;
pub mod digit;
pub mod prefix_buffer;
pub mod geometry;
pub mod display_frame;

pub use remaining_time::RemainingTime;
pub use digit::Digit;
pub use prefix_buffer::PrefixBuffer;
pub use geometry::{CanvasSize, Point, Polygon};
pub use display_frame::{Background, DisplayFrame, DisplayRounding, Paint};
