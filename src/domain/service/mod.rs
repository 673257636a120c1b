pub mod digit_display;
pub mod seven_segment;

pub use digit_display::DigitLayout;
