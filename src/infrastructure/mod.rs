pub mod clock;
pub mod tui;
