pub mod clock_port;
pub mod render_port;

pub use clock_port::ClockPort;
pub use render_port::RenderPort;
