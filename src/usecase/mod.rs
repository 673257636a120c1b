pub mod render_usecase;
pub mod timer_usecase;
