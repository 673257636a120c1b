pub mod countdown_timer;

pub use countdown_timer::{CountdownTimer, Direction, TimerMode};
