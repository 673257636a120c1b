use crate::infrastructure::clock::SystemClock;

/// Creates a concrete ClockPort implementation.
pub fn create_clock_adapter() -> SystemClock {
    SystemClock::new()
}
