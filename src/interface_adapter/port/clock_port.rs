use std::time::Instant;

/// Monotonic time source port.
///
/// Defines the boundary between usecase and infrastructure for reading "now".
/// Concrete implementations (e.g., SystemClock) live in infrastructure; tests
/// substitute a manually advanced clock.
pub trait ClockPort: Send + Sync {
    /// Current instant.
    fn now(&self) -> Instant;
}
