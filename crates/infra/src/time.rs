//! Time abstraction for token expiry
//!
//! The token manager reads the current instant through [`Clock`] so expiry
//! can be exercised without sleeping.

use std::time::Instant;

/// Source of monotonic time
pub trait Clock: Send + Sync {
    /// Get current instant (monotonic time)
    fn now(&self) -> Instant;
}

/// Real system clock implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockClock;

#[cfg(any(test, feature = "test-utils"))]
mod mock {
    use std::sync::{Arc, Mutex, PoisonError};
    use std::time::{Duration, Instant};

    use super::Clock;

    /// Mock clock for deterministic testing
    ///
    /// Starts at the real current instant and only moves when advanced.
    /// Clones share the same elapsed time.
    #[derive(Debug, Clone)]
    pub struct MockClock {
        start: Instant,
        elapsed: Arc<Mutex<Duration>>,
    }

    impl MockClock {
        pub fn new() -> Self {
            Self { start: Instant::now(), elapsed: Arc::new(Mutex::new(Duration::ZERO)) }
        }

        /// Simulate `duration` passing.
        pub fn advance(&self, duration: Duration) {
            let mut elapsed = self.elapsed.lock().unwrap_or_else(PoisonError::into_inner);
            *elapsed += duration;
        }

        #[must_use]
        pub fn elapsed(&self) -> Duration {
            *self.elapsed.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }

    impl Default for MockClock {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Clock for MockClock {
        fn now(&self) -> Instant {
            self.start + self.elapsed()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock;
        let now1 = clock.now();
        let now2 = clock.now();

        assert!(now2 >= now1);
    }

    #[test]
    fn test_mock_clock_advances_shared_state() {
        let clock = MockClock::new();
        let shared = clock.clone();
        let start = clock.now();

        shared.advance(Duration::from_secs(42));

        assert_eq!(clock.now().duration_since(start), Duration::from_secs(42));
        assert_eq!(clock.elapsed(), Duration::from_secs(42));
    }
}
