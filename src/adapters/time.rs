//! System clock adapter.
//!
//! Wraps `std::time::Instant` for monotonic uptime and `std::thread::sleep`
//! for the two bounded suspensions of the core (debounce settle window,
//! outer poll tick). Tests substitute a virtual clock through the same
//! [`TimePort`] trait.

use std::time::{Duration, Instant};

use crate::app::ports::TimePort;

/// Monotonic wall-thread clock.
pub struct SystemClock {
    start: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl TimePort for SystemClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }

    fn sleep(&self, d: Duration) {
        std::thread::sleep(d);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now();
        clock.sleep(Duration::from_millis(2));
        let b = clock.now();
        assert!(b >= a + Duration::from_millis(2));
    }
}
