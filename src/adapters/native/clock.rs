use std::time::{SystemTime, UNIX_EPOCH};

use crate::ports::ClockPort;

#[derive(Clone, Copy)]
pub struct Clock;

impl Clock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for Clock {
    fn now(&self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as f64)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_now_returns_valid_unix_timestamp() {
        let clock = Clock::new();
        let timestamp = clock.now();

        assert!(
            timestamp > 1_577_836_800_000.0,
            "Timestamp should be after 2020: {}",
            timestamp
        );
        assert!(
            timestamp < 4_102_444_800_000.0,
            "Timestamp should be before 2100: {}",
            timestamp
        );
    }

    #[test]
    fn test_clock_monotonic_time() {
        let clock = Clock::new();
        let t1 = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let t2 = clock.now();
        assert!(t2 >= t1, "Time should be monotonic (t1={}, t2={})", t1, t2);
    }
}
