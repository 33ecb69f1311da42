use crate::ports::ClockPort;

/// Wall clock backed by `Date.now()`.
///
/// Structured records need epoch milliseconds, which `performance.now()`
/// does not provide (it is page-relative); elapsed-time math only needs
/// differences, for which `Date` is adequate.
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
        js_sys::Date::now()
    }
}
