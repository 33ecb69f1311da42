use parking_lot::Mutex;

use crate::domain::value::LogError;
use crate::ports::{ClockPort, ConsolePort};

/// One recorded console invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum CapturedCall {
    Plain(String),
    Styled { line: String, style: String },
    Error { decoration: String, error: LogError },
}

impl CapturedCall {
    /// The printable text of the call, whatever its kind.
    pub fn text(&self) -> String {
        match self {
            CapturedCall::Plain(line) => line.clone(),
            CapturedCall::Styled { line, .. } => line.clone(),
            CapturedCall::Error { decoration, error } => format!("{decoration} {error}"),
        }
    }
}

/// Console adapter that records every call instead of printing.
///
/// Used by the test suites to assert on output counts and rendered lines.
#[derive(Debug, Default)]
pub struct CaptureConsole {
    calls: Mutex<Vec<CapturedCall>>,
}

impl CaptureConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<CapturedCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn lines(&self) -> Vec<String> {
        self.calls.lock().iter().map(CapturedCall::text).collect()
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

impl ConsolePort for CaptureConsole {
    fn print(&self, line: &str) {
        self.calls.lock().push(CapturedCall::Plain(line.to_string()));
    }

    fn print_styled(&self, line: &str, style: &str) {
        self.calls.lock().push(CapturedCall::Styled {
            line: line.to_string(),
            style: style.to_string(),
        });
    }

    fn print_error(&self, decoration: &str, error: &LogError) {
        self.calls.lock().push(CapturedCall::Error {
            decoration: decoration.to_string(),
            error: error.clone(),
        });
    }
}

/// Clock adapter whose time only moves when a test advances it.
#[derive(Debug)]
pub struct ManualClock {
    now_ms: Mutex<f64>,
}

impl ManualClock {
    pub fn starting_at(now_ms: f64) -> Self {
        Self {
            now_ms: Mutex::new(now_ms),
        }
    }

    pub fn advance(&self, delta_ms: f64) {
        *self.now_ms.lock() += delta_ms;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::starting_at(0.0)
    }
}

impl ClockPort for ManualClock {
    fn now(&self) -> f64 {
        *self.now_ms.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_records_calls_in_order() {
        let console = CaptureConsole::new();
        console.print("one");
        console.print_styled("two", "color: red");
        assert_eq!(console.call_count(), 2);
        assert_eq!(console.lines(), vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn test_manual_clock_advances() {
        let clock = ManualClock::starting_at(1000.0);
        clock.advance(250.0);
        assert_eq!(clock.now(), 1250.0);
    }
}
