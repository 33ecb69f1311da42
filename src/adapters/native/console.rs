use crate::domain::value::LogError;
use crate::ports::ConsolePort;

/// Native console implementation using stdout/stderr.
///
/// Lines arrive fully decorated (ANSI escapes, tags, indentation) from
/// the dispatcher; errors go to stderr through the dedicated primitive.
#[derive(Debug, Clone, Copy)]
pub struct AnsiConsole;

impl AnsiConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AnsiConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsolePort for AnsiConsole {
    fn print(&self, line: &str) {
        println!("{line}");
    }

    fn print_styled(&self, line: &str, _style: &str) {
        // CSS styling is a browser concern; natively the line prints as-is.
        println!("{line}");
    }

    fn print_error(&self, decoration: &str, error: &LogError) {
        if decoration.is_empty() {
            eprintln!("{error}");
        } else {
            eprintln!("{decoration} {error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_prints_without_panicking() {
        let console = AnsiConsole::new();
        console.print("plain line");
        console.print_styled("styled line", "color: #2196f3");
        console.print_error("[ERROR]", &LogError::new("TestError", "boom"));
    }
}
