use crate::domain::value::LogError;

/// Console port - the printing primitives the logger dispatches into.
///
/// Abstracts the output channel from platform-specific implementations:
/// - WASM: browser Console API (console.log / console.error, `%c` styling)
/// - Native: stdout/stderr with ANSI escapes
pub trait ConsolePort: Send + Sync {
    /// Print one plain line.
    fn print(&self, line: &str);

    /// Print one line carrying a display style.
    ///
    /// On the browser this is the two-argument `%c` convention; native
    /// implementations embed or ignore the style as appropriate.
    fn print_styled(&self, line: &str, style: &str);

    /// Print an error through the dedicated error primitive, preceded by
    /// the given decoration (timestamp, level token, prefix).
    fn print_error(&self, decoration: &str, error: &LogError);
}
