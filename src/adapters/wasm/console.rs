use wasm_bindgen::prelude::*;

use crate::domain::value::LogError;
use crate::ports::ConsolePort;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn log_styled(s: &str, style: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

/// Browser console implementation.
///
/// Styled lines go through the two-argument `%c` convention so the CSS
/// from the style table applies; errors use `console.error` to keep the
/// browser's error presentation.
#[derive(Debug, Clone, Copy)]
pub struct BrowserConsole;

impl BrowserConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrowserConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsolePort for BrowserConsole {
    fn print(&self, line: &str) {
        log(line);
    }

    fn print_styled(&self, line: &str, style: &str) {
        log_styled(&format!("%c{line}"), style);
    }

    fn print_error(&self, decoration: &str, err: &LogError) {
        if decoration.is_empty() {
            error(&err.to_string());
        } else {
            error(&format!("{decoration} {err}"));
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_console_all_primitives() {
        let console = BrowserConsole::new();
        console.print("plain line");
        console.print_styled("styled line", "color: #2196f3");
        console.print_error("[ERROR]", &LogError::new("TestError", "boom"));
    }
}
