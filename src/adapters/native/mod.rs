pub mod clock;
pub mod console;
pub mod detect;

pub use clock::Clock;
pub use console::AnsiConsole;
