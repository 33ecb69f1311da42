/// Ports module - Defines the interfaces (traits) that abstract platform-specific functionality.
///
/// These traits decouple the logger's dispatch logic from the concrete
/// console and clock of the hosting runtime.
pub mod clock;
pub mod console;

pub use clock::ClockPort;
pub use console::ConsolePort;
