pub mod capture;

pub use capture::{CaptureConsole, CapturedCall, ManualClock};
