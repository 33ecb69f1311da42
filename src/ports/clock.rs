/// Port for reading wall-clock time.
pub trait ClockPort: Send + Sync {
    /// Returns the current timestamp in milliseconds since the Unix epoch.
    fn now(&self) -> f64;
}
