use std::fmt;

#[derive(Debug, Clone)]
pub enum LoggerError {
    InvalidLevel(String),
    InvalidPlatform(String),
    InvalidConfig(String),
}

impl fmt::Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggerError::InvalidLevel(name) => write!(f, "Unknown log level: {name}"),
            LoggerError::InvalidPlatform(name) => write!(f, "Unknown platform: {name}"),
            LoggerError::InvalidConfig(msg) => write!(f, "Invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for LoggerError {}

impl LoggerError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        LoggerError::InvalidConfig(message.into())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<LoggerError> for wasm_bindgen::JsValue {
    fn from(error: LoggerError) -> Self {
        wasm_bindgen::JsValue::from_str(&error.to_string())
    }
}
