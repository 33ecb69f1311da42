use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

/// An error rendered as log data.
///
/// Carries the fields the structured assembler serializes (`name`,
/// `message`, optional `stack`) plus arbitrary extra properties such as a
/// `statusCode`, kept flat next to the fixed fields.
#[derive(Debug, Clone, PartialEq)]
pub struct LogError {
    name: String,
    message: String,
    stack: Option<String>,
    properties: Map<String, Value>,
}

impl LogError {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            stack: None,
            properties: Map::new(),
        }
    }

    /// Builds a `LogError` from any `std::error::Error`, folding its
    /// source chain into the stack field.
    pub fn from_error(error: &(dyn std::error::Error + 'static)) -> Self {
        let mut stack = Vec::new();
        let mut source = error.source();
        while let Some(cause) = source {
            stack.push(format!("caused by: {cause}"));
            source = cause.source();
        }
        Self {
            name: "Error".to_string(),
            message: error.to_string(),
            stack: if stack.is_empty() {
                None
            } else {
                Some(stack.join("\n"))
            },
            properties: Map::new(),
        }
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }

    /// JSON form: `name`, `message`, `stack`, then every extra property
    /// not shadowing one of the fixed keys.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("name".to_string(), Value::String(self.name.clone()));
        map.insert("message".to_string(), Value::String(self.message.clone()));
        if let Some(stack) = &self.stack {
            map.insert("stack".to_string(), Value::String(stack.clone()));
        }
        for (key, value) in &self.properties {
            if !matches!(key.as_str(), "name" | "message" | "stack") {
                map.insert(key.clone(), value.clone());
            }
        }
        Value::Object(map)
    }
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message)?;
        if let Some(stack) = &self.stack {
            write!(f, "\n{stack}")?;
        }
        Ok(())
    }
}

/// One logging argument: plain text, structured data, or an error.
#[derive(Debug, Clone, PartialEq)]
pub enum LogValue {
    Text(String),
    Data(Value),
    Error(LogError),
}

impl LogValue {
    /// Converts any serializable value into a data argument.
    ///
    /// Serialization failures (non-string map keys and the like) degrade
    /// to a placeholder string; logging arguments never fail.
    pub fn data<T: Serialize>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(value) => LogValue::Data(value),
            Err(err) => LogValue::Text(format!("[unserializable: {err}]")),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LogValue::Error(_))
    }
}

impl From<&str> for LogValue {
    fn from(text: &str) -> Self {
        LogValue::Text(text.to_string())
    }
}

impl From<String> for LogValue {
    fn from(text: String) -> Self {
        LogValue::Text(text)
    }
}

impl From<Value> for LogValue {
    fn from(value: Value) -> Self {
        LogValue::Data(value)
    }
}

impl From<LogError> for LogValue {
    fn from(error: LogError) -> Self {
        LogValue::Error(error)
    }
}

macro_rules! impl_numeric_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for LogValue {
                fn from(value: $ty) -> Self {
                    LogValue::Data(Value::from(value))
                }
            }
        )*
    };
}

impl_numeric_value!(i32, i64, u32, u64, f64, bool);

/// The variadic argument list accepted by every logging call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogArgs(pub Vec<LogValue>);

impl LogArgs {
    pub fn values(&self) -> &[LogValue] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Splits arguments into non-error values and errors, in order.
    pub fn partition(&self) -> (Vec<&LogValue>, Vec<&LogError>) {
        let mut plain = Vec::new();
        let mut errors = Vec::new();
        for value in &self.0 {
            match value {
                LogValue::Error(err) => errors.push(err),
                other => plain.push(other),
            }
        }
        (plain, errors)
    }
}

impl From<&str> for LogArgs {
    fn from(text: &str) -> Self {
        LogArgs(vec![LogValue::from(text)])
    }
}

impl From<String> for LogArgs {
    fn from(text: String) -> Self {
        LogArgs(vec![LogValue::from(text)])
    }
}

impl From<LogValue> for LogArgs {
    fn from(value: LogValue) -> Self {
        LogArgs(vec![value])
    }
}

impl From<LogError> for LogArgs {
    fn from(error: LogError) -> Self {
        LogArgs(vec![LogValue::Error(error)])
    }
}

impl From<Vec<LogValue>> for LogArgs {
    fn from(values: Vec<LogValue>) -> Self {
        LogArgs(values)
    }
}

/// Builds a [`LogArgs`] from heterogeneous values.
///
/// ```
/// use skald::values;
/// let args = values!["request done", 200];
/// assert_eq!(args.values().len(), 2);
/// ```
#[macro_export]
macro_rules! values {
    () => { $crate::domain::value::LogArgs::default() };
    ($($value:expr),+ $(,)?) => {
        $crate::domain::value::LogArgs(vec![$($crate::domain::value::LogValue::from($value)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_value_serializes_custom_properties() {
        let error = LogError::new("HttpError", "upstream failed")
            .with_stack("HttpError: upstream failed\n  at fetch")
            .with_property("statusCode", 502);
        let value = error.to_value();
        assert_eq!(value["name"], "HttpError");
        assert_eq!(value["message"], "upstream failed");
        assert_eq!(value["statusCode"], 502);
        assert!(value["stack"].as_str().unwrap().contains("at fetch"));
    }

    #[test]
    fn test_error_properties_cannot_shadow_fixed_fields() {
        let error = LogError::new("E", "m").with_property("name", "shadowed");
        assert_eq!(error.to_value()["name"], "E");
    }

    #[test]
    fn test_from_error_folds_source_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let error = LogError::from_error(&io);
        assert_eq!(error.message(), "disk gone");
        assert!(error.stack().is_none());
    }

    #[test]
    fn test_data_conversion_never_fails() {
        let value = LogValue::data(&json!({"a": 1}));
        assert!(matches!(value, LogValue::Data(_)));
    }

    #[test]
    fn test_partition_separates_errors() {
        let args = values!["msg", LogError::new("E", "boom"), 42];
        let (plain, errors) = args.partition();
        assert_eq!(plain.len(), 2);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].name(), "E");
    }
}
