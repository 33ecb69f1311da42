use serde_json::Value;

use crate::domain::value::LogValue;

/// Renders a JSON value as a single printable fragment.
///
/// Bare strings print without quotes; everything else goes through the
/// serializer. Serialization of an in-memory `Value` cannot fail, but the
/// formatter still degrades to the debug rendering rather than propagate.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| format!("{other:?}")),
    }
}

/// Converts a heterogeneous argument list into one printable line.
///
/// Error arguments contribute nothing here; the platform dispatcher and
/// the structured assembler render those separately. Non-empty fragments
/// are joined with a single space. Never fails.
pub fn format_values(values: &[LogValue]) -> String {
    let fragments: Vec<String> = values
        .iter()
        .filter_map(|value| match value {
            LogValue::Text(text) => Some(text.clone()),
            LogValue::Data(data) => Some(stringify(data)),
            LogValue::Error(_) => None,
        })
        .filter(|fragment| !fragment.is_empty())
        .collect();
    fragments.join(" ")
}
