use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::domain::format::format_values;
use crate::domain::level::LogLevel;
use crate::domain::value::LogArgs;

/// Per-call logger state the assembler folds into a record.
pub struct RecordMeta<'a> {
    pub timestamp_ms: f64,
    pub service: Option<&'a str>,
    pub correlation_id: Option<&'a str>,
    pub context: &'a Map<String, Value>,
    pub group_depth: usize,
}

/// Epoch milliseconds rendered as an RFC 3339 / ISO-8601 UTC timestamp.
pub fn timestamp_iso(ms: f64) -> String {
    DateTime::<Utc>::from_timestamp_millis(ms as i64)
        .map(|ts| ts.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_default()
}

/// Builds the structured record for one logging call.
///
/// Fixed fields first, then optional `service` and `correlationId`, then
/// the persistent context spread at top level. Context entries are
/// inserted last and may overwrite the reserved fields: that matches the
/// observed behavior this logger reproduces and is deliberate.
pub fn assemble(level: LogLevel, args: &LogArgs, meta: RecordMeta<'_>) -> Value {
    let (plain, errors) = args.partition();
    let message = format_values(&plain.into_iter().cloned().collect::<Vec<_>>());

    let mut record = Map::new();
    record.insert(
        "timestamp".to_string(),
        Value::String(timestamp_iso(meta.timestamp_ms)),
    );
    record.insert("level".to_string(), Value::String(level.tag().to_string()));
    record.insert("message".to_string(), Value::String(message));
    if let Some(service) = meta.service {
        record.insert("service".to_string(), Value::String(service.to_string()));
    }
    if let Some(id) = meta.correlation_id {
        record.insert("correlationId".to_string(), Value::String(id.to_string()));
    }
    for (key, value) in meta.context {
        record.insert(key.clone(), value.clone());
    }
    if !errors.is_empty() {
        record.insert(
            "errors".to_string(),
            Value::Array(errors.iter().map(|err| err.to_value()).collect()),
        );
    }
    if meta.group_depth > 0 {
        record.insert("group".to_string(), Value::from(meta.group_depth as u64));
    }
    Value::Object(record)
}

/// One line of valid JSON per record.
pub fn to_json_line(record: &Value) -> String {
    serde_json::to_string(record).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value::LogError;
    use crate::values;
    use serde_json::json;

    fn meta(context: &Map<String, Value>) -> RecordMeta<'_> {
        RecordMeta {
            timestamp_ms: 1_700_000_000_000.0,
            service: Some("checkout"),
            correlation_id: Some("req-42"),
            context,
            group_depth: 0,
        }
    }

    #[test]
    fn test_fixed_fields_and_identifiers() {
        let context = Map::new();
        let record = assemble(LogLevel::Info, &values!["ready"], meta(&context));
        assert_eq!(record["level"], "INFO");
        assert_eq!(record["message"], "ready");
        assert_eq!(record["service"], "checkout");
        assert_eq!(record["correlationId"], "req-42");
        assert_eq!(record["timestamp"], "2023-11-14T22:13:20.000Z");
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let context = Map::new();
        let record = assemble(
            LogLevel::Warn,
            &values!["careful"],
            RecordMeta {
                timestamp_ms: 0.0,
                service: None,
                correlation_id: None,
                context: &context,
                group_depth: 0,
            },
        );
        assert!(record.get("service").is_none());
        assert!(record.get("correlationId").is_none());
        assert!(record.get("errors").is_none());
        assert!(record.get("group").is_none());
    }

    #[test]
    fn test_errors_array_keeps_custom_properties() {
        let context = Map::new();
        let error = LogError::new("HttpError", "bad gateway").with_property("statusCode", 502);
        let record = assemble(LogLevel::Error, &values!["upstream", error], meta(&context));
        let errors = record["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0]["name"], "HttpError");
        assert_eq!(errors[0]["message"], "bad gateway");
        assert_eq!(errors[0]["statusCode"], 502);
        assert_eq!(record["message"], "upstream");
    }

    #[test]
    fn test_context_spreads_and_overrides_reserved_fields() {
        let mut context = Map::new();
        context.insert("tenant".to_string(), json!("acme"));
        context.insert("level".to_string(), json!("shadowed"));
        let record = assemble(LogLevel::Debug, &values!["x"], meta(&context));
        assert_eq!(record["tenant"], "acme");
        assert_eq!(record["level"], "shadowed");
    }

    #[test]
    fn test_group_depth_is_attached_when_nested() {
        let context = Map::new();
        let mut m = meta(&context);
        m.group_depth = 2;
        let record = assemble(LogLevel::Info, &values!["nested"], m);
        assert_eq!(record["group"], 2);
    }

    #[test]
    fn test_record_emits_one_json_line() {
        let context = Map::new();
        let record = assemble(LogLevel::Info, &values!["line"], meta(&context));
        let line = to_json_line(&record);
        assert!(!line.contains('\n'));
        let parsed: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["message"], "line");
    }
}
