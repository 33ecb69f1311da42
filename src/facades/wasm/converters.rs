use js_sys::{Object, Reflect};
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};

use crate::domain::value::{LogArgs, LogError, LogValue};

pub fn to_js_error(message: impl Into<String>) -> JsValue {
    JsValue::from_str(&message.into())
}

/// Converts one JS value into a logging argument.
///
/// JS `Error` instances become error arguments with their stack and own
/// enumerable properties preserved; anything serializable becomes data;
/// the rest degrades to a string rendering. Never fails.
pub fn js_value_to_log_value(value: &JsValue) -> LogValue {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return LogValue::Error(js_error_to_log_error(error, value));
    }
    if let Some(text) = value.as_string() {
        return LogValue::Text(text);
    }
    match serde_wasm_bindgen::from_value::<Value>(value.clone()) {
        Ok(json) => LogValue::Data(json),
        Err(_) => LogValue::Text(
            value
                .as_string()
                .unwrap_or_else(|| "[unserializable]".to_string()),
        ),
    }
}

pub fn array_to_args(values: &js_sys::Array) -> LogArgs {
    LogArgs(values.iter().map(|value| js_value_to_log_value(&value)).collect())
}

fn js_error_to_log_error(error: &js_sys::Error, raw: &JsValue) -> LogError {
    let mut log_error = LogError::new(String::from(error.name()), String::from(error.message()));
    if let Ok(stack) = Reflect::get(raw, &JsValue::from_str("stack")) {
        if let Some(stack) = stack.as_string() {
            log_error = log_error.with_stack(stack);
        }
    }
    // Own enumerable properties carry custom fields such as statusCode.
    if let Some(object) = raw.dyn_ref::<Object>() {
        for key in Object::keys(object).iter() {
            let Some(name) = key.as_string() else {
                continue;
            };
            if matches!(name.as_str(), "name" | "message" | "stack") {
                continue;
            }
            if let Ok(value) = Reflect::get(raw, &key) {
                if let Ok(json) = serde_wasm_bindgen::from_value::<Value>(value) {
                    log_error = log_error.with_property(name, json);
                }
            }
        }
    }
    log_error
}
