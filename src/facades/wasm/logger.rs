use wasm_bindgen::prelude::*;

use super::converters;
use crate::config::{LoggerConfig, Prefix};
use crate::domain::level::LogLevel;
use crate::global;

/// Constructs the process-wide logger from a JS configuration object.
///
/// Ignored if the logger already exists; call `resetLogger` first to
/// reconfigure. Malformed configuration (unknown platform, unknown level,
/// unknown field) is rejected here rather than silently dropped later.
#[wasm_bindgen(js_name = initLogger)]
pub fn init_logger(config: JsValue) -> Result<(), JsValue> {
    let config: LoggerConfig = if config.is_undefined() || config.is_null() {
        LoggerConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|err| converters::to_js_error(format!("Invalid configuration: {err}")))?
    };
    global::get_instance(Some(config));
    Ok(())
}

#[wasm_bindgen(js_name = resetLogger)]
pub fn reset_logger() {
    global::reset_instance();
}

#[wasm_bindgen(js_name = logDebug, variadic)]
pub fn log_debug(values: js_sys::Array) {
    global::logger().debug(converters::array_to_args(&values));
}

#[wasm_bindgen(js_name = logInfo, variadic)]
pub fn log_info(values: js_sys::Array) {
    global::logger().info(converters::array_to_args(&values));
}

#[wasm_bindgen(js_name = logWarn, variadic)]
pub fn log_warn(values: js_sys::Array) {
    global::logger().warn(converters::array_to_args(&values));
}

#[wasm_bindgen(js_name = logError, variadic)]
pub fn log_error(values: js_sys::Array) {
    global::logger().error(converters::array_to_args(&values));
}

#[wasm_bindgen(js_name = logSuccess, variadic)]
pub fn log_success(values: js_sys::Array) {
    global::logger().success(converters::array_to_args(&values));
}

#[wasm_bindgen(js_name = logGroup, variadic)]
pub fn log_group(values: js_sys::Array) {
    global::logger().group(converters::array_to_args(&values));
}

#[wasm_bindgen(js_name = logGroupCollapsed, variadic)]
pub fn log_group_collapsed(values: js_sys::Array) {
    global::logger().group_collapsed(converters::array_to_args(&values));
}

#[wasm_bindgen(js_name = logGroupEnd)]
pub fn log_group_end() {
    global::logger().group_end();
}

/// Accepts either one string for every level or a per-level map.
#[wasm_bindgen(js_name = setPrefix)]
pub fn set_prefix(prefix: JsValue) -> Result<(), JsValue> {
    let prefix: Prefix = serde_wasm_bindgen::from_value(prefix)
        .map_err(|err| converters::to_js_error(format!("Invalid prefix: {err}")))?;
    global::logger().set_prefix(prefix);
    Ok(())
}

#[wasm_bindgen(js_name = setMinLogLevel)]
pub fn set_min_log_level(level: &str) -> Result<(), JsValue> {
    let level: LogLevel = level.parse()?;
    global::logger().set_min_log_level(level);
    Ok(())
}

#[wasm_bindgen(js_name = getMinLogLevel)]
pub fn get_min_log_level() -> String {
    global::logger().min_log_level().to_string()
}

#[wasm_bindgen(js_name = setCorrelationId)]
pub fn set_correlation_id(id: &str) {
    global::logger().set_correlation_id(id);
}

#[wasm_bindgen(js_name = getCorrelationId)]
pub fn get_correlation_id() -> Option<String> {
    global::logger().correlation_id()
}

#[wasm_bindgen(js_name = setContext)]
pub fn set_context(context: JsValue) -> Result<(), JsValue> {
    let context: serde_json::Map<String, serde_json::Value> =
        serde_wasm_bindgen::from_value(context)
            .map_err(|err| converters::to_js_error(format!("Invalid context: {err}")))?;
    global::logger().set_context(context);
    Ok(())
}

#[wasm_bindgen(js_name = addContext)]
pub fn add_context(key: &str, value: JsValue) -> Result<(), JsValue> {
    let value: serde_json::Value = serde_wasm_bindgen::from_value(value)
        .map_err(|err| converters::to_js_error(format!("Invalid context value: {err}")))?;
    global::logger().add_context(key, value);
    Ok(())
}

#[wasm_bindgen(js_name = removeContext)]
pub fn remove_context(key: &str) {
    global::logger().remove_context(key);
}

#[wasm_bindgen(js_name = getContext)]
pub fn get_context() -> JsValue {
    serde_wasm_bindgen::to_value(&global::logger().context()).unwrap_or(JsValue::NULL)
}

#[wasm_bindgen(js_name = clearContext)]
pub fn clear_context() {
    global::logger().clear_context();
}

#[wasm_bindgen(js_name = timeStart)]
pub fn time_start(label: &str) {
    global::logger().time(label);
}

#[wasm_bindgen(js_name = timeEnd)]
pub fn time_end(label: &str) {
    global::logger().time_end(label);
}

#[wasm_bindgen(js_name = timeLog, variadic)]
pub fn time_log(label: &str, extra: js_sys::Array) {
    global::logger().time_log(label, converters::array_to_args(&extra));
}
