#![cfg(not(target_arch = "wasm32"))]

use std::sync::Arc;

use serde_json::{json, Value};
use skald::adapters::shared::{CaptureConsole, CapturedCall, ManualClock};
use skald::{values, LogError, LogLevel, Logger, LoggerConfig, Platform};

fn harness(config: LoggerConfig) -> (Logger, Arc<CaptureConsole>, Arc<ManualClock>) {
    let console = Arc::new(CaptureConsole::new());
    let clock = Arc::new(ManualClock::starting_at(1_700_000_000_000.0));
    let logger = Logger::with_ports(config, console.clone(), clock.clone());
    (logger, console, clock)
}

#[test]
fn filtered_levels_produce_no_output_calls() {
    let (logger, console, _) = harness(
        LoggerConfig::default()
            .with_platform(Platform::Console)
            .with_min_log_level(LogLevel::Error),
    );
    logger.debug("a");
    logger.info("b");
    logger.warn("c");
    assert_eq!(console.call_count(), 0);
    logger.error("d");
    logger.success("e");
    assert_eq!(console.call_count(), 2);
}

#[test]
fn grouped_lines_are_indented_until_the_group_closes() {
    let (logger, console, _) = harness(
        LoggerConfig::default()
            .with_platform(Platform::Lambda)
            .with_timestamps(false),
    );
    logger.group("batch import");
    logger.info("row 1");
    logger.group_end();
    logger.info("done");
    let lines = console.lines();
    assert_eq!(lines[0], "[GROUP] batch import");
    assert_eq!(lines[1], "[INFO]   row 1");
    assert_eq!(lines[2], "[INFO] done");
}

#[test]
fn prefix_and_level_token_appear_in_console_output() {
    let (logger, console, _) = harness(
        LoggerConfig::default()
            .with_platform(Platform::Console)
            .with_timestamps(false)
            .with_prefix("[TEST]"),
    );
    logger.info("hello");
    let line = &console.lines()[0];
    assert!(line.contains("[INFO]"), "line was: {line}");
    assert!(line.contains("[TEST] hello"), "line was: {line}");
}

#[test]
fn structured_error_record_round_trips_through_json() {
    let (logger, console, _) = harness(
        LoggerConfig::default()
            .with_platform(Platform::Ecs)
            .with_service_name("payments")
            .with_correlation_id("txn-77"),
    );
    logger.error(values![
        "charge declined",
        LogError::new("CardError", "insufficient funds")
            .with_stack("CardError: insufficient funds\n  at charge")
            .with_property("statusCode", 402)
    ]);

    assert_eq!(console.call_count(), 1);
    let record: Value = serde_json::from_str(&console.lines()[0]).unwrap();
    assert_eq!(record["level"], "ERROR");
    assert_eq!(record["message"], "charge declined");
    assert_eq!(record["service"], "payments");
    assert_eq!(record["correlationId"], "txn-77");
    let errors = record["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["name"], "CardError");
    assert_eq!(errors[0]["message"], "insufficient funds");
    assert_eq!(errors[0]["statusCode"], 402);
    assert!(errors[0]["stack"].as_str().unwrap().contains("at charge"));
}

#[test]
fn context_changes_flow_into_subsequent_records() {
    let (logger, console, _) = harness(
        LoggerConfig::default()
            .with_platform(Platform::Console)
            .with_structured(true),
    );
    let mut initial = serde_json::Map::new();
    initial.insert("a".to_string(), json!(1));
    logger.set_context(initial);
    logger.add_context("b", 2);
    logger.info("first");
    logger.remove_context("a");
    logger.info("second");
    logger.clear_context();
    logger.info("third");

    let records: Vec<Value> = console
        .lines()
        .iter()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(records[0]["a"], 1);
    assert_eq!(records[0]["b"], 2);
    assert!(records[1].get("a").is_none());
    assert_eq!(records[1]["b"], 2);
    assert!(records[2].get("b").is_none());
}

#[test]
fn timers_log_elapsed_time_and_warn_on_unknown_labels() {
    let (logger, console, clock) = harness(
        LoggerConfig::default()
            .with_platform(Platform::Console)
            .with_timestamps(false),
    );
    logger.time("x");
    clock.advance(7.0);
    logger.time_end("x");
    logger.time_end("x");
    let lines = console.lines();
    assert!(lines[0].contains("x: 7ms"), "line was: {}", lines[0]);
    assert!(
        lines[1].contains("Timer 'x' does not exist"),
        "line was: {}",
        lines[1]
    );
}

#[test]
fn web_error_calls_use_the_dedicated_error_primitive() {
    let (logger, console, _) = harness(
        LoggerConfig::default()
            .with_platform(Platform::Web)
            .with_timestamps(false),
    );
    logger.error(values!["boom", LogError::new("E", "kaput")]);
    let calls = console.calls();
    assert_eq!(calls.len(), 2);
    assert!(matches!(&calls[0], CapturedCall::Styled { line, .. } if line == "boom"));
    assert!(matches!(&calls[1], CapturedCall::Error { .. }));
}

#[test]
fn detection_is_idempotent_for_unchanged_environment() {
    use skald::adapters::native::detect::detect;
    assert_eq!(detect(), detect());
}
