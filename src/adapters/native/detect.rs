use crate::domain::level::LogLevel;
use crate::domain::platform::Platform;

/// Environment variable naming the minimum log level (case-insensitive;
/// unrecognized values are ignored).
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

const ENV_ECS_METADATA_URI: &str = "ECS_CONTAINER_METADATA_URI";
const ENV_ECS_METADATA_URI_V4: &str = "ECS_CONTAINER_METADATA_URI_V4";
const ENV_EXECUTION_ENV: &str = "AWS_EXECUTION_ENV";
const ENV_LAMBDA_FUNCTION_NAME: &str = "AWS_LAMBDA_FUNCTION_NAME";

/// Detects the hosting platform from ambient environment state.
///
/// ECS signals win over Lambda; anything else is a plain terminal. Pure
/// read of the environment, idempotent for unchanged state.
pub fn detect() -> Platform {
    detect_with(|name| std::env::var(name).ok())
}

pub fn detect_with(get: impl Fn(&str) -> Option<String>) -> Platform {
    let ecs = get(ENV_ECS_METADATA_URI).is_some()
        || get(ENV_ECS_METADATA_URI_V4).is_some()
        || get(ENV_EXECUTION_ENV).is_some_and(|value| value.contains("ECS"));
    if ecs {
        return Platform::Ecs;
    }
    if get(ENV_LAMBDA_FUNCTION_NAME).is_some() {
        return Platform::Lambda;
    }
    Platform::Console
}

/// Minimum level from `LOG_LEVEL`, defaulting to `Debug` when the
/// variable is absent or unrecognized.
pub fn min_level_from_env() -> LogLevel {
    min_level_with(|name| std::env::var(name).ok())
}

pub fn min_level_with(get: impl Fn(&str) -> Option<String>) -> LogLevel {
    get(ENV_LOG_LEVEL)
        .and_then(|value| value.parse().ok())
        .unwrap_or(LogLevel::Debug)
}
