mod auth_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

const DEFAULT_LATENCY_MS: u64 = 1000;
const MAX_LATENCY_MS: u64 = 60_000;
const DEFAULT_SESSION_FILENAME: &str = "session.json";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

#[cfg(test)]
mod tests;
