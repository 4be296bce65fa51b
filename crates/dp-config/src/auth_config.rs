use crate::{ConfigError, ConfigErrorResult, DEFAULT_LATENCY_MS, MAX_LATENCY_MS};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Simulated network latency for login/register, in milliseconds.
    /// The demo has no backend; this models the round trip.
    pub latency_ms: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_LATENCY_MS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.latency_ms > MAX_LATENCY_MS {
            return Err(ConfigError::auth(format!(
                "auth.latency_ms must be <= {MAX_LATENCY_MS}, got {}",
                self.latency_ms
            )));
        }

        Ok(())
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}
