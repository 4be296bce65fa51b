use std::panic::Location;
use std::result::Result as StdResult;

use dp_session::SessionError;
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration failed: {source} {location}")]
    Config {
        #[source]
        source: dp_config::ConfigError,
        location: ErrorLocation,
    },

    #[error("Session fault: {source} {location}")]
    Session {
        #[source]
        source: SessionError,
        location: ErrorLocation,
    },

    #[error("Logger setup failed: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid role argument: {source} {location}")]
    Role {
        #[source]
        source: dp_core::CoreError,
        location: ErrorLocation,
    },
}

impl CliError {
    /// Creates a Logger error at caller location.
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<dp_config::ConfigError> for CliError {
    #[track_caller]
    fn from(source: dp_config::ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<SessionError> for CliError {
    #[track_caller]
    fn from(source: SessionError) -> Self {
        Self::Session {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<dp_core::CoreError> for CliError {
    #[track_caller]
    fn from(source: dp_core::CoreError) -> Self {
        Self::Role {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CliError>;
