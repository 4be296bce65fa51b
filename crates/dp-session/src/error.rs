use crate::VaultError;

use std::panic::Location;
use std::result::Result as StdResult;

use dp_core::UserRole;
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Validation error: {field} is required {location}")]
    Validation {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Email {email} is not valid for the {role} role {location}")]
    RoleMismatch {
        email: String,
        role: UserRole,
        location: ErrorLocation,
    },

    #[error("Session storage failed: {source} {location}")]
    Vault {
        #[source]
        source: VaultError,
        location: ErrorLocation,
    },
}

impl SessionError {
    /// Whether this is a recoverable user-input error (reported as a notice,
    /// form state preserved) rather than a storage fault.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::RoleMismatch { .. })
    }

    /// User-facing notice text.
    pub fn notice(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "All fields are required",
            Self::RoleMismatch { .. } => "Invalid email for this user type",
            Self::Vault { .. } => "Unable to save your session. Please try again.",
        }
    }

    /// Creates a Validation error at caller location.
    #[track_caller]
    pub fn validation(field: &'static str) -> Self {
        Self::Validation {
            field,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates a RoleMismatch error at caller location.
    #[track_caller]
    pub fn role_mismatch(email: impl Into<String>, role: UserRole) -> Self {
        Self::RoleMismatch {
            email: email.into(),
            role,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<VaultError> for SessionError {
    #[track_caller]
    fn from(source: VaultError) -> Self {
        Self::Vault {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, SessionError>;
