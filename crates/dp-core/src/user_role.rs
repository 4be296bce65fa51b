use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// The two account roles the portal knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Patient booking checkups and reviewing results
    #[default]
    Patient,
    /// Dentist reviewing patient checkups
    Dentist,
}

impl UserRole {
    /// Convert to the wire string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::Dentist => "dentist",
        }
    }

    /// Home view for this role, used as the redirect target when a
    /// navigation requires the other role.
    pub fn dashboard_path(&self) -> String {
        format!("/{}/dashboard", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "patient" => Ok(Self::Patient),
            "dentist" => Ok(Self::Dentist),
            _ => Err(CoreError::InvalidUserRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
