//! The authenticated principal held by the session store.

use crate::UserRole;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One logged-in user. The serialized form is the durable-slot record and
/// must keep the `userType` field name for compatibility with existing
/// session files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Opaque identifier. Newly synthesized identities use a uuid string,
    /// but any non-empty string from a prior session file is accepted.
    pub id: String,
    /// Display name shown in the navigation chrome
    pub name: String,
    pub email: String,
    #[serde(rename = "userType")]
    pub user_type: UserRole,
}

impl UserIdentity {
    /// Synthesize an identity at login time. The display name is the email's
    /// local part (everything before the first `@`).
    pub fn for_login(email: &str, role: UserRole) -> Self {
        let name = email.split('@').next().unwrap_or(email).to_string();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email: email.to_string(),
            user_type: role,
        }
    }

    /// Synthesize an identity at registration time, taking the supplied
    /// display name verbatim.
    pub fn for_registration(name: &str, email: &str, role: UserRole) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            user_type: role,
        }
    }
}
