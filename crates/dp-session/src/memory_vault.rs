use crate::vault::{LoadedSession, SessionVault};
use crate::vault_error::VaultResult;

use std::sync::Mutex;

use dp_core::UserIdentity;

/// In-memory session slot, the test double for [`crate::FileVault`].
///
/// Holds the serialized form rather than the identity itself so corrupt slot
/// contents can be simulated.
#[derive(Default)]
pub struct MemoryVault {
    slot: Mutex<Option<String>>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    /// A vault whose slot already holds the given raw bytes, valid or not.
    pub fn seeded_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(raw.into())),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slot.lock().expect("session slot mutex poisoned").is_none()
    }
}

impl SessionVault for MemoryVault {
    fn load(&self) -> VaultResult<LoadedSession> {
        let slot = self.slot.lock().expect("session slot mutex poisoned");
        match slot.as_deref() {
            None => Ok(LoadedSession::absent()),
            Some(raw) => match serde_json::from_str::<UserIdentity>(raw) {
                Ok(identity) => Ok(LoadedSession::found(identity)),
                Err(e) => Ok(LoadedSession::corrupt(e.to_string())),
            },
        }
    }

    fn store(&self, identity: &UserIdentity) -> VaultResult<()> {
        let json = serde_json::to_string(identity)?;
        *self.slot.lock().expect("session slot mutex poisoned") = Some(json);
        Ok(())
    }

    fn clear(&self) -> VaultResult<()> {
        *self.slot.lock().expect("session slot mutex poisoned") = None;
        Ok(())
    }
}
