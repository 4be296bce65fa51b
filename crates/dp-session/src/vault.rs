use crate::VaultResult;

use std::path::PathBuf;
use std::sync::Arc;

use dp_core::UserIdentity;

/// Result of loading the session slot - distinguishes "not found" from errors.
#[derive(Debug)]
pub struct LoadedSession {
    pub identity: Option<UserIdentity>,
    /// Present if the slot exists but could not be deserialized
    pub corruption: Option<String>,
}

impl LoadedSession {
    pub fn absent() -> Self {
        Self {
            identity: None,
            corruption: None,
        }
    }

    pub fn found(identity: UserIdentity) -> Self {
        Self {
            identity: Some(identity),
            corruption: None,
        }
    }

    pub fn corrupt(message: impl Into<String>) -> Self {
        Self {
            identity: None,
            corruption: Some(message.into()),
        }
    }
}

/// Port over the durable single-slot session storage. The session store only
/// talks to this trait, so tests run against an in-memory fake.
pub trait SessionVault {
    /// Read the slot. Deserialization failure is reported via
    /// `LoadedSession::corruption`, never as an `Err`.
    fn load(&self) -> VaultResult<LoadedSession>;

    /// Overwrite the slot with the given identity.
    fn store(&self, identity: &UserIdentity) -> VaultResult<()>;

    /// Empty the slot. Clearing an already empty slot is a successful no-op.
    fn clear(&self) -> VaultResult<()>;

    /// Move a corrupt slot aside for debugging. Backends without a meaningful
    /// backup location return `Ok(None)`.
    fn backup_corrupted(&self) -> VaultResult<Option<PathBuf>> {
        Ok(None)
    }
}

impl<V: SessionVault + ?Sized> SessionVault for Arc<V> {
    fn load(&self) -> VaultResult<LoadedSession> {
        (**self).load()
    }

    fn store(&self, identity: &UserIdentity) -> VaultResult<()> {
        (**self).store(identity)
    }

    fn clear(&self) -> VaultResult<()> {
        (**self).clear()
    }

    fn backup_corrupted(&self) -> VaultResult<Option<PathBuf>> {
        (**self).backup_corrupted()
    }
}
