mod file_vault;
mod route_guard;

use crate::{MemoryVault, SessionStore};

use std::sync::Arc;
use std::time::Duration;

/// Store over a shared in-memory vault with no simulated latency.
pub(crate) fn memory_store() -> (SessionStore<Arc<MemoryVault>>, Arc<MemoryVault>) {
    let vault = Arc::new(MemoryVault::new());
    let store = SessionStore::new(vault.clone(), Duration::ZERO);
    (store, vault)
}
