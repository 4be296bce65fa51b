pub mod error;
pub mod file_vault;
pub mod memory_vault;
pub mod route_guard;
pub mod session_store;
pub mod vault;
pub mod vault_error;

pub use error::{Result, SessionError};
pub use file_vault::FileVault;
pub use memory_vault::MemoryVault;
pub use route_guard::{LOGIN_PATH, RouteDecision, evaluate_route};
pub use session_store::SessionStore;
pub use vault::{LoadedSession, SessionVault};
pub use vault_error::{VaultError, VaultResult};

#[cfg(test)]
mod tests;
