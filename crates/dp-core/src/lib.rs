pub mod error;
pub mod user_identity;
pub mod user_role;

pub use error::{CoreError, Result};
pub use user_identity::UserIdentity;
pub use user_role::UserRole;
