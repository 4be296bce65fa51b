//! Single authority for "who is logged in right now".

use crate::error::{Result as SessionResult, SessionError};
use crate::route_guard::{RouteDecision, evaluate_route};
use crate::vault::SessionVault;

use std::time::Duration;

use dp_core::{UserIdentity, UserRole};
use log::{info, warn};

/// Session context created at application startup and passed down to the
/// driving layer. Owns the durable slot and at most one live identity.
///
/// All mutation goes through `&mut self`, so a second `login`/`register`
/// cannot start while one is in flight.
pub struct SessionStore<V: SessionVault> {
    vault: V,
    /// Simulated network latency for login/register (the demo has no backend)
    latency: Duration,
    current: Option<UserIdentity>,
    loading: bool,
}

impl<V: SessionVault> SessionStore<V> {
    /// A fresh store starts in the loading state; callers must run
    /// [`SessionStore::restore`] before trusting route decisions.
    pub fn new(vault: V, latency: Duration) -> Self {
        Self {
            vault,
            latency,
            current: None,
            loading: true,
        }
    }

    pub fn current(&self) -> Option<&UserIdentity> {
        self.current.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Restores a prior identity from the durable slot.
    ///
    /// Fails open to logged-out: an absent, corrupt or unreadable slot yields
    /// no identity and never an error. A corrupt slot is moved aside for
    /// debugging. Always leaves the store out of the loading state.
    pub fn restore(&mut self) {
        self.current = match self.vault.load() {
            Ok(loaded) => {
                if let Some(reason) = loaded.corruption {
                    warn!("Discarding corrupt session slot: {reason}");
                    match self.vault.backup_corrupted() {
                        Ok(Some(path)) => info!("Corrupt slot preserved at {path:?}"),
                        Ok(None) => {}
                        Err(e) => warn!("Could not backup corrupt slot: {e}"),
                    }
                }
                loaded.identity
            }
            Err(e) => {
                warn!("Session slot unreadable, starting logged out: {e}");
                None
            }
        };
        self.loading = false;
    }

    /// Authenticates with the demo gate and establishes a new identity.
    ///
    /// Runs to completion after the simulated latency; validation failures
    /// are reported through the `Err` value, not panics, and leave both the
    /// live identity and the slot untouched.
    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
        requested_role: UserRole,
    ) -> SessionResult<UserIdentity> {
        self.loading = true;
        tokio::time::sleep(self.latency).await;

        let result = self.complete_login(email, password, requested_role);
        self.loading = false;

        match result {
            Ok(user) => {
                info!("Login succeeded: {} ({})", user.name, user.user_type);
                Ok(user)
            }
            Err(e) => {
                info!("Login rejected for {email:?}: {e}");
                Err(e)
            }
        }
    }

    fn complete_login(
        &mut self,
        email: &str,
        password: &str,
        requested_role: UserRole,
    ) -> SessionResult<UserIdentity> {
        if email.is_empty() {
            return Err(SessionError::validation("email"));
        }
        if password.is_empty() {
            return Err(SessionError::validation("password"));
        }

        // Demo gate standing in for credential verification: dentists must
        // have "dentist" somewhere in the email, patients must not.
        let looks_like_dentist = email.contains("dentist");
        match requested_role {
            UserRole::Dentist if !looks_like_dentist => {
                return Err(SessionError::role_mismatch(email, requested_role));
            }
            UserRole::Patient if looks_like_dentist => {
                return Err(SessionError::role_mismatch(email, requested_role));
            }
            _ => {}
        }

        let user = UserIdentity::for_login(email, requested_role);
        self.vault.store(&user)?;
        self.current = Some(user.clone());
        Ok(user)
    }

    /// Creates a new account and logs it in. The display name is taken
    /// verbatim; there is no uniqueness check since the slot holds a single
    /// session.
    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> SessionResult<UserIdentity> {
        self.loading = true;
        tokio::time::sleep(self.latency).await;

        let result = self.complete_registration(name, email, password, role);
        self.loading = false;

        match result {
            Ok(user) => {
                info!("Registered: {} ({})", user.name, user.user_type);
                Ok(user)
            }
            Err(e) => {
                info!("Registration rejected for {email:?}: {e}");
                Err(e)
            }
        }
    }

    fn complete_registration(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> SessionResult<UserIdentity> {
        if name.is_empty() {
            return Err(SessionError::validation("name"));
        }
        if email.is_empty() {
            return Err(SessionError::validation("email"));
        }
        if password.is_empty() {
            return Err(SessionError::validation("password"));
        }

        let user = UserIdentity::for_registration(name, email, role);
        self.vault.store(&user)?;
        self.current = Some(user.clone());
        Ok(user)
    }

    /// Clears the live identity and the durable slot. Idempotent; a failed
    /// slot clear is logged but never surfaced.
    pub fn logout(&mut self) {
        if let Some(user) = self.current.take() {
            info!("Logged out {}", user.name);
        }
        if let Err(e) = self.vault.clear() {
            warn!("Could not clear session slot: {e}");
        }
    }

    /// Route guard evaluated against the current session state.
    pub fn route_decision(&self, required: UserRole) -> RouteDecision {
        evaluate_route(self.loading, self.current.as_ref(), required)
    }
}
