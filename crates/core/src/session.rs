//! In-memory session store.
//!
//! Exactly one instance exists per running app, shared by the services
//! via `Arc` rather than hidden behind a global. The token lives only in
//! memory: a process restart requires a fresh login.

use clinipass_types::AuthToken;
use std::sync::Mutex;

/// Holds the current auth token for the lifetime of the process.
///
/// Set on successful login, cleared on logout, read by every
/// authenticated call.
#[derive(Debug, Default)]
pub struct SessionStore {
    token: Mutex<Option<AuthToken>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock only means a panic elsewhere while holding it;
    // the Option inside is still coherent, so recover the guard.
    fn guard(&self) -> std::sync::MutexGuard<'_, Option<AuthToken>> {
        self.token
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Returns a copy of the current token, if a session is active.
    pub fn get(&self) -> Option<AuthToken> {
        self.guard().clone()
    }

    /// Installs the token of a freshly authenticated session.
    pub fn set(&self, token: AuthToken) {
        *self.guard() = Some(token);
    }

    /// Ends the session.
    pub fn clear(&self) {
        *self.guard() = None;
    }

    pub fn is_active(&self) -> bool {
        self.get().is_some()
    }
}
