//! Login workflow.
//!
//! Drives the observable login state and owns the transition of the
//! session store: the token is installed on success and removed on
//! logout. There is no retry policy and no lockout; a failed login waits
//! for the user to try again.

use std::sync::Arc;

use clinipass_api::MedicalApi;

use crate::session::SessionStore;
use crate::state::{LoginState, StateContainer};

/// Authenticates the clinic staff member and manages the session token.
pub struct AuthService<A> {
    api: Arc<A>,
    session: Arc<SessionStore>,
    state: StateContainer<LoginState>,
}

impl<A: MedicalApi> AuthService<A> {
    pub fn new(api: Arc<A>, session: Arc<SessionStore>) -> Self {
        Self {
            api,
            session,
            state: StateContainer::new(LoginState::Idle),
        }
    }

    pub fn state(&self) -> &StateContainer<LoginState> {
        &self.state
    }

    /// Exchanges credentials for a session.
    ///
    /// Publishes `Loading`, then either `Success` (with the token also
    /// installed in the session store) or `Error` carrying the message
    /// to display.
    pub async fn login(&self, username: &str, password: &str) {
        self.state.set(LoginState::Loading);
        match self.api.login(username, password).await {
            Ok(token) => {
                self.session.set(token.clone());
                self.state.set(LoginState::Success(token));
            }
            Err(e) => {
                tracing::warn!(error = %e, "login failed");
                self.state.set(LoginState::Error(e.to_string()));
            }
        }
    }

    /// Ends the session and returns the login workflow to idle.
    ///
    /// Any aggregation attempted afterwards fails fast with the
    /// session-expired error until a new login succeeds.
    pub fn logout(&self) {
        self.session.clear();
        self.state.set(LoginState::Idle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockApi;

    #[tokio::test]
    async fn test_login_success_installs_token() {
        let api = Arc::new(MockApi {
            login_token: Some("abc".into()),
            ..Default::default()
        });
        let session = Arc::new(SessionStore::new());
        let auth = AuthService::new(api, session.clone());

        auth.login("staff", "secret").await;

        assert!(matches!(auth.state().get(), LoginState::Success(_)));
        assert_eq!(session.get().unwrap().as_str(), "abc");
    }

    #[tokio::test]
    async fn test_login_failure_leaves_session_empty() {
        let api = Arc::new(MockApi::default());
        let session = Arc::new(SessionStore::new());
        let auth = AuthService::new(api, session.clone());

        auth.login("staff", "wrong").await;

        match auth.state().get() {
            LoginState::Error(message) => assert_eq!(message, "invalid credentials"),
            other => panic!("expected Error, got {other:?}"),
        }
        assert!(session.get().is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let api = Arc::new(MockApi {
            login_token: Some("abc".into()),
            ..Default::default()
        });
        let session = Arc::new(SessionStore::new());
        let auth = AuthService::new(api, session.clone());

        auth.login("staff", "secret").await;
        auth.logout();

        assert!(session.get().is_none());
        assert!(matches!(auth.state().get(), LoginState::Idle));
    }
}
