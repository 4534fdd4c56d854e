//! Observable state containers.
//!
//! Each screen-facing workflow publishes an `Idle -> Loading ->
//! {Success | Error}` state machine through a watch channel. Terminal
//! states carry their payload in the variant; leaving an `Error` state
//! always takes a new explicit action (re-login, new lookup), never an
//! automatic retry. `Success | Error -> Idle` happens via explicit
//! [`StateContainer::set`] back to the idle variant.

use crate::aggregator::PatientRecord;
use crate::error::LookupError;
use clinipass_types::AuthToken;
use tokio::sync::watch;

/// States of the login workflow.
#[derive(Debug, Clone)]
pub enum LoginState {
    Idle,
    Loading,
    Success(AuthToken),
    Error(String),
}

/// States of the patient-lookup workflow.
///
/// The error variant keeps the [`LookupError`] enum rather than a plain
/// message so the UI can distinguish a session-expiry redirect from a
/// not-found display.
#[derive(Debug, Clone)]
pub enum LookupState {
    Idle,
    Loading,
    Success(Box<PatientRecord>),
    Error(LookupError),
}

/// A single observable state slot.
///
/// Thin wrapper over a watch channel: the owning service `set`s, any
/// number of observers `subscribe` and react. The current value is
/// always readable without subscribing.
#[derive(Debug)]
pub struct StateContainer<T> {
    tx: watch::Sender<T>,
}

impl<T: Clone> StateContainer<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    /// Publishes a new state, replacing the current one.
    pub fn set(&self, state: T) {
        // send_replace delivers even when no observer is attached.
        self.tx.send_replace(state);
    }

    /// Returns a copy of the current state.
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }

    /// Attaches an observer that sees this and every later state.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_observer_sees_published_states() {
        let container = StateContainer::new(LoginState::Idle);
        let mut rx = container.subscribe();

        container.set(LoginState::Loading);
        rx.changed().await.unwrap();
        assert!(matches!(*rx.borrow(), LoginState::Loading));

        container.set(LoginState::Error("login failed".into()));
        rx.changed().await.unwrap();
        match &*rx.borrow() {
            LoginState::Error(message) => assert_eq!(message, "login failed"),
            other => panic!("expected Error, got {other:?}"),
        };
    }

    #[test]
    fn test_get_without_observers() {
        let container = StateContainer::new(LookupState::Idle);
        container.set(LookupState::Loading);
        assert!(matches!(container.get(), LookupState::Loading));
    }
}
