//! Patient-lookup workflow.
//!
//! Wires the aggregator to the session store and the observable lookup
//! state. The session check happens before `Loading` is published, so a
//! missing token goes straight to the distinct session-expired error
//! with no network activity.
//!
//! An in-flight lookup is not cancelled when the triggering screen goes
//! away (matching the source behaviour); callers that drop the future
//! cancel it implicitly, and [`LookupService::reset`] covers stale
//! display on dismissal.

use std::sync::Arc;

use clinipass_api::MedicalApi;
use clinipass_types::PatientCode;

use crate::aggregator::RecordAggregator;
use crate::error::LookupError;
use crate::session::SessionStore;
use crate::state::{LookupState, StateContainer};

/// Runs patient lookups and publishes their state.
pub struct LookupService<A> {
    aggregator: RecordAggregator<A>,
    session: Arc<SessionStore>,
    state: StateContainer<LookupState>,
}

impl<A: MedicalApi> LookupService<A> {
    pub fn new(api: Arc<A>, session: Arc<SessionStore>) -> Self {
        Self {
            aggregator: RecordAggregator::new(api),
            session,
            state: StateContainer::new(LookupState::Idle),
        }
    }

    pub fn state(&self) -> &StateContainer<LookupState> {
        &self.state
    }

    /// Looks up a patient by code using the current session.
    ///
    /// Publishes the terminal state; leaving it again requires a new
    /// explicit action (another lookup, or [`reset`](Self::reset)).
    pub async fn lookup(&self, code: &PatientCode) {
        let token = match self.session.get() {
            Some(token) => token,
            None => {
                self.state.set(LookupState::Error(LookupError::SessionExpired));
                return;
            }
        };

        self.state.set(LookupState::Loading);
        match self.aggregator.aggregate(code, Some(&token)).await {
            Ok(record) => self.state.set(LookupState::Success(Box::new(record))),
            Err(e) => self.state.set(LookupState::Error(e)),
        }
    }

    /// Returns the workflow to idle.
    ///
    /// Called when the detail view is dismissed so stale data cannot
    /// leak into the next lookup.
    pub fn reset(&self) {
        self.state.set(LookupState::Idle);
    }
}
