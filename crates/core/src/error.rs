//! Lookup error taxonomy.
//!
//! Session expiry is kept distinct from not-found so the UI can redirect
//! to login instead of showing a generic failure. The variants are
//! `Clone` because they travel inside the observable lookup state.

/// Terminal failures of a record lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// No session token was present; the lookup made no network call.
    #[error("session expired, please log in again")]
    SessionExpired,
    /// The patient fetch failed; carries the submitted code.
    #[error("patient with code '{code}' not found")]
    PatientNotFound { code: String },
}

pub type LookupResult<T> = std::result::Result<T, LookupError>;
