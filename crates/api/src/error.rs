//! API error taxonomy.
//!
//! Every transport or status failure is converted to one of these kinds
//! at the client boundary; no raw `reqwest` error reaches the
//! presentation layer undiagnosed.

/// Re-exported so callers can name statuses without depending on
/// reqwest directly.
pub use reqwest::StatusCode;

/// Errors produced by the REST client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Login was rejected or errored. Carries the server's message where
    /// one was available, else a generic fallback.
    #[error("{0}")]
    Auth(String),
    /// The patient code did not resolve. Carries the submitted code.
    #[error("patient with code '{code}' not found")]
    PatientNotFound { code: String },
    /// An authenticated endpoint answered with an unexpected status.
    #[error("{endpoint} returned status {status}")]
    UnexpectedStatus {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },
    /// Connection, timeout or body-decoding failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The configured base URL is unusable.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
