//! # clinipass API client
//!
//! Typed client for the clinic's REST backend: one login endpoint plus
//! four authenticated medical endpoints (patient by code, treatments,
//! prescriptions, medical history).
//!
//! The client is stateless besides its configuration: it holds no
//! session token. Callers supply the token on every authenticated call,
//! which keeps the aggregation workflow in `clinipass-core` testable
//! against a mock implementation of [`MedicalApi`].

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{ApiClient, MedicalApi};
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
