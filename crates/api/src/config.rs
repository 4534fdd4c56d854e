//! Client configuration.
//!
//! Configuration is resolved once at startup and handed to the client;
//! nothing here reads environment variables during a request. The base
//! URL defaults to the clinic's staging deployment and can be overridden
//! by whoever constructs the config (CLI flag or environment, resolved
//! by the binary).

use crate::error::{ApiError, ApiResult};

/// Compiled-in default base URL of the clinic backend.
pub const DEFAULT_BASE_URL: &str =
    "https://smartmssa-si7atne-staging-dev-25498255.dev.odoo.com";

/// Path of the login endpoint, relative to the base URL.
pub const LOGIN_PATH: &str = "api/v1/si7atne/authentication/login";
/// Path prefix of the patient-by-code endpoint.
pub const PATIENTS_PATH: &str = "api/v1/si7atne/medical/patients";
/// Path of the bulk treatments endpoint.
pub const TREATMENTS_PATH: &str = "api/v1/si7atne/medical/treatments";
/// Path of the bulk prescriptions endpoint.
pub const PRESCRIPTIONS_PATH: &str = "api/v1/si7atne/medical/prescriptions";
/// Path of the bulk medical-history endpoint.
pub const MEDICAL_HISTORY_PATH: &str = "api/v1/si7atne/medical/medical-history";

/// Client configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Create a new `ApiConfig` for the given base URL.
    ///
    /// The URL must parse and use the `http` or `https` scheme; a
    /// trailing slash is stripped so endpoint joining is uniform.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] if the URL is empty, does
    /// not parse, or uses another scheme.
    pub fn new(base_url: impl AsRef<str>) -> ApiResult<Self> {
        let trimmed = base_url.as_ref().trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ApiError::InvalidBaseUrl("base URL cannot be empty".into()));
        }
        let parsed = url::Url::parse(trimmed)
            .map_err(|e| ApiError::InvalidBaseUrl(format!("'{trimmed}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl(format!(
                "base URL must use http or https, got: '{}'",
                parsed.scheme()
            )));
        }
        Ok(Self {
            base_url: trimmed.to_owned(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins a relative endpoint path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL).expect("default base URL is valid")
    }
}
