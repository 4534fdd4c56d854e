//! REST client over the clinic endpoints.
//!
//! [`MedicalApi`] is the seam between the network and the aggregation
//! workflow: `clinipass-core` is generic over it, so tests drive the
//! workflow with an in-memory mock and no server.

use clinipass_types::{AuthToken, PatientCode};
use reqwest::header::AUTHORIZATION;

use crate::config::{
    ApiConfig, LOGIN_PATH, MEDICAL_HISTORY_PATH, PATIENTS_PATH, PRESCRIPTIONS_PATH,
    TREATMENTS_PATH,
};
use crate::error::{ApiError, ApiResult};
use crate::models::{
    ErrorBody, LoginRequest, LoginResponse, MedicalHistoryResponse, Patient,
    PrescriptionsResponse, TreatmentsResponse,
};

/// The five clinic endpoints, as consumed by the aggregation workflow.
///
/// Detail endpoints take the comma-joined ID list derived from the
/// patient's reference arrays; an empty list is passed through as an
/// empty `ids` parameter.
#[allow(async_fn_in_trait)]
pub trait MedicalApi {
    /// Exchanges credentials for a bearer token.
    async fn login(&self, username: &str, password: &str) -> ApiResult<AuthToken>;

    /// Fetches a patient by identification code.
    async fn get_patient(&self, code: &PatientCode, token: &AuthToken) -> ApiResult<Patient>;

    /// Fetches treatments in bulk by comma-joined IDs.
    async fn get_treatments(&self, ids: &str, token: &AuthToken)
        -> ApiResult<TreatmentsResponse>;

    /// Fetches prescriptions in bulk by comma-joined IDs.
    async fn get_prescriptions(
        &self,
        ids: &str,
        token: &AuthToken,
    ) -> ApiResult<PrescriptionsResponse>;

    /// Fetches medical-history entries in bulk by comma-joined IDs.
    async fn get_medical_history(
        &self,
        ids: &str,
        token: &AuthToken,
    ) -> ApiResult<MedicalHistoryResponse>;
}

const CONNECT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(60);

/// reqwest-backed implementation of [`MedicalApi`].
///
/// Holds no session state; the caller supplies the token on every
/// authenticated call.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Creates a client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: ApiConfig) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &'static str,
        url: String,
        ids: Option<&str>,
        token: &AuthToken,
    ) -> ApiResult<T> {
        let mut request = self
            .http
            .get(url)
            .header(AUTHORIZATION, token.bearer());
        if let Some(ids) = ids {
            request = request.query(&[("ids", ids)]);
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::UnexpectedStatus { endpoint, status });
        }
        Ok(response.json().await?)
    }
}

impl MedicalApi for ApiClient {
    async fn login(&self, username: &str, password: &str) -> ApiResult<AuthToken> {
        let request = LoginRequest {
            username: username.to_owned(),
            password: password.to_owned(),
        };
        tracing::debug!(username, "logging in");
        let response = self
            .http
            .post(self.config.endpoint(LOGIN_PATH))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::Auth(format!("login failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            // Surface the server's message verbatim where it sent one.
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.message,
                Err(_) => format!("login failed with status {status}"),
            };
            return Err(ApiError::Auth(message));
        }

        let body: LoginResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Auth(format!("login response was malformed: {e}")))?;
        AuthToken::new(&body.token)
            .map_err(|_| ApiError::Auth("login returned an empty token".into()))
    }

    async fn get_patient(&self, code: &PatientCode, token: &AuthToken) -> ApiResult<Patient> {
        tracing::debug!(code = code.as_str(), "fetching patient");
        let url = format!("{}/{}", self.config.endpoint(PATIENTS_PATH), code.as_str());
        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, token.bearer())
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::PatientNotFound {
                code: code.as_str().to_owned(),
            });
        }
        Ok(response.json().await?)
    }

    async fn get_treatments(
        &self,
        ids: &str,
        token: &AuthToken,
    ) -> ApiResult<TreatmentsResponse> {
        self.get_json(
            "treatments",
            self.config.endpoint(TREATMENTS_PATH),
            Some(ids),
            token,
        )
        .await
    }

    async fn get_prescriptions(
        &self,
        ids: &str,
        token: &AuthToken,
    ) -> ApiResult<PrescriptionsResponse> {
        self.get_json(
            "prescriptions",
            self.config.endpoint(PRESCRIPTIONS_PATH),
            Some(ids),
            token,
        )
        .await
    }

    async fn get_medical_history(
        &self,
        ids: &str,
        token: &AuthToken,
    ) -> ApiResult<MedicalHistoryResponse> {
        self.get_json(
            "medical-history",
            self.config.endpoint(MEDICAL_HISTORY_PATH),
            Some(ids),
            token,
        )
        .await
    }
}
