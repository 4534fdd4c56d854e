//! The record aggregation workflow.
//!
//! One lookup is a strict two-phase sequence: the patient fetch first
//! (it yields the reference IDs everything downstream needs), then the
//! three detail fetches concurrently. Only the patient fetch can fail
//! the aggregation; a detail fetch that fails degrades its field to
//! absent so a secondary outage never blocks identifying the patient at
//! the point of care.

use std::sync::Arc;

use clinipass_api::models::{
    MedicalHistoryResponse, Patient, PrescriptionsResponse, TreatmentsResponse,
};
use clinipass_api::MedicalApi;
use clinipass_types::{AuthToken, PatientCode};

use crate::error::{LookupError, LookupResult};

/// A display-ready patient record.
///
/// The three detail sets are optional because their fetches may fail
/// independently without invalidating the result. An empty reference
/// list still produces a present-but-empty response, not an absent one.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PatientRecord {
    pub patient: Patient,
    pub treatments: Option<TreatmentsResponse>,
    pub prescriptions: Option<PrescriptionsResponse>,
    pub medical_history: Option<MedicalHistoryResponse>,
}

/// Orchestrates the multi-call sequence building a [`PatientRecord`].
///
/// Holds no session state; the caller passes the current token so the
/// fail-fast precondition stays visible and testable.
#[derive(Debug, Clone)]
pub struct RecordAggregator<A> {
    api: Arc<A>,
}

impl<A: MedicalApi> RecordAggregator<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Builds the full record for a patient code.
    ///
    /// # Errors
    ///
    /// - [`LookupError::SessionExpired`] if `token` is absent; no
    ///   network call is attempted.
    /// - [`LookupError::PatientNotFound`] if the patient fetch fails;
    ///   the detail endpoints are never invoked.
    pub async fn aggregate(
        &self,
        code: &PatientCode,
        token: Option<&AuthToken>,
    ) -> LookupResult<PatientRecord> {
        let token = token.ok_or(LookupError::SessionExpired)?;

        let patient = self.api.get_patient(code, token).await.map_err(|e| {
            tracing::warn!(code = code.as_str(), error = %e, "patient fetch failed");
            LookupError::PatientNotFound {
                code: code.as_str().to_owned(),
            }
        })?;

        let treatment_ids = Patient::join_ids(&patient.treatments);
        let prescription_ids = Patient::join_ids(&patient.prescriptions);
        let history_ids = Patient::join_ids(&patient.medical_history);

        // Independent of each other; one failing must not cancel the
        // rest.
        let (treatments, prescriptions, medical_history) = tokio::join!(
            async {
                self.api
                    .get_treatments(&treatment_ids, token)
                    .await
                    .map_err(|e| tracing::warn!(error = %e, "treatments fetch failed, omitting"))
                    .ok()
            },
            async {
                self.api
                    .get_prescriptions(&prescription_ids, token)
                    .await
                    .map_err(|e| tracing::warn!(error = %e, "prescriptions fetch failed, omitting"))
                    .ok()
            },
            async {
                self.api
                    .get_medical_history(&history_ids, token)
                    .await
                    .map_err(|e| {
                        tracing::warn!(error = %e, "medical-history fetch failed, omitting")
                    })
                    .ok()
            },
        );

        Ok(PatientRecord {
            patient,
            treatments,
            prescriptions,
            medical_history,
        })
    }
}
