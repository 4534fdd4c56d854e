//! In-memory [`MedicalApi`] mock and record fixtures for workflow
//! tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use clinipass_api::error::StatusCode;
use clinipass_api::models::{
    Act, MedicalHistoryItem, MedicalHistoryResponse, Medicine, Patient, Prescription,
    PrescriptionsResponse, RecordRef, Treatment, TreatmentsResponse,
};
use clinipass_api::{ApiError, ApiResult, MedicalApi};
use clinipass_types::{AuthToken, PatientCode};

/// Configurable mock backend with per-endpoint call counters.
///
/// The detail endpoints answer by materialising one record per ID in
/// the received CSV, so tests can assert both the issued `ids`
/// parameter and the shape of the aggregated result.
#[derive(Default)]
pub(crate) struct MockApi {
    /// Token issued on login; `None` rejects the credentials.
    pub login_token: Option<String>,
    /// Patient returned for any code; `None` means not found.
    pub patient: Option<Patient>,
    pub fail_treatments: bool,
    pub fail_prescriptions: bool,
    pub fail_medical_history: bool,

    pub login_calls: AtomicUsize,
    pub patient_calls: AtomicUsize,
    pub treatment_calls: AtomicUsize,
    pub prescription_calls: AtomicUsize,
    pub history_calls: AtomicUsize,

    pub treatment_ids_received: Mutex<Option<String>>,
    pub prescription_ids_received: Mutex<Option<String>>,
    pub history_ids_received: Mutex<Option<String>>,
}

impl MockApi {
    pub fn total_calls(&self) -> usize {
        self.login_calls.load(Ordering::SeqCst)
            + self.patient_calls.load(Ordering::SeqCst)
            + self.detail_calls()
    }

    pub fn detail_calls(&self) -> usize {
        self.treatment_calls.load(Ordering::SeqCst)
            + self.prescription_calls.load(Ordering::SeqCst)
            + self.history_calls.load(Ordering::SeqCst)
    }

    pub fn seen_treatment_ids(&self) -> Option<String> {
        self.treatment_ids_received.lock().unwrap().clone()
    }

    pub fn seen_prescription_ids(&self) -> Option<String> {
        self.prescription_ids_received.lock().unwrap().clone()
    }

    pub fn seen_history_ids(&self) -> Option<String> {
        self.history_ids_received.lock().unwrap().clone()
    }
}

fn outage(endpoint: &'static str) -> ApiError {
    ApiError::UnexpectedStatus {
        endpoint,
        status: StatusCode::BAD_GATEWAY,
    }
}

fn split_ids(ids: &str) -> Vec<&str> {
    ids.split(',').filter(|id| !id.is_empty()).collect()
}

impl MedicalApi for MockApi {
    async fn login(&self, _username: &str, _password: &str) -> ApiResult<AuthToken> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        match &self.login_token {
            Some(token) => Ok(AuthToken::new(token).unwrap()),
            None => Err(ApiError::Auth("invalid credentials".into())),
        }
    }

    async fn get_patient(&self, code: &PatientCode, _token: &AuthToken) -> ApiResult<Patient> {
        self.patient_calls.fetch_add(1, Ordering::SeqCst);
        self.patient
            .clone()
            .ok_or_else(|| ApiError::PatientNotFound {
                code: code.as_str().to_owned(),
            })
    }

    async fn get_treatments(
        &self,
        ids: &str,
        _token: &AuthToken,
    ) -> ApiResult<TreatmentsResponse> {
        self.treatment_calls.fetch_add(1, Ordering::SeqCst);
        *self.treatment_ids_received.lock().unwrap() = Some(ids.to_owned());
        if self.fail_treatments {
            return Err(outage("treatments"));
        }
        let treatments: Vec<_> = split_ids(ids).into_iter().map(treatment).collect();
        Ok(TreatmentsResponse {
            count: treatments.len(),
            treatments,
        })
    }

    async fn get_prescriptions(
        &self,
        ids: &str,
        _token: &AuthToken,
    ) -> ApiResult<PrescriptionsResponse> {
        self.prescription_calls.fetch_add(1, Ordering::SeqCst);
        *self.prescription_ids_received.lock().unwrap() = Some(ids.to_owned());
        if self.fail_prescriptions {
            return Err(outage("prescriptions"));
        }
        let prescriptions: Vec<_> = split_ids(ids).into_iter().map(prescription).collect();
        Ok(PrescriptionsResponse {
            count: prescriptions.len(),
            prescriptions,
        })
    }

    async fn get_medical_history(
        &self,
        ids: &str,
        _token: &AuthToken,
    ) -> ApiResult<MedicalHistoryResponse> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        *self.history_ids_received.lock().unwrap() = Some(ids.to_owned());
        if self.fail_medical_history {
            return Err(outage("medical-history"));
        }
        let medical_history: Vec<_> = split_ids(ids).into_iter().map(history_item).collect();
        Ok(MedicalHistoryResponse {
            count: medical_history.len(),
            medical_history,
        })
    }
}

fn refs(ids: &[&str]) -> Vec<RecordRef> {
    ids.iter().map(|id| RecordRef { id: (*id).into() }).collect()
}

/// A patient whose reference lists carry the given IDs.
pub(crate) fn patient_with_refs(
    code: &str,
    treatment_ids: &[&str],
    prescription_ids: &[&str],
    history_ids: &[&str],
) -> Patient {
    Patient {
        id: "p1".into(),
        last_name: "Mint Ahmed".into(),
        first_name: "Aicha".into(),
        birth_date: "1990-04-12".into(),
        sex: "F".into(),
        age: "35".into(),
        blood_type: "O+".into(),
        nni: "1234567890".into(),
        identification_code: code.into(),
        treatments: refs(treatment_ids),
        prescriptions: refs(prescription_ids),
        medical_history: refs(history_ids),
    }
}

fn treatment(id: &str) -> Treatment {
    Treatment {
        id: id.into(),
        reference: format!("TR-{id}"),
        patient_id: "p1".into(),
        doctor_id: "d1".into(),
        doctor_name: "Dr. Ba".into(),
        treatment_date: "2025-06-01".into(),
        treatment_type_id: "1".into(),
        treatment_type: "consultation".into(),
        institution: "Centre de Santé".into(),
        acts: vec![Act {
            act_id: "a1".into(),
            act_name: "examination".into(),
            price: 150.0,
            notes: String::new(),
        }],
    }
}

fn prescription(id: &str) -> Prescription {
    Prescription {
        id: id.into(),
        reference: format!("PR-{id}"),
        patient_id: "p1".into(),
        doctor_id: "d1".into(),
        doctor_name: "Dr. Ba".into(),
        date: "2025-06-01".into(),
        datetime: "2025-06-01 10:00:00".into(),
        notes: String::new(),
        state: "active".into(),
        medicines: vec![Medicine {
            medicine_id: "med1".into(),
            medicine_name: "Paracetamol".into(),
            dose: 500,
            dose_unit_id: "mg".into(),
            duration: 5,
            duration_period: "days".into(),
            frequency: 3,
            frequency_unit: "daily".into(),
            info: String::new(),
        }],
    }
}

fn history_item(id: &str) -> MedicalHistoryItem {
    MedicalHistoryItem {
        id: id.into(),
        patient_id: "p1".into(),
        date: "2024-11-20".into(),
        type_id: "3".into(),
        kind: "allergy".into(),
        title: "Penicillin".into(),
        description: "Severe reaction".into(),
        status: "active".into(),
        reference: format!("MH-{id}"),
        diagnosis: "Allergy".into(),
    }
}
