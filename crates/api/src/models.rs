//! Wire model for the clinic backend.
//!
//! Field names mirror the server's JSON exactly. Patient identity fields
//! come from a French-language backend (`nom`, `prenom`,
//! `dateNaissance`); they are renamed to English on the Rust side. Dates
//! are carried as the opaque strings the server ships; the client never
//! interprets them.

use serde::{Deserialize, Serialize};

/// Credentials posted to the login endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Error body some endpoints return on a rejected request.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// A reference to a detail record by ID.
///
/// The patient record carries these instead of the full objects; the
/// detail endpoints are queried with the collected IDs afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordRef {
    pub id: String,
}

/// A patient's identity and demographics, plus reference-ID lists for
/// the three detail categories.
///
/// Immutable once fetched; owned by the aggregation result it was
/// fetched for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    #[serde(rename = "nom")]
    pub last_name: String,
    #[serde(rename = "prenom")]
    pub first_name: String,
    #[serde(rename = "dateNaissance")]
    pub birth_date: String,
    #[serde(rename = "sexe")]
    pub sex: String,
    pub age: String,
    pub blood_type: String,
    pub nni: String,
    pub identification_code: String,
    pub treatments: Vec<RecordRef>,
    pub prescriptions: Vec<RecordRef>,
    pub medical_history: Vec<RecordRef>,
}

impl Patient {
    /// Joins the IDs of the given references into the comma-separated
    /// form the detail endpoints expect. Empty for an empty list.
    pub fn join_ids(refs: &[RecordRef]) -> String {
        refs.iter()
            .map(|r| r.id.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// A medical act performed as part of a treatment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Act {
    pub act_id: String,
    pub act_name: String,
    pub price: f64,
    pub notes: String,
}

/// A treatment record with its constituent acts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Treatment {
    pub id: String,
    pub reference: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub treatment_date: String,
    pub treatment_type_id: String,
    pub treatment_type: String,
    pub institution: String,
    pub acts: Vec<Act>,
}

/// Bulk response from the treatments endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreatmentsResponse {
    pub treatments: Vec<Treatment>,
    pub count: usize,
}

/// A medicine line on a prescription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Medicine {
    pub medicine_id: String,
    pub medicine_name: String,
    pub dose: i64,
    pub dose_unit_id: String,
    pub duration: i64,
    pub duration_period: String,
    pub frequency: i64,
    pub frequency_unit: String,
    pub info: String,
}

/// A prescription record with its medicine lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prescription {
    pub id: String,
    pub reference: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub date: String,
    pub datetime: String,
    pub notes: String,
    pub state: String,
    pub medicines: Vec<Medicine>,
}

/// Bulk response from the prescriptions endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrescriptionsResponse {
    pub prescriptions: Vec<Prescription>,
    pub count: usize,
}

/// A single entry in a patient's medical history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalHistoryItem {
    pub id: String,
    pub patient_id: String,
    pub date: String,
    pub type_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub reference: String,
    pub diagnosis: String,
}

/// Bulk response from the medical-history endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedicalHistoryResponse {
    pub medical_history: Vec<MedicalHistoryItem>,
    pub count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patient_deserialises_french_field_names() {
        let json = r#"{
            "id": "p1",
            "nom": "Mint Ahmed",
            "prenom": "Aicha",
            "dateNaissance": "1990-04-12",
            "sexe": "F",
            "age": "35",
            "blood_type": "O+",
            "nni": "1234567890",
            "identification_code": "12345",
            "treatments": [{"id": "t1"}],
            "prescriptions": [],
            "medical_history": [{"id": "m1"}, {"id": "m2"}]
        }"#;
        let patient: Patient = serde_json::from_str(json).unwrap();
        assert_eq!(patient.last_name, "Mint Ahmed");
        assert_eq!(patient.first_name, "Aicha");
        assert_eq!(patient.birth_date, "1990-04-12");
        assert_eq!(patient.treatments.len(), 1);
        assert!(patient.prescriptions.is_empty());
        assert_eq!(Patient::join_ids(&patient.medical_history), "m1,m2");
    }

    #[test]
    fn test_join_ids_empty_list_is_empty_string() {
        assert_eq!(Patient::join_ids(&[]), "");
    }

    #[test]
    fn test_medical_history_type_field_rename() {
        let json = r#"{
            "id": "m1",
            "patient_id": "p1",
            "date": "2024-01-01",
            "type_id": "3",
            "type": "allergy",
            "title": "Penicillin",
            "description": "Severe reaction",
            "status": "active",
            "reference": "MH-001",
            "diagnosis": "Allergy"
        }"#;
        let item: MedicalHistoryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind, "allergy");
    }
}
