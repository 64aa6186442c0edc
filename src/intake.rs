//! Capture layer: one submission command per form.
//!
//! Forms hand over a complete, immutable record; nothing is persisted until
//! the consent gate and schema validation both pass, so a rejected
//! submission leaves the store untouched.

use thiserror::Error;

use crate::models::{PatientProfile, SoapNote, TreatmentPlan};
use crate::schema::{self, ValidationError};
use crate::store::{RecordKey, RecordKind, RecordStore, StoreError};

#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("Consent not granted: {0}")]
    ConsentWithheld(&'static str),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Persist a patient intake profile.
///
/// Both consent checkboxes must be set; the write is keyed by `patient_id`
/// alone, so re-submitting replaces the stored profile in full.
pub fn submit_profile(store: &RecordStore, profile: &PatientProfile) -> Result<(), IntakeError> {
    if !(profile.consent && profile.privacy_agreement) {
        tracing::warn!(patient_id = %profile.patient_id, "Profile rejected: consent withheld");
        return Err(IntakeError::ConsentWithheld(
            "examination consent and privacy agreement are both required",
        ));
    }
    schema::validate_profile(profile)?;

    let key = RecordKey::Patient(profile.patient_id.clone());
    store.put(RecordKind::PatientProfile, &key, profile)?;
    tracing::info!(patient_id = %profile.patient_id, "Patient profile saved");
    Ok(())
}

/// Persist a SOAP note under `patient_id` + `visit_date`.
pub fn submit_soap_note(store: &RecordStore, note: &SoapNote) -> Result<(), IntakeError> {
    schema::validate_soap_note(note)?;

    let key = RecordKey::PatientDate {
        patient_id: note.patient_id.clone(),
        date: note.visit_date,
    };
    store.put(RecordKind::SoapNote, &key, note)?;
    tracing::info!(
        patient_id = %note.patient_id,
        visit_date = %note.visit_date,
        "SOAP note saved"
    );
    Ok(())
}

/// Persist a treatment plan under `patient_id` + `plan_start_date`.
///
/// Requires documented informed consent, mirroring the profile's gate.
pub fn submit_treatment_plan(store: &RecordStore, plan: &TreatmentPlan) -> Result<(), IntakeError> {
    if !plan.informed_consent {
        tracing::warn!(patient_id = %plan.patient_id, "Treatment plan rejected: consent withheld");
        return Err(IntakeError::ConsentWithheld(
            "informed consent is required before saving a treatment plan",
        ));
    }
    schema::validate_treatment_plan(plan)?;

    let key = RecordKey::PatientDate {
        patient_id: plan.patient_id.clone(),
        date: plan.plan_start_date,
    };
    store.put(RecordKind::TreatmentPlan, &key, plan)?;
    tracing::info!(
        patient_id = %plan.patient_id,
        plan_start_date = %plan.plan_start_date,
        "Treatment plan saved"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;

    fn test_store() -> (tempfile::TempDir, RecordStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = RecordStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn profile_without_consent_writes_nothing() {
        let (dir, store) = test_store();
        let mut profile = fixtures::profile("p1");
        profile.consent = false;

        let err = submit_profile(&store, &profile).unwrap_err();
        assert!(matches!(err, IntakeError::ConsentWithheld(_)));
        assert!(!dir.path().join("patient_info_p1.json").exists());
    }

    #[test]
    fn profile_without_privacy_agreement_writes_nothing() {
        let (dir, store) = test_store();
        let mut profile = fixtures::profile("p1");
        profile.privacy_agreement = false;

        assert!(submit_profile(&store, &profile).is_err());
        assert!(!dir.path().join("patient_info_p1.json").exists());
    }

    #[test]
    fn plan_without_informed_consent_writes_nothing() {
        let (dir, store) = test_store();
        let mut plan = fixtures::treatment_plan("p1", "2024-01-15");
        plan.informed_consent = false;

        let err = submit_treatment_plan(&store, &plan).unwrap_err();
        assert!(matches!(err, IntakeError::ConsentWithheld(_)));
        assert!(!dir.path().join("treatment_plan_p1_20240115.json").exists());
    }

    #[test]
    fn invalid_record_writes_nothing() {
        let (dir, store) = test_store();
        let mut note = fixtures::soap_note("p1", "2024-01-08", 6);
        note.pain_level = 11;

        let err = submit_soap_note(&store, &note).unwrap_err();
        assert!(matches!(err, IntakeError::Validation(_)));
        assert!(!dir.path().join("soap_notes_p1_240108.json").exists());
    }

    #[test]
    fn valid_submissions_are_persisted() {
        let (dir, store) = test_store();

        submit_profile(&store, &fixtures::profile("p1")).unwrap();
        submit_soap_note(&store, &fixtures::soap_note("p1", "2024-01-08", 6)).unwrap();
        submit_treatment_plan(&store, &fixtures::treatment_plan("p1", "2024-01-15")).unwrap();

        assert!(dir.path().join("patient_info_p1.json").exists());
        assert!(dir.path().join("soap_notes_p1_240108.json").exists());
        assert!(dir.path().join("treatment_plan_p1_20240115.json").exists());
    }
}
