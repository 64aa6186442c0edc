//! Dashboard data layer — read-only payload assembly.
//!
//! Provides the summary panel data the progress dashboard renders: patient
//! overview with derived age and BMI, latest visit, current treatment plan,
//! and the pain-level change since the first visit. Rendering, layout, and
//! charting stay with the presentation collaborator; this module never
//! writes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::enums::Prognosis;
use crate::models::{PatientProfile, SoapNote, TreatmentPlan};
use crate::store::{RecordKind, RecordStore, StoreError};
use crate::timeline::{self, ChangeSummary, Metric};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Profile panel with the derived figures computed at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSummary {
    pub patient_name: String,
    pub age: u32,
    pub bmi: Option<f64>,
    pub occupation: String,
    pub sleep_hours: u8,
    pub exercise_frequency: String,
    pub stress_level: u8,
    pub primary_complaint: String,
}

/// Latest-visit panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteSummary {
    pub visit_date: NaiveDate,
    pub chief_complaint: String,
    pub pain_level: u8,
    pub diagnosis: String,
    pub prognosis: Prognosis,
    pub follow_up: NaiveDate,
}

/// Current treatment plan panel (the plan with the latest start date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub plan_start_date: NaiveDate,
    pub plan_duration: String,
    pub initial_phase: String,
    pub maintenance_phase: String,
    pub treatment_modalities: Vec<String>,
}

/// Patient dashboard data — single fetch for all overview content.
///
/// Any of the three documents may be absent for a patient id (there is no
/// referential integrity between kinds); missing documents degrade to
/// `None` rather than failing the whole payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientOverview {
    pub patient_id: String,
    pub profile: Option<ProfileSummary>,
    pub latest_note: Option<NoteSummary>,
    pub current_plan: Option<PlanSummary>,
    pub visit_count: usize,
    pub pain_change: Option<ChangeSummary>,
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Assemble the dashboard overview for one patient as of `today`.
pub fn patient_overview(
    store: &RecordStore,
    patient_id: &str,
    today: NaiveDate,
) -> Result<PatientOverview, StoreError> {
    let profile = match store.get::<PatientProfile>(
        RecordKind::PatientProfile,
        &crate::store::RecordKey::Patient(patient_id.to_string()),
    ) {
        Ok(profile) => Some(profile_summary(&profile, today)),
        Err(e) if e.is_not_found() => {
            tracing::debug!(patient_id, "No profile on file; overview degrades");
            None
        }
        Err(e) => return Err(e),
    };

    let visits = match timeline::build_full_timeline(store, patient_id) {
        Ok(visits) => visits,
        Err(timeline::TimelineError::Store(e)) => return Err(e),
        // build_timeline only fails through the store
        Err(_) => Vec::new(),
    };
    let visit_count = visits.len();
    let pain_change = timeline::summarize_change(&visits, Metric::PainLevel).ok();

    let latest_note = match latest_key_date(store, RecordKind::SoapNote, patient_id)? {
        Some(key) => {
            let note: SoapNote = store.get(RecordKind::SoapNote, &key)?;
            Some(note_summary(&note))
        }
        None => None,
    };

    let current_plan = match latest_key_date(store, RecordKind::TreatmentPlan, patient_id)? {
        Some(key) => {
            let plan: TreatmentPlan = store.get(RecordKind::TreatmentPlan, &key)?;
            Some(plan_summary(&plan))
        }
        None => None,
    };

    Ok(PatientOverview {
        patient_id: patient_id.to_string(),
        profile,
        latest_note,
        current_plan,
        visit_count,
        pain_change,
    })
}

/// Latest (by embedded date) stored key of a dated kind, if any.
fn latest_key_date(
    store: &RecordStore,
    kind: RecordKind,
    patient_id: &str,
) -> Result<Option<crate::store::RecordKey>, StoreError> {
    // `list` returns dated keys sorted ascending.
    Ok(store.list(kind, patient_id)?.into_iter().last())
}

fn profile_summary(profile: &PatientProfile, today: NaiveDate) -> ProfileSummary {
    ProfileSummary {
        patient_name: profile.patient_name.clone(),
        age: timeline::age_on(profile.dob, today),
        bmi: timeline::bmi(profile.height_ft, profile.height_in, profile.weight_lbs),
        occupation: profile.occupation.clone(),
        sleep_hours: profile.sleep_hours,
        exercise_frequency: profile.exercise_frequency.as_str().to_string(),
        stress_level: profile.stress_level,
        primary_complaint: profile.primary_complaint.clone(),
    }
}

fn note_summary(note: &SoapNote) -> NoteSummary {
    NoteSummary {
        visit_date: note.visit_date,
        chief_complaint: note.chief_complaint.clone(),
        pain_level: note.pain_level,
        diagnosis: note.diagnosis.clone(),
        prognosis: note.prognosis,
        follow_up: note.follow_up,
    }
}

fn plan_summary(plan: &TreatmentPlan) -> PlanSummary {
    PlanSummary {
        plan_start_date: plan.plan_start_date,
        plan_duration: plan.plan_duration.clone(),
        initial_phase: plan.initial_phase.clone(),
        maintenance_phase: plan.maintenance_phase.clone(),
        treatment_modalities: plan.treatment_modalities.clone(),
    }
}
