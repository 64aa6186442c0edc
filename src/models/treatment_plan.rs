use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Treatment plan, keyed by `patient_id` + `plan_start_date`.
///
/// Plans are revisioned by start date: a new plan coexists with older ones
/// instead of replacing them. Field names match the persisted JSON layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreatmentPlan {
    pub patient_name: String,
    pub patient_id: String,
    pub diagnosis: String,
    pub plan_start_date: NaiveDate,
    pub plan_duration: String,
    pub initial_phase: String,
    pub maintenance_phase: String,
    pub treatment_modalities: Vec<String>,
    pub chiro_techniques: Vec<String>,
    pub treatment_areas: Vec<String>,
    pub exercises: Vec<String>,
    pub exercise_frequency: String,
    pub home_care: String,
    pub short_term_goals: String,
    pub long_term_goals: String,
    pub outcome_measures: Vec<String>,
    pub precautions: String,
    pub lifestyle_changes: Vec<String>,
    pub referrals: Vec<String>,
    pub reevaluation_frequency: String,
    pub informed_consent: bool,
}
