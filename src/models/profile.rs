use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::enums::{ExerciseFrequency, Gender, PainQuality, QualityFrequency, YesNo};

/// Intensity and frequency of one pain quality on the intake form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PainCharacteristic {
    pub intensity: u8, // 0-10
    pub frequency: QualityFrequency,
}

/// Patient intake profile, created once at the first visit.
///
/// Field names match the persisted JSON layout; the record is keyed by
/// `patient_id` alone and a re-save fully replaces the stored document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub patient_name: String,
    pub patient_id: String,
    pub dob: NaiveDate,
    pub gender: Gender,
    pub contact_number: String,
    pub email: String,
    pub visit_date: NaiveDate,
    pub visit_time: NaiveTime,
    pub occupation: String,
    pub height_ft: f64,
    pub height_in: f64,
    pub weight_lbs: f64,
    pub emergency_name: String,
    pub emergency_relation: String,
    pub emergency_number: String,
    pub medical_history: String,
    pub current_medications: String,
    pub allergies: String,
    pub exercise_frequency: ExerciseFrequency,
    pub exercise_types: Vec<String>,
    pub sleep_hours: u8,  // 0-12
    pub stress_level: u8, // 0-10
    pub previous_chiro: YesNo,
    pub primary_complaint: String,
    pub pain_onset: NaiveDate,
    pub pain_cause: String,
    /// All six qualities must be present; validated by the schema layer.
    pub pain_characteristics: BTreeMap<PainQuality, PainCharacteristic>,
    pub consent: bool,
    pub privacy_agreement: bool,
}
