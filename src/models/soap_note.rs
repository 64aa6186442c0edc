use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{Joint, Movement, OrthoResult, PainFrequency, Prognosis};

/// Structured clinical visit record (Subjective / Objective / Assessment /
/// Plan), keyed by `patient_id` + `visit_date`.
///
/// Field names match the persisted JSON layout. The vitals block is only
/// populated when `vital_signs` is set. `disability_index` (ODI, 0-100) and
/// `satisfaction` (0-10) are newer optional scores: they are skipped when
/// absent so files written by earlier versions round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoapNote {
    pub patient_id: String,
    pub visit_date: NaiveDate,

    // Subjective
    pub chief_complaint: String,
    pub pain_location: Vec<String>,
    pub pain_characteristics: Vec<String>,
    pub pain_level: u8, // 0-10
    pub pain_frequency: PainFrequency,
    pub aggravating_factors: Vec<String>,
    pub relieving_factors: Vec<String>,
    pub affected_activities: Vec<String>,
    pub associated_symptoms: Vec<String>,

    // Objective: vitals
    pub vital_signs: bool,
    pub blood_pressure: Option<String>,
    pub heart_rate: Option<u16>,       // bpm, <= 200
    pub respiratory_rate: Option<u16>, // breaths/min, <= 60
    pub temperature: Option<f64>,      // Celsius, 35.0-42.0
    pub height_ft: Option<u16>,
    pub height_in: Option<u16>,
    pub weight_lbs: Option<u16>,

    // Objective: range of motion, degrees 0-180
    pub cervical_spine_flexion: u16,
    pub cervical_spine_extension: u16,
    pub thoracic_spine_flexion: u16,
    pub thoracic_spine_extension: u16,
    pub lumbar_spine_flexion: u16,
    pub lumbar_spine_extension: u16,
    pub shoulders_flexion: u16,
    pub shoulders_extension: u16,
    pub hips_flexion: u16,
    pub hips_extension: u16,

    // Objective: orthopedic tests
    pub ortho_straight_leg_raise: OrthoResult,
    pub ortho_kernig_sign: OrthoResult,
    pub ortho_brudzinski_sign: OrthoResult,
    pub ortho_spurling_test: OrthoResult,
    pub ortho_valsalva_maneuver: OrthoResult,

    // Objective: neurological + palpation
    pub neuro_deep_tendon_reflexes: String,
    pub neuro_muscle_strength: String,
    pub neuro_sensation: String,
    pub palpation: String,

    // Assessment
    pub diagnosis: String,
    pub differential_diagnosis: String,
    pub prognosis: Prognosis,

    // Plan
    pub treatment_provided: Vec<String>,
    pub treatment_frequency: String,
    pub treatment_duration: String,
    pub home_care_instructions: String,
    pub follow_up: NaiveDate,
    pub referrals: Vec<String>,

    // Patient-reported outcome scores
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disability_index: Option<u8>, // ODI percent, 0-100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub satisfaction: Option<u8>, // 0-10
}

impl SoapNote {
    /// Range-of-motion reading for one joint group and movement direction.
    pub fn rom(&self, joint: Joint, movement: Movement) -> u16 {
        match (joint, movement) {
            (Joint::CervicalSpine, Movement::Flexion) => self.cervical_spine_flexion,
            (Joint::CervicalSpine, Movement::Extension) => self.cervical_spine_extension,
            (Joint::ThoracicSpine, Movement::Flexion) => self.thoracic_spine_flexion,
            (Joint::ThoracicSpine, Movement::Extension) => self.thoracic_spine_extension,
            (Joint::LumbarSpine, Movement::Flexion) => self.lumbar_spine_flexion,
            (Joint::LumbarSpine, Movement::Extension) => self.lumbar_spine_extension,
            (Joint::Shoulders, Movement::Flexion) => self.shoulders_flexion,
            (Joint::Shoulders, Movement::Extension) => self.shoulders_extension,
            (Joint::Hips, Movement::Flexion) => self.hips_flexion,
            (Joint::Hips, Movement::Extension) => self.hips_extension,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;

    #[test]
    fn round_trips_through_json() {
        let note = fixtures::soap_note("p1", "2024-01-08", 6);
        let json = serde_json::to_string_pretty(&note).unwrap();
        let back: SoapNote = serde_json::from_str(&json).unwrap();
        assert_eq!(back, note);
    }

    #[test]
    fn optional_scores_absent_from_legacy_json() {
        let note = fixtures::soap_note("p1", "2024-01-08", 6);
        let json = serde_json::to_value(&note).unwrap();
        assert!(json.get("disability_index").is_none());
        assert!(json.get("satisfaction").is_none());
    }

    #[test]
    fn legacy_json_without_scores_deserializes() {
        let mut json = serde_json::to_value(fixtures::soap_note("p1", "2024-01-08", 6)).unwrap();
        // Simulate a file written before the score fields existed.
        json.as_object_mut().unwrap().remove("disability_index");
        json.as_object_mut().unwrap().remove("satisfaction");

        let back: SoapNote = serde_json::from_value(json).unwrap();
        assert_eq!(back.disability_index, None);
        assert_eq!(back.satisfaction, None);
    }

    #[test]
    fn rom_accessor_covers_all_ten_readings() {
        let mut note = fixtures::soap_note("p1", "2024-01-08", 6);
        note.cervical_spine_flexion = 45;
        note.hips_extension = 20;

        assert_eq!(note.rom(Joint::CervicalSpine, Movement::Flexion), 45);
        assert_eq!(note.rom(Joint::Hips, Movement::Extension), 20);

        let mut seen = Vec::new();
        for joint in Joint::ALL {
            for movement in Movement::ALL {
                seen.push(note.rom(joint, movement));
            }
        }
        assert_eq!(seen.len(), 10);
    }
}
