//! Deterministic record builders shared by test modules. The original demo
//! charts were fed by random generators; tests use these fixed records
//! instead so every assertion is reproducible.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};

use super::enums::{
    ExerciseFrequency, Gender, OrthoResult, PainFrequency, PainQuality, Prognosis,
    QualityFrequency, YesNo,
};
use super::profile::{PainCharacteristic, PatientProfile};
use super::soap_note::SoapNote;
use super::treatment_plan::TreatmentPlan;

pub(crate) fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub(crate) fn profile(patient_id: &str) -> PatientProfile {
    let mut pain_characteristics = BTreeMap::new();
    for quality in PainQuality::ALL {
        pain_characteristics.insert(
            quality,
            PainCharacteristic {
                intensity: 1,
                frequency: QualityFrequency::Occasional,
            },
        );
    }
    pain_characteristics.insert(
        PainQuality::Sharp,
        PainCharacteristic {
            intensity: 6,
            frequency: QualityFrequency::Intermittent,
        },
    );

    PatientProfile {
        patient_name: "Dana Whitfield".into(),
        patient_id: patient_id.into(),
        dob: date("1985-06-14"),
        gender: Gender::Female,
        contact_number: "555-0134".into(),
        email: "dana.whitfield@example.com".into(),
        visit_date: date("2024-01-01"),
        visit_time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
        occupation: "Software developer".into(),
        height_ft: 5.0,
        height_in: 7.0,
        weight_lbs: 150.0,
        emergency_name: "Riley Whitfield".into(),
        emergency_relation: "Spouse".into(),
        emergency_number: "555-0135".into(),
        medical_history: "No prior surgeries.".into(),
        current_medications: "Ibuprofen as needed".into(),
        allergies: "None known".into(),
        exercise_frequency: ExerciseFrequency::OneToTwoPerWeek,
        exercise_types: vec!["Walking".into(), "Yoga".into()],
        sleep_hours: 7,
        stress_level: 5,
        previous_chiro: YesNo::No,
        primary_complaint: "Lower back pain after lifting".into(),
        pain_onset: date("2023-12-20"),
        pain_cause: "Lifting a heavy box".into(),
        pain_characteristics,
        consent: true,
        privacy_agreement: true,
    }
}

pub(crate) fn soap_note(patient_id: &str, visit_date: &str, pain_level: u8) -> SoapNote {
    SoapNote {
        patient_id: patient_id.into(),
        visit_date: date(visit_date),
        chief_complaint: "Lower back pain".into(),
        pain_location: vec!["Lower Back".into()],
        pain_characteristics: vec!["Aching".into(), "Sharp".into()],
        pain_level,
        pain_frequency: PainFrequency::Intermittent,
        aggravating_factors: vec!["Sitting".into(), "Lifting".into()],
        relieving_factors: vec!["Rest".into(), "Heat".into()],
        affected_activities: vec!["Work".into(), "Sleep".into()],
        associated_symptoms: vec!["Stiffness".into()],
        vital_signs: false,
        blood_pressure: None,
        heart_rate: None,
        respiratory_rate: None,
        temperature: None,
        height_ft: None,
        height_in: None,
        weight_lbs: None,
        cervical_spine_flexion: 50,
        cervical_spine_extension: 60,
        thoracic_spine_flexion: 30,
        thoracic_spine_extension: 25,
        lumbar_spine_flexion: 40,
        lumbar_spine_extension: 20,
        shoulders_flexion: 160,
        shoulders_extension: 50,
        hips_flexion: 110,
        hips_extension: 25,
        ortho_straight_leg_raise: OrthoResult::Positive,
        ortho_kernig_sign: OrthoResult::Negative,
        ortho_brudzinski_sign: OrthoResult::Negative,
        ortho_spurling_test: OrthoResult::NotPerformed,
        ortho_valsalva_maneuver: OrthoResult::NotPerformed,
        neuro_deep_tendon_reflexes: "2+ and symmetric".into(),
        neuro_muscle_strength: "5/5 throughout".into(),
        neuro_sensation: "Intact to light touch".into(),
        palpation: "Tenderness over L4-L5 paraspinals".into(),
        diagnosis: "Lumbar strain".into(),
        differential_diagnosis: "Disc herniation".into(),
        prognosis: Prognosis::Good,
        treatment_provided: vec!["Spinal Manipulation".into(), "Soft Tissue Therapy".into()],
        treatment_frequency: "2x per week".into(),
        treatment_duration: "4 weeks".into(),
        home_care_instructions: "Ice 15 minutes after activity".into(),
        follow_up: date(visit_date).succ_opt().unwrap(),
        referrals: vec!["None".into()],
        disability_index: None,
        satisfaction: None,
    }
}

pub(crate) fn treatment_plan(patient_id: &str, start_date: &str) -> TreatmentPlan {
    TreatmentPlan {
        patient_name: "Dana Whitfield".into(),
        patient_id: patient_id.into(),
        diagnosis: "Lumbar strain".into(),
        plan_start_date: date(start_date),
        plan_duration: "6 weeks".into(),
        initial_phase: "3x per week".into(),
        maintenance_phase: "1x per week".into(),
        treatment_modalities: vec!["Spinal Manipulation".into(), "Therapeutic Exercises".into()],
        chiro_techniques: vec!["Diversified Technique".into()],
        treatment_areas: vec!["Lumbar Spine".into(), "Sacroiliac Joints".into()],
        exercises: vec!["Stretching".into(), "Core Stability".into()],
        exercise_frequency: "Daily".into(),
        home_care: "Walk 20 minutes daily".into(),
        short_term_goals: "Reduce pain to 3/10".into(),
        long_term_goals: "Return to full activity".into(),
        outcome_measures: vec![
            "Pain Scale (VAS)".into(),
            "Oswestry Disability Index (ODI)".into(),
        ],
        precautions: "Avoid heavy lifting".into(),
        lifestyle_changes: vec!["Ergonomic Adjustments".into()],
        referrals: vec!["None".into()],
        reevaluation_frequency: "Every 4 weeks".into(),
        informed_consent: true,
    }
}
