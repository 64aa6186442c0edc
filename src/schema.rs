//! Record schema: closed option catalogs for the multi-choice fields and
//! wholesale validation of each document kind.
//!
//! Validation collects every violation instead of failing on the first, so
//! one rejection can report everything the form needs to fix. Cross-record
//! invariants (consent gates) live in the capture layer, not here.

use thiserror::Error;

use crate::models::enums::{Joint, Movement, PainQuality};
use crate::models::{PatientProfile, SoapNote, TreatmentPlan};

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Record failed validation: {}", violations.join("; "))]
    Invalid { violations: Vec<String> },
}

// ── Option catalogs ─────────────────────────────────────────────────────────
// One const per multi-choice or single-choice form field. Free-text fields
// have no catalog.

pub const EXERCISE_TYPES: &[&str] = &[
    "Walking", "Running", "Swimming", "Weightlifting", "Yoga", "Other",
];

pub const PAIN_LOCATIONS: &[&str] = &[
    "Neck", "Upper Back", "Middle Back", "Lower Back", "Shoulders", "Hips", "Knees", "Ankles",
    "Wrists", "Elbows",
];

pub const SOAP_PAIN_QUALITIES: &[&str] = &[
    "Sharp", "Dull", "Aching", "Burning", "Tingling", "Numbness", "Throbbing", "Shooting",
    "Stabbing",
];

pub const AGGRAVATING_FACTORS: &[&str] = &[
    "Sitting", "Standing", "Walking", "Lifting", "Bending", "Twisting", "Lying down", "Stress",
    "Weather changes",
];

pub const RELIEVING_FACTORS: &[&str] = &[
    "Rest", "Ice", "Heat", "Stretching", "Exercise", "Medication", "Massage",
];

pub const AFFECTED_ACTIVITIES: &[&str] = &[
    "Work", "Sleep", "Exercise", "Household Chores", "Social Activities", "Driving",
    "Personal Care",
];

pub const ASSOCIATED_SYMPTOMS: &[&str] = &[
    "Headache", "Dizziness", "Nausea", "Weakness", "Fatigue", "Stiffness", "Muscle spasms",
];

pub const TREATMENTS_PROVIDED: &[&str] = &[
    "Spinal Manipulation", "Soft Tissue Therapy", "Electrical Stimulation", "Ultrasound",
    "Exercise Prescription", "Hot/Cold Therapy",
];

pub const TREATMENT_FREQUENCIES: &[&str] =
    &["1x per week", "2x per week", "3x per week", "As needed"];

pub const TREATMENT_DURATIONS: &[&str] = &[
    "2 weeks", "4 weeks", "6 weeks", "8 weeks", "12 weeks", "Ongoing",
];

pub const SOAP_REFERRALS: &[&str] = &[
    "None", "X-ray", "MRI", "CT Scan", "Blood Work", "Specialist Consultation",
];

pub const PLAN_DURATIONS: &[&str] = &[
    "2 weeks", "4 weeks", "6 weeks", "2 months", "3 months", "6 months", "Ongoing",
];

pub const INITIAL_PHASE_FREQUENCIES: &[&str] =
    &["Daily", "3x per week", "2x per week", "1x per week"];

pub const MAINTENANCE_PHASE_FREQUENCIES: &[&str] =
    &["1x per week", "1x per 2 weeks", "1x per month", "As needed"];

pub const TREATMENT_MODALITIES: &[&str] = &[
    "Spinal Manipulation", "Extremity Manipulation", "Soft Tissue Therapy",
    "Electrical Stimulation", "Ultrasound", "Low-Level Laser Therapy", "Mechanical Traction",
    "Therapeutic Exercises", "Kinesio Taping", "Acupuncture", "Dry Needling",
    "Nutritional Counseling",
];

pub const CHIRO_TECHNIQUES: &[&str] = &[
    "Diversified Technique", "Gonstead Technique", "Activator Method", "Thompson Technique",
    "Flexion-Distraction", "Sacro-Occipital Technique (SOT)", "Applied Kinesiology",
    "Chiropractic Biophysics (CBP)",
];

pub const TREATMENT_AREAS: &[&str] = &[
    "Cervical Spine", "Thoracic Spine", "Lumbar Spine", "Sacroiliac Joints", "Shoulders",
    "Elbows", "Wrists", "Hips", "Knees", "Ankles",
];

pub const PLAN_EXERCISES: &[&str] = &[
    "Stretching", "Strengthening", "Range of Motion", "Balance Training", "Core Stability",
    "Posture Correction", "Ergonomic Training",
];

pub const PLAN_EXERCISE_FREQUENCIES: &[&str] =
    &["Daily", "Every other day", "3x per week", "2x per week"];

pub const OUTCOME_MEASURES: &[&str] = &[
    "Pain Scale (VAS)", "Oswestry Disability Index (ODI)", "Neck Disability Index (NDI)",
    "Roland-Morris Disability Questionnaire", "Patient-Specific Functional Scale (PSFS)",
    "Range of Motion Measurements", "Muscle Strength Testing",
];

pub const LIFESTYLE_CHANGES: &[&str] = &[
    "Ergonomic Adjustments", "Diet Modifications", "Stress Management", "Sleep Hygiene",
    "Increase Physical Activity", "Smoking Cessation",
];

pub const PLAN_REFERRALS: &[&str] = &[
    "None", "Physical Therapist", "Massage Therapist", "Pain Management Specialist",
    "Orthopedic Surgeon", "Neurologist", "Rheumatologist", "Nutritionist",
];

pub const REEVALUATION_FREQUENCIES: &[&str] = &[
    "Every 4 weeks", "Every 6 weeks", "Every 8 weeks", "Every 12 weeks",
];

/// Maximum range-of-motion reading in degrees.
pub const ROM_MAX_DEGREES: u16 = 180;

// ── Validation ──────────────────────────────────────────────────────────────

/// Validate a patient profile against its field domains.
pub fn validate_profile(profile: &PatientProfile) -> Result<(), ValidationError> {
    let mut violations = Vec::new();

    check_required("patient_id", &profile.patient_id, &mut violations);
    check_required("patient_name", &profile.patient_name, &mut violations);

    if profile.sleep_hours > 12 {
        violations.push(format!(
            "sleep_hours {} exceeds maximum of 12",
            profile.sleep_hours
        ));
    }
    if profile.stress_level > 10 {
        violations.push(format!(
            "stress_level {} exceeds maximum of 10",
            profile.stress_level
        ));
    }

    for (field, value) in [
        ("height_ft", profile.height_ft),
        ("height_in", profile.height_in),
        ("weight_lbs", profile.weight_lbs),
    ] {
        if !value.is_finite() || value < 0.0 {
            violations.push(format!("{field} must be a non-negative number, got {value}"));
        }
    }

    for quality in PainQuality::ALL {
        match profile.pain_characteristics.get(&quality) {
            None => violations.push(format!("pain_characteristics missing entry for {quality}")),
            Some(pc) if pc.intensity > 10 => violations.push(format!(
                "pain_characteristics.{quality}.intensity {} exceeds maximum of 10",
                pc.intensity
            )),
            Some(_) => {}
        }
    }

    check_subset(
        "exercise_types",
        &profile.exercise_types,
        EXERCISE_TYPES,
        &mut violations,
    );

    finish("patient profile", violations)
}

/// Validate a SOAP note against its field domains.
pub fn validate_soap_note(note: &SoapNote) -> Result<(), ValidationError> {
    let mut violations = Vec::new();

    check_required("patient_id", &note.patient_id, &mut violations);

    if note.pain_level > 10 {
        violations.push(format!("pain_level {} exceeds maximum of 10", note.pain_level));
    }

    check_subset("pain_location", &note.pain_location, PAIN_LOCATIONS, &mut violations);
    check_subset(
        "pain_characteristics",
        &note.pain_characteristics,
        SOAP_PAIN_QUALITIES,
        &mut violations,
    );
    check_subset(
        "aggravating_factors",
        &note.aggravating_factors,
        AGGRAVATING_FACTORS,
        &mut violations,
    );
    check_subset(
        "relieving_factors",
        &note.relieving_factors,
        RELIEVING_FACTORS,
        &mut violations,
    );
    check_subset(
        "affected_activities",
        &note.affected_activities,
        AFFECTED_ACTIVITIES,
        &mut violations,
    );
    check_subset(
        "associated_symptoms",
        &note.associated_symptoms,
        ASSOCIATED_SYMPTOMS,
        &mut violations,
    );
    check_subset(
        "treatment_provided",
        &note.treatment_provided,
        TREATMENTS_PROVIDED,
        &mut violations,
    );
    check_subset("referrals", &note.referrals, SOAP_REFERRALS, &mut violations);
    check_choice(
        "treatment_frequency",
        &note.treatment_frequency,
        TREATMENT_FREQUENCIES,
        &mut violations,
    );
    check_choice(
        "treatment_duration",
        &note.treatment_duration,
        TREATMENT_DURATIONS,
        &mut violations,
    );

    for joint in Joint::ALL {
        for movement in Movement::ALL {
            let degrees = note.rom(joint, movement);
            if degrees > ROM_MAX_DEGREES {
                violations.push(format!(
                    "{joint}_{movement} {degrees} degrees exceeds maximum of {ROM_MAX_DEGREES}"
                ));
            }
        }
    }

    validate_vitals(note, &mut violations);

    if let Some(odi) = note.disability_index {
        if odi > 100 {
            violations.push(format!("disability_index {odi} exceeds maximum of 100"));
        }
    }
    if let Some(sat) = note.satisfaction {
        if sat > 10 {
            violations.push(format!("satisfaction {sat} exceeds maximum of 10"));
        }
    }

    finish("SOAP note", violations)
}

/// Validate a treatment plan against its field domains.
pub fn validate_treatment_plan(plan: &TreatmentPlan) -> Result<(), ValidationError> {
    let mut violations = Vec::new();

    check_required("patient_id", &plan.patient_id, &mut violations);
    check_required("patient_name", &plan.patient_name, &mut violations);

    check_choice("plan_duration", &plan.plan_duration, PLAN_DURATIONS, &mut violations);
    check_choice(
        "initial_phase",
        &plan.initial_phase,
        INITIAL_PHASE_FREQUENCIES,
        &mut violations,
    );
    check_choice(
        "maintenance_phase",
        &plan.maintenance_phase,
        MAINTENANCE_PHASE_FREQUENCIES,
        &mut violations,
    );
    check_choice(
        "exercise_frequency",
        &plan.exercise_frequency,
        PLAN_EXERCISE_FREQUENCIES,
        &mut violations,
    );
    check_choice(
        "reevaluation_frequency",
        &plan.reevaluation_frequency,
        REEVALUATION_FREQUENCIES,
        &mut violations,
    );

    check_subset(
        "treatment_modalities",
        &plan.treatment_modalities,
        TREATMENT_MODALITIES,
        &mut violations,
    );
    check_subset(
        "chiro_techniques",
        &plan.chiro_techniques,
        CHIRO_TECHNIQUES,
        &mut violations,
    );
    check_subset(
        "treatment_areas",
        &plan.treatment_areas,
        TREATMENT_AREAS,
        &mut violations,
    );
    check_subset("exercises", &plan.exercises, PLAN_EXERCISES, &mut violations);
    check_subset(
        "outcome_measures",
        &plan.outcome_measures,
        OUTCOME_MEASURES,
        &mut violations,
    );
    check_subset(
        "lifestyle_changes",
        &plan.lifestyle_changes,
        LIFESTYLE_CHANGES,
        &mut violations,
    );
    check_subset("referrals", &plan.referrals, PLAN_REFERRALS, &mut violations);

    finish("treatment plan", violations)
}

/// Vitals may only be populated when the `vital_signs` flag is set, and each
/// reading has a plausible clinical bound.
fn validate_vitals(note: &SoapNote, violations: &mut Vec<String>) {
    if !note.vital_signs {
        let any_present = note.blood_pressure.is_some()
            || note.heart_rate.is_some()
            || note.respiratory_rate.is_some()
            || note.temperature.is_some()
            || note.height_ft.is_some()
            || note.height_in.is_some()
            || note.weight_lbs.is_some();
        if any_present {
            violations.push("vitals present but vital_signs flag is not set".into());
        }
        return;
    }

    if let Some(hr) = note.heart_rate {
        if hr > 200 {
            violations.push(format!("heart_rate {hr} exceeds maximum of 200"));
        }
    }
    if let Some(rr) = note.respiratory_rate {
        if rr > 60 {
            violations.push(format!("respiratory_rate {rr} exceeds maximum of 60"));
        }
    }
    if let Some(temp) = note.temperature {
        if !(35.0..=42.0).contains(&temp) {
            violations.push(format!("temperature {temp} outside 35.0-42.0"));
        }
    }
}

fn check_required(field: &str, value: &str, violations: &mut Vec<String>) {
    if value.trim().is_empty() {
        violations.push(format!("{field} is required"));
    }
}

fn check_choice(field: &str, value: &str, allowed: &[&str], violations: &mut Vec<String>) {
    if !allowed.contains(&value) {
        violations.push(format!("{field}: {value:?} is not an allowed option"));
    }
}

fn check_subset(field: &str, values: &[String], allowed: &[&str], violations: &mut Vec<String>) {
    for value in values {
        if !allowed.contains(&value.as_str()) {
            violations.push(format!("{field}: {value:?} is not an allowed option"));
        }
    }
}

fn finish(kind: &str, violations: Vec<String>) -> Result<(), ValidationError> {
    if violations.is_empty() {
        return Ok(());
    }
    tracing::warn!(
        kind,
        violation_count = violations.len(),
        "Record rejected by schema validation"
    );
    Err(ValidationError::Invalid { violations })
}
