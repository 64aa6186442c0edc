pub mod enums;
pub mod profile;
pub mod soap_note;
pub mod treatment_plan;

#[cfg(test)]
pub(crate) mod fixtures;

pub use profile::{PainCharacteristic, PatientProfile};
pub use soap_note::SoapNote;
pub use treatment_plan::TreatmentPlan;
