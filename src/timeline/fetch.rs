use chrono::NaiveDate;

use super::types::{TimelineError, VisitMetrics, VisitPoint};
use crate::models::SoapNote;
use crate::store::{RecordKind, RecordStore};

/// Reconstruct a patient's chronological timeline from stored SOAP notes.
///
/// Enumerates the patient's notes, keeps those with a visit date inside
/// `[start, end]` inclusive, loads each, and returns them sorted ascending
/// by visit date. Index 0 is the earliest visit and the last index the
/// latest; delta summaries rely on that ordering. Output is deterministic
/// for a fixed store state and range.
pub fn build_timeline(
    store: &RecordStore,
    patient_id: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<Vec<VisitPoint>, TimelineError> {
    let keys = store.list(RecordKind::SoapNote, patient_id)?;

    let mut points = Vec::new();
    for key in keys {
        // Filter on the key's embedded date before touching the file.
        let Some(date) = key.date() else { continue };
        if date < start || date > end {
            continue;
        }

        let note: SoapNote = store.get(RecordKind::SoapNote, &key)?;
        points.push(VisitPoint {
            visit_date: note.visit_date,
            metrics: VisitMetrics::from_note(&note),
        });
    }

    points.sort_by_key(|p| p.visit_date);

    tracing::debug!(
        patient_id,
        %start,
        %end,
        visits = points.len(),
        "Timeline assembled"
    );
    Ok(points)
}

/// Timeline over every stored visit for the patient, unbounded by date.
pub fn build_full_timeline(
    store: &RecordStore,
    patient_id: &str,
) -> Result<Vec<VisitPoint>, TimelineError> {
    build_timeline(store, patient_id, NaiveDate::MIN, NaiveDate::MAX)
}
