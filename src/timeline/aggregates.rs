use chrono::{Datelike, NaiveDate};

use super::types::{ChangeSummary, Metric, TimelineError, VisitPoint};

/// First-vs-latest change for one metric over an already sorted timeline.
///
/// `EmptyTimeline` when there are no visits; `MetricUnavailable` when the
/// boundary visits never recorded the metric (the optional scores).
pub fn summarize_change(
    timeline: &[VisitPoint],
    metric: Metric,
) -> Result<ChangeSummary, TimelineError> {
    let (first, last) = match (timeline.first(), timeline.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(TimelineError::EmptyTimeline),
    };

    let initial = first
        .metrics
        .value(metric)
        .ok_or(TimelineError::MetricUnavailable(metric))?;
    let current = last
        .metrics
        .value(metric)
        .ok_or(TimelineError::MetricUnavailable(metric))?;

    Ok(ChangeSummary {
        initial,
        current,
        delta: initial - current,
    })
}

/// Per-visit series of one metric, for charting. Visits that never recorded
/// the metric are skipped rather than zero-filled.
pub fn metric_series(timeline: &[VisitPoint], metric: Metric) -> Vec<(NaiveDate, f64)> {
    timeline
        .iter()
        .filter_map(|p| p.metrics.value(metric).map(|v| (p.visit_date, v)))
        .collect()
}

// ── Derived read-time values ────────────────────────────────────────────────
// Computed from stored fields on every read, never persisted, so they cannot
// go stale.

/// Whole years of age on a given date.
pub fn age_on(dob: NaiveDate, on: NaiveDate) -> u32 {
    let mut years = on.year() - dob.year();
    if (on.month(), on.day()) < (dob.month(), dob.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

/// Body mass index from imperial units: 703 * lbs / inches^2.
/// `None` when the stored height is zero or nonsensical.
pub fn bmi(height_ft: f64, height_in: f64, weight_lbs: f64) -> Option<f64> {
    let inches = height_ft * 12.0 + height_in;
    if !inches.is_finite() || inches <= 0.0 || !weight_lbs.is_finite() || weight_lbs < 0.0 {
        return None;
    }
    Some(703.0 * weight_lbs / (inches * inches))
}
