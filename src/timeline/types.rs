use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::enums::{Joint, Movement};
use crate::models::SoapNote;
use crate::store::StoreError;

/// A numeric progress metric that can be charted or delta-summarised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    PainLevel,
    DisabilityIndex,
    Satisfaction,
    Rom(Joint, Movement),
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::PainLevel => f.write_str("pain_level"),
            Metric::DisabilityIndex => f.write_str("disability_index"),
            Metric::Satisfaction => f.write_str("satisfaction"),
            Metric::Rom(joint, movement) => write!(f, "{joint}_{movement}"),
        }
    }
}

/// One range-of-motion reading extracted from a visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RomReading {
    pub joint: Joint,
    pub movement: Movement,
    pub degrees: u16,
}

/// The chartable measurements of a single visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitMetrics {
    pub pain_level: u8,
    pub disability_index: Option<u8>,
    pub satisfaction: Option<u8>,
    pub range_of_motion: Vec<RomReading>,
}

impl VisitMetrics {
    pub fn from_note(note: &SoapNote) -> Self {
        let mut range_of_motion = Vec::with_capacity(10);
        for joint in Joint::ALL {
            for movement in Movement::ALL {
                range_of_motion.push(RomReading {
                    joint,
                    movement,
                    degrees: note.rom(joint, movement),
                });
            }
        }
        Self {
            pain_level: note.pain_level,
            disability_index: note.disability_index,
            satisfaction: note.satisfaction,
            range_of_motion,
        }
    }

    /// Value of one metric at this visit, `None` if it was never recorded.
    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::PainLevel => Some(f64::from(self.pain_level)),
            Metric::DisabilityIndex => self.disability_index.map(f64::from),
            Metric::Satisfaction => self.satisfaction.map(f64::from),
            Metric::Rom(joint, movement) => self
                .range_of_motion
                .iter()
                .find(|r| r.joint == joint && r.movement == movement)
                .map(|r| f64::from(r.degrees)),
        }
    }
}

/// One entry of a patient's chronological timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitPoint {
    pub visit_date: NaiveDate,
    pub metrics: VisitMetrics,
}

/// First-vs-latest comparison for one metric.
///
/// `delta = initial - current`: positive means the value went down, which is
/// improvement for pain-like metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChangeSummary {
    pub initial: f64,
    pub current: f64,
    pub delta: f64,
}

#[derive(Error, Debug)]
pub enum TimelineError {
    #[error("No visits in the requested range")]
    EmptyTimeline,

    #[error("Metric {0} was not recorded for this timeline")]
    MetricUnavailable(Metric),

    #[error(transparent)]
    Store(#[from] StoreError),
}
