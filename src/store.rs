//! Record store: durable write and point lookup of clinical documents as
//! pretty-printed JSON files under a single root directory.
//!
//! The addressing scheme is load-bearing and must stay compatible with the
//! existing on-disk layout:
//!
//! - profile:        `patient_info_{patient_id}.json`
//! - SOAP note:      `soap_notes_{patient_id}_{YYMMDD}.json`
//! - treatment plan: `treatment_plan_{patient_id}_{YYYYMMDD}.json`
//!
//! Every `put` is a full-file replacement. Writes to the same address are
//! last-write-wins with no lock; the store logs a warning when a put lands
//! on an existing file so a same-day resubmission is observable.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config;

/// The three document kinds the store addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    PatientProfile,
    SoapNote,
    TreatmentPlan,
}

impl RecordKind {
    /// Filename namespace prefix for this kind.
    pub fn prefix(self) -> &'static str {
        match self {
            RecordKind::PatientProfile => "patient_info",
            RecordKind::SoapNote => "soap_notes",
            RecordKind::TreatmentPlan => "treatment_plan",
        }
    }

    /// strftime format of the date embedded in this kind's filenames.
    fn date_format(self) -> Option<&'static str> {
        match self {
            RecordKind::PatientProfile => None,
            RecordKind::SoapNote => Some("%y%m%d"),
            RecordKind::TreatmentPlan => Some("%Y%m%d"),
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecordKind::PatientProfile => "patient profile",
            RecordKind::SoapNote => "SOAP note",
            RecordKind::TreatmentPlan => "treatment plan",
        };
        f.write_str(label)
    }
}

/// Identity of one stored document.
///
/// Profiles are keyed by patient alone; SOAP notes and treatment plans by
/// patient plus the date embedded in their filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordKey {
    Patient(String),
    PatientDate { patient_id: String, date: NaiveDate },
}

impl RecordKey {
    pub fn patient_id(&self) -> &str {
        match self {
            RecordKey::Patient(id) => id,
            RecordKey::PatientDate { patient_id, .. } => patient_id,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            RecordKey::Patient(_) => None,
            RecordKey::PatientDate { date, .. } => Some(*date),
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No {kind} stored at {path}")]
    NotFound { kind: RecordKind, path: PathBuf },

    #[error("Corrupt {kind} at {path}: {source}")]
    Corrupt {
        kind: RecordKind,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode {kind}: {source}")]
    Encode {
        kind: RecordKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("Key {key:?} cannot address a {kind}")]
    KeyMismatch { kind: RecordKind, key: RecordKey },
}

impl StoreError {
    /// True for the recoverable "no data yet" case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// File-backed key-value store over clinical documents.
#[derive(Debug, Clone)]
pub struct RecordStore {
    root: PathBuf,
}

impl RecordStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at the default application data directory.
    pub fn open_default() -> Self {
        Self::new(config::records_dir())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filename for `(kind, key)`, exactly as the legacy layout spells it.
    pub fn file_name(kind: RecordKind, key: &RecordKey) -> Result<String, StoreError> {
        match (kind.date_format(), key) {
            (None, RecordKey::Patient(id)) => Ok(format!("{}_{id}.json", kind.prefix())),
            (Some(fmt), RecordKey::PatientDate { patient_id, date }) => Ok(format!(
                "{}_{patient_id}_{}.json",
                kind.prefix(),
                date.format(fmt)
            )),
            _ => Err(StoreError::KeyMismatch {
                kind,
                key: key.clone(),
            }),
        }
    }

    fn path_for(&self, kind: RecordKind, key: &RecordKey) -> Result<PathBuf, StoreError> {
        Ok(self.root.join(Self::file_name(kind, key)?))
    }

    /// Serialize `record` and write it to the address `(kind, key)`,
    /// fully replacing any document already there.
    pub fn put<T: Serialize>(
        &self,
        kind: RecordKind,
        key: &RecordKey,
        record: &T,
    ) -> Result<(), StoreError> {
        let path = self.path_for(kind, key)?;

        fs::create_dir_all(&self.root).map_err(|source| StoreError::Io {
            path: self.root.clone(),
            source,
        })?;

        let json =
            serde_json::to_string_pretty(record).map_err(|source| StoreError::Encode {
                kind,
                source,
            })?;

        if path.exists() {
            // Last-write-wins by design; surface the collision instead of
            // hiding it.
            tracing::warn!(%kind, path = %path.display(), "Overwriting existing record");
        }

        fs::write(&path, json).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::info!(%kind, path = %path.display(), "Record saved");
        Ok(())
    }

    /// Read and deserialize the document at `(kind, key)`.
    ///
    /// A missing file is `NotFound`; a present but undecodable file is
    /// `Corrupt`; any other read fault is `Io`.
    pub fn get<T: DeserializeOwned>(
        &self,
        kind: RecordKind,
        key: &RecordKey,
    ) -> Result<T, StoreError> {
        let path = self.path_for(kind, key)?;

        let bytes = fs::read(&path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                StoreError::NotFound {
                    kind,
                    path: path.clone(),
                }
            } else {
                StoreError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
            kind,
            path: path.clone(),
            source,
        })
    }

    /// Enumerate the keys of all stored documents of `kind` for one patient,
    /// dated kinds sorted by date ascending.
    ///
    /// A missing store root means nothing was ever written: empty, not an
    /// error. Filenames that carry the right prefix but no parsable date are
    /// skipped.
    pub fn list(&self, kind: RecordKind, patient_id: &str) -> Result<Vec<RecordKey>, StoreError> {
        let Some(date_fmt) = kind.date_format() else {
            let key = RecordKey::Patient(patient_id.to_string());
            let path = self.path_for(kind, &key)?;
            return Ok(if path.exists() { vec![key] } else { Vec::new() });
        };

        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.root.clone(),
                    source,
                })
            }
        };

        let wanted = format!("{}_{patient_id}_", kind.prefix());
        let mut keys = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|source| StoreError::Io {
                path: self.root.clone(),
                source,
            })?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };

            let Some(stem) = name
                .strip_prefix(wanted.as_str())
                .and_then(|rest| rest.strip_suffix(".json"))
            else {
                continue;
            };

            match NaiveDate::parse_from_str(stem, date_fmt) {
                Ok(date) => keys.push(RecordKey::PatientDate {
                    patient_id: patient_id.to_string(),
                    date,
                }),
                Err(_) => {
                    tracing::debug!(%kind, file = name, "Skipping non-conforming filename");
                }
            }
        }

        keys.sort_by_key(|k| k.date());
        Ok(keys)
    }
}
