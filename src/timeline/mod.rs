//! Timeline aggregation — chronological view of a patient's progress.
//!
//! Reassembles the per-visit SOAP note documents into a date-ordered
//! sequence of visit metrics, derives per-metric series for charting, and
//! summarises first-vs-latest change. Everything here is deterministic for
//! a fixed store state; demo data generation has no place in this layer.

mod aggregates;
mod fetch;
mod types;

pub use aggregates::*;
pub use fetch::*;
pub use types::*;

// ── Tests ──────────────────────────────────────────────────────────────────
