//! ChiroTrack — clinical intake and progress tracking core for a
//! single-practitioner chiropractic practice.
//!
//! The crate is the record-keeping layer behind the intake forms and the
//! progress dashboard: document shapes and validation, a JSON-file record
//! store with the legacy addressing scheme, and the timeline aggregation
//! that turns per-visit SOAP notes into progress series and deltas.
//! Presentation (forms, charts, page layout) lives with the callers.

pub mod config;
pub mod dashboard; // Read-only overview payload for the dashboard collaborator
pub mod intake; // Form submissions: consent gates + validation + persistence
pub mod models; // Document shapes: profile, SOAP note, treatment plan
pub mod schema; // Option catalogs + per-record validation
pub mod store; // JSON-file record store (put / get / list)
pub mod timeline; // Chronological visit aggregation + change summaries

use tracing_subscriber::EnvFilter;

/// Initialize tracing for binaries embedding this crate.
///
/// Honors `RUST_LOG` when set, otherwise falls back to the crate-scoped
/// default filter.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
}
