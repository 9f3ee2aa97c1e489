//! Neonatal growth Z-scores against WHO and INTERGROWTH-21st reference curves.
//!
//! Preterm newborns are assessed at corrected gestational age on
//! INTERGROWTH-21st tables, term newborns at chronological age on WHO
//! tables. See [`growth`] for the engine and [`consultation`] for the
//! write-path and charting helpers built on it.

pub mod assessment;
pub mod config;
pub mod consultation;
pub mod growth;
pub mod models;
pub mod reference;

pub use growth::{DefaultGrowthEngine, GrowthEngine, GrowthError, ZScoreResult};
pub use reference::{ReferenceError, ReferenceSet};

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber filtered by `RUST_LOG`, falling back to
/// [`config::default_log_filter`]. Does nothing if the host already
/// installed one.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init();

    tracing::debug!("{} v{} tracing ready", config::CRATE_NAME, config::CRATE_VERSION);
}
