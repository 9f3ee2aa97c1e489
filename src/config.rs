use std::path::PathBuf;

/// Crate-level constants
pub const CRATE_NAME: &str = "neonatal-growth";
pub const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Gestational weeks at birth below which a newborn is preterm.
pub const PRETERM_THRESHOLD_WEEKS: u32 = 37;

/// INTERGROWTH-21st postnatal tables cover 27 to 64 corrected weeks.
pub const INTERGROWTH_MIN_WEEKS: f64 = 27.0;
pub const INTERGROWTH_MAX_WEEKS: f64 = 64.0;

/// Upper bound of the chart window for both curve families.
pub const CHART_MAX_WEEKS: f64 = 64.0;

/// Z-scores never extrapolate past the outermost anchors.
pub const Z_SCORE_CLAMP: f64 = 3.0;

/// |z| above this flags a measurement as outside the expected range.
pub const ALERT_THRESHOLD: f64 = 2.0;
/// |z| at or above this makes a consultation critical.
pub const CRITICAL_THRESHOLD: f64 = 3.0;

/// Default tracing filter when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "neonatal_growth=info"
}

// ═══════════════════════════════════════════════════════════
// Engine configuration
// ═══════════════════════════════════════════════════════════

/// Where reference tables come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReferenceSource {
    /// Tables compiled into the crate from `resources/reference/`.
    #[default]
    Bundled,
    /// Same layout on disk: `<family>/<measurement>_<sex>.json`.
    Directory(PathBuf),
}

/// What to do with gestational days at birth outside 0..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DaysPolicy {
    /// Fail with `GrowthError::InvalidInput`.
    #[default]
    Reject,
    /// Clamp into 0..=6 and log a warning.
    Clamp,
}

#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    pub source: ReferenceSource,
    pub days_policy: DaysPolicy,
}

impl EngineConfig {
    /// Config reading tables from a directory instead of the bundled set.
    pub fn from_directory(dir: impl Into<PathBuf>) -> Self {
        Self {
            source: ReferenceSource::Directory(dir.into()),
            ..Self::default()
        }
    }
}
