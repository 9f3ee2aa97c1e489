//! Write-path scoring and chart series for consultations.
//!
//! Both compute corrected age through [`crate::growth::corrected_age`], so
//! stored Z-scores and charted ages always agree.

mod chart;
mod scoring;

pub use chart::{chart_series, chart_window, ChartPoint};
pub use scoring::{score_consultation, ConsultationScores, MeasurementScore, ScoreStatus};
