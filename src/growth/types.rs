use serde::Serialize;
use thiserror::Error;

use crate::config::DaysPolicy;
use crate::models::{CurveFamily, MeasurementType, Sex};
use crate::reference::{ReferenceError, ReferencePoint};

// ---------------------------------------------------------------------------
// ZScoreResult
// ---------------------------------------------------------------------------

/// Outcome of one Z-score lookup.
///
/// `z_score` is `None` when the age lies outside the table's domain. That is
/// an expected result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZScoreResult {
    pub z_score: Option<f64>,
    /// Age in weeks actually used for the lookup (corrected for preterm).
    pub age_used: f64,
    pub family: CurveFamily,
    pub within_domain: bool,
}

impl ZScoreResult {
    pub(crate) fn out_of_domain(age_used: f64, family: CurveFamily) -> Self {
        Self {
            z_score: None,
            age_used,
            family,
            within_domain: false,
        }
    }
}

// ---------------------------------------------------------------------------
// GrowthError
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum GrowthError {
    #[error("No reference table for {measurement} ({sex}, {family})")]
    ReferenceDataMissing {
        measurement: MeasurementType,
        sex: Sex,
        family: CurveFamily,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Corrected age {weeks:.2} weeks is beyond the INTERGROWTH-21st range")]
    CorrectedAgeOutOfDomain { weeks: f64 },

    #[error("Reference data error: {0}")]
    Reference(#[from] ReferenceError),

    #[error("Internal lock failed")]
    LockFailed,
}

// ---------------------------------------------------------------------------
// GrowthEngine trait
// ---------------------------------------------------------------------------

/// Z-score lookups against growth reference tables.
pub trait GrowthEngine: Send + Sync {
    /// Z-score of `observed` (kg or cm) at `age_weeks` on the selected curve.
    ///
    /// Fails with `ReferenceDataMissing` when no table exists for the
    /// combination. Ages outside the table return a result with no score.
    fn compute_z_score(
        &self,
        age_weeks: f64,
        observed: f64,
        sex: Sex,
        family: CurveFamily,
        measurement: MeasurementType,
    ) -> Result<ZScoreResult, GrowthError>;

    /// The full, unmodified reference table for charting.
    fn get_curve(
        &self,
        sex: Sex,
        family: CurveFamily,
        measurement: MeasurementType,
    ) -> Result<Vec<ReferencePoint>, GrowthError>;

    /// How gestational days outside 0..=6 are handled when this engine's
    /// callers compute corrected age.
    fn days_policy(&self) -> DaysPolicy {
        DaysPolicy::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_table_message_names_the_combination() {
        let err = GrowthError::ReferenceDataMissing {
            measurement: MeasurementType::HeadCircumference,
            sex: Sex::Male,
            family: CurveFamily::Intergrowth,
        };
        assert_eq!(
            err.to_string(),
            "No reference table for head_circumference (male, intergrowth)"
        );
    }

    #[test]
    fn out_of_domain_message_rounds_weeks() {
        let err = GrowthError::CorrectedAgeOutOfDomain { weeks: 64.142857 };
        assert!(err.to_string().contains("64.14 weeks"));
    }

    #[test]
    fn out_of_domain_result_has_no_score() {
        let result = ZScoreResult::out_of_domain(70.0, CurveFamily::Intergrowth);
        assert_eq!(result.z_score, None);
        assert!(!result.within_domain);
        assert_eq!(result.age_used, 70.0);
    }
}
