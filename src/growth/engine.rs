use std::sync::{Arc, RwLock};

use crate::config::{
    DaysPolicy, EngineConfig, ReferenceSource, INTERGROWTH_MAX_WEEKS, INTERGROWTH_MIN_WEEKS,
};
use crate::models::{CurveFamily, MeasurementType, Sex};
use crate::reference::{ReferencePoint, ReferenceSet, ReferenceTable, TableKey};

use super::interpolation::{anchors_at, locate_z};
use super::types::{GrowthEngine, GrowthError, ZScoreResult};

/// Preterm subjects are charted on INTERGROWTH-21st, everyone else on WHO.
pub fn select_curve_family(is_preterm: bool) -> CurveFamily {
    if is_preterm {
        CurveFamily::Intergrowth
    } else {
        CurveFamily::Who
    }
}

/// Default growth engine over an immutable reference set.
///
/// The set sits behind an `Arc` so a replacement can be swapped in while
/// lookups already running keep the snapshot they started with.
pub struct DefaultGrowthEngine {
    reference: RwLock<Arc<ReferenceSet>>,
    days_policy: DaysPolicy,
}

impl DefaultGrowthEngine {
    pub fn new(reference: ReferenceSet) -> Self {
        Self {
            reference: RwLock::new(Arc::new(reference)),
            days_policy: DaysPolicy::default(),
        }
    }

    pub fn with_days_policy(mut self, policy: DaysPolicy) -> Self {
        self.days_policy = policy;
        self
    }

    /// Engine over the tables compiled into the crate.
    pub fn bundled() -> Result<Self, GrowthError> {
        Ok(Self::new(ReferenceSet::bundled()?))
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self, GrowthError> {
        let reference = match &config.source {
            ReferenceSource::Bundled => ReferenceSet::bundled()?,
            ReferenceSource::Directory(dir) => ReferenceSet::load(dir)?,
        };
        tracing::info!(
            tables = reference.len(),
            source = ?config.source,
            "Growth engine initialized"
        );
        Ok(Self::new(reference).with_days_policy(config.days_policy))
    }

    /// Current reference set. Cheap: clones the `Arc`, not the tables.
    pub fn snapshot(&self) -> Result<Arc<ReferenceSet>, GrowthError> {
        let guard = self.reference.read().map_err(|_| GrowthError::LockFailed)?;
        Ok(Arc::clone(&*guard))
    }

    /// Swap in a new reference set. Existing snapshots are unaffected.
    pub fn replace_reference_set(&self, reference: ReferenceSet) -> Result<(), GrowthError> {
        let tables = reference.len();
        let mut guard = self.reference.write().map_err(|_| GrowthError::LockFailed)?;
        *guard = Arc::new(reference);
        tracing::info!(tables, "Reference set replaced");
        Ok(())
    }

    fn table<'a>(
        set: &'a ReferenceSet,
        sex: Sex,
        family: CurveFamily,
        measurement: MeasurementType,
    ) -> Result<&'a ReferenceTable, GrowthError> {
        set.get(&TableKey::new(measurement, sex, family)).ok_or_else(|| {
            tracing::warn!(
                measurement = measurement.as_str(),
                sex = sex.as_str(),
                family = family.as_str(),
                "Reference data missing"
            );
            GrowthError::ReferenceDataMissing {
                measurement,
                sex,
                family,
            }
        })
    }
}

/// INTERGROWTH-21st postnatal curves are only defined on 27..=64 weeks,
/// whatever range a loaded table happens to span.
fn within_family_domain(family: CurveFamily, age_weeks: f64) -> bool {
    match family {
        CurveFamily::Intergrowth => {
            (INTERGROWTH_MIN_WEEKS..=INTERGROWTH_MAX_WEEKS).contains(&age_weeks)
        }
        CurveFamily::Who => true,
    }
}

impl GrowthEngine for DefaultGrowthEngine {
    fn compute_z_score(
        &self,
        age_weeks: f64,
        observed: f64,
        sex: Sex,
        family: CurveFamily,
        measurement: MeasurementType,
    ) -> Result<ZScoreResult, GrowthError> {
        if !age_weeks.is_finite() {
            return Err(GrowthError::InvalidInput(format!(
                "age must be finite, got {age_weeks}"
            )));
        }
        if !observed.is_finite() {
            return Err(GrowthError::InvalidInput(format!(
                "{measurement} must be finite, got {observed}"
            )));
        }

        let set = self.snapshot()?;
        let table = Self::table(&set, sex, family, measurement)?;

        let anchors = match anchors_at(table, age_weeks) {
            Some(anchors) if within_family_domain(family, age_weeks) => anchors,
            _ => {
                tracing::debug!(
                    table = %table.key(),
                    age_weeks,
                    min_age = table.min_age(),
                    max_age = table.max_age(),
                    "Age outside reference domain"
                );
                return Ok(ZScoreResult::out_of_domain(age_weeks, family));
            }
        };

        let z_score = locate_z(&anchors, observed);
        tracing::debug!(
            table = %table.key(),
            age_weeks,
            observed,
            z = ?z_score,
            "Z-score computed"
        );

        Ok(ZScoreResult {
            z_score,
            age_used: age_weeks,
            family,
            within_domain: true,
        })
    }

    fn get_curve(
        &self,
        sex: Sex,
        family: CurveFamily,
        measurement: MeasurementType,
    ) -> Result<Vec<ReferencePoint>, GrowthError> {
        let set = self.snapshot()?;
        let table = Self::table(&set, sex, family, measurement)?;
        Ok(table.points().to_vec())
    }

    fn days_policy(&self) -> DaysPolicy {
        self.days_policy
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn bundled_scores_are_pure_and_bounded(
            age in 27.0..64.0f64,
            kg in 0.2..12.0f64,
        ) {
            let e = DefaultGrowthEngine::bundled().unwrap();
            let sex = Sex::Male;
            let first = e
                .compute_z_score(age, kg, sex, CurveFamily::Intergrowth, MeasurementType::Weight)
                .unwrap();
            let second = e
                .compute_z_score(age, kg, sex, CurveFamily::Intergrowth, MeasurementType::Weight)
                .unwrap();
            prop_assert_eq!(first, second);
            let z = first.z_score.unwrap();
            prop_assert!((-3.0..=3.0).contains(&z));
        }
    }
}
