use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::config::{DaysPolicy, CHART_MAX_WEEKS, INTERGROWTH_MIN_WEEKS};
use crate::growth::{corrected_age, GrowthEngine, GrowthError};
use crate::models::{Consultation, CurveFamily, MeasurementType, Sex, Subject};
use crate::reference::ReferencePoint;

/// One observation placed on the chart's age axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub consultation_id: Uuid,
    pub observed_on: NaiveDate,
    /// Corrected weeks for preterm subjects, chronological otherwise.
    pub age_weeks: f64,
    pub whole_weeks: u32,
    pub days: u32,
    /// kg for weight, cm otherwise.
    pub value: f64,
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

fn measurement_value(consultation: &Consultation, measurement: MeasurementType) -> f64 {
    match measurement {
        MeasurementType::Weight => consultation.weight.kilograms(),
        MeasurementType::Length => consultation.length_cm,
        MeasurementType::HeadCircumference => consultation.head_circumference_cm,
    }
}

/// A subject's observations of one measurement, sorted by age.
///
/// Uses the same corrected-age rule as scoring. Preterm points outside
/// 27..=64 corrected weeks and term points past 64 weeks are dropped, as are
/// consultations recorded for another subject and non-finite values.
pub fn chart_series(
    subject: &Subject,
    consultations: &[Consultation],
    measurement: MeasurementType,
    policy: DaysPolicy,
) -> Result<Vec<ChartPoint>, GrowthError> {
    let mut points = Vec::with_capacity(consultations.len());

    for consultation in consultations.iter().filter(|c| c.subject_id == subject.id) {
        let value = measurement_value(consultation, measurement);
        if !value.is_finite() {
            continue;
        }

        let observed_on = consultation.observed_at.date();
        let age = corrected_age(
            subject.birth_date,
            subject.gestational_age_at_birth,
            observed_on,
            policy,
        )?;

        let in_window = if age.is_preterm {
            (INTERGROWTH_MIN_WEEKS..=CHART_MAX_WEEKS).contains(&age.age_weeks)
        } else {
            age.age_weeks <= CHART_MAX_WEEKS
        };
        if !in_window {
            tracing::debug!(
                consultation_id = %consultation.id,
                age_weeks = age.age_weeks,
                "Observation outside chart window"
            );
            continue;
        }

        points.push(ChartPoint {
            consultation_id: consultation.id,
            observed_on,
            age_weeks: round3(age.age_weeks),
            whole_weeks: age.whole_weeks,
            days: age.days,
            value,
        });
    }

    points.sort_by(|a, b| a.age_weeks.total_cmp(&b.age_weeks));
    Ok(points)
}

/// The reference curve clipped to the chart window: 27..=64 weeks for
/// INTERGROWTH-21st, table start to 64 weeks for WHO.
pub fn chart_window<E: GrowthEngine + ?Sized>(
    engine: &E,
    sex: Sex,
    family: CurveFamily,
    measurement: MeasurementType,
) -> Result<Vec<ReferencePoint>, GrowthError> {
    let min_age = match family {
        CurveFamily::Intergrowth => INTERGROWTH_MIN_WEEKS,
        CurveFamily::Who => f64::NEG_INFINITY,
    };
    let mut curve = engine.get_curve(sex, family, measurement)?;
    curve.retain(|p| p.age >= min_age && p.age <= CHART_MAX_WEEKS);
    Ok(curve)
}
