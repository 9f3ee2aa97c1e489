use serde::Serialize;
use uuid::Uuid;

use crate::assessment::GrowthAlert;
use crate::growth::{
    corrected_age, select_curve_family, CorrectedAge, GrowthEngine, GrowthError,
};
use crate::models::{Consultation, CurveFamily, MeasurementType, Subject};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreStatus {
    Scored,
    /// Age outside the table; stored as an absent score.
    OutOfDomain,
    /// No table for this measurement on the selected curve.
    NoReference,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeasurementScore {
    pub measurement: MeasurementType,
    /// Observed value in kg or cm.
    pub observed: f64,
    /// Rounded to two decimals.
    pub z_score: Option<f64>,
    pub status: ScoreStatus,
}

/// The three Z-scores stored on a consultation record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsultationScores {
    pub consultation_id: Uuid,
    pub age: CorrectedAge,
    pub family: CurveFamily,
    pub weight: MeasurementScore,
    pub length: MeasurementScore,
    pub head_circumference: MeasurementScore,
}

impl ConsultationScores {
    pub fn scores(&self) -> [MeasurementScore; 3] {
        [self.weight, self.length, self.head_circumference]
    }

    pub fn get(&self, measurement: MeasurementType) -> &MeasurementScore {
        match measurement {
            MeasurementType::Weight => &self.weight,
            MeasurementType::Length => &self.length,
            MeasurementType::HeadCircumference => &self.head_circumference,
        }
    }

    pub fn alert(&self) -> Option<GrowthAlert> {
        let scores = self.scores().map(|s| (s.measurement, s.z_score));
        GrowthAlert::from_scores(&scores)
    }
}

fn round2(z: f64) -> f64 {
    (z * 100.0).round() / 100.0
}

fn score_measurement<E: GrowthEngine + ?Sized>(
    engine: &E,
    age: &CorrectedAge,
    subject: &Subject,
    family: CurveFamily,
    consultation_id: Uuid,
    measurement: MeasurementType,
    observed: f64,
) -> Result<MeasurementScore, GrowthError> {
    if !(observed.is_finite() && observed > 0.0) {
        return Err(GrowthError::InvalidInput(format!(
            "{measurement} must be a positive number, got {observed}"
        )));
    }

    let lookup =
        engine.compute_z_score(age.age_weeks, observed, subject.sex, family, measurement);
    let (z_score, status) = match lookup {
        Ok(result) => match result.z_score {
            Some(z) => (Some(round2(z)), ScoreStatus::Scored),
            None => (None, ScoreStatus::OutOfDomain),
        },
        Err(GrowthError::ReferenceDataMissing { .. }) => {
            tracing::warn!(
                consultation_id = %consultation_id,
                measurement = measurement.as_str(),
                family = family.as_str(),
                "No reference table, score left empty"
            );
            (None, ScoreStatus::NoReference)
        }
        Err(e) => return Err(e),
    };

    Ok(MeasurementScore {
        measurement,
        observed,
        z_score,
        status,
    })
}

/// Score a consultation's three measurements for storage.
///
/// A preterm subject past 64 corrected weeks is rejected outright. A missing
/// table for one measurement is recorded as `NoReference` and the others are
/// still scored.
pub fn score_consultation<E: GrowthEngine + ?Sized>(
    engine: &E,
    subject: &Subject,
    consultation: &Consultation,
) -> Result<ConsultationScores, GrowthError> {
    if consultation.subject_id != subject.id {
        return Err(GrowthError::InvalidInput(format!(
            "consultation {} belongs to subject {}, not {}",
            consultation.id, consultation.subject_id, subject.id
        )));
    }

    let age = corrected_age(
        subject.birth_date,
        subject.gestational_age_at_birth,
        consultation.observed_at.date(),
        engine.days_policy(),
    )?;

    if age.is_preterm && !age.within_domain {
        tracing::warn!(
            consultation_id = %consultation.id,
            corrected_weeks = age.age_weeks,
            "Consultation rejected: corrected age beyond INTERGROWTH-21st range"
        );
        return Err(GrowthError::CorrectedAgeOutOfDomain {
            weeks: age.age_weeks,
        });
    }

    let family = select_curve_family(age.is_preterm);

    let score = |measurement, observed| {
        score_measurement(engine, &age, subject, family, consultation.id, measurement, observed)
    };

    let scores = ConsultationScores {
        consultation_id: consultation.id,
        age,
        family,
        weight: score(MeasurementType::Weight, consultation.weight.kilograms())?,
        length: score(MeasurementType::Length, consultation.length_cm)?,
        head_circumference: score(
            MeasurementType::HeadCircumference,
            consultation.head_circumference_cm,
        )?,
    };

    tracing::info!(
        consultation_id = %consultation.id,
        family = family.as_str(),
        age_weeks = age.age_weeks,
        z_weight = ?scores.weight.z_score,
        z_length = ?scores.length.z_score,
        z_head = ?scores.head_circumference.z_score,
        "Consultation scored"
    );

    Ok(scores)
}
