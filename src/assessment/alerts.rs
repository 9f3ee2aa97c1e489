use serde::Serialize;

use crate::config::{ALERT_THRESHOLD, CRITICAL_THRESHOLD};
use crate::models::MeasurementType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Below,
    Above,
}

/// Consultation-level severity, ordered Attention < Alert < Critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Attention,
    Alert,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Attention => "attention",
            Self::Alert => "alert",
            Self::Critical => "critical",
        }
    }

    /// Severity over the scores that are present.
    pub fn from_scores(scores: impl IntoIterator<Item = f64>) -> Self {
        let worst = scores.into_iter().map(f64::abs).fold(0.0, f64::max);
        if worst >= CRITICAL_THRESHOLD {
            Self::Critical
        } else if worst >= ALERT_THRESHOLD {
            Self::Alert
        } else {
            Self::Attention
        }
    }
}

/// One measurement whose Z-score lies outside ±2.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZScoreFlag {
    pub measurement: MeasurementType,
    pub z_score: f64,
    pub direction: Direction,
}

impl ZScoreFlag {
    pub fn check(measurement: MeasurementType, z_score: f64) -> Option<Self> {
        let direction = if z_score < -ALERT_THRESHOLD {
            Direction::Below
        } else if z_score > ALERT_THRESHOLD {
            Direction::Above
        } else {
            return None;
        };
        Some(Self {
            measurement,
            z_score,
            direction,
        })
    }

    pub fn message(&self) -> String {
        let what = match self.measurement {
            MeasurementType::Weight => "Weight",
            MeasurementType::Length => "Length",
            MeasurementType::HeadCircumference => "Head circumference",
        };
        let side = match self.direction {
            Direction::Below => "below",
            Direction::Above => "above",
        };
        format!("{what} {side} expected")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthAlert {
    pub flags: Vec<ZScoreFlag>,
    pub severity: Severity,
}

impl GrowthAlert {
    /// Build an alert from a consultation's scores. Missing scores are
    /// ignored; returns `None` when no score is flagged.
    pub fn from_scores(scores: &[(MeasurementType, Option<f64>)]) -> Option<Self> {
        let flags: Vec<ZScoreFlag> = scores
            .iter()
            .filter_map(|&(measurement, z)| ZScoreFlag::check(measurement, z?))
            .collect();
        if flags.is_empty() {
            return None;
        }

        let severity = Severity::from_scores(scores.iter().filter_map(|&(_, z)| z));
        Some(Self { flags, severity })
    }

    /// Flag messages joined for display.
    pub fn summary(&self) -> String {
        self.flags
            .iter()
            .map(ZScoreFlag::message)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_thresholds() {
        assert_eq!(Severity::from_scores([0.5, -1.9]), Severity::Attention);
        assert_eq!(Severity::from_scores([2.0]), Severity::Alert);
        assert_eq!(Severity::from_scores([-2.4, 1.0]), Severity::Alert);
        assert_eq!(Severity::from_scores([-3.0]), Severity::Critical);
        assert_eq!(Severity::from_scores(std::iter::empty()), Severity::Attention);
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Attention < Severity::Alert);
        assert!(Severity::Alert < Severity::Critical);
    }

    #[test]
    fn flags_are_strictly_beyond_two() {
        assert!(ZScoreFlag::check(MeasurementType::Weight, 2.0).is_none());
        assert!(ZScoreFlag::check(MeasurementType::Weight, -2.0).is_none());
        let below = ZScoreFlag::check(MeasurementType::Weight, -2.1).unwrap();
        assert_eq!(below.direction, Direction::Below);
        let above = ZScoreFlag::check(MeasurementType::Length, 2.5).unwrap();
        assert_eq!(above.direction, Direction::Above);
    }

    #[test]
    fn no_flags_no_alert() {
        let scores = [
            (MeasurementType::Weight, Some(1.2)),
            (MeasurementType::Length, None),
            (MeasurementType::HeadCircumference, Some(-2.0)),
        ];
        assert!(GrowthAlert::from_scores(&scores).is_none());
    }

    #[test]
    fn alert_collects_flags_and_worst_severity() {
        let scores = [
            (MeasurementType::Weight, Some(-2.3)),
            (MeasurementType::Length, Some(-3.0)),
            (MeasurementType::HeadCircumference, None),
        ];
        let alert = GrowthAlert::from_scores(&scores).unwrap();
        assert_eq!(alert.flags.len(), 2);
        assert_eq!(alert.severity, Severity::Critical);
        assert_eq!(alert.summary(), "Weight below expected, Length below expected");
    }

    #[test]
    fn head_circumference_message() {
        let flag = ZScoreFlag::check(MeasurementType::HeadCircumference, 2.7).unwrap();
        assert_eq!(flag.message(), "Head circumference above expected");
    }
}
