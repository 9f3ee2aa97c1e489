use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{CurveFamily, MeasurementType, Sex};

use super::ReferenceError;

// ---------------------------------------------------------------------------
// TableKey
// ---------------------------------------------------------------------------

/// Identifies one reference table: (measurement, sex, curve family).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableKey {
    pub measurement: MeasurementType,
    pub sex: Sex,
    pub family: CurveFamily,
}

impl TableKey {
    pub fn new(measurement: MeasurementType, sex: Sex, family: CurveFamily) -> Self {
        Self {
            measurement,
            sex,
            family,
        }
    }

    /// Relative path of this table in a reference directory.
    pub fn file_name(&self) -> String {
        format!("{}/{}_{}.json", self.family, self.measurement, self.sex)
    }
}

impl fmt::Display for TableKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}_{}", self.family, self.measurement, self.sex)
    }
}

// ---------------------------------------------------------------------------
// ReferencePoint
// ---------------------------------------------------------------------------

/// Seven Z-score anchors (Z-3 … Z+3) at one age, in the measurement's unit.
///
/// Field names serialize to the chart shape `{ age, zN3, …, z0, …, zP3 }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferencePoint {
    /// Age in weeks (corrected weeks for INTERGROWTH).
    pub age: f64,
    #[serde(rename = "zN3")]
    pub z_n3: f64,
    #[serde(rename = "zN2")]
    pub z_n2: f64,
    #[serde(rename = "zN1")]
    pub z_n1: f64,
    #[serde(rename = "z0")]
    pub z0: f64,
    #[serde(rename = "zP1")]
    pub z_p1: f64,
    #[serde(rename = "zP2")]
    pub z_p2: f64,
    #[serde(rename = "zP3")]
    pub z_p3: f64,
}

impl ReferencePoint {
    pub fn from_anchors(age: f64, anchors: [f64; 7]) -> Self {
        let [z_n3, z_n2, z_n1, z0, z_p1, z_p2, z_p3] = anchors;
        Self {
            age,
            z_n3,
            z_n2,
            z_n1,
            z0,
            z_p1,
            z_p2,
            z_p3,
        }
    }

    /// Anchor values ordered from Z-3 to Z+3.
    pub fn anchors(&self) -> [f64; 7] {
        [
            self.z_n3, self.z_n2, self.z_n1, self.z0, self.z_p1, self.z_p2, self.z_p3,
        ]
    }
}

// ---------------------------------------------------------------------------
// ReferenceTable
// ---------------------------------------------------------------------------

/// An immutable, validated reference table.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceTable {
    key: TableKey,
    points: Vec<ReferencePoint>,
}

impl ReferenceTable {
    /// Build a table, enforcing the invariants every lookup relies on:
    /// at least one point, finite values, strictly increasing ages and
    /// non-decreasing anchors at each age.
    pub fn new(key: TableKey, points: Vec<ReferencePoint>) -> Result<Self, ReferenceError> {
        let invalid = |reason: String| ReferenceError::InvalidTable { key, reason };

        if points.is_empty() {
            return Err(invalid("table has no points".into()));
        }

        for (i, point) in points.iter().enumerate() {
            if !point.age.is_finite() || point.anchors().iter().any(|v| !v.is_finite()) {
                return Err(invalid(format!("non-finite value at row {i}")));
            }
            if point.anchors().windows(2).any(|w| w[0] > w[1]) {
                return Err(invalid(format!(
                    "anchors cross at age {} (row {i})",
                    point.age
                )));
            }
        }

        if let Some(w) = points.windows(2).find(|w| w[0].age >= w[1].age) {
            return Err(invalid(format!(
                "ages not strictly increasing: {} then {}",
                w[0].age, w[1].age
            )));
        }

        Ok(Self { key, points })
    }

    pub fn key(&self) -> TableKey {
        self.key
    }

    pub fn points(&self) -> &[ReferencePoint] {
        &self.points
    }

    pub fn min_age(&self) -> f64 {
        self.points[0].age
    }

    pub fn max_age(&self) -> f64 {
        self.points[self.points.len() - 1].age
    }

    pub fn covers(&self, age_weeks: f64) -> bool {
        age_weeks >= self.min_age() && age_weeks <= self.max_age()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> TableKey {
        TableKey::new(MeasurementType::Weight, Sex::Female, CurveFamily::Intergrowth)
    }

    fn point(age: f64, z0: f64) -> ReferencePoint {
        ReferencePoint::from_anchors(
            age,
            [z0 - 0.75, z0 - 0.5, z0 - 0.25, z0, z0 + 0.25, z0 + 0.5, z0 + 0.75],
        )
    }

    #[test]
    fn key_display_and_file_name() {
        assert_eq!(key().to_string(), "intergrowth/weight_female");
        let hc = TableKey::new(MeasurementType::HeadCircumference, Sex::Male, CurveFamily::Who);
        assert_eq!(hc.file_name(), "who/head_circumference_male.json");
    }

    #[test]
    fn point_serializes_to_chart_shape() {
        let p = ReferencePoint::from_anchors(32.0, [1.2, 1.35, 1.5, 1.7, 1.9, 2.1, 2.3]);
        let json = serde_json::to_value(p).unwrap();
        assert_eq!(json["age"], 32.0);
        assert_eq!(json["zN3"], 1.2);
        assert_eq!(json["z0"], 1.7);
        assert_eq!(json["zP3"], 2.3);
        assert_eq!(json.as_object().unwrap().len(), 8);
    }

    #[test]
    fn anchors_keep_order() {
        let p = point(30.0, 1.0);
        assert_eq!(p.anchors()[0], 0.25);
        assert_eq!(p.anchors()[3], 1.0);
        assert_eq!(p.anchors()[6], 1.75);
    }

    #[test]
    fn valid_table_reports_range() {
        let table = ReferenceTable::new(key(), vec![point(27.0, 1.0), point(28.0, 1.1)]).unwrap();
        assert_eq!(table.min_age(), 27.0);
        assert_eq!(table.max_age(), 28.0);
        assert!(table.covers(27.5));
        assert!(!table.covers(28.01));
    }

    #[test]
    fn empty_table_rejected() {
        let err = ReferenceTable::new(key(), vec![]).unwrap_err();
        assert!(matches!(err, ReferenceError::InvalidTable { .. }));
    }

    #[test]
    fn repeated_age_rejected() {
        let err = ReferenceTable::new(key(), vec![point(27.0, 1.0), point(27.0, 1.1)]).unwrap_err();
        assert!(err.to_string().contains("strictly increasing"));
    }

    #[test]
    fn crossing_anchors_rejected() {
        let bad = ReferencePoint::from_anchors(27.0, [1.0, 1.1, 1.05, 1.2, 1.3, 1.4, 1.5]);
        let err = ReferenceTable::new(key(), vec![bad]).unwrap_err();
        assert!(err.to_string().contains("anchors cross"));
    }

    #[test]
    fn nan_rejected() {
        let bad = ReferencePoint::from_anchors(f64::NAN, [1.0; 7]);
        assert!(ReferenceTable::new(key(), vec![bad]).is_err());
    }
}
