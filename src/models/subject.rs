use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{Sex, WeightUnit};

/// Gestational age as whole weeks plus days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestationalAge {
    pub weeks: u32,
    #[serde(default)]
    pub days: u32,
}

impl GestationalAge {
    pub fn new(weeks: u32, days: u32) -> Self {
        Self { weeks, days }
    }

    /// Decimal weeks, e.g. 32+3 is 32.43.
    pub fn as_weeks(&self) -> f64 {
        f64::from(self.weeks) + f64::from(self.days) / 7.0
    }
}

impl fmt::Display for GestationalAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}w {}d", self.weeks, self.days)
    }
}

/// A newborn as supplied by the persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: Uuid,
    pub sex: Sex,
    pub birth_date: NaiveDate,
    pub gestational_age_at_birth: GestationalAge,
    /// Birth weight in grams, when recorded.
    pub birth_weight_g: Option<u32>,
}

/// Weight with an explicit unit. Magnitude is never used to guess the unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    pub value: f64,
    pub unit: WeightUnit,
}

impl Weight {
    pub fn kg(value: f64) -> Self {
        Self {
            value,
            unit: WeightUnit::Kilograms,
        }
    }

    pub fn grams(value: f64) -> Self {
        Self {
            value,
            unit: WeightUnit::Grams,
        }
    }

    /// Normalize to kilograms, the unit of the weight reference tables.
    pub fn kilograms(&self) -> f64 {
        match self.unit {
            WeightUnit::Kilograms => self.value,
            WeightUnit::Grams => self.value / 1000.0,
        }
    }
}

/// One consultation's anthropometric measurements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consultation {
    pub id: Uuid,
    pub subject_id: Uuid,
    pub observed_at: NaiveDateTime,
    pub weight: Weight,
    pub length_cm: f64,
    pub head_circumference_cm: f64,
}
