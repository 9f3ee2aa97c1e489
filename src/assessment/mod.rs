//! Clinical classification of newborns and Z-score alerting.

mod alerts;
mod classification;

pub use alerts::{Direction, GrowthAlert, Severity, ZScoreFlag};
pub use classification::{BirthWeightClass, GestationalAgeClass};
