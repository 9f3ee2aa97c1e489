//! Z-scores against growth reference curves.
//!
//! [`corrected_age`] turns birth data and an observation date into the age
//! to look up, [`select_curve_family`] picks WHO or INTERGROWTH-21st, and a
//! [`GrowthEngine`] places the observed value on the seven-anchor ladder of
//! the matching table.

mod age;
mod engine;
mod interpolation;
mod types;

pub use age::{corrected_age, CorrectedAge};
pub use engine::{select_curve_family, DefaultGrowthEngine};
pub use types::{GrowthEngine, GrowthError, ZScoreResult};
