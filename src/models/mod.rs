//! Plain records and enums shared across the crate.
//!
//! Subjects and consultations arrive from the persistence layer as-is; the
//! growth engine only reads them.

pub mod enums;
mod subject;

pub use enums::{CurveFamily, MeasurementType, Sex, WeightUnit};
pub use subject::{Consultation, GestationalAge, Subject, Weight};
