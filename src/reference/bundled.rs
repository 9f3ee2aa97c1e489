use crate::models::{CurveFamily, MeasurementType, Sex};

use super::loader::parse_table;
use super::types::{ReferenceTable, TableKey};
use super::ReferenceError;

/// Tables compiled into the crate. INTERGROWTH-21st ships male weight only;
/// other INTERGROWTH tables come from a reference directory.
const BUNDLED: &[(CurveFamily, MeasurementType, Sex, &str)] = &[
    (
        CurveFamily::Who,
        MeasurementType::Weight,
        Sex::Male,
        include_str!("../../resources/reference/who/weight_male.json"),
    ),
    (
        CurveFamily::Who,
        MeasurementType::Weight,
        Sex::Female,
        include_str!("../../resources/reference/who/weight_female.json"),
    ),
    (
        CurveFamily::Who,
        MeasurementType::Length,
        Sex::Male,
        include_str!("../../resources/reference/who/length_male.json"),
    ),
    (
        CurveFamily::Who,
        MeasurementType::Length,
        Sex::Female,
        include_str!("../../resources/reference/who/length_female.json"),
    ),
    (
        CurveFamily::Who,
        MeasurementType::HeadCircumference,
        Sex::Male,
        include_str!("../../resources/reference/who/head_circumference_male.json"),
    ),
    (
        CurveFamily::Who,
        MeasurementType::HeadCircumference,
        Sex::Female,
        include_str!("../../resources/reference/who/head_circumference_female.json"),
    ),
    (
        CurveFamily::Intergrowth,
        MeasurementType::Weight,
        Sex::Male,
        include_str!("../../resources/reference/intergrowth/weight_male.json"),
    ),
];

pub(crate) fn bundled_tables() -> Result<Vec<ReferenceTable>, ReferenceError> {
    BUNDLED
        .iter()
        .map(|&(family, measurement, sex, json)| {
            parse_table(TableKey::new(measurement, sex, family), json)
        })
        .collect()
}
