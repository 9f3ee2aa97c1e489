use serde::{Deserialize, Serialize};

use crate::reference::ReferenceError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = ReferenceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ReferenceError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(Sex {
    Male => "male",
    Female => "female",
});

str_enum!(CurveFamily {
    Who => "who",
    Intergrowth => "intergrowth",
});

str_enum!(MeasurementType {
    Weight => "weight",
    Length => "length",
    HeadCircumference => "head_circumference",
});

str_enum!(WeightUnit {
    Grams => "g",
    Kilograms => "kg",
});

impl Sex {
    /// Parse the single-letter code used by subject records ("M" / "F").
    pub fn from_code(code: &str) -> Result<Self, ReferenceError> {
        match code.trim() {
            "M" | "m" => Ok(Self::Male),
            "F" | "f" => Ok(Self::Female),
            other => other.parse(),
        }
    }
}

impl CurveFamily {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Who => "WHO",
            Self::Intergrowth => "INTERGROWTH-21st",
        }
    }
}

impl MeasurementType {
    pub const ALL: [MeasurementType; 3] = [
        MeasurementType::Weight,
        MeasurementType::Length,
        MeasurementType::HeadCircumference,
    ];

    /// Physical unit of reference values for this measurement.
    pub fn unit(&self) -> &'static str {
        match self {
            Self::Weight => "kg",
            Self::Length | Self::HeadCircumference => "cm",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn sex_round_trips_through_str() {
        assert_eq!(Sex::from_str("male").unwrap(), Sex::Male);
        assert_eq!(Sex::Female.as_str(), "female");
    }

    #[test]
    fn sex_from_single_letter_code() {
        assert_eq!(Sex::from_code("M").unwrap(), Sex::Male);
        assert_eq!(Sex::from_code("f").unwrap(), Sex::Female);
        assert_eq!(Sex::from_code(" F ").unwrap(), Sex::Female);
        assert!(Sex::from_code("X").is_err());
    }

    #[test]
    fn unknown_value_reports_field() {
        let err = MeasurementType::from_str("bmi").unwrap_err();
        match err {
            ReferenceError::InvalidEnum { field, value } => {
                assert_eq!(field, "MeasurementType");
                assert_eq!(value, "bmi");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn serde_uses_snake_case_names() {
        let json = serde_json::to_string(&MeasurementType::HeadCircumference).unwrap();
        assert_eq!(json, "\"head_circumference\"");
        let family: CurveFamily = serde_json::from_str("\"intergrowth\"").unwrap();
        assert_eq!(family, CurveFamily::Intergrowth);
    }

    #[test]
    fn measurement_units() {
        assert_eq!(MeasurementType::Weight.unit(), "kg");
        assert_eq!(MeasurementType::Length.unit(), "cm");
        assert_eq!(MeasurementType::HeadCircumference.unit(), "cm");
    }

    #[test]
    fn family_display_names() {
        assert_eq!(CurveFamily::Who.display_name(), "WHO");
        assert_eq!(CurveFamily::Intergrowth.display_name(), "INTERGROWTH-21st");
        assert_eq!(CurveFamily::Intergrowth.to_string(), "intergrowth");
    }
}
