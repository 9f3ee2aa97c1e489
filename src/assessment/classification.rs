use serde::Serialize;

/// Newborn classification by gestational age at birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GestationalAgeClass {
    /// < 28 weeks
    ExtremelyPreterm,
    /// 28 to < 34 weeks
    ModeratelyPreterm,
    /// 34 to < 37 weeks
    LatePreterm,
    /// 37 to < 42 weeks
    Term,
    /// >= 42 weeks
    PostTerm,
}

impl GestationalAgeClass {
    pub fn from_weeks(weeks: u32) -> Self {
        match weeks {
            0..=27 => Self::ExtremelyPreterm,
            28..=33 => Self::ModeratelyPreterm,
            34..=36 => Self::LatePreterm,
            37..=41 => Self::Term,
            _ => Self::PostTerm,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExtremelyPreterm => "extremely_preterm",
            Self::ModeratelyPreterm => "moderately_preterm",
            Self::LatePreterm => "late_preterm",
            Self::Term => "term",
            Self::PostTerm => "post_term",
        }
    }

    pub fn is_preterm(&self) -> bool {
        *self < Self::Term
    }
}

/// Newborn classification by birth weight in grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BirthWeightClass {
    ExtremelyLow,
    VeryLow,
    Low,
    Insufficient,
    Adequate,
    Macrosomia,
}

impl BirthWeightClass {
    pub fn from_grams(grams: u32) -> Self {
        match grams {
            0..=999 => Self::ExtremelyLow,
            1000..=1499 => Self::VeryLow,
            1500..=2499 => Self::Low,
            2500..=2999 => Self::Insufficient,
            3000..=3999 => Self::Adequate,
            _ => Self::Macrosomia,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExtremelyLow => "extremely_low",
            Self::VeryLow => "very_low",
            Self::Low => "low",
            Self::Insufficient => "insufficient",
            Self::Adequate => "adequate",
            Self::Macrosomia => "macrosomia",
        }
    }

    /// Weight band label, e.g. "1000 g to < 1500 g".
    pub fn range_label(&self) -> &'static str {
        match self {
            Self::ExtremelyLow => "< 1000 g",
            Self::VeryLow => "1000 g to < 1500 g",
            Self::Low => "1500 g to < 2500 g",
            Self::Insufficient => "2500 g to 2999 g",
            Self::Adequate => "3000 g to 3999 g",
            Self::Macrosomia => ">= 4000 g",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gestational_age_boundaries() {
        assert_eq!(GestationalAgeClass::from_weeks(24), GestationalAgeClass::ExtremelyPreterm);
        assert_eq!(GestationalAgeClass::from_weeks(27), GestationalAgeClass::ExtremelyPreterm);
        assert_eq!(GestationalAgeClass::from_weeks(28), GestationalAgeClass::ModeratelyPreterm);
        assert_eq!(GestationalAgeClass::from_weeks(33), GestationalAgeClass::ModeratelyPreterm);
        assert_eq!(GestationalAgeClass::from_weeks(34), GestationalAgeClass::LatePreterm);
        assert_eq!(GestationalAgeClass::from_weeks(36), GestationalAgeClass::LatePreterm);
        assert_eq!(GestationalAgeClass::from_weeks(37), GestationalAgeClass::Term);
        assert_eq!(GestationalAgeClass::from_weeks(41), GestationalAgeClass::Term);
        assert_eq!(GestationalAgeClass::from_weeks(42), GestationalAgeClass::PostTerm);
    }

    #[test]
    fn preterm_classes_match_threshold() {
        for weeks in 20..45 {
            assert_eq!(
                GestationalAgeClass::from_weeks(weeks).is_preterm(),
                weeks < crate::config::PRETERM_THRESHOLD_WEEKS,
                "week {weeks}"
            );
        }
    }

    #[test]
    fn birth_weight_boundaries() {
        assert_eq!(BirthWeightClass::from_grams(850), BirthWeightClass::ExtremelyLow);
        assert_eq!(BirthWeightClass::from_grams(1000), BirthWeightClass::VeryLow);
        assert_eq!(BirthWeightClass::from_grams(1499), BirthWeightClass::VeryLow);
        assert_eq!(BirthWeightClass::from_grams(1500), BirthWeightClass::Low);
        assert_eq!(BirthWeightClass::from_grams(2500), BirthWeightClass::Insufficient);
        assert_eq!(BirthWeightClass::from_grams(2999), BirthWeightClass::Insufficient);
        assert_eq!(BirthWeightClass::from_grams(3000), BirthWeightClass::Adequate);
        assert_eq!(BirthWeightClass::from_grams(3999), BirthWeightClass::Adequate);
        assert_eq!(BirthWeightClass::from_grams(4000), BirthWeightClass::Macrosomia);
    }

    #[test]
    fn classes_serialize_snake_case() {
        let json = serde_json::to_string(&GestationalAgeClass::LatePreterm).unwrap();
        assert_eq!(json, "\"late_preterm\"");
        assert_eq!(BirthWeightClass::VeryLow.as_str(), "very_low");
        assert_eq!(BirthWeightClass::Low.range_label(), "1500 g to < 2500 g");
    }
}
