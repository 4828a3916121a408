//! Body and activity profile
//!
//! `ProfileForm` is what arrives from outside; `Profile` is the validated,
//! immutable input to the target calculator.

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult, ValidationErrors};

/// Lowest accepted body weight in kilograms
pub const MIN_WEIGHT_KG: f64 = 40.0;
/// Lowest accepted height in centimeters
pub const MIN_HEIGHT_CM: f64 = 50.0;
/// Lowest accepted age in years
pub const MIN_AGE_YEARS: f64 = 18.0;
/// Lowest accepted calorie deficit percentage
pub const MIN_DEFICIT_PERCENT: f64 = 0.0;

/// Gender for the BMR constant and protein factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// Activity level 1 (sedentary) to 5 (extra active)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ActivityLevel {
    Sedentary = 1,
    LightlyActive = 2,
    ModeratelyActive = 3,
    VeryActive = 4,
    ExtraActive = 5,
}

impl ActivityLevel {
    /// TDEE multiplier applied to BMR
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    pub fn level(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for ActivityLevel {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(ActivityLevel::Sedentary),
            2 => Ok(ActivityLevel::LightlyActive),
            3 => Ok(ActivityLevel::ModeratelyActive),
            4 => Ok(ActivityLevel::VeryActive),
            5 => Ok(ActivityLevel::ExtraActive),
            other => Err(format!("Activity level must be between 1 and 5, got {}", other)),
        }
    }
}

impl From<ActivityLevel> for u8 {
    fn from(level: ActivityLevel) -> u8 {
        level.level()
    }
}

/// Validated profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub gender: Gender,
    #[serde(alias = "weight")]
    pub weight_kg: f64,
    #[serde(alias = "height")]
    pub height_cm: f64,
    #[serde(alias = "age")]
    pub age_years: f64,
    pub activity_level: ActivityLevel,
    pub target_deficit_percent: f64,
}

/// Profile form as submitted, before validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileForm {
    pub gender: String,
    pub weight: f64,
    pub height: f64,
    pub age: f64,
    pub activity_level: i64,
    #[serde(default)]
    pub target_deficit_percent: f64,
}

impl ProfileForm {
    /// Check every field and build a `Profile`
    ///
    /// All violations are reported together, keyed by form field name.
    pub fn validate(&self) -> PlanResult<Profile> {
        let mut errors = ValidationErrors::new();

        let gender = Gender::from_str(&self.gender);
        if gender.is_none() {
            errors.add("gender", "Gender should be either 'male' or 'female'");
        }

        check_minimum(&mut errors, "weight", self.weight, MIN_WEIGHT_KG, "Weight should be a minimum of 40kg");
        check_minimum(&mut errors, "height", self.height, MIN_HEIGHT_CM, "Height should be a minimum of 50cm");
        check_minimum(&mut errors, "age", self.age, MIN_AGE_YEARS, "Age should be a minimum of 18");
        check_minimum(
            &mut errors,
            "targetDeficitPercent",
            self.target_deficit_percent,
            MIN_DEFICIT_PERCENT,
            "Deficit percentage should be a minimum of 0",
        );

        let activity_level = u8::try_from(self.activity_level)
            .map_err(|_| format!("Activity level must be between 1 and 5, got {}", self.activity_level))
            .and_then(ActivityLevel::try_from);
        if let Err(ref message) = activity_level {
            errors.add("activityLevel", message.clone());
        }

        match (gender, activity_level) {
            (Some(gender), Ok(activity_level)) if errors.is_empty() => Ok(Profile {
                gender,
                weight_kg: self.weight,
                height_cm: self.height,
                age_years: self.age,
                activity_level,
                target_deficit_percent: self.target_deficit_percent,
            }),
            _ => Err(PlanError::Validation(errors)),
        }
    }
}

fn check_minimum(errors: &mut ValidationErrors, field: &str, value: f64, min: f64, message: &str) {
    if !value.is_finite() {
        errors.add(field, format!("{} must be a finite number", field));
    } else if value < min {
        errors.add(field, message);
    }
}

impl From<&Profile> for ProfileForm {
    fn from(profile: &Profile) -> Self {
        Self {
            gender: profile.gender.as_str().to_string(),
            weight: profile.weight_kg,
            height: profile.height_cm,
            age: profile.age_years,
            activity_level: i64::from(profile.activity_level.level()),
            target_deficit_percent: profile.target_deficit_percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ProfileForm {
        ProfileForm {
            gender: "male".to_string(),
            weight: 80.0,
            height: 180.0,
            age: 30.0,
            activity_level: 3,
            target_deficit_percent: 0.0,
        }
    }

    #[test]
    fn test_activity_factors() {
        let factors: Vec<f64> = (1u8..=5)
            .map(|l| ActivityLevel::try_from(l).unwrap().factor())
            .collect();
        assert_eq!(factors, vec![1.2, 1.375, 1.55, 1.725, 1.9]);
    }

    #[test]
    fn test_activity_level_out_of_range() {
        assert!(ActivityLevel::try_from(0).is_err());
        assert!(ActivityLevel::try_from(6).is_err());
    }

    #[test]
    fn test_activity_level_serde_as_integer() {
        let json = serde_json::to_string(&ActivityLevel::VeryActive).unwrap();
        assert_eq!(json, "4");
        let level: ActivityLevel = serde_json::from_str("2").unwrap();
        assert_eq!(level, ActivityLevel::LightlyActive);
        assert!(serde_json::from_str::<ActivityLevel>("9").is_err());
    }

    #[test]
    fn test_gender_from_str() {
        assert_eq!(Gender::from_str("Male"), Some(Gender::Male));
        assert_eq!(Gender::from_str(" female "), Some(Gender::Female));
        assert_eq!(Gender::from_str("other"), None);
    }

    #[test]
    fn test_validate_ok() {
        let profile = form().validate().unwrap();
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.weight_kg, 80.0);
        assert_eq!(profile.activity_level, ActivityLevel::ModeratelyActive);
    }

    #[test]
    fn test_validate_accepts_boundaries() {
        let mut f = form();
        f.weight = 40.0;
        f.height = 50.0;
        f.age = 18.0;
        f.target_deficit_percent = 0.0;
        f.activity_level = 5;
        assert!(f.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_every_field() {
        let f = ProfileForm {
            gender: "robot".to_string(),
            weight: 39.9,
            height: 49.0,
            age: 17.0,
            activity_level: 6,
            target_deficit_percent: -1.0,
        };
        match f.validate() {
            Err(PlanError::Validation(errors)) => {
                for field in ["gender", "weight", "height", "age", "activityLevel", "targetDeficitPercent"] {
                    assert_eq!(errors.messages(field).len(), 1, "missing error for {}", field);
                }
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let mut f = form();
        f.weight = f64::NAN;
        f.target_deficit_percent = f64::INFINITY;
        let err = f.validate().unwrap_err();
        match err {
            PlanError::Validation(errors) => {
                assert_eq!(errors.messages("weight"), ["weight must be a finite number"]);
                assert_eq!(
                    errors.messages("targetDeficitPercent"),
                    ["targetDeficitPercent must be a finite number"]
                );
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_validate_negative_activity_level() {
        let mut f = form();
        f.activity_level = -3;
        let err = f.validate().unwrap_err();
        assert!(err.to_string().contains("activityLevel"));
    }

    #[test]
    fn test_profile_deserializes_form_style_names() {
        let json = r#"{
            "gender": "female",
            "weight": 60,
            "height": 165,
            "age": 25,
            "activityLevel": 1,
            "targetDeficitPercent": 20
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.height_cm, 165.0);
        assert_eq!(profile.activity_level, ActivityLevel::Sedentary);
    }

    #[test]
    fn test_form_round_trips_through_profile() {
        let profile = form().validate().unwrap();
        assert_eq!(ProfileForm::from(&profile), form());
    }
}
