//! Daily calorie and macro targets
//!
//! Mifflin-St Jeor BMR, scaled by an activity factor into TDEE, reduced by
//! the deficit percentage, then split into protein, fat and carbs.
//!
//! Every returned field is floored. Carbs are derived from the floored
//! protein and fat, and calories are recomputed from the three floored macros
//! rather than taken from the deficit-adjusted TDEE.

use serde::Serialize;

use crate::models::{Gender, Nutrient, NutrientTotals, Profile};

/// Share of target calories that comes from fat
pub const FAT_CALORIE_SHARE: f64 = 0.25;

/// Energy figures behind a target, before the macro split
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyBreakdown {
    /// Basal Metabolic Rate in kcal/day
    pub bmr: f64,
    /// Total Daily Energy Expenditure in kcal/day
    pub tdee: f64,
    /// TDEE after the deficit, may be zero or negative
    pub target_calories: f64,
}

/// Basal Metabolic Rate (Mifflin-St Jeor)
///
/// `10 * weight + 6.25 * height - 5 * age`, plus 5 for men, minus 161 for women.
pub fn basal_metabolic_rate(profile: &Profile) -> f64 {
    let base = 10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * profile.age_years;
    match profile.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Protein grams per kilogram of body weight
pub fn protein_per_kg(gender: Gender) -> f64 {
    match gender {
        Gender::Male => 1.6,
        Gender::Female => 1.4,
    }
}

/// BMR, TDEE and the deficit-adjusted calorie target
pub fn energy_breakdown(profile: &Profile) -> EnergyBreakdown {
    let bmr = basal_metabolic_rate(profile);
    let tdee = profile.activity_level.factor() * bmr;
    let target_calories = tdee * (1.0 - profile.target_deficit_percent / 100.0);
    EnergyBreakdown {
        bmr,
        tdee,
        target_calories,
    }
}

/// Compute the daily target for a validated profile
///
/// Performs no validation; a deficit above 100% produces negative values.
pub fn compute(profile: &Profile) -> NutrientTotals {
    let energy = energy_breakdown(profile);
    let target = energy.target_calories;

    let protein = (protein_per_kg(profile.gender) * profile.weight_kg).floor();
    let fat = (target * FAT_CALORIE_SHARE / Nutrient::Fat.kcal_per_gram()).floor();
    let carbs = ((target
        - protein * Nutrient::Protein.kcal_per_gram()
        - fat * Nutrient::Fat.kcal_per_gram())
        / Nutrient::Carbs.kcal_per_gram())
    .floor();

    let calories_from_macros = protein * Nutrient::Protein.kcal_per_gram()
        + carbs * Nutrient::Carbs.kcal_per_gram()
        + fat * Nutrient::Fat.kcal_per_gram();

    NutrientTotals {
        calories: calories_from_macros.floor() as i64,
        protein: protein as i64,
        carbs: carbs as i64,
        fat: fat as i64,
    }
}
