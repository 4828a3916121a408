//! Nutrient totals shared by the day, category and recipe levels

use serde::{Deserialize, Serialize};

/// Macro-nutrients the allocator pulls a lever for, in processing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nutrient {
    Protein,
    Carbs,
    Fat,
}

impl Nutrient {
    /// Allocation order: protein, then carbs, then fat
    pub const MACROS: [Nutrient; 3] = [Nutrient::Protein, Nutrient::Carbs, Nutrient::Fat];

    /// Energy density in kcal per gram
    pub fn kcal_per_gram(&self) -> f64 {
        match self {
            Nutrient::Protein | Nutrient::Carbs => 4.0,
            Nutrient::Fat => 9.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Nutrient::Protein => "protein",
            Nutrient::Carbs => "carbs",
            Nutrient::Fat => "fat",
        }
    }
}

/// Calories and macro grams as floored integers
///
/// Every value is produced by `f64::floor`, never rounded. Values may be
/// negative when an upstream target is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientTotals {
    pub calories: i64,
    pub protein: i64, // grams
    pub carbs: i64,   // grams
    pub fat: i64,     // grams
}

impl NutrientTotals {
    pub fn new(calories: i64, protein: i64, carbs: i64, fat: i64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
        }
    }

    /// Read the grams of a macro-nutrient
    pub fn get(&self, nutrient: Nutrient) -> i64 {
        match nutrient {
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
        }
    }

    /// Mutable access to the grams of a macro-nutrient
    pub fn get_mut(&mut self, nutrient: Nutrient) -> &mut i64 {
        match nutrient {
            Nutrient::Protein => &mut self.protein,
            Nutrient::Carbs => &mut self.carbs,
            Nutrient::Fat => &mut self.fat,
        }
    }

    /// Split evenly into `parts`, flooring each field independently
    ///
    /// The division happens in floating point, so `parts == 0` does not panic;
    /// the saturated result is never attached anywhere because there is
    /// nothing to attach it to.
    pub fn split(&self, parts: usize) -> Self {
        let divisor = parts as f64;
        Self {
            calories: floor_div(self.calories, divisor),
            protein: floor_div(self.protein, divisor),
            carbs: floor_div(self.carbs, divisor),
            fat: floor_div(self.fat, divisor),
        }
    }

    /// Calories implied by the macro grams (4/4/9 kcal per gram)
    pub fn calories_from_macros(&self) -> i64 {
        Nutrient::MACROS
            .iter()
            .map(|n| self.get(*n) * n.kcal_per_gram() as i64)
            .sum()
    }
}

fn floor_div(value: i64, divisor: f64) -> i64 {
    (value as f64 / divisor).floor() as i64
}
