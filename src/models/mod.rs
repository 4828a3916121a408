//! Data models
//!
//! Profile input, nutrient totals and the category -> recipe -> product
//! hierarchy the planner annotates.

mod nutrition;
mod plan;
mod profile;
mod recipe;

pub use nutrition::{Nutrient, NutrientTotals};
pub use plan::{Category, MealPlan, UNCATEGORIZED_KEY};
pub use profile::{
    ActivityLevel, Gender, Profile, ProfileForm,
    MIN_AGE_YEARS, MIN_DEFICIT_PERCENT, MIN_HEIGHT_CM, MIN_WEIGHT_KG,
};
pub use recipe::{CategoryInfo, Product, Recipe};
