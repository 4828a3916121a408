//! Plan hierarchy: categories of recipes plus the day-level target

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{NutrientTotals, Product, Recipe};

/// Key for recipes that carry no category record
pub const UNCATEGORIZED_KEY: &str = "uncategorized";

/// Recipes sharing a meal category
///
/// `total` is attached by the allocator, identical for every category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub recipes: Vec<Recipe>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<NutrientTotals>,
}

/// Full plan: categories keyed by lowercased name, and the day target
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub recipes_by_category: BTreeMap<String, Category>,
    pub total: NutrientTotals,
}

impl MealPlan {
    /// Group recipes by the lowercased name of their category
    ///
    /// Recipe order inside each category follows the input order.
    pub fn from_recipes(recipes: Vec<Recipe>, total: NutrientTotals) -> Self {
        let mut recipes_by_category: BTreeMap<String, Category> = BTreeMap::new();
        for recipe in recipes {
            let key = recipe
                .category
                .as_ref()
                .map(|c| c.key())
                .unwrap_or_else(|| UNCATEGORIZED_KEY.to_string());
            recipes_by_category.entry(key).or_default().recipes.push(recipe);
        }
        Self {
            recipes_by_category,
            total,
        }
    }

    pub fn category_count(&self) -> usize {
        self.recipes_by_category.len()
    }

    /// Iterate every product together with its recipe
    pub fn products(&self) -> impl Iterator<Item = (&Recipe, &Product)> {
        self.recipes_by_category
            .values()
            .flat_map(|c| c.recipes.iter())
            .flat_map(|r| r.products.iter().map(move |p| (r, p)))
    }
}
