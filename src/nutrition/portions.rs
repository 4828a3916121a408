//! Portion allocation
//!
//! Splits the day target evenly over categories, then evenly over each
//! category's recipes, then inside each recipe pulls one lever product per
//! macro-nutrient (protein, carbs, fat) and writes its `portion`.
//!
//! The plan is mutated in place: `total` is attached to every category and
//! `portion` is overwritten on lever products. Totals are floored integers,
//! portions stay floating point and are never floored.

use serde::Serialize;

use crate::models::{MealPlan, Nutrient, NutrientTotals, Recipe};

/// Per-recipe working target, consumed as the levers are pulled
///
/// Starts as the floored per-recipe split. Decrements are fractional, so the
/// working copy is kept in floating point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct WorkingTarget {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl WorkingTarget {
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
        }
    }

    pub fn get_mut(&mut self, nutrient: Nutrient) -> &mut f64 {
        match nutrient {
            Nutrient::Protein => &mut self.protein,
            Nutrient::Carbs => &mut self.carbs,
            Nutrient::Fat => &mut self.fat,
        }
    }
}

impl From<NutrientTotals> for WorkingTarget {
    fn from(totals: NutrientTotals) -> Self {
        Self {
            protein: totals.protein as f64,
            carbs: totals.carbs as f64,
            fat: totals.fat as f64,
        }
    }
}

/// Annotate the plan with category totals and product portions
///
/// Never fails. Empty categories or recipes contribute nothing; a lever whose
/// nutrient value is zero yields a non-finite portion that is left in place.
pub fn allocate(plan: &mut MealPlan) {
    let per_category = plan.total.split(plan.category_count());
    tracing::debug!(
        "Allocating {:?} over {} categories: {:?} each",
        plan.total,
        plan.category_count(),
        per_category
    );

    for (key, category) in plan.recipes_by_category.iter_mut() {
        category.total = Some(per_category);

        let per_recipe = per_category.split(category.recipes.len());
        tracing::debug!(
            "Category '{}': {} recipes, {:?} each",
            key,
            category.recipes.len(),
            per_recipe
        );

        for recipe in category.recipes.iter_mut() {
            allocate_recipe(recipe, per_recipe);
        }
    }
}

/// Pull the protein, carbs and fat levers of one recipe
///
/// Returns the working target left after all three passes.
pub fn allocate_recipe(recipe: &mut Recipe, target: NutrientTotals) -> WorkingTarget {
    let levers = Nutrient::MACROS.map(|n| (n, recipe.lever_index(n)));
    let mut working = WorkingTarget::from(target);

    for (nutrient, lever) in levers {
        if working.get(nutrient) <= 0.0 {
            tracing::trace!(
                "Recipe '{}': {} target {} is not positive, skipping",
                recipe.name,
                nutrient.as_str(),
                working.get(nutrient)
            );
            continue;
        }
        let Some(idx) = lever else {
            continue;
        };

        let product = &mut recipe.products[idx];
        let content = product.nutrient(nutrient);
        product.portion = (working.get(nutrient) / content) * product.quantity;

        if !product.portion.is_finite() {
            tracing::warn!(
                "Recipe '{}': lever '{}' has {} {} per {} {}, portion is {}",
                recipe.name,
                product.name,
                content,
                nutrient.as_str(),
                product.quantity,
                product.unit,
                product.portion
            );
        } else {
            tracing::trace!(
                "Recipe '{}': {} lever '{}' -> portion {}",
                recipe.name,
                nutrient.as_str(),
                product.name,
                product.portion
            );
        }

        // One decrement per other macro, each landing on this nutrient's
        // own working target
        for other in Nutrient::MACROS {
            if other == nutrient {
                continue;
            }
            *working.get_mut(nutrient) -= content * product.quantity;
        }
    }

    working
}
