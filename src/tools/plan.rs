//! Planning tools
//!
//! The calling layer around the calculation core: validates profiles, guards
//! the plan hierarchy when asked to, and shapes responses.

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};
use crate::models::{MealPlan, NutrientTotals, Profile, ProfileForm, Recipe};
use crate::nutrition::{self, EnergyBreakdown};

/// Options for the allocation tools
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlanOptions {
    /// Reject empty collections before allocating and non-finite portions after
    pub strict: bool,
}

/// Request for build_plan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub profile: ProfileForm,
    pub recipes: Vec<Recipe>,
}

/// Response for daily_target
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTargetResponse {
    pub profile: Profile,
    pub energy: EnergyBreakdown,
    pub total: NutrientTotals,
}

/// Response for build_plan
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    pub target: DailyTargetResponse,
    pub plan: MealPlan,
}

// ============================================================================
// Target Tools
// ============================================================================

/// Validate a profile form and compute its daily target
pub fn daily_target(form: &ProfileForm) -> PlanResult<DailyTargetResponse> {
    let profile = form.validate()?;
    let energy = nutrition::energy_breakdown(&profile);
    let total = nutrition::compute(&profile);

    tracing::info!(
        "Daily target for {} {}kg/{}cm/{}y level {} deficit {}%: {:?}",
        profile.gender.as_str(),
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.activity_level.level(),
        profile.target_deficit_percent,
        total
    );

    Ok(DailyTargetResponse {
        profile,
        energy,
        total,
    })
}

// ============================================================================
// Allocation Tools
// ============================================================================

/// Allocate portions over a prepared plan
pub fn allocate_plan(mut plan: MealPlan, options: &PlanOptions) -> PlanResult<MealPlan> {
    if options.strict {
        ensure_allocatable(&plan)?;
    }

    nutrition::allocate(&mut plan);

    if options.strict {
        ensure_finite_portions(&plan)?;
    }

    tracing::info!(
        "Allocated {} categories, {} products",
        plan.category_count(),
        plan.products().count()
    );

    Ok(plan)
}

/// Compute a profile's target, group recipes by category and allocate
pub fn build_plan(request: PlanRequest, options: &PlanOptions) -> PlanResult<PlanResponse> {
    let target = daily_target(&request.profile)?;
    let plan = MealPlan::from_recipes(request.recipes, target.total);
    let plan = allocate_plan(plan, options)?;
    Ok(PlanResponse { target, plan })
}

/// Check the non-empty guarantees the allocator relies on
pub fn ensure_allocatable(plan: &MealPlan) -> PlanResult<()> {
    if plan.recipes_by_category.is_empty() {
        return Err(PlanError::NoCategories);
    }
    for (key, category) in &plan.recipes_by_category {
        if category.recipes.is_empty() {
            return Err(PlanError::EmptyCategory(key.clone()));
        }
        if let Some(recipe) = category.recipes.iter().find(|r| r.products.is_empty()) {
            return Err(PlanError::EmptyRecipe {
                category: key.clone(),
                recipe: recipe.name.clone(),
            });
        }
    }
    Ok(())
}

/// Reject a plan holding NaN or infinite portions
pub fn ensure_finite_portions(plan: &MealPlan) -> PlanResult<()> {
    match plan.products().find(|(_, p)| !p.portion.is_finite()) {
        Some((recipe, product)) => Err(PlanError::NonFinitePortion {
            recipe: recipe.name.clone(),
            product: product.name.clone(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CategoryInfo, Gender, Product};

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

    fn product(id: i64, protein: f64, carbs: f64, fat: f64) -> Product {
        Product {
            id,
            name: format!("product-{}", id),
            unit: "g".to_string(),
            quantity: 100.0,
            protein,
            carbs,
            fat,
            calories: protein * 4.0 + carbs * 4.0 + fat * 9.0,
            image: None,
            portion: 0.0,
        }
    }

    fn recipe(id: i64, category: &str, products: Vec<Product>) -> Recipe {
        Recipe {
            id,
            name: format!("recipe-{}", id),
            category_id: 1,
            category: Some(CategoryInfo {
                id: 1,
                name: category.to_string(),
                icon: String::new(),
            }),
            products,
        }
    }

    #[test]
    fn test_daily_target() {
        let response = daily_target(&form()).unwrap();
        assert_eq!(response.profile.gender, Gender::Male);
        assert_eq!(response.total, NutrientTotals::new(2756, 128, 390, 76));
        assert!((response.energy.bmr - 1780.0).abs() < 1e-9);
    }

    #[test]
    fn test_daily_target_rejects_invalid_form() {
        let mut f = form();
        f.age = 12.0;
        f.activity_level = 0;
        match daily_target(&f) {
            Err(PlanError::Validation(errors)) => {
                assert_eq!(errors.field_errors.len(), 2);
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_build_plan_end_to_end() {
        let request = PlanRequest {
            profile: form(),
            recipes: vec![
                recipe(1, "Breakfast", vec![product(1, 13.0, 60.0, 7.0)]),
                recipe(2, "Dinner", vec![product(2, 31.0, 0.0, 3.6), product(3, 2.7, 28.0, 0.3)]),
            ],
        };
        let response = build_plan(request, &PlanOptions::default()).unwrap();

        let plan = &response.plan;
        assert_eq!(plan.total, NutrientTotals::new(2756, 128, 390, 76));
        assert_eq!(
            plan.recipes_by_category["breakfast"].total,
            Some(NutrientTotals::new(1378, 64, 195, 38))
        );
        let dinner = &plan.recipes_by_category["dinner"].recipes[0].products;
        assert!((dinner[0].portion - 38.0 / 3.6 * 100.0).abs() < 1e-9);
        assert!((dinner[1].portion - 195.0 / 28.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_strict_rejects_empty_plan() {
        let options = PlanOptions { strict: true };
        let err = allocate_plan(MealPlan::default(), &options).unwrap_err();
        assert!(matches!(err, PlanError::NoCategories));
    }

    #[test]
    fn test_strict_rejects_empty_category_and_recipe() {
        let options = PlanOptions { strict: true };

        let mut plan = MealPlan::default();
        plan.recipes_by_category
            .insert("lunch".to_string(), Category::default());
        let err = allocate_plan(plan, &options).unwrap_err();
        assert!(matches!(err, PlanError::EmptyCategory(ref key) if key == "lunch"));

        let plan = MealPlan::from_recipes(vec![recipe(5, "Lunch", vec![])], NutrientTotals::default());
        let err = allocate_plan(plan, &options).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Recipe 'recipe-5' in category 'lunch' has no products"
        );
    }

    #[test]
    fn test_strict_rejects_non_finite_portion() {
        let plan = MealPlan::from_recipes(
            vec![recipe(1, "Snack", vec![product(9, 0.0, 10.0, 1.0)])],
            NutrientTotals::new(500, 20, 0, 0),
        );
        let err = allocate_plan(plan.clone(), &PlanOptions { strict: true }).unwrap_err();
        assert!(matches!(err, PlanError::NonFinitePortion { .. }));

        // Lenient mode passes the fault through untouched
        let plan = allocate_plan(plan, &PlanOptions::default()).unwrap();
        let portion = plan.recipes_by_category["snack"].recipes[0].products[0].portion;
        assert!(portion.is_infinite());
    }

    #[test]
    fn test_plan_request_from_json() {
        let json = r#"{
            "profile": {
                "gender": "female", "weight": 60, "height": 165, "age": 25,
                "activityLevel": 1, "targetDeficitPercent": 20
            },
            "recipes": []
        }"#;
        let request: PlanRequest = serde_json::from_str(json).unwrap();
        let response = build_plan(request, &PlanOptions::default()).unwrap();
        assert_eq!(response.target.total, NutrientTotals::new(1291, 84, 160, 35));
        assert_eq!(response.plan.category_count(), 0);
    }
}
