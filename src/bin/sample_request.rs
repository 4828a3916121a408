//! Utility to print a demo plan request
//!
//! Output can be piped straight into `nutriplan plan`.

use nutriplan::models::{CategoryInfo, Product, ProfileForm, Recipe};
use nutriplan::tools::PlanRequest;

fn product(id: i64, name: &str, unit: &str, quantity: f64, macros: (f64, f64, f64), calories: f64) -> Product {
    let (protein, carbs, fat) = macros;
    Product {
        id,
        name: name.to_string(),
        unit: unit.to_string(),
        quantity,
        protein,
        carbs,
        fat,
        calories,
        image: None,
        portion: 0.0,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let breakfast = CategoryInfo {
        id: 1,
        name: "Breakfast".to_string(),
        icon: "sunrise".to_string(),
    };
    let lunch = CategoryInfo {
        id: 2,
        name: "Lunch".to_string(),
        icon: "bowl".to_string(),
    };
    let dinner = CategoryInfo {
        id: 3,
        name: "Dinner".to_string(),
        icon: "moon".to_string(),
    };

    let recipes = vec![
        Recipe {
            id: 1,
            name: "Oatmeal with milk".to_string(),
            category_id: breakfast.id,
            category: Some(breakfast.clone()),
            products: vec![
                product(1, "Rolled oats", "g", 100.0, (13.0, 60.0, 7.0), 380.0),
                product(2, "Milk 2%", "ml", 100.0, (3.4, 5.0, 2.0), 50.0),
            ],
        },
        Recipe {
            id: 2,
            name: "Scrambled eggs".to_string(),
            category_id: breakfast.id,
            category: Some(breakfast),
            products: vec![
                product(3, "Egg", "pcs", 1.0, (6.3, 0.4, 4.8), 72.0),
                product(4, "Butter", "g", 10.0, (0.1, 0.1, 8.1), 72.0),
            ],
        },
        Recipe {
            id: 3,
            name: "Chicken and rice".to_string(),
            category_id: lunch.id,
            category: Some(lunch),
            products: vec![
                product(5, "Chicken breast", "g", 100.0, (31.0, 0.0, 3.6), 165.0),
                product(6, "White rice", "g", 100.0, (2.7, 28.0, 0.3), 130.0),
                product(7, "Olive oil", "ml", 10.0, (0.0, 0.0, 9.2), 82.0),
            ],
        },
        Recipe {
            id: 4,
            name: "Salmon with potatoes".to_string(),
            category_id: dinner.id,
            category: Some(dinner),
            products: vec![
                product(8, "Salmon", "g", 100.0, (20.0, 0.0, 13.0), 208.0),
                product(9, "Potatoes", "g", 100.0, (2.0, 17.0, 0.1), 77.0),
            ],
        },
    ];

    let request = PlanRequest {
        profile: ProfileForm {
            gender: "female".to_string(),
            weight: 68.0,
            height: 170.0,
            age: 34.0,
            activity_level: 2,
            target_deficit_percent: 15.0,
        },
        recipes,
    };

    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(())
}
