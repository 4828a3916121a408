//! Recipe and product models
//!
//! A recipe is an ordered list of products. Product order matters: it is the
//! scan order when the allocator picks a lever product.

use serde::{Deserialize, Serialize};

use super::Nutrient;

/// A food product used in a recipe
///
/// Nutrient values are per `quantity` of `unit`. `portion` is the only field
/// written by the allocator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub unit: String,
    pub quantity: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub calories: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub portion: f64,
}

impl Product {
    /// Grams of a macro-nutrient per base quantity
    pub fn nutrient(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
        }
    }
}

/// Category record as stored alongside recipes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

impl CategoryInfo {
    /// Key used to group recipes in a plan
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// A recipe with its products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryInfo>,
    pub products: Vec<Product>,
}

impl Recipe {
    /// Index of the lever product for a nutrient
    ///
    /// The product with the highest value wins; on a tie the later product
    /// replaces the earlier one. `None` only for a recipe without products.
    pub fn lever_index(&self, nutrient: Nutrient) -> Option<usize> {
        let mut lever: Option<usize> = None;
        for (idx, product) in self.products.iter().enumerate() {
            let replace = match lever {
                None => true,
                Some(current) => self.products[current].nutrient(nutrient) <= product.nutrient(nutrient),
            };
            if replace {
                lever = Some(idx);
            }
        }
        lever
    }
}
