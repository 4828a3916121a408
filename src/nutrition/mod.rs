//! Nutrition calculation module
//!
//! Daily macro targets and their allocation into recipe portions.

pub mod portions;
pub mod targets;

pub use portions::{allocate, allocate_recipe, WorkingTarget};
pub use targets::{
    basal_metabolic_rate, compute, energy_breakdown, protein_per_kg, EnergyBreakdown,
    FAT_CALORIE_SHARE,
};
