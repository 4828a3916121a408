//! Nutriplan Library
//!
//! Daily calorie and macro targets from a body profile, and their allocation
//! into per-product portions across meal categories and recipes.

pub mod build_info;
pub mod config;
pub mod error;
pub mod models;
pub mod nutrition;
pub mod tools;

pub use error::{PlanError, PlanResult};
