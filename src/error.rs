//! Error types for the calling layer
//!
//! The calculation core never fails; these errors come from validating input
//! before it runs and from guarding its output afterwards.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Planner error types
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Invalid profile: {0}")]
    Validation(ValidationErrors),

    #[error("Plan has no categories")]
    NoCategories,

    #[error("Category '{0}' has no recipes")]
    EmptyCategory(String),

    #[error("Recipe '{recipe}' in category '{category}' has no products")]
    EmptyRecipe { category: String, recipe: String },

    #[error("Non-finite portion for product '{product}' in recipe '{recipe}'")]
    NonFinitePortion { recipe: String, product: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for planner operations
pub type PlanResult<T> = Result<T, PlanError>;

/// Field-level validation failures, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationErrors {
    pub field_errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.field_errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.field_errors.is_empty()
    }

    /// Messages recorded for a field, empty if none
    pub fn messages(&self, field: &str) -> &[String] {
        self.field_errors
            .get(field)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// `Ok(())` when nothing was recorded, otherwise a validation error
    pub fn into_result(self) -> PlanResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(PlanError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.field_errors {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{}: {}", field, message)?;
                first = false;
            }
        }
        Ok(())
    }
}
