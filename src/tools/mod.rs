//! Nutriplan tools module
//!
//! Entry points used by the command line, plus JSON input loading.

pub mod plan;

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::PlanResult;

pub use plan::{
    allocate_plan, build_plan, daily_target, ensure_allocatable, ensure_finite_portions,
    DailyTargetResponse, PlanOptions, PlanRequest, PlanResponse,
};

/// Read a JSON document from a file, or from stdin when no path (or `-`) is given
pub fn load_json<T: DeserializeOwned>(path: Option<&Path>) -> PlanResult<T> {
    let raw = match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)?,
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    tracing::debug!("Read {} bytes of JSON input", raw.len());
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlanError;
    use crate::models::MealPlan;
    use std::io::Write;

    #[test]
    fn test_load_json_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"recipesByCategory": {{}}, "total": {{"calories": 1, "protein": 2, "carbs": 3, "fat": 4}}}}"#
        )
        .unwrap();

        let plan: MealPlan = load_json(Some(file.path())).unwrap();
        assert_eq!(plan.total.fat, 4);
    }

    #[test]
    fn test_load_json_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let err = load_json::<MealPlan>(Some(&missing)).unwrap_err();
        assert!(matches!(err, PlanError::Io(_)));
    }

    #[test]
    fn test_load_json_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = load_json::<MealPlan>(Some(file.path())).unwrap_err();
        assert!(matches!(err, PlanError::Json(_)));
    }
}
