//! Recipe input handling — data model and JSON payload parsing.

pub mod types;

pub use types::{Ingredient, Step, StepIngredient};

use crate::layout::LayoutError;

/// Parse the steps payload (a JSON array of step objects).
pub fn parse_steps(src: &str) -> Result<Vec<Step>, LayoutError> {
    serde_json::from_str(src).map_err(|e| LayoutError::InvalidInput(format!("steps: {e}")))
}

/// Parse the ingredient catalog payload (a JSON array of ingredient objects).
pub fn parse_ingredients(src: &str) -> Result<Vec<Ingredient>, LayoutError> {
    serde_json::from_str(src).map_err(|e| LayoutError::InvalidInput(format!("ingredients: {e}")))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
