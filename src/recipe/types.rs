//! Input data model for recipe flow rendering.
//!
//! These types represent the two JSON payloads handed over by the recipe
//! store: the step sequence and the ingredient catalog. Ids are assumed
//! unique within one recipe; `parents` entries reference other step ids and
//! define the dependency DAG.

use serde::{Deserialize, Serialize};

// ─── StepIngredient ──────────────────────────────────────────────────────────

/// One ingredient reference on a step: catalog id plus the amount consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepIngredient {
    pub id: u64,
    pub amount: Option<String>,
}

// ─── Step ────────────────────────────────────────────────────────────────────

/// One instruction node in the recipe's dependency DAG.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub id: u64,
    /// Free text describing what to do.
    pub action: String,
    #[serde(default)]
    pub options: Option<String>,
    /// Step ids this step depends on. Absent in the JSON means no parents.
    #[serde(default)]
    pub parents: Vec<u64>,
    /// Ingredient references consumed when this step first needs them.
    #[serde(default)]
    pub ingredients: Vec<StepIngredient>,
}

impl Step {
    pub fn new(id: u64, action: impl Into<String>) -> Self {
        Self {
            id,
            action: action.into(),
            options: None,
            parents: Vec::new(),
            ingredients: Vec::new(),
        }
    }

    /// Builder-style parent list, used heavily in tests.
    pub fn with_parents(mut self, parents: Vec<u64>) -> Self {
        self.parents = parents;
        self
    }

    /// Builder-style ingredient references (id, amount).
    pub fn with_ingredients(mut self, refs: Vec<(u64, Option<&str>)>) -> Self {
        self.ingredients = refs
            .into_iter()
            .map(|(id, amount)| StepIngredient {
                id,
                amount: amount.map(str::to_string),
            })
            .collect();
        self
    }
}

// ─── Ingredient ──────────────────────────────────────────────────────────────

/// A catalog entry, referenced by id from steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub quantity: Option<String>,
    /// Prep note shown beside the ingredient (e.g. "diced").
    #[serde(default)]
    pub mise_en_place: Option<String>,
    #[serde(default)]
    pub options: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Ingredient {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            quantity: None,
            mise_en_place: None,
            options: None,
            notes: None,
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
