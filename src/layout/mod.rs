//! Layout engine — dependency graph, palette, and grid placement.

pub mod graph;
pub mod grid;
pub mod palette;
pub mod types;

pub use graph::StepGraph;
pub use grid::GridPlacer;
pub use types::{AlignItems, GridLayout, IngredientPlacement, StepPlacement};

/// Errors surfaced by layout computation and input parsing.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    /// The palette base color was not a `#RRGGBB` string.
    #[error("invalid hex color format, expected #RRGGBB: {0}")]
    InvalidBaseColor(String),

    /// A palette was requested for fewer than two steps.
    #[error("palette needs at least 2 steps, got {0}")]
    PaletteTooSmall(usize),

    /// The `parents` references form a cycle; no placement is possible.
    #[error("cyclic step dependencies")]
    CyclicDependencies,

    /// A JSON payload did not match the expected shape.
    #[error("invalid recipe payload: {0}")]
    InvalidInput(String),
}
