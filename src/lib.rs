//! recipe-grid — recipe step-dependency graphs to CSS grid flow layouts.
//!
//! A recipe is a DAG of steps plus an ingredient catalog. The layout engine
//! topologically sorts the steps, assigns each step and each consumed
//! ingredient a grid span and a palette color, and the renderer serializes
//! those placements into a markup/stylesheet pair for a grid container.
//!
//! Public API: [`render_recipe`], or [`layout::GridPlacer`] +
//! [`render::GridRenderer`] separately when the caller wants the raw
//! placements.

pub mod layout;
pub mod recipe;
pub mod render;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use layout::{GridLayout, GridPlacer, LayoutError};
pub use recipe::{Ingredient, Step};
pub use render::{GridRenderer, RenderedGrid};

/// Lay out a recipe and render it in one call.
pub fn render_recipe(
    steps: &[Step],
    ingredients: &[Ingredient],
) -> Result<RenderedGrid, LayoutError> {
    let layout = GridPlacer::calculate(steps, ingredients)?;
    Ok(GridRenderer::new(&layout, steps).render())
}

// ─── Tests ───────────────────────────────────────────────────────────────────
