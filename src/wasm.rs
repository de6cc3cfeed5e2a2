//! WASM bindings for recipe-grid.
//!
//! Exposes `render` and `renderParts` to JavaScript via wasm-bindgen; both
//! take the two JSON payloads as strings.

use wasm_bindgen::prelude::*;

use crate::{recipe, render_recipe, RenderedGrid};

fn rendered(steps_json: &str, ingredients_json: &str) -> Result<RenderedGrid, JsError> {
    let steps = recipe::parse_steps(steps_json).map_err(|e| JsError::new(&e.to_string()))?;
    let ingredients =
        recipe::parse_ingredients(ingredients_json).map_err(|e| JsError::new(&e.to_string()))?;
    render_recipe(&steps, &ingredients).map_err(|e| JsError::new(&e.to_string()))
}

/// Render a recipe to a combined markup + inline-stylesheet fragment.
#[wasm_bindgen]
pub fn render(steps_json: &str, ingredients_json: &str) -> Result<String, JsError> {
    Ok(rendered(steps_json, ingredients_json)?.fragment())
}

/// Render a recipe and return `[markup, stylesheet]` as separate strings.
#[wasm_bindgen(js_name = "renderParts")]
pub fn render_parts(steps_json: &str, ingredients_json: &str) -> Result<Vec<String>, JsError> {
    let out = rendered(steps_json, ingredients_json)?;
    Ok(vec![out.html, out.css])
}
