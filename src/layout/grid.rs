//! GridPlacer — assigns grid coordinates to steps and ingredients.
//!
//! The placer folds an explicit accumulator (row cursor, column-end pointer,
//! ingredient counter, last drawn color) over the topologically sorted step
//! sequence. Placements are written once and never revised; a step with
//! parents reads the placements its parents were given earlier in the fold.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::recipe::{Ingredient, Step};

use super::graph::StepGraph;
use super::palette::{color_class, monochromatic_palette, BASE_COLOR};
use super::types::{
    AlignItems, GridLayout, IngredientPlacement, StepPlacement, INITIAL_COLUMN_END,
    ROUNDED_RADIUS, SEED_COLOR, STEP_COLUMN_START,
};
use super::LayoutError;

/// Grid placement pass over one recipe.
pub struct GridPlacer;

struct Span {
    row_start: usize,
    col_start: usize,
    row_end: usize,
    col_end: usize,
}

impl GridPlacer {
    /// Compute the full grid layout for a recipe.
    ///
    /// Fails fast on cyclic `parents` references; unresolved ingredient ids
    /// are dropped without error. An empty step list yields an empty layout.
    pub fn calculate(steps: &[Step], ingredients: &[Ingredient]) -> Result<GridLayout, LayoutError> {
        if steps.is_empty() {
            return Ok(GridLayout::empty());
        }

        let graph = StepGraph::from_steps(steps);
        let order = graph
            .topological_order()
            .ok_or(LayoutError::CyclicDependencies)?;
        debug!(steps = steps.len(), "placing recipe grid");

        // One shade per step, lightest first; a single-step recipe gets the
        // base color alone.
        let palette = if steps.len() == 1 {
            vec![BASE_COLOR.trim_start_matches('#').to_string()]
        } else {
            monochromatic_palette(BASE_COLOR, steps.len())?
        };

        let mut step_by_id: HashMap<u64, &Step> = HashMap::new();
        for step in steps {
            step_by_id.entry(step.id).or_insert(step);
        }
        let mut catalog: HashMap<u64, &Ingredient> = HashMap::new();
        for ingredient in ingredients {
            catalog.entry(ingredient.id).or_insert(ingredient);
        }

        let mut layout = GridLayout::default();
        let mut row_cursor = 1usize;
        let mut column_end = INITIAL_COLUMN_END;
        let mut ingredient_counter = 0usize;
        let mut last_color = SEED_COLOR.to_string();
        let mut last_class = color_class();

        for (index, id) in order.iter().enumerate() {
            let step = step_by_id[id];

            // Only steps that introduce ingredients draw a new shade.
            let introduces = !step.ingredients.is_empty();
            let (step_color, step_class) = if introduces {
                (palette[index].clone(), color_class())
            } else {
                (last_color.clone(), last_class.clone())
            };

            let placed = place_ingredients(
                step,
                &catalog,
                &step_color,
                &step_class,
                &mut ingredient_counter,
                &mut layout.ingredients,
            );

            let span = grid_span(step, placed, &layout.steps, row_cursor, column_end);

            let next_introduces = index + 1 < order.len()
                && !step_by_id[&order[index + 1]].ingredients.is_empty();

            let placement = StepPlacement {
                row_start: span.row_start,
                col_start: span.col_start,
                row_end: span.row_end,
                col_end: span.col_end,
                border_radius: if next_introduces { ROUNDED_RADIUS } else { 0 },
                align_items: if placed == 1 {
                    AlignItems::End
                } else {
                    AlignItems::Center
                },
                background_color: step_color,
                color_class: step_class,
            };

            row_cursor = placement.row_end;
            if !step.parents.is_empty() {
                column_end += 1;
            }
            if introduces {
                last_color = placement.background_color.clone();
                last_class = placement.color_class.clone();
            }
            layout.steps.insert(step.id, placement);
        }

        layout.column_count = column_end - 1;
        debug!(
            columns = layout.column_count,
            ingredients = layout.ingredients.len(),
            "recipe grid placed"
        );
        Ok(layout)
    }
}

/// Emit one IngredientPlacement per catalog-resolved reference on `step`,
/// advancing the global row counter. Returns how many were placed.
fn place_ingredients(
    step: &Step,
    catalog: &HashMap<u64, &Ingredient>,
    color: &str,
    class: &str,
    counter: &mut usize,
    out: &mut BTreeMap<usize, IngredientPlacement>,
) -> usize {
    let mut placed = 0;
    for reference in &step.ingredients {
        let Some(ingredient) = catalog.get(&reference.id) else {
            continue;
        };
        out.insert(
            *counter,
            IngredientPlacement {
                row_start: *counter + 1,
                quantity: ingredient.quantity.clone(),
                ingredient: ingredient.name.clone(),
                amount: reference.amount.clone(),
                mise_en_place: ingredient.mise_en_place.clone(),
                background_color: color.to_string(),
                color_class: class.to_string(),
            },
        );
        *counter += 1;
        placed += 1;
    }
    placed
}

/// Pick the step's grid span. Branch priority: root-with-ingredients, then
/// merge-from-parents, then sequential filler.
fn grid_span(
    step: &Step,
    placed: usize,
    placements: &BTreeMap<u64, StepPlacement>,
    row_cursor: usize,
    column_end: usize,
) -> Span {
    if step.parents.is_empty() && placed >= 1 {
        // A root step opening an ingredient run: rows for its ingredients,
        // panel column fixed at the step column.
        return Span {
            row_start: row_cursor,
            col_start: STEP_COLUMN_START,
            row_end: row_cursor + placed,
            col_end: column_end,
        };
    }

    if !step.parents.is_empty() {
        let parents: Vec<&StepPlacement> = step
            .parents
            .iter()
            .filter_map(|id| placements.get(id))
            .collect();

        // Parents that resolved to nothing contribute nothing; with none
        // left the step degrades to the sequential-filler span below.
        if !parents.is_empty() {
            let max_row_end = parents.iter().map(|p| p.row_end).max().unwrap_or(row_cursor);
            let max_col_end = parents.iter().map(|p| p.col_end).max().unwrap_or(column_end);
            if placed == 0 {
                let min_row_start = parents
                    .iter()
                    .map(|p| p.row_start)
                    .min()
                    .unwrap_or(row_cursor);
                return Span {
                    row_start: min_row_start,
                    col_start: max_col_end,
                    row_end: max_row_end,
                    col_end: max_col_end + 1,
                };
            }
            return Span {
                row_start: 1,
                col_start: STEP_COLUMN_START,
                row_end: max_row_end + placed,
                col_end: max_col_end + 1,
            };
        }
    }

    Span {
        row_start: row_cursor,
        col_start: STEP_COLUMN_START,
        row_end: row_cursor + placed,
        col_end: column_end,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
