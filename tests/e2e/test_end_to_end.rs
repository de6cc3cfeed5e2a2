//! End-to-end tests: JSON payloads in, markup + stylesheet out.

use recipe_grid::{recipe, render_recipe, GridPlacer, LayoutError};

const STEPS_JSON: &str = r#"[
    {"id": 1, "action": "Mix the dough", "ingredients": [
        {"id": 10, "amount": "500g"},
        {"id": 11, "amount": "325ml"}
    ]},
    {"id": 2, "action": "Knead", "parents": [1]},
    {"id": 3, "action": "Make the filling", "ingredients": [
        {"id": 12, "amount": null}
    ]},
    {"id": 4, "action": "Assemble and bake", "parents": [2, 3]}
]"#;

const INGREDIENTS_JSON: &str = r#"[
    {"id": 10, "name": "Flour", "quantity": "500g", "mise_en_place": "sifted"},
    {"id": 11, "name": "Water", "quantity": "325ml"},
    {"id": 12, "name": "Apples", "quantity": "4", "mise_en_place": "peeled, cored"}
]"#;

#[test]
fn test_full_pipeline_from_json() {
    let steps = recipe::parse_steps(STEPS_JSON).unwrap();
    let ingredients = recipe::parse_ingredients(INGREDIENTS_JSON).unwrap();
    let out = render_recipe(&steps, &ingredients).unwrap();

    // One rule set per step and per ingredient occurrence.
    for id in 1..=4 {
        assert!(out.css.contains(&format!(".step-{id} {{")), "step {id} rule");
    }
    for key in 0..3 {
        assert!(out.css.contains(&format!(".quantity-{key} {{")));
        assert!(out.css.contains(&format!(".name-{key} {{")));
        assert!(out.css.contains(&format!(".mep-{key} {{")));
    }

    // All ingredient elements precede all step elements.
    let first_step = out.html.find("step-").unwrap();
    let last_mep = out.html.rfind("mep-").unwrap();
    assert!(last_mep < first_step);

    assert!(out.html.contains("Mix the dough"));
    assert!(out.html.contains(">Flour</div>"));
    assert!(out.html.contains(">sifted</div>"));
}

#[test]
fn test_placement_structure_from_json() {
    let steps = recipe::parse_steps(STEPS_JSON).unwrap();
    let ingredients = recipe::parse_ingredients(INGREDIENTS_JSON).unwrap();
    let layout = GridPlacer::calculate(&steps, &ingredients).unwrap();

    // Two merge steps: 4 + 2 columns.
    assert_eq!(layout.column_count, 6);
    assert_eq!(layout.steps.len(), 4);
    assert_eq!(layout.ingredients.len(), 3);

    let rows: Vec<usize> = layout.ingredients.values().map(|p| p.row_start).collect();
    assert_eq!(rows, vec![1, 2, 3]);

    // Topological soundness, read off the placements: step 4 merges its
    // parents' spans, so it starts at the column after both.
    let s4 = &layout.steps[&4];
    let s2 = &layout.steps[&2];
    let s3 = &layout.steps[&3];
    assert_eq!(s4.col_start, s2.col_end.max(s3.col_end));
}

#[test]
fn test_single_step_recipe_is_special_cased() {
    let steps = recipe::parse_steps(r#"[{"id": 1, "action": "Boil"}]"#).unwrap();
    let out = render_recipe(&steps, &[]).unwrap();
    assert!(out.css.contains(".step-1 {"));
}

#[test]
fn test_unknown_ingredient_id_is_dropped() {
    let steps =
        recipe::parse_steps(r#"[{"id": 1, "action": "X", "ingredients": [{"id": 99}]}]"#).unwrap();
    let ingredients = recipe::parse_ingredients(INGREDIENTS_JSON).unwrap();
    let layout = GridPlacer::calculate(&steps, &ingredients).unwrap();
    assert!(layout.ingredients.is_empty());
}

#[test]
fn test_cyclic_recipe_is_rejected() {
    let steps = recipe::parse_steps(
        r#"[
            {"id": 1, "action": "A", "parents": [2]},
            {"id": 2, "action": "B", "parents": [1]}
        ]"#,
    )
    .unwrap();
    assert!(matches!(
        render_recipe(&steps, &[]),
        Err(LayoutError::CyclicDependencies)
    ));
}

#[test]
fn test_malformed_payload_is_reported() {
    assert!(matches!(
        recipe::parse_steps("[{\"id\": 1}]"),
        Err(LayoutError::InvalidInput(_))
    ));
}
