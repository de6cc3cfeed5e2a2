//! GridRenderer — serializes placements into markup and stylesheet text.
//!
//! Mechanical string construction. The caller owns attaching the fragments
//! to a container that declares `display: grid`; the only coupling contract
//! is the selector names (`step-<id>`, `quantity-<n>`, `name-<n>`,
//! `mep-<n>`, plus the per-color classes).

use crate::layout::GridLayout;
use crate::recipe::Step;

// ─── Constants ────────────────────────────────────────────────────────────────

/// Headroom added above the step count so ingredient text always stacks on
/// top of step panels.
const Z_INDEX_BUFFER: i64 = 10;

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// ─── RenderedGrid ────────────────────────────────────────────────────────────

/// Markup + stylesheet pair for one recipe grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedGrid {
    pub html: String,
    pub css: String,
}

impl RenderedGrid {
    /// The markup with its stylesheet inlined in a `<style>` element, ready
    /// to drop into a grid container.
    pub fn fragment(&self) -> String {
        format!("{}<style>{}</style>", self.html, self.css)
    }
}

// ─── GridRenderer ────────────────────────────────────────────────────────────

/// Serializer over one computed layout and the step list it was built from.
pub struct GridRenderer<'a> {
    layout: &'a GridLayout,
    steps: &'a [Step],
}

impl<'a> GridRenderer<'a> {
    pub fn new(layout: &'a GridLayout, steps: &'a [Step]) -> Self {
        Self { layout, steps }
    }

    pub fn render(&self) -> RenderedGrid {
        RenderedGrid {
            html: self.emit_html(),
            css: self.emit_css(),
        }
    }

    fn max_z_index(&self) -> i64 {
        self.steps.len() as i64 + Z_INDEX_BUFFER
    }

    fn emit_css(&self) -> String {
        let mut css = String::new();
        let columns = self.layout.column_count;
        let rows = self.steps.len();
        css.push_str(&format!(
            ".parent {{\n  grid-template-columns: repeat({columns}, 1fr);\n  grid-template-rows: repeat({rows}, 1fr);\n}}\n"
        ));

        let max_z = self.max_z_index();
        for (id, p) in &self.layout.steps {
            // First-numbered steps stack on top.
            let z = max_z - *id as i64;
            css.push_str(&format!(
                ".step-{id} {{\n  grid-area: {} / {} / {} / {};\n  align-items: {};\n  border-bottom-right-radius: {}px;\n  z-index: {z};\n  position: relative;\n}}\n",
                p.row_start,
                p.col_start,
                p.row_end,
                p.col_end,
                p.align_items.as_str(),
                p.border_radius,
            ));
            css.push_str(&format!(
                ".{} {{\n  background-color: #{};\n}}\n",
                p.color_class, p.background_color
            ));
        }

        for (key, p) in &self.layout.ingredients {
            let row = p.row_start;
            for (prefix, col) in [("quantity", 1), ("name", 2), ("mep", 3)] {
                css.push_str(&format!(
                    ".{prefix}-{key} {{\n  grid-area: {row} / {col} / {} / {};\n  position: relative;\n  z-index: {max_z};\n}}\n",
                    row + 1,
                    col + 1,
                ));
            }
            css.push_str(&format!(
                ".{} {{\n  background-color: #{};\n}}\n",
                p.color_class, p.background_color
            ));
        }

        css
    }

    fn emit_html(&self) -> String {
        let mut html = String::new();

        for (key, p) in &self.layout.ingredients {
            let quantity = p.quantity.as_deref().unwrap_or("");
            let mep = p
                .mise_en_place
                .as_deref()
                .or(p.amount.as_deref())
                .unwrap_or("");
            html.push_str(&format!(
                "<div class=\"items-center {cls} quantity-{key}\">{}</div>\n",
                escape(quantity),
                cls = p.color_class,
            ));
            html.push_str(&format!(
                "<div class=\"items-center {cls} name-{key}\">{}</div>\n",
                escape(&p.ingredient),
                cls = p.color_class,
            ));
            html.push_str(&format!(
                "<div class=\"items-center {cls} mep-{key}\">{}</div>\n",
                escape(mep),
                cls = p.color_class,
            ));
        }

        // Steps are emitted in declared order, after every ingredient block.
        for step in self.steps {
            let Some(p) = self.layout.steps.get(&step.id) else {
                continue;
            };
            html.push_str(&format!(
                "<div class=\"items-center {} step-{}\">{}</div>\n",
                p.color_class,
                step.id,
                escape(&step.action),
            ));
        }

        html
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
