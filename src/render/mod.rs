//! Renderers — turn a computed grid layout into attachable fragments.

pub mod grid;

pub use grid::{GridRenderer, RenderedGrid};
