//! Page renderers: terminal and JSON.

pub mod json;
pub mod terminal;

use crate::page::PageView;

/// Trait for rendering a projected page to an output format.
pub trait PageRenderer {
    /// Render the page to a string.
    fn render(&self, view: &PageView) -> String;
}
