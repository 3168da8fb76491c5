//! JSON output renderer.
//!
//! Outputs `{"page": {...}, "footer": {...}}`, one document per render.

use crate::constants::{COPYRIGHT, FEATURES_ROUTE, REPOSITORY_URL};
use crate::output::PageRenderer;
use crate::page::PageView;

/// JSON output renderer.
pub struct JsonRenderer;

impl PageRenderer for JsonRenderer {
    fn render(&self, view: &PageView) -> String {
        let output = serde_json::json!({
            "page": view,
            "footer": {
                "repository": REPOSITORY_URL,
                "copyright": COPYRIGHT,
                "features": FEATURES_ROUTE,
            },
        });

        let mut rendered =
            serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string());
        rendered.push('\n');
        rendered
    }
}
