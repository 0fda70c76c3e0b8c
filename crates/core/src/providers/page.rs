use std::collections::HashMap;

use super::traits::PageSource;

/// In-memory page: element id → text content, plus known canvas heights.
///
/// Useful for server-side hosts and tests that already hold the embedded
/// blobs as strings.
#[derive(Debug, Clone, Default)]
pub struct StaticPage {
    elements: HashMap<String, String>,
    canvas_heights: HashMap<String, u32>,
}

impl StaticPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an element's text content.
    pub fn with_element(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.elements.insert(id.into(), text.into());
        self
    }

    pub fn with_canvas_height(mut self, id: impl Into<String>, height_px: u32) -> Self {
        self.canvas_heights.insert(id.into(), height_px);
        self
    }
}

impl PageSource for StaticPage {
    fn text_content(&self, id: &str) -> Option<String> {
        self.elements.get(id).cloned()
    }

    fn canvas_height(&self, id: &str) -> Option<u32> {
        self.canvas_heights.get(id).copied()
    }
}
