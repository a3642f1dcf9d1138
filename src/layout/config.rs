//! Configuration for the layout engine

use super::types::Size;

/// Configuration options for layout computation
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Container size used on axes whose max constraint is unbounded
    pub default_viewport: Size,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_viewport: Size::new(720.0, 1280.0),
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback viewport size
    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.default_viewport = Size::new(width, height);
        self
    }
}
