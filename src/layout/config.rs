//! Configuration for the layout engine

use serde::Deserialize;

use super::error::LayoutError;
use super::types::BoundingBox;

/// Configuration options for layout computation.
///
/// All fields have defaults; profiles loaded from TOML may override any
/// subset of them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Left edge of the first group on each tier
    pub start_x: f64,

    /// Y of the root tier (depth 0)
    pub start_y: f64,

    /// Vertical distance between consecutive depth tiers
    pub tier_spacing: f64,

    /// Horizontal distance between consecutive nodes on a tier
    pub horizontal_spacing: f64,

    /// Extra horizontal distance inserted between groups on a tier
    pub group_spacing: f64,

    /// Node card size (nodes are positioned by their card center)
    pub card_width: f64,
    pub card_height: f64,

    /// Gap between card slots inside a territory
    pub card_gap: f64,

    /// Padding between a territory's border and its cards
    pub territory_padding: f64,

    /// Height reserved for the territory title bar
    pub territory_header: f64,

    /// Number of territory columns in the canvas grid
    pub territory_columns: usize,

    /// Spacing between adjacent territory boxes
    pub territory_spacing: f64,

    /// Anchor of the first territory box
    pub territory_origin: (f64, f64),

    /// Floor for computed territory box dimensions
    pub territory_min_width: f64,
    pub territory_min_height: f64,

    /// Region in which nodes without a territory are scattered
    pub fallback_region: BoundingBox,

    /// Recursion bound for depth resolution; exceeding it yields
    /// [`LayoutError::GraphTooDeep`](super::error::LayoutError)
    pub max_traversal: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            start_x: 120.0,
            start_y: 80.0,
            tier_spacing: 160.0,
            horizontal_spacing: 190.0,
            group_spacing: 120.0,
            card_width: 160.0,
            card_height: 48.0,
            card_gap: 24.0,
            territory_padding: 24.0,
            territory_header: 40.0,
            territory_columns: 3,
            territory_spacing: 60.0,
            territory_origin: (80.0, 80.0),
            territory_min_width: 260.0,
            territory_min_height: 180.0,
            fallback_region: BoundingBox::new(0.0, 0.0, 1600.0, 1200.0),
            max_traversal: 4096,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the node card size
    pub fn with_card_size(mut self, width: f64, height: f64) -> Self {
        self.card_width = width;
        self.card_height = height;
        self
    }

    /// Set the spacing between nodes on a tier
    pub fn with_horizontal_spacing(mut self, spacing: f64) -> Self {
        self.horizontal_spacing = spacing;
        self
    }

    /// Set the extra spacing between groups on a tier
    pub fn with_group_spacing(mut self, spacing: f64) -> Self {
        self.group_spacing = spacing;
        self
    }

    /// Set the vertical distance between depth tiers
    pub fn with_tier_spacing(mut self, spacing: f64) -> Self {
        self.tier_spacing = spacing;
        self
    }

    /// Set the padding inside territory boxes
    pub fn with_territory_padding(mut self, padding: f64) -> Self {
        self.territory_padding = padding;
        self
    }

    /// Set the depth-resolution recursion bound
    pub fn with_max_traversal(mut self, limit: usize) -> Self {
        self.max_traversal = limit;
        self
    }

    /// Reject configurations that would make placement degenerate
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.card_width <= 0.0 || self.card_height <= 0.0 {
            return Err(LayoutError::invalid_config("card size must be positive"));
        }
        if self.territory_columns == 0 {
            return Err(LayoutError::invalid_config(
                "territory grid needs at least one column",
            ));
        }
        if self.fallback_region.width <= 0.0 || self.fallback_region.height <= 0.0 {
            return Err(LayoutError::invalid_config(
                "fallback region must have positive area",
            ));
        }
        Ok(())
    }
}
