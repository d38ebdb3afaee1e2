//! Dashboard configuration
//!
//! Which columns act as filterable dimensions, and which colors the three
//! RAG tiers map to. This is explicit configuration handed to the engine
//! with every query, never process-wide state.

use serde::{Deserialize, Serialize};

use crate::rag::RagStatus;

/// A configurable dimension column and its display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionSpec {
    /// Column name in the measurement table
    pub column: String,

    /// Label shown to users (e.g. "Team" for column `team`)
    pub label: String,
}

impl DimensionSpec {
    pub fn new(column: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            label: label.into(),
        }
    }
}

/// Fill and text color for one RAG tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RagColor {
    /// Bar/cell fill color
    pub fill: String,

    /// Text color over that fill
    pub text: String,
}

impl RagColor {
    pub fn new(fill: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            fill: fill.into(),
            text: text.into(),
        }
    }
}

/// Colors for the three RAG tiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RagPalette {
    pub red: RagColor,
    pub amber: RagColor,
    pub green: RagColor,
}

impl Default for RagPalette {
    fn default() -> Self {
        Self {
            red: RagColor::new("#FF6F61", "#000000"),
            amber: RagColor::new("#FFC107", "#FFFFFF"),
            green: RagColor::new("#4CAF50", "#000000"),
        }
    }
}

impl RagPalette {
    /// Color pair for a classification
    pub fn color_for(&self, status: RagStatus) -> &RagColor {
        match status {
            RagStatus::Red => &self.red,
            RagStatus::Amber => &self.amber,
            RagStatus::Green => &self.green,
        }
    }
}

/// Dashboard configuration: ordered dimension list plus RAG palette
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Filterable dimension columns, in display order. The first entry is
    /// the default column for the dimensional breakdown.
    #[serde(default)]
    pub dimensions: Vec<DimensionSpec>,

    /// RAG color palette
    #[serde(default)]
    pub palette: RagPalette,
}

impl DashboardConfig {
    /// The default breakdown column: the first configured dimension
    pub fn default_breakdown(&self) -> Option<&str> {
        self.dimensions.first().map(|d| d.column.as_str())
    }

    /// Display label for a dimension column, if configured
    pub fn label_for(&self, column: &str) -> Option<&str> {
        self.dimensions
            .iter()
            .find(|d| d.column == column)
            .map(|d| d.label.as_str())
    }

    /// Whether `column` is a configured dimension
    pub fn has_dimension(&self, column: &str) -> bool {
        self.dimensions.iter().any(|d| d.column == column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_dimension_is_the_default_breakdown() {
        let config = DashboardConfig {
            dimensions: vec![
                DimensionSpec::new("team", "Team"),
                DimensionSpec::new("region", "Region"),
            ],
            palette: RagPalette::default(),
        };
        assert_eq!(config.default_breakdown(), Some("team"));
        assert_eq!(config.label_for("region"), Some("Region"));
        assert!(config.has_dimension("region"));
        assert!(!config.has_dimension("tribe"));
    }

    #[test]
    fn empty_config_has_no_breakdown() {
        let config = DashboardConfig::default();
        assert_eq!(config.default_breakdown(), None);
    }

    #[test]
    fn palette_maps_each_tier() {
        let palette = RagPalette::default();
        assert_eq!(palette.color_for(RagStatus::Red).fill, "#FF6F61");
        assert_eq!(palette.color_for(RagStatus::Amber).fill, "#FFC107");
        assert_eq!(palette.color_for(RagStatus::Green).fill, "#4CAF50");
    }
}
