use std::sync::Arc;

use super::catalog::ItemCatalog;
use super::domain::ItemDimensions;

/// Dimensions are less certain than the detection that produced the label.
pub const DIMENSION_CONFIDENCE_DAMPING: f64 = 0.7;

/// Maps an item label to the typical size and weight of one unit.
#[derive(Debug, Clone)]
pub struct DimensionEstimator {
    catalog: Arc<ItemCatalog>,
}

impl DimensionEstimator {
    pub fn new(catalog: Arc<ItemCatalog>) -> Self {
        Self { catalog }
    }

    /// Never fails: unknown labels get the generic profile.
    pub fn estimate(&self, item_type: &str, detection_confidence: f64) -> ItemDimensions {
        let profile = self.catalog.resolve(item_type).profile;
        ItemDimensions {
            length: profile.length,
            width: profile.width,
            height: profile.height,
            estimated_weight: profile.weight,
            confidence: detection_confidence * DIMENSION_CONFIDENCE_DAMPING,
        }
    }

    pub fn matched_key(&self, item_type: &str) -> Option<String> {
        self.catalog
            .resolve(item_type)
            .matched_key()
            .map(str::to_string)
    }
}
