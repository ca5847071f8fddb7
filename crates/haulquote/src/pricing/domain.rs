use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Item reported by the upstream vision step or entered by hand. Every field is required on
/// the wire; hand-entered items send a confidence of 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedItem {
    #[serde(rename = "type")]
    pub item_type: String,
    pub quantity: u32,
    pub category: String,
    pub confidence: f64,
}

impl DetectedItem {
    pub fn new(item_type: impl Into<String>, quantity: u32, category: impl Into<String>) -> Self {
        Self {
            item_type: item_type.into(),
            quantity,
            category: category.into(),
            confidence: 1.0,
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }
}

/// Pickup location. `state` is a two-letter code; `zip_code` is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

impl Location {
    pub fn state(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            zip_code: None,
        }
    }

    pub fn with_zip(mut self, zip_code: impl Into<String>) -> Self {
        self.zip_code = Some(zip_code.into());
        self
    }
}

/// Job flags that adjust individual cost terms. Absent flags are false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuoteOptions {
    pub is_urgent: bool,
    pub has_stairs: bool,
    pub requires_disassembly: bool,
}

/// Complete input for one quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(default)]
    pub items: Vec<DetectedItem>,
    pub location: Location,
    #[serde(default)]
    pub options: QuoteOptions,
}

/// Typical physical footprint of one unit of an item, in feet and pounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub estimated_weight: f64,
    pub confidence: f64,
}

/// Regional rates resolved for a pickup location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationPricing {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    pub base_labor_rate: f64,
    pub disposal_fee_rate: f64,
    pub fuel_surcharge: f64,
    pub market_demand_multiplier: f64,
}

/// Job size relative to one standard removal truck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum TruckLoad {
    Quarter,
    Half,
    ThreeQuarter,
    Full,
    Trucks(u32),
}

impl fmt::Display for TruckLoad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TruckLoad::Quarter => f.write_str("QUARTER"),
            TruckLoad::Half => f.write_str("HALF"),
            TruckLoad::ThreeQuarter => f.write_str("THREE_QUARTER"),
            TruckLoad::Full => f.write_str("FULL"),
            TruckLoad::Trucks(count) => write!(f, "{count}_TRUCKS"),
        }
    }
}

/// Raised when a truck-load label cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized truck load '{0}'")]
pub struct ParseTruckLoadError(pub String);

impl FromStr for TruckLoad {
    type Err = ParseTruckLoadError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "QUARTER" => Ok(TruckLoad::Quarter),
            "HALF" => Ok(TruckLoad::Half),
            "THREE_QUARTER" => Ok(TruckLoad::ThreeQuarter),
            "FULL" => Ok(TruckLoad::Full),
            other => other
                .strip_suffix("_TRUCKS")
                .and_then(|count| count.parse::<u32>().ok())
                .filter(|count| *count >= 2)
                .map(TruckLoad::Trucks)
                .ok_or_else(|| ParseTruckLoadError(other.to_string())),
        }
    }
}

impl From<TruckLoad> for String {
    fn from(value: TruckLoad) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for TruckLoad {
    type Error = ParseTruckLoadError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Items sharing a disposal category, with the bulk discount their combined quantity earns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemGroup {
    pub category: String,
    pub items: Vec<DetectedItem>,
    pub total_quantity: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bulk_discount: Option<f64>,
}

/// Input item enriched with everything the calculator derived for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDetail {
    #[serde(rename = "type")]
    pub item_type: String,
    pub quantity: u32,
    pub category: String,
    pub confidence: f64,
    /// Table entry the label resolved to; `None` when the generic profile was used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_profile: Option<String>,
    pub dimensions: ItemDimensions,
    pub volume: f64,
    pub weight: f64,
    pub difficulty: f64,
    pub disposal_fee: f64,
}

/// Cost terms behind a quote so pricing can be audited line by line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteBreakdown {
    pub labor_cost: f64,
    pub disposal_cost: f64,
    pub fuel_surcharge: f64,
    pub total_volume: f64,
    pub total_weight: u64,
    pub labor_hours: f64,
    pub market_demand_multiplier: f64,
    pub subtotal_before_urgency: f64,
    pub urgency_multiplier: f64,
    pub subtotal: f64,
    pub minimum_fee_applied: bool,
    pub bulk_discount_savings: f64,
    pub groups: Vec<ItemGroup>,
}

/// Priced result of one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub min: u64,
    pub max: u64,
    pub estimated: u64,
    pub breakdown: QuoteBreakdown,
    pub items: Vec<ItemDetail>,
    pub truck_loads: TruckLoad,
}
