use serde::{Deserialize, Serialize};

/// Option surcharges, price floor, and range spread applied on top of the tables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingPolicy {
    pub stairs_multiplier: f64,
    pub disassembly_multiplier: f64,
    pub urgency_multiplier: f64,
    /// Minimum dispatch fee; the estimate never drops below it.
    pub minimum_fee: f64,
    pub range_low_factor: f64,
    pub range_high_factor: f64,
    /// Apply per-category bulk discounts to category disposal fees.
    pub apply_bulk_discounts: bool,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            stairs_multiplier: 1.25,
            disassembly_multiplier: 1.35,
            urgency_multiplier: 1.5,
            minimum_fee: 125.0,
            range_low_factor: 0.9,
            range_high_factor: 1.15,
            apply_bulk_discounts: false,
        }
    }
}
