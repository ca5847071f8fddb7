use std::sync::Arc;

use super::catalog::ItemCatalog;
use super::domain::DetectedItem;

pub const SETUP_MINUTES: f64 = 15.0;
pub const DISPOSAL_TRAVEL_MINUTES: f64 = 30.0;
pub const MINUTES_PER_DIFFICULTY_POINT: f64 = 5.0;

/// Estimates on-site labor from each item's handling difficulty.
#[derive(Debug, Clone)]
pub struct LaborEstimator {
    catalog: Arc<ItemCatalog>,
}

impl LaborEstimator {
    pub fn new(catalog: Arc<ItemCatalog>) -> Self {
        Self { catalog }
    }

    /// Difficulty on a 1-5 scale; unknown items use the generic profile's 2.5.
    pub fn difficulty(&self, item_type: &str) -> f64 {
        self.catalog.resolve(item_type).profile.difficulty
    }

    pub fn minutes_for(&self, item_type: &str, quantity: u32) -> f64 {
        self.difficulty(item_type) * MINUTES_PER_DIFFICULTY_POINT * f64::from(quantity)
    }

    /// Setup and disposal-site travel are always charged, so the result is at least 0.75 h.
    pub fn labor_hours(&self, items: &[DetectedItem]) -> f64 {
        let handling: f64 = items
            .iter()
            .map(|item| self.minutes_for(&item.item_type, item.quantity))
            .sum();

        (SETUP_MINUTES + handling + DISPOSAL_TRAVEL_MINUTES) / 60.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::PricingTables;

    fn estimator() -> LaborEstimator {
        LaborEstimator::new(Arc::new(ItemCatalog::from_tables(
            &PricingTables::standard(),
        )))
    }

    #[test]
    fn empty_job_costs_the_fixed_overhead() {
        assert!((estimator().labor_hours(&[]) - 0.75).abs() < 1e-9);
    }

    #[test]
    fn single_couch_adds_difficulty_minutes() {
        let hours = estimator().labor_hours(&[DetectedItem::new("couch", 1, "furniture")]);
        assert!((hours - (15.0 + 17.5 + 30.0) / 60.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_items_use_default_difficulty() {
        let estimator = estimator();
        assert_eq!(estimator.difficulty("flying carpet"), 2.5);
        assert!((estimator.minutes_for("flying carpet", 2) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn hours_grow_with_quantity_and_difficulty() {
        let estimator = estimator();
        let one = estimator.labor_hours(&[DetectedItem::new("box", 1, "general")]);
        let many = estimator.labor_hours(&[DetectedItem::new("box", 4, "general")]);
        let harder = estimator.labor_hours(&[DetectedItem::new("refrigerator", 4, "appliance")]);
        assert!(one < many);
        assert!(many < harder);
    }
}
