use crate::pricing::{
    DetectedItem, Location, PricingPolicy, PricingTables, QuoteCalculator, QuoteOptions,
    QuoteRequest,
};

pub(super) fn calculator() -> QuoteCalculator {
    QuoteCalculator::standard()
}

pub(super) fn discounting_calculator() -> QuoteCalculator {
    QuoteCalculator::new(
        PricingTables::standard(),
        PricingPolicy {
            apply_bulk_discounts: true,
            ..PricingPolicy::default()
        },
    )
}

pub(super) fn couch() -> DetectedItem {
    DetectedItem::new("couch", 1, "furniture").with_confidence(0.95)
}

pub(super) fn garage_cleanout() -> Vec<DetectedItem> {
    vec![
        DetectedItem::new("refrigerator", 1, "appliance").with_confidence(0.88),
        DetectedItem::new("cardboard box", 12, "general").with_confidence(0.74),
        DetectedItem::new("Tire", 4, "tires").with_confidence(0.91),
        DetectedItem::new("mattress", 1, "mattress").with_confidence(0.97),
    ]
}

pub(super) fn california() -> Location {
    Location::state("CA")
}

pub(super) fn request(items: Vec<DetectedItem>, location: Location) -> QuoteRequest {
    QuoteRequest {
        items,
        location,
        options: QuoteOptions::default(),
    }
}

pub(super) fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} (+/- {tolerance}), got {actual}"
    );
}
