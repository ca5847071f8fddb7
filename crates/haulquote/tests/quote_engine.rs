//! End-to-end pricing scenarios exercised through the public crate surface.

use std::sync::Arc;
use std::thread;

use haulquote::config::PricingConfig;
use haulquote::pricing::{
    classify_truck_load, group_items, volume_cubic_yards, DetectedItem, Location, PricingTables,
    QuoteCalculator, QuoteOptions, QuoteRequest, TruckLoad,
};

fn estate_cleanout() -> Vec<DetectedItem> {
    vec![
        DetectedItem::new("Sofa", 1, "furniture").with_confidence(0.93),
        DetectedItem::new("queen mattress", 2, "mattress").with_confidence(0.9),
        DetectedItem::new("box_spring", 2, "mattress").with_confidence(0.82),
        DetectedItem::new("dresser", 1, "furniture").with_confidence(0.77),
        DetectedItem::new("moving box", 14, "general").with_confidence(0.65),
        DetectedItem::new("television", 1, "e-waste").with_confidence(0.99),
    ]
}

#[test]
fn estate_cleanout_resolves_every_label() {
    let calculator = QuoteCalculator::standard();
    let quote = calculator
        .calculate_quote(
            &estate_cleanout(),
            &Location::state("WA").with_zip("98101"),
            &QuoteOptions {
                has_stairs: true,
                ..QuoteOptions::default()
            },
        )
        .expect("quote");

    let matched: Vec<Option<&str>> = quote
        .items
        .iter()
        .map(|detail| detail.matched_profile.as_deref())
        .collect();
    assert_eq!(
        matched,
        vec![
            Some("couch"),
            Some("mattress"),
            Some("box spring"),
            Some("dresser"),
            Some("box"),
            Some("tv"),
        ]
    );

    assert_eq!(quote.breakdown.market_demand_multiplier, 1.15);
    assert!(!quote.breakdown.minimum_fee_applied);
    assert!(quote.min <= quote.estimated && quote.estimated <= quote.max);
    assert_eq!(quote.breakdown.groups.len(), 4);
}

#[test]
fn punctuated_vision_labels_resolve() {
    let items = [
        DetectedItem::new("TV/Monitor", 1, "electronics").with_confidence(0.8),
        DetectedItem::new("couch,", 1, "furniture").with_confidence(0.8),
        DetectedItem::new("refrigerator (mini)", 1, "appliance").with_confidence(0.8),
    ];
    let quote = QuoteCalculator::standard()
        .calculate_quote(&items, &Location::state("TX"), &QuoteOptions::default())
        .expect("quote");

    let matched: Vec<Option<&str>> = quote
        .items
        .iter()
        .map(|detail| detail.matched_profile.as_deref())
        .collect();
    assert_eq!(matched, vec![Some("tv"), Some("couch"), Some("refrigerator")]);
}

#[test]
fn breakdown_totals_match_item_details() {
    let quote = QuoteCalculator::standard()
        .calculate_quote(
            &estate_cleanout(),
            &Location::state("OH"),
            &QuoteOptions::default(),
        )
        .expect("quote");

    let volume: f64 = quote.items.iter().map(|detail| detail.volume).sum();
    let weight: f64 = quote.items.iter().map(|detail| detail.weight).sum();

    assert!((volume - quote.breakdown.total_volume).abs() < 0.05);
    assert_eq!(weight.round() as u64, quote.breakdown.total_weight);
    assert_eq!(
        quote.truck_loads,
        classify_truck_load(quote.breakdown.total_volume)
    );
}

#[test]
fn quotes_serialize_with_camel_case_contract() {
    let request: QuoteRequest = serde_json::from_value(serde_json::json!({
        "items": [{ "type": "washer", "quantity": 1, "category": "appliance", "confidence": 0.9 }],
        "location": { "state": "IL", "zipCode": "60614" },
        "options": { "requiresDisassembly": true }
    }))
    .expect("request parses");

    let quote = QuoteCalculator::standard()
        .calculate(&request)
        .expect("quote");
    let value = serde_json::to_value(&quote).expect("quote serializes");

    for key in ["min", "max", "estimated", "breakdown", "items", "truckLoads"] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    for key in [
        "laborCost",
        "disposalCost",
        "fuelSurcharge",
        "totalVolume",
        "totalWeight",
        "laborHours",
        "marketDemandMultiplier",
    ] {
        assert!(value["breakdown"].get(key).is_some(), "missing breakdown.{key}");
    }
    assert_eq!(value["items"][0]["dimensions"]["estimatedWeight"], 170.0);
}

#[test]
fn calculator_is_shareable_across_threads() {
    let calculator = Arc::new(QuoteCalculator::standard());
    let expected = calculator
        .calculate_quote(
            &estate_cleanout(),
            &Location::state("NJ"),
            &QuoteOptions::default(),
        )
        .expect("quote");

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let calculator = Arc::clone(&calculator);
            thread::spawn(move || {
                calculator
                    .calculate_quote(
                        &estate_cleanout(),
                        &Location::state("NJ"),
                        &QuoteOptions::default(),
                    )
                    .expect("quote")
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("thread completes"), expected);
    }
}

#[test]
fn overridden_tables_change_prices() {
    let mut tables = PricingTables::standard();
    tables.base_rates.labor_per_hour = 100.0;
    let path = std::env::temp_dir().join(format!(
        "haulquote-override-{}.json",
        std::process::id()
    ));
    std::fs::write(
        &path,
        serde_json::to_vec(&tables).expect("tables serialize"),
    )
    .expect("write override");

    let config = PricingConfig {
        tables_path: Some(path.clone()),
        apply_bulk_discounts: false,
    };
    let calculator = config.calculator().expect("override loads");
    std::fs::remove_file(&path).ok();

    let items = [DetectedItem::new("chair", 1, "furniture")];
    let location = Location::state("ZZ");
    let standard = QuoteCalculator::standard()
        .calculate_quote(&items, &location, &QuoteOptions::default())
        .expect("quote");
    let expensive = calculator
        .calculate_quote(&items, &location, &QuoteOptions::default())
        .expect("quote");

    assert!(expensive.breakdown.labor_cost > standard.breakdown.labor_cost);
}

#[test]
fn helpers_are_usable_standalone() {
    let dimensions = QuoteCalculator::standard()
        .dimensions()
        .estimate("Refrigerator", 0.9);
    let volume = volume_cubic_yards(&dimensions, 2);
    assert!((volume - 4.0).abs() < 1e-9);
    assert_eq!(classify_truck_load(volume), TruckLoad::Half);

    let groups = group_items(&estate_cleanout());
    let general = groups
        .iter()
        .find(|group| group.category == "general")
        .expect("general group");
    assert_eq!(general.bulk_discount, Some(0.85));
}
