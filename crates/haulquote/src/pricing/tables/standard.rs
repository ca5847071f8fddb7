use std::collections::BTreeMap;

use super::{BaseRates, CategoryFee, ItemProfile, PricingTables};

fn item(
    key: &str,
    synonyms: &[&str],
    [length, width, height]: [f64; 3],
    weight: f64,
    difficulty: f64,
) -> ItemProfile {
    ItemProfile {
        key: key.to_string(),
        synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        length,
        width,
        height,
        weight,
        difficulty,
    }
}

fn category(key: &str, synonyms: &[&str], fee: f64) -> CategoryFee {
    CategoryFee {
        key: key.to_string(),
        synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        fee,
    }
}

pub(super) fn tables() -> PricingTables {
    let items = vec![
        item("couch", &["sofa", "settee"], [7.0, 3.0, 3.0], 150.0, 3.5),
        item("sectional", &["sectional sofa"], [10.0, 7.0, 3.0], 300.0, 5.0),
        item("loveseat", &["love seat"], [5.0, 3.0, 3.0], 100.0, 3.0),
        item("recliner", &["lazy boy"], [3.0, 3.0, 3.5], 90.0, 2.5),
        item("chair", &["armchair", "office chair", "dining chair"], [3.0, 3.0, 3.0], 35.0, 1.5),
        item("mattress", &[], [6.5, 5.0, 1.0], 70.0, 2.5),
        item("box spring", &["boxspring"], [6.5, 5.0, 0.5], 40.0, 2.0),
        item("bed frame", &["bed", "headboard"], [7.0, 5.0, 1.0], 80.0, 3.0),
        item("dresser", &["chest of drawers", "nightstand"], [5.0, 2.0, 4.0], 150.0, 3.5),
        item("table", &["dining table", "coffee table"], [6.0, 3.0, 2.5], 80.0, 2.5),
        item("desk", &[], [5.0, 2.5, 2.5], 90.0, 3.0),
        item("bookshelf", &["bookcase", "shelving"], [3.0, 1.0, 6.0], 60.0, 2.5),
        item("refrigerator", &["fridge", "freezer"], [3.0, 3.0, 6.0], 250.0, 5.0),
        item("washer", &["washing machine"], [2.5, 2.5, 3.5], 170.0, 4.0),
        item("dryer", &["clothes dryer"], [2.5, 2.5, 3.5], 120.0, 4.0),
        item("stove", &["oven", "range"], [2.5, 2.5, 3.0], 150.0, 4.0),
        item("dishwasher", &[], [2.0, 2.0, 3.0], 75.0, 3.5),
        item("tv", &["television", "monitor"], [4.0, 0.5, 2.5], 40.0, 2.0),
        item("microwave", &[], [2.0, 1.5, 1.0], 35.0, 1.0),
        item("box", &["carton", "moving box"], [2.0, 1.5, 1.5], 20.0, 1.0),
        item("bag", &["trash bag", "garbage bag"], [2.0, 2.0, 2.0], 15.0, 1.0),
        item("tire", &["tyre", "wheel"], [2.5, 2.5, 0.75], 25.0, 1.5),
    ];

    let categories = vec![
        category("furniture", &[], 15.0),
        category("appliance", &["appliances", "large appliance"], 25.0),
        category("electronics", &["electronic", "e waste", "ewaste"], 20.0),
        category("mattress", &["mattresses", "bedding"], 20.0),
        category("yard waste", &["yard", "green waste"], 10.0),
        category("construction", &["construction debris", "debris"], 20.0),
        category("tires", &["tire"], 15.0),
        category("hazardous", &["chemicals", "paint"], 50.0),
        category("general", &["trash", "household", "misc"], 10.0),
    ];

    let state_multipliers = [
        ("AK", 1.2),
        ("AZ", 1.0),
        ("CA", 1.25),
        ("CO", 1.1),
        ("CT", 1.15),
        ("DC", 1.25),
        ("FL", 1.05),
        ("GA", 1.0),
        ("HI", 1.25),
        ("IL", 1.1),
        ("MA", 1.2),
        ("MD", 1.1),
        ("MN", 1.05),
        ("NC", 1.0),
        ("NJ", 1.2),
        ("NV", 1.05),
        ("NY", 1.25),
        ("OH", 0.95),
        ("OR", 1.1),
        ("PA", 1.05),
        ("TX", 0.95),
        ("VA", 1.05),
        ("WA", 1.15),
    ]
    .into_iter()
    .map(|(state, multiplier)| (state.to_string(), multiplier))
    .collect::<BTreeMap<_, _>>();

    let urban_zip_prefixes = [
        "100", "101", "102", "112", "900", "941", "606", "021", "981", "200", "191", "770",
        "752", "331", "850",
    ]
    .into_iter()
    .map(str::to_string)
    .collect();

    PricingTables {
        base_rates: BaseRates {
            labor_per_hour: 50.0,
            disposal_per_cubic_yard: 35.0,
            fuel_surcharge: 15.0,
        },
        default_item: item("generic item", &[], [3.0, 2.0, 2.0], 50.0, 2.5),
        items,
        default_category_fee: 10.0,
        categories,
        default_state_multiplier: 1.0,
        state_multipliers,
        urban_demand_multiplier: 1.15,
        urban_zip_prefixes,
    }
}
