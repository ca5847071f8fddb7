mod policy;
mod validation;

pub use policy::PricingPolicy;
pub use validation::{QuoteValidationError, MAX_JOB_QUANTITY};

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::catalog::{CategoryFeeSchedule, ItemCatalog};
use super::dimensions::DimensionEstimator;
use super::domain::{
    DetectedItem, ItemDetail, ItemGroup, Location, Quote, QuoteBreakdown, QuoteOptions,
    QuoteRequest,
};
use super::grouping::group_items_by;
use super::labor::LaborEstimator;
use super::location::LocationResolver;
use super::tables::PricingTables;
use super::trucks::classify_truck_load;
use super::volume::volume_cubic_yards;
use validation::validate_request;

/// Composes the estimators into a priced quote. Holds only immutable data, so a single
/// instance can be shared behind an `Arc` by any number of callers.
#[derive(Debug, Clone)]
pub struct QuoteCalculator {
    dimensions: DimensionEstimator,
    labor: LaborEstimator,
    location: LocationResolver,
    fees: CategoryFeeSchedule,
    policy: PricingPolicy,
}

impl QuoteCalculator {
    /// Tables are assumed valid; see [`PricingTables::validate`].
    pub fn new(tables: PricingTables, policy: PricingPolicy) -> Self {
        let catalog = Arc::new(ItemCatalog::from_tables(&tables));

        Self {
            dimensions: DimensionEstimator::new(catalog.clone()),
            labor: LaborEstimator::new(catalog),
            location: LocationResolver::from_tables(&tables),
            fees: CategoryFeeSchedule::from_tables(&tables),
            policy,
        }
    }

    /// Bundled tables with the default policy.
    pub fn standard() -> Self {
        Self::new(PricingTables::standard(), PricingPolicy::default())
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    pub fn dimensions(&self) -> &DimensionEstimator {
        &self.dimensions
    }

    pub fn labor(&self) -> &LaborEstimator {
        &self.labor
    }

    pub fn location(&self) -> &LocationResolver {
        &self.location
    }

    /// Group items by the fee table category their label resolves to, so synonyms such as
    /// "appliances" and "large appliance" count toward the same bulk threshold.
    pub fn group_items(&self, items: &[DetectedItem]) -> Vec<ItemGroup> {
        group_items_by(items, |item| self.fees.category_key(&item.category))
    }

    pub fn calculate(&self, request: &QuoteRequest) -> Result<Quote, QuoteValidationError> {
        self.calculate_quote(&request.items, &request.location, &request.options)
    }

    /// Price a job. Fails only on malformed input; unknown item types and categories fall
    /// back to the generic profile and default fee.
    pub fn calculate_quote(
        &self,
        items: &[DetectedItem],
        location: &Location,
        options: &QuoteOptions,
    ) -> Result<Quote, QuoteValidationError> {
        validate_request(items, location)?;
        Ok(self.price(items, location, options))
    }

    fn price(&self, items: &[DetectedItem], location: &Location, options: &QuoteOptions) -> Quote {
        let pricing = self
            .location
            .resolve(&location.state, location.zip_code.as_deref().map(str::trim));

        let groups = self.group_items(items);
        let discounts: HashMap<&str, f64> = if self.policy.apply_bulk_discounts {
            groups
                .iter()
                .filter_map(|group| {
                    group
                        .bulk_discount
                        .map(|discount| (group.category.as_str(), discount))
                })
                .collect()
        } else {
            HashMap::new()
        };

        let mut details = Vec::with_capacity(items.len());
        let mut total_volume = 0.0;
        let mut total_weight = 0.0;
        let mut total_disposal_fee = 0.0;
        let mut bulk_savings = 0.0;

        for item in items {
            let quantity = f64::from(item.quantity);
            let dimensions = self.dimensions.estimate(&item.item_type, item.confidence);
            let volume = volume_cubic_yards(&dimensions, item.quantity);
            let weight = dimensions.estimated_weight * quantity;

            let listed_fee = self.fees.fee_for(&item.category) * quantity;
            let discount = discounts
                .get(self.fees.category_key(&item.category).as_str())
                .copied()
                .unwrap_or(1.0);
            let disposal_fee = listed_fee * discount;

            total_volume += volume;
            total_weight += weight;
            total_disposal_fee += disposal_fee;
            bulk_savings += listed_fee - disposal_fee;

            details.push(ItemDetail {
                item_type: item.item_type.clone(),
                quantity: item.quantity,
                category: item.category.clone(),
                confidence: item.confidence,
                matched_profile: self.dimensions.matched_key(&item.item_type),
                dimensions,
                volume: round_to(volume, 2),
                weight,
                difficulty: self.labor.difficulty(&item.item_type),
                disposal_fee: round_to(disposal_fee, 2),
            });
        }

        let labor_hours = self.labor.labor_hours(items);
        let mut labor_cost = labor_hours * pricing.base_labor_rate;
        if options.has_stairs {
            labor_cost *= self.policy.stairs_multiplier;
        }
        if options.requires_disassembly {
            labor_cost *= self.policy.disassembly_multiplier;
        }

        let disposal_cost = total_volume * pricing.disposal_fee_rate + total_disposal_fee;

        let subtotal_before_urgency = (labor_cost + disposal_cost + pricing.fuel_surcharge)
            * pricing.market_demand_multiplier;
        let urgency_multiplier = if options.is_urgent {
            self.policy.urgency_multiplier
        } else {
            1.0
        };
        let adjusted = subtotal_before_urgency * urgency_multiplier;

        let minimum_fee_applied = adjusted < self.policy.minimum_fee;
        let subtotal = if minimum_fee_applied {
            self.policy.minimum_fee
        } else {
            adjusted
        };

        let estimated = whole_dollars(subtotal);
        let min = whole_dollars(subtotal * self.policy.range_low_factor);
        let max = whole_dollars(subtotal * self.policy.range_high_factor);
        let truck_loads = classify_truck_load(total_volume);

        debug!(
            items = items.len(),
            state = %location.state,
            total_volume,
            labor_hours,
            estimated,
            minimum_fee_applied,
            truck_loads = %truck_loads,
            "quote calculated"
        );

        Quote {
            min,
            max,
            estimated,
            breakdown: QuoteBreakdown {
                labor_cost: round_to(labor_cost, 2),
                disposal_cost: round_to(disposal_cost, 2),
                fuel_surcharge: round_to(pricing.fuel_surcharge, 2),
                total_volume: round_to(total_volume, 2),
                total_weight: total_weight.round() as u64,
                labor_hours: round_to(labor_hours, 1),
                market_demand_multiplier: pricing.market_demand_multiplier,
                subtotal_before_urgency: round_to(subtotal_before_urgency, 2),
                urgency_multiplier,
                subtotal: round_to(subtotal, 2),
                minimum_fee_applied,
                bulk_discount_savings: round_to(bulk_savings, 2),
                groups,
            },
            items: details,
            truck_loads,
        }
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn whole_dollars(value: f64) -> u64 {
    value.round() as u64
}
