use std::collections::{BTreeMap, BTreeSet};

use super::domain::LocationPricing;
use super::tables::{BaseRates, PricingTables};

/// Resolves regional rates from the state multiplier table and the urban zip heuristic.
#[derive(Debug, Clone)]
pub struct LocationResolver {
    base_rates: BaseRates,
    default_multiplier: f64,
    states: BTreeMap<String, f64>,
    urban_multiplier: f64,
    urban_prefixes: BTreeSet<String>,
}

impl LocationResolver {
    pub fn from_tables(tables: &PricingTables) -> Self {
        Self {
            base_rates: tables.base_rates,
            default_multiplier: tables.default_state_multiplier,
            states: tables
                .state_multipliers
                .iter()
                .map(|(state, multiplier)| (state.to_ascii_uppercase(), *multiplier))
                .collect(),
            urban_multiplier: tables.urban_demand_multiplier,
            urban_prefixes: tables.urban_zip_prefixes.iter().cloned().collect(),
        }
    }

    pub fn state_multiplier(&self, state: &str) -> f64 {
        self.states
            .get(&state.trim().to_ascii_uppercase())
            .copied()
            .unwrap_or(self.default_multiplier)
    }

    /// Demand factor for a zip code. Kept apart from the state multiplier; the calculator
    /// applies it to the whole subtotal.
    pub fn demand_multiplier(&self, zip_code: Option<&str>) -> f64 {
        let urban = zip_code
            .map(str::trim)
            .and_then(|zip| zip.get(..3))
            .map(|prefix| self.urban_prefixes.contains(prefix))
            .unwrap_or(false);

        if urban {
            self.urban_multiplier
        } else {
            1.0
        }
    }

    /// Every state/zip combination resolves; unknown states use the default multiplier.
    pub fn resolve(&self, state: &str, zip_code: Option<&str>) -> LocationPricing {
        let multiplier = self.state_multiplier(state);

        LocationPricing {
            zip_code: zip_code.map(str::to_string),
            base_labor_rate: self.base_rates.labor_per_hour * multiplier,
            disposal_fee_rate: self.base_rates.disposal_per_cubic_yard * multiplier,
            fuel_surcharge: self.base_rates.fuel_surcharge * multiplier,
            market_demand_multiplier: self.demand_multiplier(zip_code),
        }
    }
}
