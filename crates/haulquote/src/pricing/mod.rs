//! Quote pricing: dimension, volume, labor and location estimators composed by
//! [`QuoteCalculator`].

mod calculator;
pub mod catalog;
pub mod dimensions;
pub mod domain;
pub mod grouping;
pub mod labor;
pub mod location;
mod matching;
pub mod router;
pub mod tables;
pub mod trucks;
pub mod volume;

#[cfg(test)]
mod tests;

pub use calculator::{
    PricingPolicy, QuoteCalculator, QuoteValidationError, MAX_JOB_QUANTITY,
};
pub use catalog::{CategoryFeeSchedule, ItemCatalog, MatchedBy, ResolvedItem};
pub use dimensions::DimensionEstimator;
pub use domain::{
    DetectedItem, ItemDetail, ItemDimensions, ItemGroup, Location, LocationPricing, Quote,
    QuoteBreakdown, QuoteOptions, QuoteRequest, TruckLoad,
};
pub use grouping::{group_items, group_items_by};
pub use labor::LaborEstimator;
pub use location::LocationResolver;
pub use router::quote_router;
pub use tables::{BaseRates, CategoryFee, ItemProfile, PricingTables, TablesError};
pub use trucks::classify_truck_load;
pub use volume::volume_cubic_yards;
