//! Quote pricing engine for junk-removal leads.
//!
//! Detected items plus a pickup location and job options go in, a priced [`pricing::Quote`]
//! comes out. Reference data lives in [`pricing::PricingTables`] and never changes after a
//! calculator is built, so one [`pricing::QuoteCalculator`] can serve any number of threads.

pub mod config;
pub mod error;
pub mod pricing;
pub mod telemetry;
