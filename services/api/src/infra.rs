use haulquote::config::PricingConfig;
use haulquote::error::AppError;
use haulquote::pricing::QuoteCalculator;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Load the configured tables once; the calculator is then shared read-only by every handler.
pub(crate) fn shared_calculator(pricing: &PricingConfig) -> Result<Arc<QuoteCalculator>, AppError> {
    let calculator = pricing.calculator()?;

    match &pricing.tables_path {
        Some(path) => info!(path = %path.display(), "loaded pricing tables override"),
        None => info!("using bundled pricing tables"),
    }
    if pricing.apply_bulk_discounts {
        info!("bulk discounts enabled");
    }

    Ok(Arc::new(calculator))
}
