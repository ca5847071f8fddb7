use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;
use tracing::info;

use super::calculator::QuoteCalculator;
use super::domain::{DetectedItem, QuoteRequest};

/// Router exposing quote pricing over HTTP.
pub fn quote_router(calculator: Arc<QuoteCalculator>) -> Router {
    Router::new()
        .route("/api/v1/quotes", post(quote_handler))
        .route("/api/v1/quotes/groups", post(groups_handler))
        .with_state(calculator)
}

pub(crate) async fn quote_handler(
    State(calculator): State<Arc<QuoteCalculator>>,
    axum::Json(request): axum::Json<QuoteRequest>,
) -> Response {
    match calculator.calculate(&request) {
        Ok(quote) => {
            info!(
                estimated = quote.estimated,
                truck_loads = %quote.truck_loads,
                "quote issued"
            );
            (StatusCode::OK, axum::Json(quote)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn groups_handler(
    State(calculator): State<Arc<QuoteCalculator>>,
    axum::Json(items): axum::Json<Vec<DetectedItem>>,
) -> Response {
    (StatusCode::OK, axum::Json(calculator.group_items(&items))).into_response()
}
