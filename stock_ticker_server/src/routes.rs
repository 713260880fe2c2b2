//! HTTP surface: one GET endpoint returning the configured symbol's summary.

use std::sync::Arc;

use axum::{extract::State, http::Method, routing::any, Json, Router};
use stock_ticker_lib::{summarize, SeriesSource, SeriesSummary};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::{ApiError, ApiResult};

/// Per-process handler dependencies. Shared read-only across requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub source: Arc<dyn SeriesSource>,
}

impl AppState {
    pub fn new(config: Config, source: Arc<dyn SeriesSource>) -> Self {
        Self {
            config: Arc::new(config),
            source,
        }
    }
}

/// Every path is served by the same handler, matching a catch-all `/` mount.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(stock_summary))
        .fallback(stock_summary)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn stock_summary(
    State(state): State<AppState>,
    method: Method,
) -> ApiResult<Json<SeriesSummary>> {
    if method != Method::GET {
        return Err(ApiError::MethodNotAllowed);
    }

    let config = &state.config;
    let summary = summarize(
        state.source.as_ref(),
        &config.symbol,
        &config.api_key,
        config.days,
    )
    .await?;

    Ok(Json(summary))
}
