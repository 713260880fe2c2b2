//! Provider seam between the HTTP handler and the daily-series client.

use alphavantage_api::types::RawSeries;
use alphavantage_api::{Client, Error};
use async_trait::async_trait;

use crate::normalize::normalize;
use crate::summary::SeriesSummary;

/// Anything that can produce a symbol's raw daily series.
#[async_trait]
pub trait SeriesSource: Send + Sync {
    async fn fetch_daily_series(&self, symbol: &str, api_key: &str) -> Result<RawSeries, Error>;
}

#[async_trait]
impl SeriesSource for Client {
    async fn fetch_daily_series(&self, symbol: &str, api_key: &str) -> Result<RawSeries, Error> {
        Client::fetch_daily_series(self, symbol, api_key).await
    }
}

/// Fetches `symbol` once and reduces it to the last `days` entries.
pub async fn summarize(
    source: &dyn SeriesSource,
    symbol: &str,
    api_key: &str,
    days: i64,
) -> Result<SeriesSummary, Error> {
    let series = source.fetch_daily_series(symbol, api_key).await?;
    let normalized = normalize(&series, days);
    tracing::info!(
        symbol,
        available = series.len(),
        returned = normalized.records.len(),
        "Normalized daily series"
    );
    Ok(SeriesSummary::new(symbol, days, normalized))
}
