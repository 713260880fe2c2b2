//! HTTP client for the Alpha Vantage query API.

use std::time::Duration;

use url::Url;

use crate::{
    query::DailySeriesQuery,
    types::{DailySeriesResponse, RawSeries},
    Error,
};

/// Request timeout for provider calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Production host for the provider.
pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co";

/// HTTP client for the Alpha Vantage `/query` endpoint.
///
/// One call per fetch, no retries. The provider reports most failures with a
/// 200 and a JSON explanation, so a missing series is its own error.
pub struct Client {
    http: reqwest::Client,
    /// Base URL for the API. Defaults to `https://www.alphavantage.co`.
    base_url: String,
}

impl Client {
    /// Creates a new client pointing at the production provider.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full request URL for a symbol's daily series.
    pub fn daily_series_url(&self, symbol: &str, api_key: &str) -> Result<Url, Error> {
        let url = Url::parse(format!("{}/query", self.base_url).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e)
        })?;
        Ok(DailySeriesQuery::new(symbol, api_key).add_to_url(&url))
    }

    /// Fetches the daily time series for `symbol`.
    ///
    /// Returns the per-date entries in the provider's order.
    /// Returns `Err(Error::NoData)` when the envelope has no series.
    pub async fn fetch_daily_series(
        &self,
        symbol: &str,
        api_key: &str,
    ) -> Result<RawSeries, Error> {
        let url = self.daily_series_url(symbol, api_key)?;
        tracing::debug!(symbol, "Fetching daily series");

        let resp = self.http.get(url).send().await.map_err(|e| {
            tracing::error!("Failed to reach provider: {}", e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        // A bare `null` body is an empty envelope, not a malformed one.
        let parsed = serde_json::from_str::<Option<DailySeriesResponse>>(&body).map_err(|e| {
            tracing::error!("Failed to parse response: {} | body: {}", e, truncate_body(&body));
            Error::Decode(e)
        })?;

        let message = parsed
            .as_ref()
            .and_then(|p| p.provider_message())
            .map(str::to_string);
        match parsed.and_then(|p| p.time_series) {
            Some(series) => Ok(series),
            None => {
                match message {
                    Some(msg) => tracing::warn!(symbol, "No time series returned: {}", msg),
                    None => tracing::warn!(symbol, "No time series returned"),
                }
                Err(Error::NoData)
            }
        }
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    match body.char_indices().nth(MAX) {
        None => body.to_string(),
        Some((idx, _)) => format!("{}...[truncated]", &body[..idx]),
    }
}
