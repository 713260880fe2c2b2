//! Query builder for the `TIME_SERIES_DAILY` endpoint.

use url::Url;

/// Alpha Vantage function name for unadjusted daily bars.
pub const TIME_SERIES_DAILY: &str = "TIME_SERIES_DAILY";

/// Parameters of one daily-series request.
#[derive(Clone, Debug)]
pub struct DailySeriesQuery {
    pub symbol: String,
    pub api_key: String,
}

impl DailySeriesQuery {
    pub fn new(symbol: &str, api_key: &str) -> Self {
        Self {
            symbol: symbol.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Appends this query's parameters to the given URL, returning the modified URL.
    ///
    /// Parameter order is `apikey`, `function`, `symbol`.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("apikey", &self.api_key)
            .append_pair("function", TIME_SERIES_DAILY)
            .append_pair("symbol", &self.symbol);
        url
    }
}
