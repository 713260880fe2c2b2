//! Error types for the API client.

/// Errors that can occur when fetching a daily series.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The outbound call failed (connection refused, timeout, DNS failure).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// The provider answered with a non-success status.
    #[error("request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The body was not a JSON object of the expected shape.
    #[error("error decoding response: {0}")]
    Decode(#[from] serde_json::Error),
    /// The body parsed but carried no time series (unknown symbol, throttling).
    #[error("no time series data returned")]
    NoData,
    /// The configured base URL could not be parsed.
    #[error("invalid provider URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
