//! Library layer for the stock ticker service: series normalization,
//! summary types, and the provider seam the HTTP handler depends on.
//!
//! Wraps the `alphavantage_api` crate. The handler never talks to the
//! provider client directly; it goes through [`SeriesSource`] so tests can
//! substitute a fake.

pub mod normalize;
pub mod source;
pub mod summary;

pub use alphavantage_api;
pub use alphavantage_api::types;

pub use normalize::{normalize, NormalizedSeries};
pub use source::{summarize, SeriesSource};
pub use summary::{DailyRecord, SeriesSummary};
