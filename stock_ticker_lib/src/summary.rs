//! Response body types.

use serde::{Deserialize, Serialize};

use crate::normalize::NormalizedSeries;

/// One normalized trading day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

/// JSON body returned by `GET /`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub symbol: String,
    /// The configured window, echoed back even when fewer records survived.
    pub days: i64,
    pub average_close: f64,
    pub data: Vec<DailyRecord>,
}

impl SeriesSummary {
    pub fn new(symbol: &str, days: i64, series: NormalizedSeries) -> Self {
        Self {
            symbol: symbol.to_string(),
            days,
            average_close: series.average_close,
            data: series.records,
        }
    }
}
