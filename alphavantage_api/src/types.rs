//! Wire types for the Alpha Vantage daily time-series response.
//!
//! The provider sends every numeric field as a string keyed by a numbered
//! label (`"4. close"`), and the series itself as a JSON object keyed by
//! date. Entry values are kept loosely typed here; coercion happens in the
//! normalizer, one field at a time.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// A single per-field value as the provider sent it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Other(serde_json::Value),
}

impl FieldValue {
    /// The string payload, if the provider sent one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

/// One day's fields, keyed by label (`"1. open"` .. `"5. volume"`).
pub type RawDayEntry = BTreeMap<String, FieldValue>;

/// Daily entries in the order the provider's document lists them.
///
/// No sorting is applied: the enumeration order is whatever the provider
/// wrote. A date repeated in the document keeps its first position and
/// takes the last value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSeries {
    entries: Vec<(String, RawDayEntry)>,
}

impl RawSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, replacing the value of an existing date in place.
    pub fn insert(&mut self, date: impl Into<String>, entry: RawDayEntry) {
        let date = date.into();
        match self.entries.iter_mut().find(|(d, _)| *d == date) {
            Some(existing) => existing.1 = entry,
            None => self.entries.push((date, entry)),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, date: &str) -> Option<&RawDayEntry> {
        self.entries
            .iter()
            .find(|(d, _)| d == date)
            .map(|(_, entry)| entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawDayEntry)> {
        self.entries.iter().map(|(d, entry)| (d.as_str(), entry))
    }
}

impl<K: Into<String>> FromIterator<(K, RawDayEntry)> for RawSeries {
    fn from_iter<I: IntoIterator<Item = (K, RawDayEntry)>>(iter: I) -> Self {
        let mut series = RawSeries::new();
        for (date, entry) in iter {
            series.insert(date, entry);
        }
        series
    }
}

struct RawSeriesVisitor;

impl<'de> Visitor<'de> for RawSeriesVisitor {
    type Value = RawSeries;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of date strings to daily entries")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries: Vec<(String, RawDayEntry)> =
            Vec::with_capacity(access.size_hint().unwrap_or(0));
        let mut positions: HashMap<String, usize> = HashMap::new();

        while let Some((date, entry)) = access.next_entry::<String, Option<RawDayEntry>>()? {
            // A null day carries no fields; the normalizer skips it.
            let entry = entry.unwrap_or_default();
            match positions.get(&date) {
                Some(&idx) => entries[idx].1 = entry,
                None => {
                    positions.insert(date.clone(), entries.len());
                    entries.push((date, entry));
                }
            }
        }

        Ok(RawSeries { entries })
    }
}

impl<'de> Deserialize<'de> for RawSeries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RawSeriesVisitor)
    }
}

/// Top-level `TIME_SERIES_DAILY` envelope.
///
/// On throttling or a bad symbol the provider still answers 200 and fills
/// one of `Note`, `Information` or `Error Message` instead of the series.
#[derive(Debug, Deserialize)]
pub struct DailySeriesResponse {
    #[serde(rename = "Meta Data")]
    pub meta_data: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(rename = "Time Series (Daily)")]
    pub time_series: Option<RawSeries>,
    #[serde(rename = "Note")]
    pub note: Option<String>,
    #[serde(rename = "Information")]
    pub information: Option<String>,
    #[serde(rename = "Error Message")]
    pub error_message: Option<String>,
}

impl DailySeriesResponse {
    /// Whatever explanation the provider gave for withholding data.
    pub fn provider_message(&self) -> Option<&str> {
        self.error_message
            .as_deref()
            .or(self.note.as_deref())
            .or(self.information.as_deref())
    }
}
