//! Reduces the provider's per-date mapping to the requested window.
//!
//! Dates are visited in the provider's enumeration order and never sorted.
//! Only the closing price is load-bearing: a day whose close does not parse
//! is dropped, while an unparsable open/high/low/volume becomes zero. A
//! dropped day still uses up its slot in the window.

use alphavantage_api::types::{FieldValue, RawSeries};

use crate::summary::DailyRecord;

pub const OPEN: &str = "1. open";
pub const HIGH: &str = "2. high";
pub const LOW: &str = "3. low";
pub const CLOSE: &str = "4. close";
pub const VOLUME: &str = "5. volume";

/// Records that survived normalization and the mean of their closes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedSeries {
    pub records: Vec<DailyRecord>,
    pub average_close: f64,
}

/// Parses a string-encoded price. Missing, non-string, malformed and out-of-range values are `None`.
pub fn parse_price(value: Option<&FieldValue>) -> Option<f64> {
    value?
        .as_text()?
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Parses a string-encoded base-10 volume. Missing, non-string and malformed values are `None`.
pub fn parse_volume(value: Option<&FieldValue>) -> Option<i64> {
    value?.as_text()?.parse::<i64>().ok()
}

/// Selects up to `requested_days` dates and coerces their fields.
///
/// A non-positive `requested_days` yields an empty result with a zero average.
pub fn normalize(series: &RawSeries, requested_days: i64) -> NormalizedSeries {
    let limit = usize::try_from(requested_days)
        .unwrap_or(0)
        .min(series.len());

    let mut records = Vec::with_capacity(limit);
    let mut total_close = 0.0;

    for (date, day) in series.iter().take(limit) {
        let Some(close) = parse_price(day.get(CLOSE)) else {
            tracing::debug!(date, "Skipping day without a usable close");
            continue;
        };

        records.push(DailyRecord {
            date: date.to_string(),
            open: parse_price(day.get(OPEN)).unwrap_or(0.0),
            high: parse_price(day.get(HIGH)).unwrap_or(0.0),
            low: parse_price(day.get(LOW)).unwrap_or(0.0),
            close,
            volume: parse_volume(day.get(VOLUME)).unwrap_or(0),
        });
        total_close += close;
    }

    let average_close = if records.is_empty() {
        0.0
    } else {
        total_close / records.len() as f64
    };

    NormalizedSeries {
        records,
        average_close,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alphavantage_api::types::RawDayEntry;

    fn day(fields: &[(&str, &str)]) -> RawDayEntry {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), FieldValue::from(*v)))
            .collect()
    }

    fn full_day(open: &str, high: &str, low: &str, close: &str, volume: &str) -> RawDayEntry {
        day(&[
            (OPEN, open),
            (HIGH, high),
            (LOW, low),
            (CLOSE, close),
            (VOLUME, volume),
        ])
    }

    fn two_days() -> RawSeries {
        RawSeries::from_iter([
            ("2025-01-15", full_day("234.50", "236.80", "233.20", "235.60", "45000000")),
            ("2025-01-14", full_day("232.50", "234.80", "231.20", "233.60", "43000000")),
        ])
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn single_day_is_fully_coerced() {
        let series = RawSeries::from_iter([(
            "2025-01-15",
            full_day("234.50", "236.80", "233.20", "235.60", "45000000"),
        )]);

        let out = normalize(&series, 1);

        assert_eq!(
            out.records,
            vec![DailyRecord {
                date: "2025-01-15".to_string(),
                open: 234.50,
                high: 236.80,
                low: 233.20,
                close: 235.60,
                volume: 45_000_000,
            }]
        );
        assert_close(out.average_close, 235.60);
    }

    #[test]
    fn two_days_average() {
        let out = normalize(&two_days(), 2);
        assert_eq!(out.records.len(), 2);
        assert_close(out.average_close, 234.60);
    }

    #[test]
    fn over_request_returns_what_exists() {
        let series = RawSeries::from_iter([(
            "2025-01-15",
            full_day("234.50", "236.80", "233.20", "235.60", "45000000"),
        )]);
        let out = normalize(&series, 5);
        assert_eq!(out.records.len(), 1);
        assert_close(out.average_close, 235.60);
    }

    #[test]
    fn window_follows_provider_order() {
        let series = RawSeries::from_iter([
            ("2025-01-13", full_day("1", "1", "1", "10.0", "1")),
            ("2025-01-15", full_day("1", "1", "1", "30.0", "1")),
            ("2025-01-14", full_day("1", "1", "1", "20.0", "1")),
        ]);
        let out = normalize(&series, 2);
        let dates: Vec<&str> = out.records.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(dates, vec!["2025-01-13", "2025-01-15"]);
        assert_close(out.average_close, 20.0);
    }

    #[test]
    fn length_matches_request_when_all_parse() {
        let series: RawSeries = (1..=10)
            .map(|d| {
                (
                    format!("2025-01-{d:02}"),
                    full_day("1", "2", "0.5", &format!("{d}.0"), "100"),
                )
            })
            .collect();

        for requested in 0..=12i64 {
            let out = normalize(&series, requested);
            assert_eq!(out.records.len(), (requested as usize).min(10));

            let expected = if out.records.is_empty() {
                0.0
            } else {
                out.records.iter().map(|r| r.close).sum::<f64>() / out.records.len() as f64
            };
            assert_close(out.average_close, expected);
        }
    }

    #[test]
    fn invalid_close_is_skipped_not_failed() {
        let series = RawSeries::from_iter([(
            "2025-01-15",
            full_day("234.50", "236.80", "233.20", "invalid", "45000000"),
        )]);
        let out = normalize(&series, 1);
        assert!(out.records.is_empty());
        assert_eq!(out.average_close, 0.0);
    }

    #[test]
    fn skipped_day_consumes_its_slot() {
        let series = RawSeries::from_iter([
            ("2025-01-15", day(&[(OPEN, "1.0")])),
            ("2025-01-14", full_day("1", "1", "1", "20.0", "1")),
            ("2025-01-13", full_day("1", "1", "1", "30.0", "1")),
        ]);
        let out = normalize(&series, 2);
        assert_eq!(out.records.len(), 1);
        assert_eq!(out.records[0].date, "2025-01-14");
        assert_close(out.average_close, 20.0);
    }

    #[test]
    fn null_day_is_skipped_and_consumes_its_slot() {
        let json = r#"{"2025-01-15": {"4. close": "1.0"}, "2025-01-14": null}"#;
        let series: RawSeries = serde_json::from_str(json).unwrap();

        let out = normalize(&series, 2);
        assert_eq!(out.records.len(), 1);
        assert_eq!(out.records[0].date, "2025-01-15");
        assert_close(out.average_close, 1.0);
    }

    #[test]
    fn overflowing_close_is_skipped() {
        let series = RawSeries::from_iter([
            ("2025-01-15", full_day("1", "1", "1", "1e400", "1")),
            ("2025-01-14", full_day("1", "1", "1", "20.0", "1")),
        ]);
        let out = normalize(&series, 2);
        assert_eq!(out.records.len(), 1);
        assert!(out.average_close.is_finite());
        assert_close(out.average_close, 20.0);
    }

    #[test]
    fn numeric_close_is_not_a_string() {
        let mut entry = full_day("1", "1", "1", "ignored", "1");
        entry.insert(CLOSE.to_string(), FieldValue::Number(235.6));
        let series = RawSeries::from_iter([("2025-01-15", entry)]);

        let out = normalize(&series, 1);
        assert!(out.records.is_empty());
    }

    #[test]
    fn bad_secondary_fields_default_to_zero() {
        let mut entry = day(&[(CLOSE, "100.25"), (HIGH, "n/a"), (VOLUME, "12.5")]);
        entry.insert(LOW.to_string(), FieldValue::Other(serde_json::Value::Null));
        let series = RawSeries::from_iter([("2025-01-15", entry)]);

        let out = normalize(&series, 1);
        let record = &out.records[0];
        assert_eq!(record.open, 0.0);
        assert_eq!(record.high, 0.0);
        assert_eq!(record.low, 0.0);
        assert_eq!(record.volume, 0);
        assert_eq!(record.close, 100.25);
    }

    #[test]
    fn empty_and_non_positive_requests() {
        let out = normalize(&RawSeries::new(), 5);
        assert!(out.records.is_empty());
        assert_eq!(out.average_close, 0.0);

        assert_eq!(normalize(&two_days(), 0), NormalizedSeries::default());
        assert_eq!(normalize(&two_days(), -3), NormalizedSeries::default());
    }

    #[test]
    fn coercions() {
        assert_eq!(parse_price(Some(&FieldValue::from("235.60"))), Some(235.60));
        assert_eq!(parse_price(Some(&FieldValue::from("abc"))), None);
        assert_eq!(parse_price(Some(&FieldValue::Number(1.0))), None);
        assert_eq!(parse_price(None), None);
        assert_eq!(parse_price(Some(&FieldValue::from("1e400"))), None);
        assert_eq!(parse_price(Some(&FieldValue::from("NaN"))), None);
        assert_eq!(parse_volume(Some(&FieldValue::from("45000000"))), Some(45_000_000));
        assert_eq!(parse_volume(Some(&FieldValue::from("4.5e7"))), None);
    }
}
