use alphavantage_api::types::{DailySeriesResponse, FieldValue};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_daily_series() {
    let json = load_fixture("daily_ibm.json");
    let resp: DailySeriesResponse = serde_json::from_str(&json).unwrap();

    let meta = resp.meta_data.as_ref().unwrap();
    assert_eq!(meta["2. Symbol"], "IBM");

    let series = resp.time_series.as_ref().unwrap();
    assert_eq!(series.len(), 3);

    let dates: Vec<&str> = series.iter().map(|(d, _)| d).collect();
    assert_eq!(dates, vec!["2025-01-15", "2025-01-14", "2025-01-13"]);

    let day = series.get("2025-01-15").unwrap();
    assert_eq!(day["4. close"], FieldValue::from("235.60"));
    assert_eq!(day["5. volume"].as_text(), Some("45000000"));
    assert!(resp.provider_message().is_none());
}

#[test]
fn deserialize_rate_limited() {
    let json = load_fixture("rate_limited.json");
    let resp: DailySeriesResponse = serde_json::from_str(&json).unwrap();
    assert!(resp.time_series.is_none());
    assert!(resp.provider_message().unwrap().contains("5 calls per minute"));
}

#[test]
fn deserialize_invalid_symbol() {
    let json = load_fixture("invalid_symbol.json");
    let resp: DailySeriesResponse = serde_json::from_str(&json).unwrap();
    assert!(resp.time_series.is_none());
    assert!(resp.provider_message().unwrap().starts_with("Invalid API call"));
}

#[test]
fn series_with_wrong_shape_fails() {
    let json = r#"{"Time Series (Daily)": ["2025-01-15"]}"#;
    assert!(serde_json::from_str::<DailySeriesResponse>(json).is_err());
}
