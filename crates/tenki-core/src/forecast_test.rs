use serde_json::json;

use super::*;

#[test]
fn weather_result_omits_unset_fields() {
    let result = WeatherResult::new("奈良県", "北部");
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value, json!({"prefecture": "奈良県", "area": "北部"}));
}

#[test]
fn daily_forecast_without_rain_has_no_rain_key() {
    let day = DailyForecast {
        forecast: Some("Sunny".to_string()),
        rain: None,
        temp: Some(Temperature {
            min: Some("5℃".to_string()),
            max: Some("15℃".to_string()),
        }),
    };
    let value = serde_json::to_value(&day).unwrap();
    assert_eq!(
        value,
        json!({"forecast": "Sunny", "temp": {"min": "5℃", "max": "15℃"}})
    );
    assert!(value.get("rain").is_none());
}

#[test]
fn temperature_with_only_max_serializes_one_key() {
    let temp = Temperature {
        min: None,
        max: Some("20".to_string()),
    };
    assert_eq!(serde_json::to_value(&temp).unwrap(), json!({"max": "20"}));
    assert!(!temp.is_empty());
}

#[test]
fn empty_groups_report_empty() {
    assert!(Temperature::default().is_empty());
    assert!(DailyForecast::default().is_empty());
}

#[test]
fn weather_result_deserializes_without_optional_fields() {
    let parsed: WeatherResult =
        serde_json::from_value(json!({"prefecture": "P", "area": "A"})).unwrap();
    assert_eq!(parsed, WeatherResult::new("P", "A"));
}
