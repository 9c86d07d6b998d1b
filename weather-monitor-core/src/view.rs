//! Turns a raw [`WeatherReading`] into display-ready text.

use chrono::{DateTime, NaiveDateTime};
use serde::Serialize;

use crate::{
    classify::{
        CloudBand, HumidityBand, WeatherCondition, describe_weather_code, wind_direction_label,
    },
    model::WeatherReading,
};

/// Shown in place of any value the payload did not carry.
pub const PLACEHOLDER: &str = "--";

/// Labels derived from a reading. Recomputed on every assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub description: String,
    pub humidity_band: String,
    pub cloud_band: String,
    pub wind_compass: String,
}

/// Everything a dashboard needs, already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherView {
    pub location: String,
    pub coordinates: String,

    /// Whole degrees, e.g. "23°".
    pub headline_temperature: String,
    /// e.g. "Feels like 27°C".
    pub feels_like: String,
    pub temperature: String,
    pub apparent_temperature: String,

    pub humidity: String,
    pub rain: String,
    pub precipitation: String,
    pub wind_speed: String,
    pub wind_direction: String,
    pub cloud_cover: String,
    pub pressure: String,

    pub updated_at: String,
    pub labels: Classification,
}

pub fn classify_reading(reading: &WeatherReading) -> Classification {
    let description = match reading.weather_code {
        Some(code) => describe_weather_code(code),
        None => WeatherCondition::Unknown.description(),
    };

    Classification {
        description: description.to_string(),
        humidity_band: label_or_placeholder(
            reading.humidity.map(|h| HumidityBand::from_percent(h).label()),
        ),
        cloud_band: label_or_placeholder(
            reading.cloud_cover.map(|c| CloudBand::from_percent(c).label()),
        ),
        wind_compass: label_or_placeholder(reading.wind_direction.map(wind_direction_label)),
    }
}

/// Build the view for a reading. Never fails; absent numbers become [`PLACEHOLDER`].
pub fn assemble(reading: &WeatherReading) -> WeatherView {
    let location = if reading.country.is_empty() {
        reading.city.clone()
    } else {
        format!("{}, {}", reading.city, reading.country)
    };

    let coordinates = format!(
        "{}°, {}°",
        fixed_or_placeholder(reading.latitude, 4),
        fixed_or_placeholder(reading.longitude, 4),
    );

    let headline_temperature = format!("{}°", fixed_or_placeholder(reading.temperature, 0));
    let feels_like =
        format!("Feels like {}°C", fixed_or_placeholder(reading.apparent_temperature, 0));

    WeatherView {
        location,
        coordinates,
        headline_temperature,
        feels_like,
        temperature: with_unit(reading.temperature, 1, "°C"),
        apparent_temperature: with_unit(reading.apparent_temperature, 1, "°C"),
        humidity: with_unit(reading.humidity.map(|h| h as f64), 0, "%"),
        rain: with_unit(reading.rain, 1, " mm"),
        precipitation: with_unit(reading.precipitation, 1, " mm"),
        wind_speed: with_unit(reading.wind_speed, 1, " km/h"),
        wind_direction: with_unit(reading.wind_direction, 0, "°"),
        cloud_cover: with_unit(reading.cloud_cover.map(|c| c as f64), 0, "%"),
        pressure: with_unit(reading.pressure, 1, " hPa"),
        updated_at: format_timestamp(&reading.timestamp),
        labels: classify_reading(reading),
    }
}

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    // Adding 0.0 turns -0.0 into 0.0.
    (value * factor).round() / factor + 0.0
}

/// Fixed-precision text using [`round_to`], so every figure rounds the same way.
pub fn fixed(value: f64, places: u32) -> String {
    format!("{:.*}", places as usize, round_to(value, places))
}

/// `YYYY-MM-DD HH:MM` for RFC 3339 or naive ISO-8601 input; other text is
/// passed through untouched.
pub fn format_timestamp(raw: &str) -> String {
    const DISPLAY: &str = "%Y-%m-%d %H:%M";

    let raw = raw.trim();
    if raw.is_empty() {
        return PLACEHOLDER.to_string();
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(DISPLAY).to_string();
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return ndt.format(DISPLAY).to_string();
        }
    }

    raw.to_string()
}

/// `None` when the value is absent or does not survive scaling (e.g. near `f64::MAX`).
fn displayable(value: Option<f64>, places: u32) -> Option<String> {
    value
        .map(|v| round_to(v, places))
        .filter(|v| v.is_finite())
        .map(|v| format!("{:.*}", places as usize, v))
}

fn fixed_or_placeholder(value: Option<f64>, places: u32) -> String {
    displayable(value, places).unwrap_or_else(|| PLACEHOLDER.to_string())
}

fn with_unit(value: Option<f64>, places: u32, unit: &str) -> String {
    match displayable(value, places) {
        Some(text) => format!("{text}{unit}"),
        None => PLACEHOLDER.to_string(),
    }
}

fn label_or_placeholder(label: Option<&'static str>) -> String {
    label.unwrap_or(PLACEHOLDER).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WeatherReading {
        WeatherReading {
            city: "Ribeirão Preto".into(),
            country: "Brazil".into(),
            latitude: Some(-21.17756),
            longitude: Some(-47.81028),
            temperature: Some(23.456),
            apparent_temperature: Some(24.96),
            humidity: Some(85),
            precipitation: Some(0.25),
            rain: Some(0.0),
            wind_speed: Some(12.34),
            wind_direction: Some(90.0),
            cloud_cover: Some(20),
            pressure: Some(1013.25),
            weather_code: Some(0),
            timestamp: "2025-01-01T12:00".into(),
        }
    }

    #[test]
    fn assembles_labeled_view() {
        let view = assemble(&sample());

        assert_eq!(view.location, "Ribeirão Preto, Brazil");
        assert_eq!(view.coordinates, "-21.1776°, -47.8103°");
        assert_eq!(view.headline_temperature, "23°");
        assert_eq!(view.temperature, "23.5°C");
        assert_eq!(view.feels_like, "Feels like 25°C");
        assert_eq!(view.apparent_temperature, "25.0°C");
        assert_eq!(view.humidity, "85%");
        assert_eq!(view.precipitation, "0.3 mm");
        assert_eq!(view.rain, "0.0 mm");
        assert_eq!(view.wind_speed, "12.3 km/h");
        assert_eq!(view.wind_direction, "90°");
        assert_eq!(view.cloud_cover, "20%");
        assert_eq!(view.pressure, "1013.3 hPa");
        assert_eq!(view.updated_at, "2025-01-01 12:00");

        assert_eq!(view.labels.description, "Clear sky");
        assert_eq!(view.labels.humidity_band, "High moisture");
        assert_eq!(view.labels.cloud_band, "Clear skies");
        assert_eq!(view.labels.wind_compass, "E");
    }

    #[test]
    fn missing_numbers_render_placeholders() {
        let reading = WeatherReading {
            city: "Nowhere".into(),
            ..WeatherReading::default()
        };

        let view = assemble(&reading);
        assert_eq!(view.location, "Nowhere");
        assert_eq!(view.coordinates, "--°, --°");
        assert_eq!(view.headline_temperature, "--°");
        assert_eq!(view.temperature, PLACEHOLDER);
        assert_eq!(view.pressure, PLACEHOLDER);
        assert_eq!(view.updated_at, PLACEHOLDER);
        assert_eq!(view.labels.humidity_band, PLACEHOLDER);
        assert_eq!(view.labels.wind_compass, PLACEHOLDER);
        assert_eq!(view.labels.description, "Unknown conditions");
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(fixed(2.5, 0), "3");
        assert_eq!(fixed(-2.5, 0), "-3");
        assert_eq!(fixed(0.25, 1), "0.3");
        assert_eq!(fixed(-0.04, 1), "0.0");
        assert_eq!(fixed(-0.4, 0), "0");
    }

    #[test]
    fn headline_and_detail_round_independently() {
        let reading = WeatherReading {
            temperature: Some(-3.55),
            ..sample()
        };
        let view = assemble(&reading);
        assert_eq!(view.headline_temperature, "-4°");
        assert_eq!(view.temperature, "-3.6°C");
    }

    #[test]
    fn timestamps() {
        assert_eq!(format_timestamp("2024-01-15T14:30:00"), "2024-01-15 14:30");
        assert_eq!(format_timestamp("2024-01-15T14:30:00+02:00"), "2024-01-15 14:30");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert_eq!(format_timestamp("  "), PLACEHOLDER);
    }

    #[test]
    fn non_finite_values_are_placeholders() {
        let reading = WeatherReading {
            pressure: Some(f64::NAN),
            ..sample()
        };
        assert_eq!(assemble(&reading).pressure, PLACEHOLDER);
    }

    #[test]
    fn values_overflowing_when_scaled_are_placeholders() {
        let reading = WeatherReading {
            latitude: Some(1e305),
            pressure: Some(f64::MAX),
            ..sample()
        };

        let view = assemble(&reading);
        assert_eq!(view.coordinates, "--°, -47.8103°");
        assert_eq!(view.pressure, PLACEHOLDER);
        assert_eq!(view.headline_temperature, "23°");
    }
}
