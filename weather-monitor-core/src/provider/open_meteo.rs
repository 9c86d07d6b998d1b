use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::FetchError,
    model::{WeatherReading, whole},
};

use super::{WeatherProvider, trim_base_url, truncate_body};

/// Variables requested from the forecast API's `current` block.
const CURRENT_VARIABLES: &[&str] = &[
    "temperature_2m",
    "apparent_temperature",
    "relative_humidity_2m",
    "precipitation",
    "rain",
    "cloud_cover",
    "surface_pressure",
    "wind_speed_10m",
    "wind_direction_10m",
    "weather_code",
];

/// Resolves the city with the geocoding API, then reads current conditions
/// for its coordinates.
#[derive(Debug, Clone)]
pub struct OpenMeteoProvider {
    forecast_url: String,
    geocoding_url: String,
    http: Client,
}

impl OpenMeteoProvider {
    pub fn new(forecast_url: &str, geocoding_url: &str, http: Client) -> Self {
        Self {
            forecast_url: trim_base_url(forecast_url),
            geocoding_url: trim_base_url(geocoding_url),
            http,
        }
    }

    async fn geocode(&self, city: &str) -> Result<GeoPlace, FetchError> {
        let url = format!("{}/search", self.geocoding_url);
        tracing::debug!(%url, city, "geocoding city");

        let res = self
            .http
            .get(&url)
            .query(&[("name", city), ("count", "1"), ("language", "en"), ("format", "json")])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            tracing::warn!(%status, body = %truncate_body(&body), "geocoding request failed");
            return Err(FetchError::Api {
                status: status.as_u16(),
                detail: format!("Failed to geocode city: {city}"),
            });
        }

        let parsed: GeoResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))?;

        parsed
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| FetchError::CityNotFound(city.to_string()))
    }

    async fn fetch_current(&self, latitude: f64, longitude: f64) -> Result<OmCurrent, FetchError> {
        let url = format!("{}/forecast", self.forecast_url);
        tracing::debug!(%url, latitude, longitude, "requesting current conditions");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current", CURRENT_VARIABLES.join(",")),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            tracing::warn!(%status, body = %truncate_body(&body), "forecast request failed");
            return Err(FetchError::Api {
                status: status.as_u16(),
                detail: "Failed to fetch weather data from Open-Meteo API".to_string(),
            });
        }

        let parsed: OmForecastResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))?;

        Ok(parsed.current)
    }
}

#[derive(Debug, Deserialize)]
struct GeoPlace {
    name: String,
    country: Option<String>,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct GeoResponse {
    results: Option<Vec<GeoPlace>>,
}

#[derive(Debug, Deserialize)]
struct OmCurrent {
    time: String,
    temperature_2m: Option<f64>,
    apparent_temperature: Option<f64>,
    relative_humidity_2m: Option<f64>,
    precipitation: Option<f64>,
    rain: Option<f64>,
    cloud_cover: Option<f64>,
    surface_pressure: Option<f64>,
    wind_speed_10m: Option<f64>,
    wind_direction_10m: Option<f64>,
    weather_code: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    current: OmCurrent,
}

fn to_reading(place: GeoPlace, current: OmCurrent) -> WeatherReading {
    WeatherReading {
        city: place.name,
        country: place.country.unwrap_or_else(|| "Unknown".to_string()),
        latitude: Some(place.latitude),
        longitude: Some(place.longitude),
        temperature: current.temperature_2m,
        apparent_temperature: current.apparent_temperature,
        humidity: whole(current.relative_humidity_2m),
        precipitation: current.precipitation,
        rain: current.rain,
        wind_speed: current.wind_speed_10m,
        wind_direction: current.wind_direction_10m,
        cloud_cover: whole(current.cloud_cover),
        pressure: current.surface_pressure,
        weather_code: whole(current.weather_code),
        timestamp: current.time,
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoProvider {
    async fn get_weather(&self, city: &str) -> Result<WeatherReading, FetchError> {
        let place = self.geocode(city).await?;
        let current = self.fetch_current(place.latitude, place.longitude).await?;
        Ok(to_reading(place, current))
    }
}
