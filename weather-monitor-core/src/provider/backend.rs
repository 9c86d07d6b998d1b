use async_trait::async_trait;
use reqwest::Client;

use crate::{
    error::{FetchError, GENERIC_FETCH_FAILURE},
    model::{ApiErrorBody, WeatherReading},
};

use super::{WeatherProvider, trim_base_url, truncate_body};

/// Client for `GET {base_url}/api/v1/weather?city=...`.
#[derive(Debug, Clone)]
pub struct BackendProvider {
    base_url: String,
    http: Client,
}

impl BackendProvider {
    pub fn new(base_url: &str, http: Client) -> Self {
        Self { base_url: trim_base_url(base_url), http }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/api/v1/weather", self.base_url)
    }
}

#[async_trait]
impl WeatherProvider for BackendProvider {
    async fn get_weather(&self, city: &str) -> Result<WeatherReading, FetchError> {
        let url = self.endpoint();
        tracing::debug!(%url, city, "requesting weather");

        let res = self.http.get(&url).query(&[("city", city)]).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ApiErrorBody>(&body)
                .ok()
                .and_then(|b| b.detail)
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| GENERIC_FETCH_FAILURE.to_string());

            tracing::warn!(%status, body = %truncate_body(&body), "weather request failed");
            return Err(FetchError::Api { status: status.as_u16(), detail });
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(body = %truncate_body(&body), "could not decode weather payload");
            FetchError::Decode(e.to_string())
        })
    }
}
