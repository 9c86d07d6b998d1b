use serde::{Deserialize, Deserializer, Serialize};

/// Current conditions for one city, as returned by the weather API.
///
/// Numeric fields are optional so that a payload with a missing or `null`
/// value still decodes; the view renders a placeholder for those.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,

    /// Celsius.
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub apparent_temperature: Option<f64>,

    /// Relative humidity, percent.
    #[serde(default, deserialize_with = "whole_number")]
    pub humidity: Option<i64>,
    /// Millimetres.
    #[serde(default)]
    pub precipitation: Option<f64>,
    #[serde(default)]
    pub rain: Option<f64>,

    /// km/h.
    #[serde(default)]
    pub wind_speed: Option<f64>,
    /// Degrees clockwise from true north.
    #[serde(default)]
    pub wind_direction: Option<f64>,

    /// Percent.
    #[serde(default, deserialize_with = "whole_number")]
    pub cloud_cover: Option<i64>,
    /// hPa.
    #[serde(default)]
    pub pressure: Option<f64>,
    /// WMO weather code.
    #[serde(default, deserialize_with = "whole_number")]
    pub weather_code: Option<i64>,
    /// ISO-8601, as sent by the server.
    #[serde(default)]
    pub timestamp: String,
}

/// Round a JSON number to an integer; non-finite values count as absent.
pub(crate) fn whole(value: Option<f64>) -> Option<i64> {
    value.filter(|v| v.is_finite()).map(|v| v.round() as i64)
}

/// Accepts `65` and `65.0` alike for integer fields.
fn whole_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(whole)
}

/// Body sent by the API alongside a non-success status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    pub detail: Option<String>,
}
