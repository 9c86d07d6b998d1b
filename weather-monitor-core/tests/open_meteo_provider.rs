//! OpenMeteoProvider against mock geocoding and forecast servers.

use weather_monitor_core::{Config, FetchError, ProviderId, provider::provider_from_config};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> Config {
    Config {
        forecast_url: Some(format!("{}/v1", server.uri())),
        geocoding_url: Some(format!("{}/geo/v1", server.uri())),
        ..Config::default()
    }
}

async fn mount_geocoding(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/geo/v1/search"))
        .and(query_param("count", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_geocode_then_forecast() {
    let mock_server = MockServer::start().await;

    mount_geocoding(
        &mock_server,
        serde_json::json!({
            "results": [{
                "name": "Ribeirão Preto",
                "country": "Brazil",
                "latitude": -21.17756,
                "longitude": -47.81028
            }]
        }),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("timezone", "auto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "latitude": -21.125,
            "longitude": -47.875,
            "current": {
                "time": "2025-01-01T12:00",
                "interval": 900,
                "temperature_2m": 29.4,
                "apparent_temperature": 31.0,
                "relative_humidity_2m": 58,
                "precipitation": 0.1,
                "rain": 0.1,
                "cloud_cover": 75,
                "surface_pressure": 948.2,
                "wind_speed_10m": 11.2,
                "wind_direction_10m": 315,
                "weather_code": 80
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let provider = provider_from_config(ProviderId::OpenMeteo, &config_for(&mock_server)).unwrap();
    let reading = provider.get_weather("Ribeirão Preto").await.unwrap();

    assert_eq!(reading.city, "Ribeirão Preto");
    assert_eq!(reading.country, "Brazil");
    assert_eq!(reading.latitude, Some(-21.17756));
    assert_eq!(reading.temperature, Some(29.4));
    assert_eq!(reading.humidity, Some(58));
    assert_eq!(reading.cloud_cover, Some(75));
    assert_eq!(reading.weather_code, Some(80));
    assert_eq!(reading.timestamp, "2025-01-01T12:00");
}

#[tokio::test]
async fn test_unknown_city() {
    let mock_server = MockServer::start().await;

    mount_geocoding(&mock_server, serde_json::json!({ "generationtime_ms": 0.5 })).await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let provider = provider_from_config(ProviderId::OpenMeteo, &config_for(&mock_server)).unwrap();
    let err = provider.get_weather("Atlantis").await.unwrap_err();

    assert!(matches!(err, FetchError::CityNotFound(_)), "got {err:?}");
    assert_eq!(err.to_string(), "City not found: Atlantis");
}

#[tokio::test]
async fn test_forecast_failure() {
    let mock_server = MockServer::start().await;

    mount_geocoding(
        &mock_server,
        serde_json::json!({
            "results": [{ "name": "Lima", "country": "Peru", "latitude": -12.04, "longitude": -77.03 }]
        }),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let provider = provider_from_config(ProviderId::OpenMeteo, &config_for(&mock_server)).unwrap();
    let err = provider.get_weather("Lima").await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to fetch weather data from Open-Meteo API");
}
