//! Weather API client for OpenWeatherMap current conditions
//!
//! One blocking GET per lookup. An unknown city surfaces as `Ok(None)`
//! rather than an error: rejected lookups are an expected outcome.

use crate::config::DashboardConfig;
use crate::models::WeatherReading;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Weather API client for OpenWeatherMap
pub struct WeatherClient {
    /// HTTP client
    client: Client,
    /// Base URL for the weather API
    base_url: String,
    /// API key sent with every request
    api_key: String,
}

impl WeatherClient {
    /// Create a new weather API client
    pub fn new(config: &DashboardConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("Skycast/", env!("CARGO_PKG_VERSION")))
            .build()
            .with_context(|| "Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Fetch current weather for a city, requesting metric units.
    ///
    /// Returns `Ok(None)` on any non-success HTTP status. A response that
    /// does not match the expected schema is a fatal parse error.
    pub fn current_weather(&self, city: &str) -> Result<Option<WeatherReading>> {
        info!("Fetching current weather for '{}'", city);

        let url = format!(
            "{}/weather?q={}&appid={}&units=metric",
            self.base_url,
            urlencoding::encode(city),
            self.api_key
        );

        let response = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("Weather request for '{city}' failed"))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Weather lookup for '{}' rejected: HTTP {}", city, status);
            return Ok(None);
        }

        let body: openweather::CurrentResponse = response
            .json()
            .with_context(|| format!("Failed to parse weather response for '{city}'"))?;

        debug!(
            "Received reading for '{}': {:.1}°C, {}",
            city,
            body.main.temp,
            body.first_description().unwrap_or("<no condition>")
        );

        Ok(Some(body.try_into()?))
    }
}

/// OpenWeatherMap API response structures and conversion utilities
mod openweather {
    use crate::models::WeatherReading;
    use serde::Deserialize;

    /// Current weather response from the `/weather` endpoint
    #[derive(Debug, Deserialize)]
    pub struct CurrentResponse {
        pub main: MainData,
        pub weather: Vec<Condition>,
        pub wind: WindData,
    }

    /// Temperature and humidity block
    #[derive(Debug, Deserialize)]
    pub struct MainData {
        pub temp: f32,
        pub feels_like: f32,
        pub humidity: u8,
    }

    /// One entry of the `weather` condition array
    #[derive(Debug, Deserialize)]
    pub struct Condition {
        pub description: String,
    }

    /// Wind block
    #[derive(Debug, Deserialize)]
    pub struct WindData {
        pub speed: f32,
    }

    impl CurrentResponse {
        pub fn first_description(&self) -> Option<&str> {
            self.weather.first().map(|c| c.description.as_str())
        }
    }

    impl TryFrom<CurrentResponse> for WeatherReading {
        type Error = anyhow::Error;

        fn try_from(response: CurrentResponse) -> Result<Self, Self::Error> {
            let description = response
                .weather
                .first()
                .map(|c| c.description.clone())
                .ok_or_else(|| {
                    anyhow::anyhow!("Weather response contained an empty condition list")
                })?;

            Ok(Self {
                temperature: response.main.temp,
                feels_like: response.main.feels_like,
                description,
                humidity: response.main.humidity,
                wind_speed: response.wind.speed,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::openweather::CurrentResponse;
    use super::*;
    use crate::models::WeatherReading;
    use std::path::PathBuf;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SAMPLE_BODY: &str = r#"{
        "coord": {"lon": -0.1257, "lat": 51.5085},
        "weather": [{"id": 802, "main": "Clouds", "description": "scattered clouds", "icon": "03d"}],
        "main": {"temp": 17.5, "feels_like": 16.9, "temp_min": 15.9, "temp_max": 18.8, "pressure": 1012, "humidity": 63},
        "wind": {"speed": 4.12, "deg": 250},
        "name": "London",
        "cod": 200
    }"#;

    fn client_for(server_url: &str) -> WeatherClient {
        let config = DashboardConfig {
            api_key: "test-key".to_string(),
            base_url: server_url.to_string(),
            timeout_seconds: 5,
            favorites_path: PathBuf::from("favorites.json"),
        };
        WeatherClient::new(&config).unwrap()
    }

    #[test]
    fn test_parse_current_response() {
        let response: CurrentResponse = serde_json::from_str(SAMPLE_BODY).unwrap();
        let reading: WeatherReading = response.try_into().unwrap();

        assert_eq!(reading.temperature, 17.5);
        assert_eq!(reading.feels_like, 16.9);
        assert_eq!(reading.description, "scattered clouds");
        assert_eq!(reading.humidity, 63);
        assert_eq!(reading.wind_speed, 4.12);
    }

    #[test]
    fn test_empty_condition_list_is_parse_error() {
        let body = r#"{
            "weather": [],
            "main": {"temp": 1.0, "feels_like": 0.0, "humidity": 50},
            "wind": {"speed": 2.0}
        }"#;
        let response: CurrentResponse = serde_json::from_str(body).unwrap();
        let result: Result<WeatherReading, _> = response.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_main_block_is_parse_error() {
        let body = r#"{"weather": [], "wind": {"speed": 2.0}}"#;
        assert!(serde_json::from_str::<CurrentResponse>(body).is_err());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_current_weather_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .and(query_param("q", "London"))
            .and(query_param("units", "metric"))
            .and(query_param("appid", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(SAMPLE_BODY, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let url = server.uri();
        let reading = tokio::task::spawn_blocking(move || {
            client_for(&url).current_weather("London").unwrap()
        })
        .await
        .unwrap();

        let reading = reading.expect("expected a reading for a known city");
        assert_eq!(reading.description, "scattered clouds");
        assert_eq!(reading.humidity, 63);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_unknown_city_yields_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(404).set_body_raw(
                r#"{"cod": "404", "message": "city not found"}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let url = server.uri();
        let reading = tokio::task::spawn_blocking(move || {
            client_for(&url).current_weather("Nowhereville").unwrap()
        })
        .await
        .unwrap();

        assert!(reading.is_none());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_malformed_body_is_fatal() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(r#"{"cod": 200}"#, "application/json"),
            )
            .mount(&server)
            .await;

        let url = server.uri();
        let result =
            tokio::task::spawn_blocking(move || client_for(&url).current_weather("London"))
                .await
                .unwrap();

        assert!(result.is_err());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_city_name_is_url_encoded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .and(query_param("q", "Rio de Janeiro"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(SAMPLE_BODY, "application/json"))
            .expect(1)
            .mount(&server)
            .await;

        let url = server.uri();
        let reading = tokio::task::spawn_blocking(move || {
            client_for(&url).current_weather("Rio de Janeiro").unwrap()
        })
        .await
        .unwrap();

        assert!(reading.is_some());
    }
}
