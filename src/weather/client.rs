// OpenWeatherMap client
// Thin proxy: no caching, no retries. Any failure aborts the calling request.

use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::weather::models::Units;

/// Configuration for the weather provider client
#[derive(Debug, Clone)]
pub struct WeatherClientConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Timeout for provider requests (default: 10 seconds)
    pub request_timeout: Duration,
}

impl WeatherClientConfig {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
            request_timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("WEATHER_API_KEY is not configured")]
    MissingApiKey,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Provider returned HTTP {0}")]
    ProviderStatus(u16),

    #[error("Invalid provider payload: {0}")]
    InvalidPayload(String),
}

/// Weather provider client
pub struct WeatherClient {
    config: WeatherClientConfig,
    http_client: reqwest::Client,
}

impl WeatherClient {
    pub fn new(config: WeatherClientConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent("agri-assist/0.1")
            .build()
            .unwrap_or_default();

        Self {
            config,
            http_client,
        }
    }

    /// Current conditions at a coordinate
    pub async fn current(
        &self,
        lat: f64,
        lon: f64,
        units: Units,
        lang: &str,
    ) -> Result<Value, WeatherError> {
        self.fetch(
            "weather",
            &[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("units", units.provider_value().to_string()),
                ("lang", lang.to_string()),
            ],
        )
        .await
    }

    /// Three-hourly forecast, `samples` entries long
    pub async fn forecast(
        &self,
        lat: f64,
        lon: f64,
        samples: u32,
        units: Units,
    ) -> Result<Value, WeatherError> {
        self.fetch(
            "forecast",
            &[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("cnt", samples.to_string()),
                ("units", units.provider_value().to_string()),
            ],
        )
        .await
    }

    /// Active government weather alerts, empty when the provider reports none
    pub async fn alerts(&self, lat: f64, lon: f64) -> Result<Value, WeatherError> {
        let payload = self
            .fetch(
                "onecall",
                &[
                    ("lat", lat.to_string()),
                    ("lon", lon.to_string()),
                    ("exclude", "current,minutely,hourly,daily".to_string()),
                ],
            )
            .await?;

        Ok(payload
            .get("alerts")
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new())))
    }

    async fn fetch(&self, endpoint: &str, params: &[(&str, String)]) -> Result<Value, WeatherError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(WeatherError::MissingApiKey)?;

        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), endpoint);
        debug!(url = %url, "Calling weather provider");

        let response = self
            .http_client
            .get(&url)
            .query(params)
            .query(&[("appid", api_key)])
            .send()
            .await
            .map_err(|e| WeatherError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(WeatherError::ProviderStatus(response.status().as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| WeatherError::InvalidPayload(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_api_key_fails_before_network() {
        let client = WeatherClient::new(WeatherClientConfig::new("http://127.0.0.1:9", None));
        let result = client.current(28.6, 77.2, Units::Metric, "en").await;
        assert!(matches!(result, Err(WeatherError::MissingApiKey)));
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_network_error() {
        let mut config = WeatherClientConfig::new("http://127.0.0.1:9", Some("key".into()));
        config.request_timeout = Duration::from_secs(2);
        let client = WeatherClient::new(config);

        let result = client.forecast(28.6, 77.2, 8, Units::Metric).await;
        assert!(matches!(result, Err(WeatherError::NetworkError(_))));
    }
}
