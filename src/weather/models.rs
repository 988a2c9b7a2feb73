use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::validation::{validate_latitude, validate_longitude};

/// Stored weather observation
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct WeatherReading {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Delhi")]
    pub location: String,
    /// Degrees Celsius
    #[schema(example = 28.5)]
    pub temperature: f64,
    /// Relative humidity, percent
    #[schema(example = 65.0)]
    pub humidity: f64,
    #[schema(example = 12.3)]
    pub wind_speed: f64,
    #[schema(example = "Partly cloudy")]
    pub description: String,
    pub recorded_at: DateTime<Utc>,
}

/// Unit system accepted by the weather endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
    Kelvin,
}

impl Units {
    /// Provider-side name for the unit system
    pub fn provider_value(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
            Units::Kelvin => "standard",
        }
    }
}

/// Query parameters for GET /api/weather/current
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CurrentWeatherQuery {
    #[validate(custom = "validate_latitude")]
    pub lat: f64,
    #[validate(custom = "validate_longitude")]
    pub lon: f64,
    #[serde(default)]
    #[param(value_type = Option<String>)]
    pub units: Units,
    #[validate(length(min = 2, max = 5))]
    pub lang: Option<String>,
}

/// Query parameters for GET /api/weather/forecast
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ForecastQuery {
    #[validate(custom = "validate_latitude")]
    pub lat: f64,
    #[validate(custom = "validate_longitude")]
    pub lon: f64,
    /// Number of days, 1 to 7
    #[validate(range(min = 1, max = 7))]
    pub days: Option<u8>,
    #[serde(default)]
    #[param(value_type = Option<String>)]
    pub units: Units,
}

impl ForecastQuery {
    pub const DEFAULT_DAYS: u8 = 7;

    /// Provider sample count: one reading every three hours
    pub fn sample_count(&self) -> u32 {
        u32::from(self.days.unwrap_or(Self::DEFAULT_DAYS)) * 8
    }
}

/// Query parameters for GET /api/weather/alerts
/// Both coordinates are optional here so a missing one can be reported explicitly
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AlertsQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Query parameters for GET /api/weather/history
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HistoryQuery {
    pub location: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kelvin_maps_to_standard() {
        assert_eq!(Units::Kelvin.provider_value(), "standard");
        assert_eq!(Units::default().provider_value(), "metric");
    }

    #[test]
    fn test_forecast_sample_count() {
        let query = ForecastQuery {
            lat: 28.6,
            lon: 77.2,
            days: Some(3),
            units: Units::Metric,
        };
        assert_eq!(query.sample_count(), 24);

        let query = ForecastQuery { days: None, ..query };
        assert_eq!(query.sample_count(), 56);
    }

    #[test]
    fn test_coordinate_ranges() {
        let query = CurrentWeatherQuery {
            lat: 91.0,
            lon: 0.0,
            units: Units::Metric,
            lang: None,
        };
        assert!(query.validate().is_err());

        let query = CurrentWeatherQuery { lat: 28.6, ..query };
        assert!(query.validate().is_ok());
    }
}
