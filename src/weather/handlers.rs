// HTTP handlers for weather data

use std::sync::Arc;

use axum::extract::State;
use serde_json::Value;
use validator::Validate;

use crate::auth::AuthenticatedUser;
use crate::error::ApiError;
use crate::extract::AppQuery;
use crate::response::ApiResponse;
use crate::weather::client::{WeatherClient, WeatherError};
use crate::weather::models::{
    AlertsQuery, CurrentWeatherQuery, ForecastQuery, HistoryQuery, WeatherReading,
};
use crate::weather::repository::WeatherRepository;

fn upstream(message: &'static str) -> impl FnOnce(WeatherError) -> ApiError {
    move |e| ApiError::Upstream {
        message: message.to_string(),
        source_message: e.to_string(),
    }
}

/// Handler for GET /api/weather/current
#[utoipa::path(
    get,
    path = "/api/weather/current",
    params(CurrentWeatherQuery),
    responses(
        (status = 200, description = "Provider payload for current conditions"),
        (status = 400, description = "Invalid coordinates or options"),
        (status = 500, description = "Weather provider failure")
    ),
    tag = "weather"
)]
pub async fn current_weather(
    State(client): State<Arc<WeatherClient>>,
    AppQuery(query): AppQuery<CurrentWeatherQuery>,
) -> Result<ApiResponse<Value>, ApiError> {
    query.validate()?;

    let lang = query.lang.as_deref().unwrap_or("en");
    let data = client
        .current(query.lat, query.lon, query.units, lang)
        .await
        .map_err(upstream("Failed to get weather data"))?;

    Ok(ApiResponse::ok(data))
}

/// Handler for GET /api/weather/forecast
#[utoipa::path(
    get,
    path = "/api/weather/forecast",
    params(ForecastQuery),
    responses(
        (status = 200, description = "Provider payload for the forecast"),
        (status = 400, description = "Invalid coordinates or options"),
        (status = 500, description = "Weather provider failure")
    ),
    tag = "weather"
)]
pub async fn forecast(
    State(client): State<Arc<WeatherClient>>,
    AppQuery(query): AppQuery<ForecastQuery>,
) -> Result<ApiResponse<Value>, ApiError> {
    query.validate()?;

    let data = client
        .forecast(query.lat, query.lon, query.sample_count(), query.units)
        .await
        .map_err(upstream("Failed to get forecast data"))?;

    Ok(ApiResponse::ok(data))
}

/// Handler for GET /api/weather/alerts
#[utoipa::path(
    get,
    path = "/api/weather/alerts",
    params(AlertsQuery),
    responses(
        (status = 200, description = "Active weather alerts, possibly empty"),
        (status = 400, description = "Latitude and longitude are required"),
        (status = 500, description = "Weather provider failure")
    ),
    tag = "weather"
)]
pub async fn alerts(
    State(client): State<Arc<WeatherClient>>,
    AppQuery(query): AppQuery<AlertsQuery>,
) -> Result<ApiResponse<Value>, ApiError> {
    let (Some(lat), Some(lon)) = (query.lat, query.lon) else {
        return Err(ApiError::BadRequest(
            "Latitude and longitude are required".to_string(),
        ));
    };

    let data = client
        .alerts(lat, lon)
        .await
        .map_err(upstream("Failed to get weather alerts"))?;

    Ok(ApiResponse::ok(data))
}

/// Handler for GET /api/weather/history
#[utoipa::path(
    get,
    path = "/api/weather/history",
    params(HistoryQuery),
    responses(
        (status = 200, description = "Stored weather readings", body = Vec<WeatherReading>),
        (status = 401, description = "Missing or expired token")
    ),
    security(("bearer_auth" = [])),
    tag = "weather"
)]
pub async fn history(
    _user: AuthenticatedUser,
    State(repo): State<WeatherRepository>,
    AppQuery(query): AppQuery<HistoryQuery>,
) -> ApiResponse<Vec<WeatherReading>> {
    ApiResponse::ok(repo.history(query.location.as_deref()).await)
}
