// Weather: provider proxy, stored readings, and declared personalization routes

pub mod client;
pub mod handlers;
pub mod models;
pub mod repository;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::auth::AuthenticatedUser;
use crate::error::coming_soon;
use crate::AppState;

pub use client::{WeatherClient, WeatherClientConfig, WeatherError};
pub use models::WeatherReading;
pub use repository::WeatherRepository;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/current", get(handlers::current_weather))
        .route("/forecast", get(handlers::forecast))
        .route("/alerts", get(handlers::alerts))
        .route("/history", get(handlers::history))
        .route(
            "/favorites",
            post(|_: AuthenticatedUser| coming_soon("weather.favorites.add"))
                .get(|_: AuthenticatedUser| coming_soon("weather.favorites")),
        )
        .route(
            "/favorites/:id",
            delete(|_: AuthenticatedUser| coming_soon("weather.favorites.remove")),
        )
        .route(
            "/alerts/subscribe",
            post(|_: AuthenticatedUser| coming_soon("weather.alerts.subscribe")),
        )
        .route(
            "/alerts/unsubscribe",
            delete(|_: AuthenticatedUser| coming_soon("weather.alerts.unsubscribe")),
        )
        .route(
            "/alerts/subscriptions",
            get(|_: AuthenticatedUser| coming_soon("weather.alerts.subscriptions")),
        )
        .route(
            "/crop-recommendations",
            get(|_: AuthenticatedUser| coming_soon("weather.crop_recommendations")),
        )
        .route(
            "/irrigation-schedule",
            get(|_: AuthenticatedUser| coming_soon("weather.irrigation_schedule")),
        )
}
