// Market prices: stored price listings, user submissions, and declared analysis routes

pub mod handlers;
pub mod models;
pub mod repository;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};

use crate::auth::{require_moderator, AuthenticatedUser};
use crate::error::coming_soon;
use crate::AppState;

pub use models::MarketPrice;
pub use repository::MarketPriceRepository;

pub fn routes(state: &AppState) -> Router<AppState> {
    let review = Router::new()
        .route("/admin/submissions", get(|| coming_soon("market_prices.admin.submissions")))
        .route(
            "/admin/submissions/:id/approve",
            put(|| coming_soon("market_prices.admin.approve")),
        )
        .route(
            "/admin/submissions/:id/reject",
            put(|| coming_soon("market_prices.admin.reject")),
        )
        .route("/admin/bulk-import", post(|| coming_soon("market_prices.admin.bulk_import")))
        .route_layer(from_fn_with_state(state.clone(), require_moderator));

    Router::new()
        .route("/prices", get(handlers::list_prices))
        .route("/commodities", get(|| coming_soon("market_prices.commodities")))
        .route("/markets", get(|| coming_soon("market_prices.markets")))
        .route("/trends", get(|| coming_soon("market_prices.trends")))
        .route("/forecast", get(|| coming_soon("market_prices.forecast")))
        .route("/history/:commodity", get(|| coming_soon("market_prices.history")))
        .route("/comparison", get(|| coming_soon("market_prices.comparison")))
        .route("/submit-price", post(handlers::submit_price))
        .route("/my-submissions", get(handlers::my_submissions))
        .route(
            "/my-submissions/:id",
            put(|_: AuthenticatedUser| coming_soon("market_prices.update_submission"))
                .delete(|_: AuthenticatedUser| coming_soon("market_prices.delete_submission")),
        )
        .route(
            "/alerts",
            post(|_: AuthenticatedUser| coming_soon("market_prices.alerts.create"))
                .get(|_: AuthenticatedUser| coming_soon("market_prices.alerts")),
        )
        .route(
            "/alerts/:id",
            put(|_: AuthenticatedUser| coming_soon("market_prices.alerts.update"))
                .delete(|_: AuthenticatedUser| coming_soon("market_prices.alerts.delete")),
        )
        .route("/analysis/summary", get(|| coming_soon("market_prices.analysis.summary")))
        .route("/analysis/seasonal", get(|| coming_soon("market_prices.analysis.seasonal")))
        .route("/analysis/regional", get(|| coming_soon("market_prices.analysis.regional")))
        .route("/export/csv", get(|| coming_soon("market_prices.export.csv")))
        .route("/export/json", get(|| coming_soon("market_prices.export.json")))
        .merge(review)
}
