// HTTP handlers for market prices

use axum::{extract::State, http::StatusCode};
use validator::Validate;

use crate::auth::AuthenticatedUser;
use crate::error::ApiError;
use crate::extract::{AppJson, AppQuery};
use crate::market_prices::models::{MarketPrice, PriceQuery, SubmitPriceRequest};
use crate::market_prices::repository::MarketPriceRepository;
use crate::response::{ApiResponse, Paginated};

/// Handler for GET /api/market-prices/prices
#[utoipa::path(
    get,
    path = "/api/market-prices/prices",
    params(PriceQuery),
    responses(
        (status = 200, description = "Matching market prices"),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "market-prices"
)]
pub async fn list_prices(
    State(repo): State<MarketPriceRepository>,
    AppQuery(query): AppQuery<PriceQuery>,
) -> Result<ApiResponse<Paginated<MarketPrice>>, ApiError> {
    query.validate()?;

    let prices = repo
        .search(query.commodity.as_deref(), query.market.as_deref())
        .await;
    tracing::debug!("Market price query {:?} matched {} rows", query, prices.len());

    Ok(ApiResponse::ok(Paginated::from_items(prices, query.page, query.limit)))
}

/// Handler for POST /api/market-prices/submit-price
#[utoipa::path(
    post,
    path = "/api/market-prices/submit-price",
    request_body = SubmitPriceRequest,
    responses(
        (status = 201, description = "Price recorded", body = MarketPrice),
        (status = 400, description = "Invalid submission"),
        (status = 401, description = "Missing or expired token")
    ),
    security(("bearer_auth" = [])),
    tag = "market-prices"
)]
pub async fn submit_price(
    user: AuthenticatedUser,
    State(repo): State<MarketPriceRepository>,
    AppJson(payload): AppJson<SubmitPriceRequest>,
) -> Result<(StatusCode, ApiResponse<MarketPrice>), ApiError> {
    payload.validate()?;

    let price = repo.create(user.user_id, payload).await;
    tracing::info!(
        "User {} submitted {} price at {} (id {})",
        user.user_id,
        price.commodity,
        price.market,
        price.id
    );

    Ok((
        StatusCode::CREATED,
        ApiResponse::with_message(price, "Price submitted successfully"),
    ))
}

/// Handler for GET /api/market-prices/my-submissions
#[utoipa::path(
    get,
    path = "/api/market-prices/my-submissions",
    responses(
        (status = 200, description = "Prices submitted by the caller", body = Vec<MarketPrice>),
        (status = 401, description = "Missing or expired token")
    ),
    security(("bearer_auth" = [])),
    tag = "market-prices"
)]
pub async fn my_submissions(
    user: AuthenticatedUser,
    State(repo): State<MarketPriceRepository>,
) -> ApiResponse<Vec<MarketPrice>> {
    ApiResponse::ok(repo.submitted_by(user.user_id).await)
}
