// HTTP handlers for the government schemes catalog

use axum::extract::State;

use crate::error::ApiError;
use crate::extract::AppPath;
use crate::response::ApiResponse;
use crate::schemes::models::Scheme;
use crate::schemes::repository::SchemeRepository;

/// List every known scheme
#[utoipa::path(
    get,
    path = "/api/schemes/schemes",
    responses(
        (status = 200, description = "Available government schemes", body = Vec<Scheme>)
    ),
    tag = "schemes"
)]
pub async fn list_schemes(State(repo): State<SchemeRepository>) -> ApiResponse<Vec<Scheme>> {
    let schemes = repo.list().await;
    tracing::debug!("Returning {} schemes", schemes.len());
    ApiResponse::ok(schemes)
}

/// Fetch a single scheme
#[utoipa::path(
    get,
    path = "/api/schemes/schemes/{id}",
    params(
        ("id" = i32, Path, description = "Scheme ID")
    ),
    responses(
        (status = 200, description = "Scheme details", body = Scheme),
        (status = 404, description = "Scheme not found")
    ),
    tag = "schemes"
)]
pub async fn get_scheme(
    State(repo): State<SchemeRepository>,
    AppPath(id): AppPath<i32>,
) -> Result<ApiResponse<Scheme>, ApiError> {
    repo.find_by_id(id)
        .await
        .map(ApiResponse::ok)
        .ok_or_else(|| ApiError::not_found("Scheme"))
}
