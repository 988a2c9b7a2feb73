// HTTP handlers for authentication endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode};
use chrono::Utc;
use serde_json::{json, Value};
use validator::Validate;

use crate::auth::{
    middleware::AuthenticatedUser,
    models::{normalize_email, AuthResponse, LoginRequest, RegisterRequest, UserResponse},
    service::AuthService,
};
use crate::error::ApiError;
use crate::extract::AppJson;
use crate::response::ApiResponse;

/// Register a new user
/// POST /api/auth/register
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = AuthResponse),
        (status = 400, description = "Invalid input or user already exists")
    ),
    tag = "auth"
)]
pub async fn register_handler(
    State(service): State<Arc<AuthService>>,
    AppJson(mut request): AppJson<RegisterRequest>,
) -> Result<(StatusCode, ApiResponse<AuthResponse>), ApiError> {
    request.email = normalize_email(&request.email);
    request.validate()?;

    let response = service.register(request).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::with_message(response, "User registered successfully"),
    ))
}

/// Login a user
/// POST /api/auth/login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login_handler(
    State(service): State<Arc<AuthService>>,
    AppJson(mut request): AppJson<LoginRequest>,
) -> Result<ApiResponse<AuthResponse>, ApiError> {
    request.email = normalize_email(&request.email);
    request.validate()?;

    let response = service.login(&request.email, &request.password).await?;
    Ok(ApiResponse::with_message(response, "Login successful"))
}

/// Get the caller's profile (protected endpoint)
/// GET /api/auth/profile
#[utoipa::path(
    get,
    path = "/api/auth/profile",
    responses(
        (status = 200, description = "Caller profile", body = UserResponse),
        (status = 401, description = "Missing or expired token"),
        (status = 403, description = "Invalid token"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = [])),
    tag = "auth"
)]
pub async fn profile_handler(
    State(service): State<Arc<AuthService>>,
    user: AuthenticatedUser,
) -> Result<ApiResponse<UserResponse>, ApiError> {
    let profile = service.get_profile(Some(&user)).await?;
    Ok(ApiResponse::ok(profile))
}

/// GET /api/auth/health
pub async fn health_handler() -> ApiResponse<Value> {
    ApiResponse::with_message(
        json!({ "timestamp": Utc::now().to_rfc3339() }),
        "Auth controller is working",
    )
}
