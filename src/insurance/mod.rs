// Crop insurance: premium estimates plus declared policy and claim routes

pub mod premium_calculator;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};

use crate::auth::{require_admin, AuthenticatedUser};
use crate::error::{coming_soon, ApiError};
use crate::extract::AppJson;
use crate::response::ApiResponse;
use crate::AppState;

pub use premium_calculator::{PremiumCalculator, PremiumQuote, PremiumRequest};

/// Handler for POST /api/insurance/calculate-premium
#[utoipa::path(
    post,
    path = "/api/insurance/calculate-premium",
    request_body = PremiumRequest,
    responses(
        (status = 200, description = "Premium estimate", body = PremiumQuote),
        (status = 400, description = "Missing crop type or non-positive land size")
    ),
    tag = "insurance"
)]
pub async fn calculate_premium(
    AppJson(request): AppJson<PremiumRequest>,
) -> Result<ApiResponse<PremiumQuote>, ApiError> {
    let quote = PremiumCalculator::calculate(&request.crop_type, request.land_size)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    Ok(ApiResponse::ok(quote))
}

pub fn routes(state: &AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/admin/applications", get(|| coming_soon("insurance.admin.applications")))
        .route(
            "/admin/applications/:id/approve",
            put(|| coming_soon("insurance.admin.approve")),
        )
        .route(
            "/admin/applications/:id/reject",
            put(|| coming_soon("insurance.admin.reject")),
        )
        .route("/admin/claims", get(|| coming_soon("insurance.admin.claims")))
        .route("/admin/claims/:id/process", put(|| coming_soon("insurance.admin.process_claim")))
        .route("/admin/claims/:id/approve", put(|| coming_soon("insurance.admin.approve_claim")))
        .route("/admin/claims/:id/reject", put(|| coming_soon("insurance.admin.reject_claim")))
        .route("/admin/reports/summary", get(|| coming_soon("insurance.reports.summary")))
        .route("/admin/reports/claims", get(|| coming_soon("insurance.reports.claims")))
        .route("/admin/reports/risk", get(|| coming_soon("insurance.reports.risk")))
        .route_layer(from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .route("/policies", get(|| coming_soon("insurance.policies")))
        .route("/policy-types", get(|| coming_soon("insurance.policy_types")))
        .route("/coverage-options", get(|| coming_soon("insurance.coverage_options")))
        .route("/calculate-premium", post(calculate_premium))
        .route("/terms", get(|| coming_soon("insurance.terms")))
        .route("/apply", post(|_: AuthenticatedUser| coming_soon("insurance.apply")))
        .route("/my-policies", get(|_: AuthenticatedUser| coming_soon("insurance.my_policies")))
        .route(
            "/my-policies/:id",
            get(|_: AuthenticatedUser| coming_soon("insurance.my_policy"))
                .put(|_: AuthenticatedUser| coming_soon("insurance.update_policy"))
                .delete(|_: AuthenticatedUser| coming_soon("insurance.cancel_policy")),
        )
        .route("/claims", post(|_: AuthenticatedUser| coming_soon("insurance.claims.submit")))
        .route("/my-claims", get(|_: AuthenticatedUser| coming_soon("insurance.my_claims")))
        .route(
            "/my-claims/:id",
            get(|_: AuthenticatedUser| coming_soon("insurance.my_claim"))
                .put(|_: AuthenticatedUser| coming_soon("insurance.update_claim"))
                .delete(|_: AuthenticatedUser| coming_soon("insurance.cancel_claim")),
        )
        .route(
            "/:id/documents",
            get(|_: AuthenticatedUser| coming_soon("insurance.documents"))
                .post(|_: AuthenticatedUser| coming_soon("insurance.documents.upload")),
        )
        .route("/:id/renew", post(|_: AuthenticatedUser| coming_soon("insurance.renew")))
        .route("/:id/modify", post(|_: AuthenticatedUser| coming_soon("insurance.modify")))
        .merge(admin)
}
