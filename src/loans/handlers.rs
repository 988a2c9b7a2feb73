// HTTP handlers for loans: catalogs, calculators, and applications

use axum::{
    extract::State,
    http::StatusCode,
};
use serde_json::{json, Value};
use validator::Validate;

use crate::auth::AuthenticatedUser;
use crate::error::ApiError;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::loans::eligibility::{EligibilityCalculator, EligibilityQuery, EligibilityResult};
use crate::loans::emi_calculator::{CalculateEmiRequest, EmiBreakdown, EmiCalculator};
use crate::loans::models::{
    ApplyLoanRequest, LoanApplication, LoanQuery, LoanStatus, LoanSubmission, LoanType,
    LoanTypeInfo,
};
use crate::loans::repository::LoanRepository;
use crate::response::{ApiResponse, Paginated};

/// Handler for GET /api/loans/types
#[utoipa::path(
    get,
    path = "/api/loans/types",
    responses((status = 200, description = "Loan products", body = Vec<LoanTypeInfo>)),
    tag = "loans"
)]
pub async fn loan_types() -> ApiResponse<Vec<LoanTypeInfo>> {
    ApiResponse::ok(LoanType::ALL.into_iter().map(LoanTypeInfo::from).collect())
}

/// Handler for GET /api/loans/requirements
pub async fn loan_requirements() -> ApiResponse<Value> {
    ApiResponse::ok(json!({
        "documents": ["Aadhaar Card", "PAN Card", "Land Records", "Income Certificate", "Bank Statement"],
        "eligibility": ["Age 18-65", "Indian Citizen", "Land Ownership", "Good Credit History"],
        "process": [
            "Application Submission",
            "Document Verification",
            "Credit Check",
            "Approval",
            "Disbursement"
        ]
    }))
}

/// Handler for GET /api/loans/calculators
pub async fn loan_calculators() -> ApiResponse<Value> {
    ApiResponse::ok(json!([
        { "id": "emi", "name": "EMI Calculator", "description": "Calculate monthly loan payments" },
        { "id": "eligibility", "name": "Eligibility Calculator", "description": "Check loan eligibility" },
        { "id": "comparison", "name": "Loan Comparison", "description": "Compare different loan options" }
    ]))
}

/// Handler for POST /api/loans/calculate-emi
#[utoipa::path(
    post,
    path = "/api/loans/calculate-emi",
    request_body = CalculateEmiRequest,
    responses(
        (status = 200, description = "EMI breakdown", body = EmiBreakdown),
        (status = 400, description = "Missing, non-numeric, or out-of-range input")
    ),
    tag = "loans"
)]
pub async fn calculate_emi(
    AppJson(request): AppJson<CalculateEmiRequest>,
) -> Result<ApiResponse<EmiBreakdown>, ApiError> {
    let breakdown =
        EmiCalculator::from_request(&request).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    Ok(ApiResponse::ok(breakdown))
}

/// Handler for GET /api/loans/eligibility-check
#[utoipa::path(
    get,
    path = "/api/loans/eligibility-check",
    params(EligibilityQuery),
    responses((status = 200, description = "Eligibility score", body = EligibilityResult)),
    tag = "loans"
)]
pub async fn eligibility_check(
    AppQuery(query): AppQuery<EligibilityQuery>,
) -> ApiResponse<EligibilityResult> {
    ApiResponse::ok(EligibilityCalculator::from_query(&query))
}

/// Handler for POST /api/loans/apply
#[utoipa::path(
    post,
    path = "/api/loans/apply",
    request_body = ApplyLoanRequest,
    responses(
        (status = 201, description = "Application submitted", body = LoanSubmission),
        (status = 400, description = "Invalid application"),
        (status = 401, description = "Missing or expired token")
    ),
    security(("bearer_auth" = [])),
    tag = "loans"
)]
pub async fn apply_for_loan(
    user: AuthenticatedUser,
    State(repo): State<LoanRepository>,
    AppJson(request): AppJson<ApplyLoanRequest>,
) -> Result<(StatusCode, ApiResponse<LoanSubmission>), ApiError> {
    request.validate()?;

    let loan = repo.create(user.user_id, request).await;
    tracing::info!(
        "User {} applied for {} loan {} of {}",
        user.user_id,
        loan.loan_type.as_str(),
        loan.id,
        loan.amount
    );

    Ok((
        StatusCode::CREATED,
        ApiResponse::with_message(
            LoanSubmission {
                loan_id: loan.id,
                status: loan.status,
                applied_at: loan.applied_at,
            },
            "Loan application submitted successfully",
        ),
    ))
}

/// Handler for GET /api/loans/my-loans
#[utoipa::path(
    get,
    path = "/api/loans/my-loans",
    params(LoanQuery),
    responses(
        (status = 200, description = "Caller's applications"),
        (status = 401, description = "Missing or expired token")
    ),
    security(("bearer_auth" = [])),
    tag = "loans"
)]
pub async fn my_loans(
    user: AuthenticatedUser,
    State(repo): State<LoanRepository>,
    AppQuery(query): AppQuery<LoanQuery>,
) -> Result<ApiResponse<Paginated<LoanApplication>>, ApiError> {
    query.validate()?;

    let loans = repo
        .list_for_user(user.user_id, query.status, query.loan_type)
        .await;
    Ok(ApiResponse::ok(Paginated::from_items(loans, query.page, query.limit)))
}

/// Handler for GET /api/loans/my-loans/:id
#[utoipa::path(
    get,
    path = "/api/loans/my-loans/{id}",
    params(("id" = i32, Path, description = "Loan application ID")),
    responses(
        (status = 200, description = "Application details", body = LoanApplication),
        (status = 404, description = "Loan not found")
    ),
    security(("bearer_auth" = [])),
    tag = "loans"
)]
pub async fn my_loan(
    user: AuthenticatedUser,
    State(repo): State<LoanRepository>,
    AppPath(id): AppPath<i32>,
) -> Result<ApiResponse<LoanApplication>, ApiError> {
    repo.find_owned(user.user_id, id)
        .await
        .map(ApiResponse::ok)
        .ok_or_else(|| ApiError::not_found("Loan"))
}

/// Handler for PUT /api/loans/my-loans/:id
/// Accepted for pending applications; the change is not persisted
pub async fn update_my_loan(
    user: AuthenticatedUser,
    State(repo): State<LoanRepository>,
    AppPath(id): AppPath<i32>,
) -> Result<ApiResponse<()>, ApiError> {
    let loan = repo
        .find_owned(user.user_id, id)
        .await
        .ok_or_else(|| ApiError::not_found("Loan"))?;

    if loan.status != LoanStatus::Pending {
        return Err(ApiError::BadRequest(
            "Cannot update approved/rejected loan".to_string(),
        ));
    }

    Ok(ApiResponse::message("Loan application updated successfully"))
}

/// Handler for DELETE /api/loans/my-loans/:id
/// Acknowledged without removing the application
pub async fn cancel_my_loan(
    user: AuthenticatedUser,
    State(repo): State<LoanRepository>,
    AppPath(id): AppPath<i32>,
) -> Result<ApiResponse<()>, ApiError> {
    repo.find_owned(user.user_id, id)
        .await
        .ok_or_else(|| ApiError::not_found("Loan"))?;

    Ok(ApiResponse::message("Loan application cancelled successfully"))
}

/// Handler for GET /api/loans/admin/applications
pub async fn all_applications(
    State(repo): State<LoanRepository>,
) -> ApiResponse<Vec<LoanApplication>> {
    ApiResponse::ok(repo.list_all().await)
}

/// Handler for GET /api/loans/admin/applications/:id
pub async fn application_by_id(
    State(repo): State<LoanRepository>,
    AppPath(id): AppPath<i32>,
) -> Result<ApiResponse<LoanApplication>, ApiError> {
    repo.find_by_id(id)
        .await
        .map(ApiResponse::ok)
        .ok_or_else(|| ApiError::not_found("Loan"))
}
