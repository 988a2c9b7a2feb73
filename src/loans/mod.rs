// Loans: product catalogs, EMI and eligibility calculators, applications

pub mod eligibility;
pub mod emi_calculator;
pub mod handlers;
pub mod models;
pub mod repository;

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};

use crate::auth::{require_admin, AuthenticatedUser};
use crate::error::coming_soon;
use crate::AppState;

pub use eligibility::EligibilityCalculator;
pub use emi_calculator::EmiCalculator;
pub use models::{LoanApplication, LoanStatus, LoanType};
pub use repository::LoanRepository;

pub fn routes(state: &AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/admin/applications", get(handlers::all_applications))
        .route("/admin/applications/:id", get(handlers::application_by_id))
        .route("/admin/applications/:id/approve", put(|| coming_soon("loans.admin.approve")))
        .route("/admin/applications/:id/reject", put(|| coming_soon("loans.admin.reject")))
        .route("/admin/applications/:id/status", put(|| coming_soon("loans.admin.status")))
        .route("/admin/:id/disburse", post(|| coming_soon("loans.admin.disburse")))
        .route("/admin/:id/close", post(|| coming_soon("loans.admin.close")))
        .route("/admin/reports/summary", get(|| coming_soon("loans.reports.summary")))
        .route("/admin/reports/performance", get(|| coming_soon("loans.reports.performance")))
        .route("/admin/reports/risk", get(|| coming_soon("loans.reports.risk")))
        .route_layer(from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .route("/types", get(handlers::loan_types))
        .route("/requirements", get(handlers::loan_requirements))
        .route("/calculators", get(handlers::loan_calculators))
        .route("/calculate-emi", post(handlers::calculate_emi))
        .route("/eligibility-check", get(handlers::eligibility_check))
        .route("/apply", post(handlers::apply_for_loan))
        .route("/my-loans", get(handlers::my_loans))
        .route(
            "/my-loans/:id",
            get(handlers::my_loan)
                .put(handlers::update_my_loan)
                .delete(handlers::cancel_my_loan),
        )
        .route(
            "/:id/documents",
            post(|_: AuthenticatedUser| coming_soon("loans.documents.upload"))
                .get(|_: AuthenticatedUser| coming_soon("loans.documents")),
        )
        .route(
            "/:id/documents/:doc_id",
            delete(|_: AuthenticatedUser| coming_soon("loans.documents.delete")),
        )
        .route(
            "/:id/repayments",
            post(|_: AuthenticatedUser| coming_soon("loans.repayments.create"))
                .get(|_: AuthenticatedUser| coming_soon("loans.repayments")),
        )
        .route("/:id/schedule", get(|_: AuthenticatedUser| coming_soon("loans.schedule")))
        .route("/:id/status", get(|_: AuthenticatedUser| coming_soon("loans.status")))
        .route("/:id/track", post(|_: AuthenticatedUser| coming_soon("loans.track")))
        .merge(admin)
}
