// Government schemes: catalog lookups plus declared application workflow routes

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

pub use models::Scheme;
pub use repository::SchemeRepository;

pub fn routes(state: &AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/admin/applications", get(|| coming_soon("schemes.admin.applications")))
        .route("/admin/applications/:id", get(|| coming_soon("schemes.admin.application")))
        .route("/admin/applications/:id/approve", put(|| coming_soon("schemes.admin.approve")))
        .route("/admin/applications/:id/reject", put(|| coming_soon("schemes.admin.reject")))
        .route("/admin/applications/:id/status", put(|| coming_soon("schemes.admin.status")))
        .route("/admin/schemes", post(|| coming_soon("schemes.admin.create")))
        .route(
            "/admin/schemes/:id",
            put(|| coming_soon("schemes.admin.update")).delete(|| coming_soon("schemes.admin.delete")),
        )
        .route("/admin/schemes/:id/status", put(|| coming_soon("schemes.admin.scheme_status")))
        .route("/admin/reports/applications", get(|| coming_soon("schemes.reports.applications")))
        .route("/admin/reports/beneficiaries", get(|| coming_soon("schemes.reports.beneficiaries")))
        .route("/admin/reports/impact", get(|| coming_soon("schemes.reports.impact")))
        .route_layer(from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .route("/schemes", get(handlers::list_schemes))
        .route("/schemes/:id", get(handlers::get_scheme))
        .route("/categories", get(|| coming_soon("schemes.categories")))
        .route("/states", get(|| coming_soon("schemes.states")))
        .route("/crops", get(|| coming_soon("schemes.crops")))
        .route("/eligibility-checker", get(|| coming_soon("schemes.eligibility")))
        .route("/calculator", get(|| coming_soon("schemes.calculator")))
        .route("/search", get(|| coming_soon("schemes.search")))
        .route("/filter", get(|| coming_soon("schemes.filter")))
        .route("/trending", get(|| coming_soon("schemes.trending")))
        .route("/deadlines", get(|| coming_soon("schemes.deadlines")))
        .route("/apply", post(|_: AuthenticatedUser| coming_soon("schemes.apply")))
        .route("/my-applications", get(|_: AuthenticatedUser| coming_soon("schemes.my_applications")))
        .route(
            "/my-applications/:id",
            get(|_: AuthenticatedUser| coming_soon("schemes.my_application"))
                .put(|_: AuthenticatedUser| coming_soon("schemes.update_application"))
                .delete(|_: AuthenticatedUser| coming_soon("schemes.cancel_application")),
        )
        .route("/track/:id", get(|_: AuthenticatedUser| coming_soon("schemes.track")))
        .route("/status/:id", get(|_: AuthenticatedUser| coming_soon("schemes.status")))
        .route(
            "/:id/documents",
            post(|_: AuthenticatedUser| coming_soon("schemes.documents.upload"))
                .get(|_: AuthenticatedUser| coming_soon("schemes.documents")),
        )
        .route(
            "/:id/documents/:doc_id",
            delete(|_: AuthenticatedUser| coming_soon("schemes.documents.delete")),
        )
        .route("/:id/subscribe", post(|_: AuthenticatedUser| coming_soon("schemes.subscribe")))
        .route("/notifications", get(|_: AuthenticatedUser| coming_soon("schemes.notifications")))
        .route(
            "/notifications/:id/read",
            put(|_: AuthenticatedUser| coming_soon("schemes.notifications.read")),
        )
        .route("/export/schemes", get(|| coming_soon("schemes.export")))
        .route(
            "/export/applications",
            get(|_: AuthenticatedUser| coming_soon("schemes.export.applications")),
        )
        .merge(admin)
}
