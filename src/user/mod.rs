// User account area: declared profile, farm, document, notification, and admin routes

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};

use crate::auth::{require_admin, AuthenticatedUser};
use crate::error::coming_soon;
use crate::AppState;

fn admin_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/admin/users", get(|| coming_soon("user.admin.users")))
        .route(
            "/admin/users/:id",
            get(|| coming_soon("user.admin.user")).delete(|| coming_soon("user.admin.delete")),
        )
        .route("/admin/users/:id/role", put(|| coming_soon("user.admin.role")))
        .route("/admin/users/:id/status", put(|| coming_soon("user.admin.status")))
        .route("/admin/analytics/users", get(|| coming_soon("user.analytics.users")))
        .route("/admin/analytics/activity", get(|| coming_soon("user.analytics.activity")))
        .route("/admin/analytics/engagement", get(|| coming_soon("user.analytics.engagement")))
        .route_layer(from_fn_with_state(state.clone(), require_admin))
}

pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/profile",
            get(|_: AuthenticatedUser| coming_soon("user.profile"))
                .put(|_: AuthenticatedUser| coming_soon("user.profile.update"))
                .delete(|_: AuthenticatedUser| coming_soon("user.profile.delete")),
        )
        .route(
            "/preferences",
            get(|_: AuthenticatedUser| coming_soon("user.preferences"))
                .put(|_: AuthenticatedUser| coming_soon("user.preferences.update")),
        )
        .route("/dashboard", get(|_: AuthenticatedUser| coming_soon("user.dashboard")))
        .route("/stats", get(|_: AuthenticatedUser| coming_soon("user.stats")))
        .route("/activity", get(|_: AuthenticatedUser| coming_soon("user.activity")))
        .route(
            "/farm",
            get(|_: AuthenticatedUser| coming_soon("user.farm"))
                .put(|_: AuthenticatedUser| coming_soon("user.farm.update")),
        )
        .route("/farm/crops", post(|_: AuthenticatedUser| coming_soon("user.farm.crops.add")))
        .route(
            "/farm/crops/:id",
            put(|_: AuthenticatedUser| coming_soon("user.farm.crops.update"))
                .delete(|_: AuthenticatedUser| coming_soon("user.farm.crops.remove")),
        )
        .route(
            "/documents",
            get(|_: AuthenticatedUser| coming_soon("user.documents"))
                .post(|_: AuthenticatedUser| coming_soon("user.documents.upload")),
        )
        .route(
            "/documents/:id",
            delete(|_: AuthenticatedUser| coming_soon("user.documents.delete")),
        )
        .route("/notifications", get(|_: AuthenticatedUser| coming_soon("user.notifications")))
        .route(
            "/notifications/:id/read",
            put(|_: AuthenticatedUser| coming_soon("user.notifications.read")),
        )
        .route(
            "/notifications/read-all",
            put(|_: AuthenticatedUser| coming_soon("user.notifications.read_all")),
        )
        .route(
            "/notifications/:id",
            delete(|_: AuthenticatedUser| coming_soon("user.notifications.delete")),
        )
        .route("/password", put(|_: AuthenticatedUser| coming_soon("user.password")))
        .route("/email", put(|_: AuthenticatedUser| coming_soon("user.email")))
        .route("/verify-email", post(|_: AuthenticatedUser| coming_soon("user.verify_email")))
        .route("/enable-2fa", post(|_: AuthenticatedUser| coming_soon("user.enable_2fa")))
        .route("/disable-2fa", post(|_: AuthenticatedUser| coming_soon("user.disable_2fa")))
        .route("/export-data", get(|_: AuthenticatedUser| coming_soon("user.export_data")))
        .route(
            "/request-deletion",
            post(|_: AuthenticatedUser| coming_soon("user.request_deletion")),
        )
        .route(
            "/privacy-settings",
            get(|_: AuthenticatedUser| coming_soon("user.privacy_settings"))
                .put(|_: AuthenticatedUser| coming_soon("user.privacy_settings.update")),
        )
        .merge(admin_routes(state))
}
