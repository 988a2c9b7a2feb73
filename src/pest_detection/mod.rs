// Pest detection: declared catalog, detection, and consultation routes

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};

use crate::auth::{require_admin, AuthenticatedUser};
use crate::error::coming_soon;
use crate::AppState;

pub fn routes(state: &AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/admin/detections", get(|| coming_soon("pest_detection.admin.detections")))
        .route(
            "/admin/detections/:id/status",
            put(|| coming_soon("pest_detection.admin.status")),
        )
        .route_layer(from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .route(
            "/pests",
            get(|| coming_soon("pest_detection.pests"))
                .post(|_: AuthenticatedUser| coming_soon("pest_detection.pests.create")),
        )
        .route(
            "/pests/:id",
            get(|| coming_soon("pest_detection.pest"))
                .put(|_: AuthenticatedUser| coming_soon("pest_detection.pests.update"))
                .delete(|_: AuthenticatedUser| coming_soon("pest_detection.pests.delete")),
        )
        .route("/crops", get(|| coming_soon("pest_detection.crops")))
        .route("/treatments/:pest_id", get(|| coming_soon("pest_detection.treatments")))
        .route(
            "/treatments",
            post(|_: AuthenticatedUser| coming_soon("pest_detection.treatments.create")),
        )
        .route("/detect", post(|_: AuthenticatedUser| coming_soon("pest_detection.detect")))
        .route("/history", get(|_: AuthenticatedUser| coming_soon("pest_detection.history")))
        .route(
            "/my-detections",
            get(|_: AuthenticatedUser| coming_soon("pest_detection.my_detections")),
        )
        .route(
            "/consultations",
            post(|_: AuthenticatedUser| coming_soon("pest_detection.consultations.create"))
                .get(|_: AuthenticatedUser| coming_soon("pest_detection.consultations")),
        )
        .route(
            "/consultations/:id",
            put(|_: AuthenticatedUser| coming_soon("pest_detection.consultations.update")),
        )
        .merge(admin)
}
