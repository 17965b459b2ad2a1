//! REST endpoints for onboarding status and profile.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;

use super::manager::OnboardingManager;

/// Shared state for onboarding routes.
#[derive(Clone)]
pub struct OnboardingRouteState {
    pub manager: Arc<OnboardingManager>,
}

/// GET /api/onboarding/status
///
/// Current screen, progress, a snapshot of the screen's controls and the
/// profile accumulated so far.
async fn get_status(State(state): State<OnboardingRouteState>) -> impl IntoResponse {
    Json(state.manager.get_status().await)
}

/// GET /api/onboarding/profile
///
/// The finished profile, or 404 until the last screen has committed.
async fn get_profile(State(state): State<OnboardingRouteState>) -> impl IntoResponse {
    match state.manager.completed_profile().await {
        Some(profile) => Json(profile).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "Onboarding is not complete"})),
        )
            .into_response(),
    }
}

/// Build the onboarding REST routes. The WebApp is served from another
/// origin, so CORS is open.
pub fn onboarding_routes(state: OnboardingRouteState) -> Router {
    Router::new()
        .route("/api/onboarding/status", get(get_status))
        .route("/api/onboarding/profile", get(get_profile))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
