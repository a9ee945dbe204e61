use super::handlers::analyze_meal::{__path_analyze_meal, analyze_meal, method_not_allowed};
use crate::application::http::server::app_state::AppState;
use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

/// Room for the JSON envelope around the base64 image.
const BODY_ENVELOPE_BYTES: usize = 64 * 1024;

#[derive(OpenApi)]
#[openapi(paths(analyze_meal))]
pub struct MealAnalysisApiDoc;

pub fn meal_analysis_routes(state: AppState) -> Router<AppState> {
    let body_limit = state
        .args
        .server
        .max_image_bytes
        .saturating_add(BODY_ENVELOPE_BYTES);

    Router::new()
        .route(
            &format!("{}/api/analyze", state.args.server.root_path),
            post(analyze_meal).fallback(method_not_allowed),
        )
        .layer(DefaultBodyLimit::max(body_limit))
}
