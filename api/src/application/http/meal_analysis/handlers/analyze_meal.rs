use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use mealscan_core::domain::meal_analysis::{
    entities::MealAnalysisResult,
    ports::MealAnalysisService,
    value_objects::{AnalyzeMealInput, MealImage},
};
use tracing::{debug, info};
use validator::Validate;

use crate::application::http::{
    meal_analysis::validators::AnalyzeMealRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ErrorBody},
            response::Response,
        },
        app_state::AppState,
    },
};

const NO_IMAGE: &str = "No image provided";
const IMAGE_TOO_LARGE: &str = "Image too large";

#[utoipa::path(
    post,
    path = "/analyze",
    tag = "meal-analysis",
    summary = "Analyze a meal photo",
    description = "Estimates dish, items, calories and macronutrients from a base64 meal photo. \
        When the model output is empty or not JSON the answer is still 200, with an `error` field.",
    request_body = AnalyzeMealRequest,
    responses(
        (status = 200, body = MealAnalysisResult),
        (status = 400, body = ErrorBody),
        (status = 405, body = ErrorBody),
        (status = 500, body = ErrorBody)
    ),
)]
pub async fn analyze_meal(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeMealRequest>, JsonRejection>,
) -> Result<Response<MealAnalysisResult>, ApiError> {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            debug!("Analyze body over the size limit: {}", rejection);
            return Err(ApiError::BadRequest(IMAGE_TOO_LARGE.to_string()));
        }
        // Any other unreadable body is treated like a body without an image
        Err(rejection) => {
            debug!("Unreadable analyze body: {}", rejection);
            AnalyzeMealRequest::default()
        }
    };

    payload
        .validate()
        .map_err(|_| ApiError::BadRequest(NO_IMAGE.to_string()))?;

    let image = MealImage::new(payload.image_base64.unwrap_or_default());
    if image.is_empty() {
        return Err(ApiError::BadRequest(NO_IMAGE.to_string()));
    }
    if image.len() > state.args.server.max_image_bytes {
        return Err(ApiError::BadRequest(IMAGE_TOO_LARGE.to_string()));
    }

    info!(image_bytes = image.len(), "Analyzing meal photo");

    let result = state
        .service
        .analyze_meal(AnalyzeMealInput { image })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
