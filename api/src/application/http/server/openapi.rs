use crate::application::http::meal_analysis::router::MealAnalysisApiDoc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "mealscan API"
    ),
    paths(crate::application::http::health::handlers::health_check),
    nest(
        (path = "/api", api = MealAnalysisApiDoc),
    )
)]
pub struct ApiDoc;
