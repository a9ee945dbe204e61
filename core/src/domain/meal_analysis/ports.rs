use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_analysis::{
        entities::MealAnalysisResult,
        value_objects::{AnalyzeMealInput, MealImage, VisionCompletion},
    },
};

/// Vision-language model reachable over HTTP.
pub trait VisionClient: Send + Sync {
    fn complete_with_image(
        &self,
        prompt: String,
        image: MealImage,
    ) -> impl Future<Output = Result<VisionCompletion, CoreError>> + Send;
}

/// Service trait for meal analysis business logic
pub trait MealAnalysisService: Send + Sync {
    fn analyze_meal(
        &self,
        input: AnalyzeMealInput,
    ) -> impl Future<Output = Result<MealAnalysisResult, CoreError>> + Send;
}
