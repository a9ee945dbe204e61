use serde_json::Value;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    meal_analysis::{
        entities::MealAnalysisResult,
        helpers::excerpt,
        ports::{MealAnalysisService, VisionClient},
        prompt::meal_analysis_prompt,
        value_objects::AnalyzeMealInput,
    },
};

impl<V> MealAnalysisService for Service<V>
where
    V: VisionClient,
{
    async fn analyze_meal(&self, input: AnalyzeMealInput) -> Result<MealAnalysisResult, CoreError> {
        // 1. Ask the vision model
        let completion = self
            .vision_client
            .complete_with_image(meal_analysis_prompt(), input.image)
            .await?;

        // 2. Reject empty payloads
        let content = completion.content.as_deref().unwrap_or_default();
        if content.trim().is_empty() {
            tracing::warn!("Vision model returned an empty payload");
            return Err(CoreError::EmptyModelResponse {
                raw_body: excerpt(&completion.raw_body),
            });
        }

        // 3. Parse the JSON the model was asked for
        let parsed: Value = serde_json::from_str(content).map_err(|e| {
            tracing::warn!("Vision model returned non-JSON content: {}", e);
            CoreError::NonJsonModelContent {
                content: excerpt(content),
            }
        })?;

        // 4. Coerce into the canonical shape
        let result = self.normalizer.normalize(&parsed);

        tracing::info!(
            items = result.items.len(),
            kcal = result.total.kcal,
            confidence = result.confidence,
            "Meal analyzed"
        );

        Ok(result)
    }
}
