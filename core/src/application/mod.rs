use crate::{
    domain::{
        common::{MealScanConfig, entities::app_errors::CoreError, services::Service},
        meal_analysis::normalizer::ResponseNormalizer,
    },
    infrastructure::llm::OpenAIVisionClient,
};

pub type MealScanService = Service<OpenAIVisionClient>;

pub fn create_service(config: MealScanConfig) -> Result<MealScanService, CoreError> {
    let vision_client = OpenAIVisionClient::new(&config.llm)?;
    let normalizer = ResponseNormalizer::new(config.analysis.total_reconciliation);

    tracing::debug!(
        model = %config.llm.openai_model,
        reconciliation = ?config.analysis.total_reconciliation,
        "Meal analysis service created"
    );

    Ok(Service::new(vision_client, normalizer))
}
