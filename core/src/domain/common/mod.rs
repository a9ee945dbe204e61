use crate::domain::meal_analysis::value_objects::TotalReconciliation;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct MealScanConfig {
    pub llm: LLMConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

#[derive(Clone, Debug, Default)]
pub struct AnalysisConfig {
    pub total_reconciliation: TotalReconciliation,
}
