use clap::{Parser, ValueEnum};
use mealscan_core::domain::{
    common::{AnalysisConfig, LLMConfig, MealScanConfig},
    meal_analysis::value_objects::TotalReconciliation,
};

/// Base64 text accepted per request, roughly an 11 MiB photo.
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 15 * 1024 * 1024;

#[derive(Debug, Clone, Parser)]
#[command(name = "mealscan-api", version, about = "Nutrition estimates from meal photos")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub openai: OpenAIArgs,

    #[command(flatten)]
    pub analysis: AnalysisArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value_t = String::new())]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "MAX_IMAGE_BYTES", default_value_t = DEFAULT_MAX_IMAGE_BYTES)]
    pub max_image_bytes: usize,
}

#[derive(Debug, Clone, clap::Args)]
pub struct OpenAIArgs {
    #[arg(long = "openai-api-key", env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(long = "openai-model", env = "OPENAI_MODEL", default_value = "gpt-4o-mini")]
    pub model: String,

    #[arg(
        long = "openai-base-url",
        env = "OPENAI_BASE_URL",
        default_value = "https://api.openai.com/v1"
    )]
    pub base_url: String,

    #[arg(long = "openai-temperature", env = "OPENAI_TEMPERATURE", default_value_t = 0.2)]
    pub temperature: f32,

    #[arg(long = "openai-max-tokens", env = "OPENAI_MAX_TOKENS", default_value_t = 900)]
    pub max_tokens: u32,

    #[arg(long = "openai-timeout-secs", env = "OPENAI_TIMEOUT_SECS", default_value_t = 60)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct AnalysisArgs {
    #[arg(
        long = "total-reconciliation",
        env = "TOTAL_RECONCILIATION",
        value_enum,
        default_value = "zero-means-missing"
    )]
    pub total_reconciliation: TotalReconciliationArg,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TotalReconciliationArg {
    ZeroMeansMissing,
    AbsentOnly,
}

impl From<TotalReconciliationArg> for TotalReconciliation {
    fn from(value: TotalReconciliationArg) -> Self {
        match value {
            TotalReconciliationArg::ZeroMeansMissing => TotalReconciliation::ZeroMeansMissing,
            TotalReconciliationArg::AbsentOnly => TotalReconciliation::AbsentOnly,
        }
    }
}

impl From<Args> for MealScanConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                openai_api_key: args.openai.api_key,
                openai_model: args.openai.model,
                openai_base_url: args.openai.base_url,
                temperature: args.openai.temperature,
                max_tokens: args.openai.max_tokens,
                timeout_secs: args.openai.timeout_secs,
            },
            analysis: AnalysisConfig {
                total_reconciliation: args.analysis.total_reconciliation.into(),
            },
        }
    }
}
