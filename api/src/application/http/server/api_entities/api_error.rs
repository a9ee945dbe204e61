use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mealscan_core::domain::common::entities::app_errors::CoreError;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// JSON body of every non-success answer.
#[derive(Debug, Default, PartialEq, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_openai: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_model_content: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Relayed with the upstream status code.
    #[error("OpenAI API error")]
    Upstream { status: u16, details: String },

    /// Pipeline worked but the model produced nothing; answered with 200.
    #[error("Empty model response")]
    EmptyModelResponse { raw_openai: String },

    /// Pipeline worked but the model produced prose; answered with 200.
    #[error("Model returned non-JSON content")]
    NonJsonModelContent { raw_model_content: String },

    #[error("Server error")]
    InternalServerError(String),
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::UpstreamStatus { status, body } => ApiError::Upstream {
                status,
                details: body,
            },
            CoreError::EmptyModelResponse { raw_body } => ApiError::EmptyModelResponse {
                raw_openai: raw_body,
            },
            CoreError::NonJsonModelContent { content } => ApiError::NonJsonModelContent {
                raw_model_content: content,
            },
            CoreError::ExternalServiceError(message) => ApiError::InternalServerError(message),
        }
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::EmptyModelResponse { .. } | ApiError::NonJsonModelContent { .. } => {
                StatusCode::OK
            }
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> ErrorBody {
        let error = self.to_string();
        match self {
            ApiError::BadRequest(_) | ApiError::MethodNotAllowed => ErrorBody {
                error,
                ..Default::default()
            },
            ApiError::Upstream { status, details } => ErrorBody {
                error,
                status: Some(*status),
                details: Some(details.clone()),
                ..Default::default()
            },
            ApiError::EmptyModelResponse { raw_openai } => ErrorBody {
                error,
                raw_openai: Some(raw_openai.clone()),
                ..Default::default()
            },
            ApiError::NonJsonModelContent { raw_model_content } => ErrorBody {
                error,
                raw_model_content: Some(raw_model_content.clone()),
                ..Default::default()
            },
            ApiError::InternalServerError(details) => ErrorBody {
                error,
                details: Some(details.clone()),
                ..Default::default()
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if matches!(self, ApiError::InternalServerError(_)) {
            tracing::error!("Analyze error: {:?}", self);
        }

        (self.status_code(), Json(self.body())).into_response()
    }
}
