use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeMealRequest {
    /// Base64 JPEG, or a full `data:` URL.
    #[serde(default, alias = "image_base64")]
    #[validate(
        required(message = "No image provided"),
        length(min = 1, message = "No image provided")
    )]
    pub image_base64: Option<String>,
}
