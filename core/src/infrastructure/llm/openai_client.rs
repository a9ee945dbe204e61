use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    meal_analysis::{
        helpers::excerpt,
        ports::VisionClient,
        value_objects::{MealImage, VisionCompletion},
    },
};

#[derive(Debug, Clone)]
pub struct OpenAIVisionClient {
    api_key: String,
    model_name: String,
    base_url: String,
    temperature: f32,
    max_tokens: u32,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    temperature: f32,
    max_tokens: u32,
    response_format: ResponseFormat,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: Vec<ContentPart>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenAIVisionClient {
    pub fn new(config: &LLMConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                CoreError::ExternalServiceError(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            api_key: config.openai_api_key.clone(),
            model_name: config.openai_model.clone(),
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            client,
        })
    }

    fn build_request(&self, prompt: String, image: &MealImage) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model_name.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            response_format: ResponseFormat {
                kind: "json_object".to_string(),
            },
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: vec![
                    ContentPart::Text { text: prompt },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl {
                            url: image.data_url(),
                        },
                    },
                ],
            }],
        }
    }

    async fn call_openai_api(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<VisionCompletion, CoreError> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OpenAI API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        let status = response.status();
        let raw_body = response.text().await.map_err(|e| {
            tracing::error!("Failed to read OpenAI response body: {}", e);
            CoreError::ExternalServiceError(format!("Failed to read LLM response: {}", e))
        })?;

        if !status.is_success() {
            tracing::error!("OpenAI API error: {} - {}", status, excerpt(&raw_body));
            return Err(CoreError::UpstreamStatus {
                status: status.as_u16(),
                body: excerpt(&raw_body),
            });
        }

        let completion: ChatCompletionResponse =
            serde_json::from_str(&raw_body).map_err(|e| {
                tracing::error!("Failed to parse OpenAI response: {}", e);
                CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
            })?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content);

        Ok(VisionCompletion { raw_body, content })
    }
}

impl VisionClient for OpenAIVisionClient {
    async fn complete_with_image(
        &self,
        prompt: String,
        image: MealImage,
    ) -> Result<VisionCompletion, CoreError> {
        let request = self.build_request(prompt, &image);
        self.call_openai_api(request).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn config() -> LLMConfig {
        LLMConfig {
            openai_api_key: "sk-test".to_string(),
            openai_model: "gpt-4o-mini".to_string(),
            openai_base_url: "https://api.openai.com/v1/".to_string(),
            temperature: 0.25,
            max_tokens: 900,
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = OpenAIVisionClient::new(&config()).unwrap();
        assert_eq!(client.base_url, "https://api.openai.com/v1");
    }

    #[test]
    fn test_request_shape() {
        let client = OpenAIVisionClient::new(&config()).unwrap();
        let request = client.build_request("Describe".to_string(), &MealImage::new("AAAA"));

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "gpt-4o-mini",
                "temperature": 0.25,
                "max_tokens": 900,
                "response_format": { "type": "json_object" },
                "messages": [{
                    "role": "user",
                    "content": [
                        { "type": "text", "text": "Describe" },
                        { "type": "image_url", "image_url": { "url": "data:image/jpeg;base64,AAAA" } }
                    ]
                }]
            })
        );
    }

    #[test]
    fn test_response_without_choices_parses() {
        let response: ChatCompletionResponse = serde_json::from_str("{}").unwrap();
        assert!(response.choices.is_empty());

        let response: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#)
                .unwrap();
        assert!(response.choices[0].message.as_ref().unwrap().content.is_none());
    }
}
