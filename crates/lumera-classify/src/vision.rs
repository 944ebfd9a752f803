//! AI fallback classifier over a chat-completions-shaped API.
//!
//! Used only when the keyword classifier returns `Others`. Every failure mode
//! (network, non-2xx, unparsable JSON, timeout) surfaces as
//! `AppError::ClassificationUnavailable` so callers can recover by keeping
//! the keyword result.

use std::time::Duration;

use async_trait::async_trait;
use lumera_core::{AppError, Category};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::provider::ProviderSettings;

/// Fixed instruction prompt sent with the image.
pub const CLASSIFY_PROMPT: &str = "You are classifying a wildlife/landscape photograph for a photography studio's gallery filters. \
Choose exactly one category from this list: Birds, Animal, Ocean, Nature, Peace in Mind, Others. \
Respond with a JSON object of the shape {\"category\": \"...\", \"confidence\": 0.0, \"reasoning\": \"...\"} and nothing else.";

/// A classification returned by the fallback classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisionClassification {
    pub category: Category,
    pub confidence: f64,
    pub reasoning: Option<String>,
}

/// Image-content classification over the network.
#[async_trait]
pub trait VisionClassifier: Send + Sync {
    /// Classify the image at the given URL onto the fixed taxonomy.
    async fn classify_image(&self, image_url: &str) -> Result<VisionClassification, AppError>;
}

/// Classifier backed by an OpenAI-compatible chat-completions endpoint.
pub struct ChatCompletionClassifier {
    http_client: reqwest::Client,
    settings: ProviderSettings,
}

// Chat completions response types
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    content: Option<String>,
}

/// Classification object as returned by the model, before taxonomy mapping.
#[derive(Debug, Deserialize)]
struct RawClassification {
    category: String,
    #[serde(default)]
    confidence: Option<f64>,
    #[serde(default)]
    reasoning: Option<String>,
}

impl ChatCompletionClassifier {
    pub fn new(settings: ProviderSettings, timeout: Duration) -> Result<Self, AppError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::Internal(format!("Failed to create HTTP client for classifier: {}", e))
            })?;

        Ok(Self {
            http_client,
            settings,
        })
    }

    /// Pull the classification JSON out of the model's reply, tolerating a
    /// markdown code fence (```json ... ``` or ``` ... ```) around it.
    fn extract_json_block(text: &str) -> &str {
        if text.contains("```json") {
            text.split("```json")
                .nth(1)
                .and_then(|s| s.split("```").next())
                .unwrap_or(text)
                .trim()
        } else if text.contains("```") {
            text.split("```")
                .nth(1)
                .and_then(|s| s.split("```").next())
                .unwrap_or(text)
                .trim()
        } else {
            text.trim()
        }
    }

    fn parse_classification(text: &str) -> Result<VisionClassification, AppError> {
        let json_text = Self::extract_json_block(text);
        let raw: RawClassification = serde_json::from_str(json_text).map_err(|e| {
            AppError::ClassificationUnavailable(format!(
                "Classifier response was not valid JSON: {}",
                e
            ))
        })?;

        Ok(VisionClassification {
            category: Category::from_label(&raw.category),
            confidence: raw.confidence.unwrap_or(0.0),
            reasoning: raw.reasoning,
        })
    }
}

#[async_trait]
impl VisionClassifier for ChatCompletionClassifier {
    #[tracing::instrument(skip(self), fields(provider = %self.settings.provider, model = %self.settings.model))]
    async fn classify_image(&self, image_url: &str) -> Result<VisionClassification, AppError> {
        let request_body = json!({
            "model": self.settings.model,
            "messages": [
                {
                    "role": "user",
                    "content": [
                        {
                            "type": "text",
                            "text": CLASSIFY_PROMPT
                        },
                        {
                            "type": "image_url",
                            "image_url": { "url": image_url }
                        }
                    ]
                }
            ],
            "max_tokens": 300
        });

        tracing::debug!(image_url, "Sending classification request");

        let response = self
            .http_client
            .post(&self.settings.endpoint)
            .header("Authorization", format!("Bearer {}", self.settings.api_key))
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                AppError::ClassificationUnavailable(format!(
                    "Classification request failed: {}",
                    e
                ))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            // Surface the provider's own error message when it sends one
            if let Ok(error_json) = serde_json::from_str::<serde_json::Value>(&error_text) {
                if let Some(message) = error_json
                    .get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                {
                    return Err(AppError::ClassificationUnavailable(format!(
                        "Classifier API error ({}): {}",
                        status, message
                    )));
                }
            }

            return Err(AppError::ClassificationUnavailable(format!(
                "Classifier API request failed: {} - {}",
                status, error_text
            )));
        }

        let chat_response: ChatCompletionResponse = response.json().await.map_err(|e| {
            AppError::ClassificationUnavailable(format!(
                "Failed to parse classifier API response: {}",
                e
            ))
        })?;

        let content = chat_response
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .ok_or_else(|| {
                AppError::ClassificationUnavailable(
                    "Classifier response contained no message content".to_string(),
                )
            })?;

        let classification = Self::parse_classification(content)?;

        tracing::debug!(
            category = %classification.category,
            confidence = classification.confidence,
            "Image classified"
        );

        Ok(classification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_json() {
        let text = r#"{"category":"Ocean","confidence":0.9,"reasoning":"waves and surf"}"#;
        let c = ChatCompletionClassifier::parse_classification(text).unwrap();
        assert_eq!(c.category, Category::Ocean);
        assert_eq!(c.confidence, 0.9);
        assert_eq!(c.reasoning.as_deref(), Some("waves and surf"));
    }

    #[test]
    fn test_parse_json_code_fence() {
        let text = "```json\n{\"category\":\"Ocean\",\"confidence\":0.9,\"reasoning\":\"surf\"}\n```";
        let c = ChatCompletionClassifier::parse_classification(text).unwrap();
        assert_eq!(c.category, Category::Ocean);
    }

    #[test]
    fn test_parse_bare_code_fence() {
        let text = "Here you go:\n```\n{\"category\":\"Birds\",\"confidence\":0.7}\n```\n";
        let c = ChatCompletionClassifier::parse_classification(text).unwrap();
        assert_eq!(c.category, Category::Birds);
        assert_eq!(c.confidence, 0.7);
        assert!(c.reasoning.is_none());
    }

    #[test]
    fn test_parse_garbage_is_unavailable() {
        let result = ChatCompletionClassifier::parse_classification("I think it's a nice beach");
        assert!(matches!(
            result,
            Err(AppError::ClassificationUnavailable(_))
        ));
    }

    #[test]
    fn test_unknown_label_maps_to_others() {
        let text = r#"{"category":"Street Photography","confidence":0.8}"#;
        let c = ChatCompletionClassifier::parse_classification(text).unwrap();
        assert_eq!(c.category, Category::Others);
    }

    #[test]
    fn test_label_mapping_is_case_insensitive() {
        let text = r#"{"category":"peace in mind","confidence":0.6}"#;
        let c = ChatCompletionClassifier::parse_classification(text).unwrap();
        assert_eq!(c.category, Category::PeaceInMind);
    }

    #[test]
    fn test_prompt_names_every_category() {
        for category in Category::ALL {
            assert!(
                CLASSIFY_PROMPT.contains(category.as_str()),
                "prompt is missing category {}",
                category
            );
        }
    }
}
