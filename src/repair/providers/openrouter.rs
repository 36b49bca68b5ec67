use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants::providers as provider_constants;
use crate::core::types::{Language, RepairSource};
use crate::error::ProviderError;
use crate::repair::providers::{strip_code_fences, RepairProvider};

/// OpenRouter chat-completions client.
pub struct OpenRouterProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: String,
}

impl OpenRouterProvider {
    pub fn new(client: reqwest::Client, api_key: String, model: String) -> Self {
        Self {
            client,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl RepairProvider for OpenRouterProvider {
    fn source(&self) -> RepairSource {
        RepairSource::OpenRouter
    }

    async fn submit_repair(
        &self,
        code: &str,
        language: Language,
        error_summary: &str,
    ) -> Result<String, ProviderError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "You are a strict code fixer. Return ONLY corrected code, no explanations."
                        .to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: format!(
                        "Language: {}. Fix these errors so code parses and runs:\n{}\n\nCode:\n{}",
                        language, error_summary, code
                    ),
                },
            ],
            temperature: 0.1,
            max_tokens: 2000,
        };

        debug!(model = %self.model, "submitting repair to openrouter");
        let response = self
            .client
            .post(provider_constants::OPENROUTER_ENDPOINT)
            .bearer_auth(&self.api_key)
            .header("HTTP-Referer", "http://localhost:8081")
            .header("X-Title", "codemend")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;
        let text = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        Ok(strip_code_fences(&text))
    }
}
