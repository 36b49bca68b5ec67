use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants::providers as provider_constants;
use crate::core::types::{Language, RepairSource};
use crate::error::ProviderError;
use crate::repair::providers::{strip_code_fences, RepairProvider};

/// Google Generative Language client.
pub struct GoogleProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
    #[serde(rename = "topK")]
    top_k: u32,
    #[serde(rename = "topP")]
    top_p: f32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

impl GoogleProvider {
    pub fn new(client: reqwest::Client, api_key: String, model: String) -> Self {
        Self {
            client,
            api_key,
            model,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            provider_constants::GOOGLE_ENDPOINT_BASE,
            self.model,
            self.api_key
        )
    }
}

#[async_trait]
impl RepairProvider for GoogleProvider {
    fn source(&self) -> RepairSource {
        RepairSource::Google
    }

    async fn submit_repair(
        &self,
        code: &str,
        language: Language,
        error_summary: &str,
    ) -> Result<String, ProviderError> {
        let prompt = format!(
            "Return ONLY corrected code (no explanations).\nLanguage: {}. Fix these errors so code parses and runs:\n{}\n\nCode:\n",
            language, error_summary
        );
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![
                    RequestPart { text: prompt },
                    RequestPart {
                        text: code.to_string(),
                    },
                ],
            }],
            generation_config: GenerationConfig {
                temperature: 0.1,
                max_output_tokens: 2000,
                top_k: 1,
                top_p: 0.8,
            },
        };

        debug!(model = %self.model, "submitting repair to google");
        let response = self.client.post(self.endpoint()).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;
        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().map(|p| p.text).collect())
            .unwrap_or_default();

        Ok(strip_code_fences(&text))
    }
}
