use log::debug;
use serde::{Deserialize, Serialize};
use sla_core::error::AppError;

use super::Llm;
use crate::gemini::GeminiClient;
use crate::schema::ResponseSchema;

#[derive(Debug, Clone)]
pub struct GeminiLlm {
    client: GeminiClient,
}

impl GeminiLlm {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }
}

#[derive(Debug, Clone, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(
        rename = "generationConfig",
        skip_serializing_if = "Option::is_none"
    )]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(Debug, Clone, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Clone, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a ResponseSchema,
}

#[derive(Debug, Clone, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
struct Candidate {
    content: Option<ReplyContent>,
}

#[derive(Debug, Clone, Deserialize)]
struct ReplyContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Debug, Clone, Deserialize)]
struct ReplyPart {
    #[serde(default)]
    text: String,
}

impl Llm for GeminiLlm {
    fn generate(&self, prompt: &str, schema: Option<&ResponseSchema>) -> Result<String, AppError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.client.base_url(),
            self.client.model()
        );
        let req = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: schema.map(|s| GenerationConfig {
                response_mime_type: "application/json",
                response_schema: s,
            }),
        };

        debug!(
            "dispatching generateContent to {} (schema: {})",
            self.client.model(),
            schema.is_some()
        );
        let resp = ureq::post(&url)
            .set("x-goog-api-key", self.client.api_key())
            .timeout(std::time::Duration::from_secs(30))
            .send_json(serde_json::to_value(req).map_err(|e| {
                AppError::new("AI_GENERATE_FAILED", "Failed to encode generation request")
                    .with_details(e.to_string())
            })?);

        match resp {
            Ok(r) if r.status() == 200 => {
                let v: GenerateContentResponse = r.into_json().map_err(|e| {
                    AppError::new("AI_GENERATE_FAILED", "Failed to decode generation response")
                        .with_details(e.to_string())
                })?;
                // The reply text lives in the parts of the first candidate.
                let text: String = v
                    .candidates
                    .first()
                    .and_then(|c| c.content.as_ref())
                    .map(|c| c.parts.iter().map(|p| p.text.as_str()).collect())
                    .unwrap_or_default();
                if text.trim().is_empty() {
                    return Err(AppError::new(
                        "AI_GENERATE_FAILED",
                        "Generation response was empty",
                    ));
                }
                Ok(text)
            }
            Ok(r) => Err(
                AppError::new("AI_GENERATE_FAILED", "Generation request failed")
                    .with_details(format!("status={}", r.status())),
            ),
            Err(ureq::Error::Status(code, _)) => Err(AppError::new(
                "AI_GENERATE_FAILED",
                "Generation request failed",
            )
            .with_details(format!("status={code}"))),
            Err(e) => Err(AppError::new(
                "AI_GENERATE_FAILED",
                "Failed to call generateContent endpoint",
            )
            .with_details(e.to_string())
            .with_retryable(true)),
        }
    }
}
