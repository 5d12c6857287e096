//! reqwest-backed client for the Generative Language API
//! (`{base}/{model}:generateContent`).

use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use serde::Deserialize;
use serde_json::{json, Value};

use super::{
    parser, prompts, AdvisorError, AdvisoryGateway, ChatRole, ChatTurn, ProposedAssessment,
};
use crate::assessment::domain::Language;
use crate::config::AdvisorConfig;

/// Concrete [`AdvisoryGateway`] over the hosted Gemini API. Configuration
/// is captured once at construction; transport and credentials never
/// change for the life of the client.
#[derive(Debug, Clone)]
pub struct GeminiAdvisor {
    client: reqwest::Client,
    config: AdvisorConfig,
}

impl GeminiAdvisor {
    pub fn new(config: AdvisorConfig) -> Result<Self, AdvisorError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// Without a configured key the gateway is disabled; every operation
    /// fails fast here before any I/O.
    fn api_key(&self) -> Result<&str, AdvisorError> {
        self.config.api_key.as_deref().ok_or(AdvisorError::Disabled)
    }

    fn request_body(&self, system_instruction: &str, contents: Value) -> Value {
        json!({
            "contents": contents,
            "systemInstruction": { "parts": [{ "text": system_instruction }] },
            "generationConfig": { "maxOutputTokens": self.config.max_output_tokens },
        })
    }

    async fn generate(&self, body: Value) -> Result<String, AdvisorError> {
        let key = self.api_key()?;
        let url = format!(
            "{}/{}:generateContent",
            self.config.base_url, self.config.model
        );
        tracing::debug!(model = %self.config.model, "dispatching advisory request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(&text) {
                return Err(AdvisorError::Status {
                    code: envelope.error.code.unwrap_or(status.as_u16()),
                    message: envelope.error.message,
                });
            }
            return Err(AdvisorError::Status {
                code: status.as_u16(),
                message: text,
            });
        }

        let reply: GenerateReply = response.json().await?;
        let text = reply.text();
        if text.is_empty() {
            return Err(AdvisorError::EmptyReply);
        }
        Ok(text)
    }
}

#[async_trait]
impl AdvisoryGateway for GeminiAdvisor {
    async fn advice(
        &self,
        objective_name: &str,
        factors: &[&str],
        evidence: &str,
        language: Language,
    ) -> Result<String, AdvisorError> {
        let body = self.request_body(
            &prompts::advice_system_instruction(objective_name, language),
            json!([{
                "role": "user",
                "parts": [{ "text": prompts::advice_prompt(factors, evidence) }],
            }]),
        );
        self.generate(body).await
    }

    async fn auto_assess(
        &self,
        description: &str,
        language: Language,
    ) -> Result<Vec<ProposedAssessment>, AdvisorError> {
        let mut body = self.request_body(
            prompts::auto_assess_system_instruction(language),
            json!([{
                "role": "user",
                "parts": [{ "text": prompts::auto_assess_prompt(description, language) }],
            }]),
        );
        body["generationConfig"]["responseMimeType"] = json!("application/json");
        let reply = self.generate(body).await?;
        parser::parse_assessments(&reply)
    }

    async fn describe_image(
        &self,
        data: &[u8],
        mime_type: &str,
        language: Language,
    ) -> Result<String, AdvisorError> {
        let encoded = general_purpose::STANDARD.encode(data);
        let body = self.request_body(
            prompts::describe_image_system_instruction(language),
            json!([{
                "role": "user",
                "parts": [
                    { "inlineData": { "mimeType": mime_type, "data": encoded } },
                    { "text": prompts::describe_image_prompt(language) },
                ],
            }]),
        );
        self.generate(body).await
    }

    async fn chat(
        &self,
        message: &str,
        history: &[ChatTurn],
        language: Language,
    ) -> Result<String, AdvisorError> {
        let mut contents = Vec::with_capacity(history.len() + 1);
        for turn in history {
            let role = match turn.role {
                ChatRole::User => "user",
                ChatRole::Bot => "model",
            };
            contents.push(json!({ "role": role, "parts": [{ "text": turn.text }] }));
        }
        contents.push(json!({ "role": "user", "parts": [{ "text": message }] }));

        let body = self.request_body(
            prompts::chat_system_instruction(language),
            Value::Array(contents),
        );
        self.generate(body).await
    }
}

#[derive(Debug, Deserialize)]
struct GenerateReply {
    #[serde(default)]
    candidates: Vec<ReplyCandidate>,
}

#[derive(Debug, Deserialize)]
struct ReplyCandidate {
    content: Option<ReplyContent>,
}

#[derive(Debug, Deserialize)]
struct ReplyContent {
    #[serde(default)]
    parts: Vec<ReplyPart>,
}

#[derive(Debug, Deserialize)]
struct ReplyPart {
    text: Option<String>,
}

impl GenerateReply {
    /// Concatenates every text part of every candidate.
    fn text(&self) -> String {
        let mut text = String::new();
        for candidate in &self.candidates {
            if let Some(content) = &candidate.content {
                for part in &content.parts {
                    if let Some(fragment) = &part.text {
                        text.push_str(fragment);
                    }
                }
            }
        }
        text
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: Option<u16>,
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advisor(api_key: Option<&str>) -> GeminiAdvisor {
        GeminiAdvisor::new(AdvisorConfig {
            api_key: api_key.map(str::to_owned),
            model: "gemini-3-pro-preview".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
            timeout_secs: 5,
            max_output_tokens: 1024,
        })
        .expect("client builds")
    }

    #[test]
    fn reply_text_concatenates_candidate_parts() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":"Hello"},{"text":" world"}]}}]}"#;
        let reply: GenerateReply = serde_json::from_str(json).expect("parses");
        assert_eq!(reply.text(), "Hello world");
    }

    #[test]
    fn reply_without_candidates_yields_empty_text() {
        let reply: GenerateReply = serde_json::from_str("{}").expect("parses");
        assert_eq!(reply.text(), "");
    }

    #[test]
    fn error_envelope_parses_the_api_shape() {
        let json = r#"{"error":{"code":429,"message":"Resource exhausted","status":"RESOURCE_EXHAUSTED"}}"#;
        let envelope: ErrorEnvelope = serde_json::from_str(json).expect("parses");
        assert_eq!(envelope.error.code, Some(429));
        assert_eq!(envelope.error.message, "Resource exhausted");
    }

    #[test]
    fn request_body_carries_instruction_and_token_cap() {
        let advisor = advisor(Some("key"));
        let body = advisor.request_body(
            "Act as an expert.",
            json!([{ "role": "user", "parts": [{ "text": "Hi" }] }]),
        );
        assert_eq!(
            body["systemInstruction"]["parts"][0]["text"],
            "Act as an expert."
        );
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 1024);
        assert_eq!(body["contents"][0]["role"], "user");
    }

    #[test]
    fn missing_key_disables_the_gateway_before_any_io() {
        let advisor = advisor(None);
        match advisor.api_key() {
            Err(AdvisorError::Disabled) => {}
            other => panic!("expected Disabled, got {other:?}"),
        }
    }
}
