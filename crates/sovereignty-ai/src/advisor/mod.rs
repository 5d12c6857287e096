//! Boundary to the hosted generative-language API. Everything the rest of
//! the crate knows about the model passes through [`AdvisoryGateway`]; the
//! concrete [`GeminiAdvisor`] is injected once at service construction.
//!
//! Replies are advisory input, not trusted data. Callers validate ids and
//! clamp scores before anything reaches assessment state, and a failure
//! anywhere in here never mutates that state.

mod gemini;
mod parser;
mod prompts;

pub use gemini::GeminiAdvisor;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::assessment::domain::Language;

#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    #[error("advisory gateway disabled: no API key configured")]
    Disabled,
    #[error("advisory request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("advisory API rejected the request ({code}): {message}")]
    Status { code: u16, message: String },
    #[error("advisory reply carried no text")]
    EmptyReply,
    #[error("advisory reply could not be parsed: {0}")]
    MalformedReply(String),
}

/// Author of one chat message. `Bot` covers everything the model said.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Bot,
}

/// One prior message of a chat conversation. History is caller-owned and
/// passed whole on every call; the gateway keeps nothing between calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

/// One per-objective entry proposed by the model during auto-assessment.
/// Raw as parsed: the id may be unknown and the score out of range. The
/// assessment service validates and clamps before applying.
#[derive(Debug, Clone, PartialEq)]
pub struct ProposedAssessment {
    pub id: String,
    pub score: f64,
    pub justification: String,
}

#[async_trait]
pub trait AdvisoryGateway: Send + Sync {
    /// Written expert advice for one objective, grounded in its critical
    /// factors and the evidence the user entered.
    async fn advice(
        &self,
        objective_name: &str,
        factors: &[&str],
        evidence: &str,
        language: Language,
    ) -> Result<String, AdvisorError>;

    /// Proposed scores and justifications for all objectives, derived from
    /// a free-text description of the provider's solution.
    async fn auto_assess(
        &self,
        description: &str,
        language: Language,
    ) -> Result<Vec<ProposedAssessment>, AdvisorError>;

    /// Describes an uploaded architecture diagram or screenshot.
    async fn describe_image(
        &self,
        data: &[u8],
        mime_type: &str,
        language: Language,
    ) -> Result<String, AdvisorError>;

    /// General framework Q&A over the caller-owned conversation history.
    async fn chat(
        &self,
        message: &str,
        history: &[ChatTurn],
        language: Language,
    ) -> Result<String, AdvisorError>;
}
