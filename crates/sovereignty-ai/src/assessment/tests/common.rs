use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::advisor::{AdvisorError, AdvisoryGateway, ChatTurn, ProposedAssessment};
use crate::assessment::domain::Language;
use crate::assessment::router::assessment_router;
use crate::assessment::service::AssessmentService;

#[derive(Debug, Clone)]
pub(super) struct RecordedAdviceCall {
    pub(super) objective: String,
    pub(super) evidence: String,
    pub(super) language: Language,
}

/// Gateway double returning canned replies and recording what it was
/// asked.
#[derive(Default)]
pub(super) struct CannedAdvisor {
    pub(super) advice_reply: String,
    pub(super) proposals: Vec<ProposedAssessment>,
    pub(super) image_reply: String,
    pub(super) chat_reply: String,
    pub(super) advice_calls: Mutex<Vec<RecordedAdviceCall>>,
    pub(super) auto_calls: Mutex<Vec<String>>,
    pub(super) chat_calls: Mutex<Vec<(String, usize, Language)>>,
}

#[async_trait]
impl AdvisoryGateway for CannedAdvisor {
    async fn advice(
        &self,
        objective_name: &str,
        _factors: &[&str],
        evidence: &str,
        language: Language,
    ) -> Result<String, AdvisorError> {
        self.advice_calls
            .lock()
            .expect("advice call mutex poisoned")
            .push(RecordedAdviceCall {
                objective: objective_name.to_owned(),
                evidence: evidence.to_owned(),
                language,
            });
        Ok(self.advice_reply.clone())
    }

    async fn auto_assess(
        &self,
        description: &str,
        _language: Language,
    ) -> Result<Vec<ProposedAssessment>, AdvisorError> {
        self.auto_calls
            .lock()
            .expect("auto call mutex poisoned")
            .push(description.to_owned());
        Ok(self.proposals.clone())
    }

    async fn describe_image(
        &self,
        _data: &[u8],
        _mime_type: &str,
        _language: Language,
    ) -> Result<String, AdvisorError> {
        Ok(self.image_reply.clone())
    }

    async fn chat(
        &self,
        message: &str,
        history: &[ChatTurn],
        language: Language,
    ) -> Result<String, AdvisorError> {
        self.chat_calls
            .lock()
            .expect("chat call mutex poisoned")
            .push((message.to_owned(), history.len(), language));
        Ok(self.chat_reply.clone())
    }
}

#[derive(Debug, Clone, Copy)]
pub(super) enum FailureMode {
    Disabled,
    Status,
    Malformed,
}

/// Gateway double failing every operation the same way.
pub(super) struct FailingAdvisor {
    pub(super) mode: FailureMode,
}

impl FailingAdvisor {
    fn error(&self) -> AdvisorError {
        match self.mode {
            FailureMode::Disabled => AdvisorError::Disabled,
            FailureMode::Status => AdvisorError::Status {
                code: 503,
                message: "upstream unavailable".to_string(),
            },
            FailureMode::Malformed => {
                AdvisorError::MalformedReply("expected the assessments envelope".to_string())
            }
        }
    }
}

#[async_trait]
impl AdvisoryGateway for FailingAdvisor {
    async fn advice(
        &self,
        _objective_name: &str,
        _factors: &[&str],
        _evidence: &str,
        _language: Language,
    ) -> Result<String, AdvisorError> {
        Err(self.error())
    }

    async fn auto_assess(
        &self,
        _description: &str,
        _language: Language,
    ) -> Result<Vec<ProposedAssessment>, AdvisorError> {
        Err(self.error())
    }

    async fn describe_image(
        &self,
        _data: &[u8],
        _mime_type: &str,
        _language: Language,
    ) -> Result<String, AdvisorError> {
        Err(self.error())
    }

    async fn chat(
        &self,
        _message: &str,
        _history: &[ChatTurn],
        _language: Language,
    ) -> Result<String, AdvisorError> {
        Err(self.error())
    }
}

pub(super) fn proposal(id: &str, score: f64, justification: &str) -> ProposedAssessment {
    ProposedAssessment {
        id: id.to_string(),
        score,
        justification: justification.to_string(),
    }
}

pub(super) fn canned_service(
    gateway: CannedAdvisor,
) -> (Arc<AssessmentService<CannedAdvisor>>, Arc<CannedAdvisor>) {
    let gateway = Arc::new(gateway);
    let service = Arc::new(AssessmentService::new(gateway.clone(), Language::Es));
    (service, gateway)
}

pub(super) fn failing_service(mode: FailureMode) -> Arc<AssessmentService<FailingAdvisor>> {
    Arc::new(AssessmentService::new(
        Arc::new(FailingAdvisor { mode }),
        Language::Es,
    ))
}

pub(super) fn router_with_canned(gateway: CannedAdvisor) -> axum::Router {
    let (service, _) = canned_service(gateway);
    assessment_router(service)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn read_text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf-8 payload")
}
