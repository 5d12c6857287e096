//! Session service composing the assessment state with the injected
//! advisory gateway. One instance owns one session.

use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;

use super::catalog::{catalog_for, objective_for};
use super::domain::{Language, ObjectiveId};
use super::i18n::labels_for;
use super::report::format_report;
use super::scoring::composite_score;
use super::state::AssessmentState;
use super::views::AssessmentSnapshot;
use crate::advisor::{AdvisorError, AdvisoryGateway, ChatTurn};

/// Advice returned for one objective: the localized objective name the
/// advice was asked about plus the model's written analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AdviceResult {
    pub objective: &'static str,
    pub text: String,
}

/// One accepted auto-assessment row after id validation and score
/// clamping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppliedAssessment {
    pub id: ObjectiveId,
    pub score: u8,
    pub justification: String,
}

/// The gateway is injected once and shared; session state lives behind a
/// single lock which is never held across an await. Advisory calls that
/// fail leave the session untouched.
pub struct AssessmentService<G> {
    state: Mutex<AssessmentState>,
    gateway: Arc<G>,
}

impl<G> AssessmentService<G>
where
    G: AdvisoryGateway + 'static,
{
    pub fn new(gateway: Arc<G>, language: Language) -> Self {
        Self {
            state: Mutex::new(AssessmentState::new(language)),
            gateway,
        }
    }

    fn state(&self) -> MutexGuard<'_, AssessmentState> {
        self.state.lock().expect("assessment state mutex poisoned")
    }

    /// Stores a score, clamped and rounded into `[0, 4]`. Returns the
    /// accepted level.
    pub fn set_score(&self, id: ObjectiveId, raw: f64) -> u8 {
        self.state().set_score(id, raw)
    }

    pub fn set_note(&self, id: ObjectiveId, note: impl Into<String>) {
        self.state().set_note(id, note);
    }

    pub fn switch_language(&self, language: Language) {
        self.state().switch_language(language);
    }

    pub fn reset(&self) {
        self.state().reset();
    }

    pub fn language(&self) -> Language {
        self.state().language()
    }

    pub fn snapshot(&self) -> AssessmentSnapshot {
        self.state().snapshot()
    }

    /// Renders the plain-text export for the session in its current
    /// language.
    pub fn report_text(&self) -> String {
        let state = self.state();
        let labels = labels_for(state.language());
        let (objectives, seal_definitions) = catalog_for(state.language());
        let composite = composite_score(state.scores(), &objectives);
        format_report(
            labels.report_title,
            labels.report_subtitle,
            composite,
            &objectives,
            state.scores(),
            state.notes(),
            &seal_definitions,
        )
    }

    /// Asks the gateway for written advice on one objective, grounding the
    /// prompt in the objective's critical factors and the stored evidence
    /// note. Read-only with respect to session state.
    pub async fn advice(&self, id: ObjectiveId) -> Result<AdviceResult, AdvisorError> {
        let (language, objective, evidence) = {
            let state = self.state();
            let language = state.language();
            (
                language,
                objective_for(language, id),
                state.note(id).to_owned(),
            )
        };

        let text = self
            .gateway
            .advice(objective.name, &objective.factors, &evidence, language)
            .await?;
        Ok(AdviceResult {
            objective: objective.name,
            text,
        })
    }

    /// Fills the assessment from a free-text solution description. The
    /// gateway's proposals are validated (unknown ids dropped with a
    /// warning) and clamped, then applied in one batch under the state
    /// lock; a non-empty justification replaces the evidence note. Any
    /// gateway or parse failure returns before the lock is taken, so the
    /// session never observes a partial reply.
    pub async fn auto_assess(
        &self,
        description: &str,
    ) -> Result<Vec<AppliedAssessment>, AdvisorError> {
        let language = self.language();
        let proposals = self.gateway.auto_assess(description, language).await?;

        let mut state = self.state();
        let mut applied = Vec::with_capacity(proposals.len());
        for proposal in proposals {
            let Some(id) = ObjectiveId::parse(&proposal.id) else {
                tracing::warn!(id = %proposal.id, "ignoring auto-assessment for unknown objective");
                continue;
            };
            let score = state.set_score(id, proposal.score);
            if !proposal.justification.trim().is_empty() {
                state.set_note(id, proposal.justification.clone());
            }
            applied.push(AppliedAssessment {
                id,
                score,
                justification: proposal.justification,
            });
        }
        Ok(applied)
    }

    /// Describes an uploaded image in the session language.
    pub async fn describe_image(
        &self,
        data: &[u8],
        mime_type: &str,
    ) -> Result<String, AdvisorError> {
        let language = self.language();
        self.gateway.describe_image(data, mime_type, language).await
    }

    /// One chat turn. The history is caller-owned; the service only adds
    /// the session language.
    pub async fn chat(&self, message: &str, history: &[ChatTurn]) -> Result<String, AdvisorError> {
        let language = self.language();
        self.gateway.chat(message, history, language).await
    }
}
