use serde::Serialize;

use super::domain::{Language, ObjectiveId, MAX_SEAL_LEVEL};

/// One objective row of the assessment snapshot: catalog text in the
/// session language plus the session's score, resolved seal, and note.
#[derive(Debug, Clone, Serialize)]
pub struct ObjectiveRowView {
    pub id: ObjectiveId,
    pub name: &'static str,
    pub weight: f64,
    pub description: &'static str,
    pub factors: Vec<&'static str>,
    pub score: u8,
    pub seal_level: u8,
    pub seal_name: &'static str,
    pub note: String,
}

/// One spoke of the radar chart. `subject` is the objective id so the
/// chart axis stays language-invariant.
#[derive(Debug, Clone, Serialize)]
pub struct RadarPointView {
    pub subject: ObjectiveId,
    pub name: &'static str,
    pub score: u8,
    pub full_mark: u8,
}

impl RadarPointView {
    pub fn new(subject: ObjectiveId, name: &'static str, score: u8) -> Self {
        Self {
            subject,
            name,
            score,
            full_mark: MAX_SEAL_LEVEL,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSnapshot {
    pub language: Language,
    pub composite_score: f64,
    pub average_maturity: f64,
    pub rows: Vec<ObjectiveRowView>,
    pub radar: Vec<RadarPointView>,
}
