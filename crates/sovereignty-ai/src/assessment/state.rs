use std::collections::BTreeMap;

use super::catalog::catalog_for;
use super::domain::{clamp_level, Language, ObjectiveId};
use super::scoring::{average_maturity, composite_score, seal_for};
use super::views::{AssessmentSnapshot, ObjectiveRowView, RadarPointView};

/// One in-memory assessment session: the selected catalog language plus
/// per-objective scores and evidence notes.
///
/// Scores and notes are keyed by [`ObjectiveId`], which is identical in
/// every language, so switching the catalog language never touches them.
/// Every write replaces the whole entry for its id; concurrent writers
/// therefore resolve as last-completed-write-wins.
#[derive(Debug)]
pub struct AssessmentState {
    language: Language,
    scores: BTreeMap<ObjectiveId, u8>,
    notes: BTreeMap<ObjectiveId, String>,
}

impl AssessmentState {
    /// Fresh session: every objective at level 0 with an empty note.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            scores: ObjectiveId::ordered().into_iter().map(|id| (id, 0)).collect(),
            notes: ObjectiveId::ordered()
                .into_iter()
                .map(|id| (id, String::new()))
                .collect(),
        }
    }

    /// Stores a score, rounding and clamping the raw value into `[0, 4]`
    /// first. Returns the accepted level.
    pub fn set_score(&mut self, id: ObjectiveId, raw: f64) -> u8 {
        let level = clamp_level(raw);
        self.scores.insert(id, level);
        level
    }

    pub fn set_note(&mut self, id: ObjectiveId, note: impl Into<String>) {
        self.notes.insert(id, note.into());
    }

    pub fn score(&self, id: ObjectiveId) -> u8 {
        self.scores.get(&id).copied().unwrap_or(0)
    }

    pub fn note(&self, id: ObjectiveId) -> &str {
        self.notes.get(&id).map(String::as_str).unwrap_or("")
    }

    pub fn scores(&self) -> &BTreeMap<ObjectiveId, u8> {
        &self.scores
    }

    pub fn notes(&self) -> &BTreeMap<ObjectiveId, String> {
        &self.notes
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Changes the catalog language. Scores and notes stay as they are.
    pub fn switch_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Returns the session to its freshly created shape.
    pub fn reset(&mut self) {
        let language = self.language;
        *self = Self::new(language);
    }

    /// Assembles the full presentation view: localized rows, radar spokes,
    /// composite score, and average maturity.
    pub fn snapshot(&self) -> AssessmentSnapshot {
        let (objectives, seal_definitions) = catalog_for(self.language);
        let composite = composite_score(&self.scores, &objectives);
        let average = average_maturity(&self.scores, &objectives);

        let mut rows = Vec::with_capacity(objectives.len());
        let mut radar = Vec::with_capacity(objectives.len());
        for objective in objectives {
            let score = self.score(objective.id);
            let seal = seal_for(f64::from(score), &seal_definitions);
            radar.push(RadarPointView::new(objective.id, objective.name, score));
            rows.push(ObjectiveRowView {
                id: objective.id,
                name: objective.name,
                weight: objective.weight,
                description: objective.description,
                factors: objective.factors,
                score,
                seal_level: seal.level,
                seal_name: seal.name,
                note: self.note(objective.id).to_owned(),
            });
        }

        AssessmentSnapshot {
            language: self.language,
            composite_score: composite,
            average_maturity: average,
            rows,
            radar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_starts_at_level_zero() {
        let state = AssessmentState::new(Language::Es);
        for id in ObjectiveId::ordered() {
            assert_eq!(state.score(id), 0);
            assert_eq!(state.note(id), "");
        }
    }

    #[test]
    fn set_score_rounds_and_clamps() {
        let mut state = AssessmentState::new(Language::Es);
        assert_eq!(state.set_score(ObjectiveId::Sov1, 2.4), 2);
        assert_eq!(state.set_score(ObjectiveId::Sov2, 7.0), 4);
        assert_eq!(state.set_score(ObjectiveId::Sov3, -3.0), 0);
        assert_eq!(state.score(ObjectiveId::Sov1), 2);
        assert_eq!(state.score(ObjectiveId::Sov2), 4);
        assert_eq!(state.score(ObjectiveId::Sov3), 0);
    }

    #[test]
    fn language_switch_preserves_scores_and_notes() {
        let mut state = AssessmentState::new(Language::Es);
        state.set_score(ObjectiveId::Sov1, 3.0);
        state.set_note(ObjectiveId::Sov1, "Sede y dirección en la UE.");

        state.switch_language(Language::En);

        assert_eq!(state.language(), Language::En);
        assert_eq!(state.score(ObjectiveId::Sov1), 3);
        assert_eq!(state.note(ObjectiveId::Sov1), "Sede y dirección en la UE.");
    }

    #[test]
    fn reset_returns_to_the_fresh_shape() {
        let mut state = AssessmentState::new(Language::En);
        state.set_score(ObjectiveId::Sov5, 4.0);
        state.set_note(ObjectiveId::Sov5, "EU-fabricated hardware.");

        state.reset();

        assert_eq!(state.language(), Language::En);
        assert_eq!(state.score(ObjectiveId::Sov5), 0);
        assert_eq!(state.note(ObjectiveId::Sov5), "");
    }

    #[test]
    fn snapshot_rows_follow_catalog_order_and_language() {
        let mut state = AssessmentState::new(Language::En);
        state.set_score(ObjectiveId::Sov3, 2.0);

        let snapshot = state.snapshot();

        assert_eq!(snapshot.rows.len(), 8);
        assert_eq!(snapshot.radar.len(), 8);
        for (row, expected) in snapshot.rows.iter().zip(ObjectiveId::ordered()) {
            assert_eq!(row.id, expected);
        }
        let sov3 = &snapshot.rows[2];
        assert_eq!(sov3.name, "Data and AI Sovereignty");
        assert_eq!(sov3.score, 2);
        assert_eq!(sov3.seal_level, 2);
        assert_eq!(sov3.seal_name, "Data Sovereignty");
        assert_eq!(snapshot.radar[2].full_mark, 4);
    }
}
