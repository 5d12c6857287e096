//! Pure scoring math: weighted composite, average maturity, and SEAL
//! lookup. No state, no formatting.

use std::collections::BTreeMap;

use super::catalog::{Objective, SealDefinition};
use super::domain::{clamp_level, ObjectiveId, MAX_SEAL_LEVEL};

/// Weighted composite in `[0, 100]`: each objective contributes its score
/// normalized to the 0-4 scale times its catalog weight. Objectives missing
/// from the score map contribute zero.
pub fn composite_score(scores: &BTreeMap<ObjectiveId, u8>, objectives: &[Objective]) -> f64 {
    objectives
        .iter()
        .map(|objective| {
            let score = scores.get(&objective.id).copied().unwrap_or(0);
            (f64::from(score) / f64::from(MAX_SEAL_LEVEL)) * objective.weight
        })
        .sum::<f64>()
        * 100.0
}

/// Arithmetic mean of the per-objective scores, in `[0, 4]`.
pub fn average_maturity(scores: &BTreeMap<ObjectiveId, u8>, objectives: &[Objective]) -> f64 {
    if objectives.is_empty() {
        return 0.0;
    }
    let total: u32 = objectives
        .iter()
        .map(|objective| u32::from(scores.get(&objective.id).copied().unwrap_or(0)))
        .sum();
    f64::from(total) / objectives.len() as f64
}

// Returned when a definitions slice carries neither the computed level nor
// a level-0 entry. The built-in catalogs always carry both.
static LEVEL_ZERO: SealDefinition = SealDefinition {
    level: 0,
    name: "No Sovereignty",
    description: "Exclusive control by non-EU third parties.",
};

/// Resolves a raw score to its SEAL definition: round, clamp, then look up.
/// Total over all real inputs; a definitions slice missing the computed
/// level degrades to its level-0 entry.
pub fn seal_for(score: f64, definitions: &[SealDefinition]) -> &SealDefinition {
    let level = clamp_level(score);
    definitions
        .iter()
        .find(|definition| definition.level == level)
        .or_else(|| definitions.iter().find(|definition| definition.level == 0))
        .unwrap_or(&LEVEL_ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::catalog::{objectives_for, seal_definitions_for};
    use crate::assessment::domain::Language;

    fn scores_from(values: [u8; 8]) -> BTreeMap<ObjectiveId, u8> {
        ObjectiveId::ordered().into_iter().zip(values).collect()
    }

    #[test]
    fn all_zero_scores_yield_zero_composite() {
        let objectives = objectives_for(Language::Es);
        let scores = scores_from([0; 8]);
        assert_eq!(composite_score(&scores, &objectives), 0.0);
    }

    #[test]
    fn all_top_scores_yield_full_composite() {
        let objectives = objectives_for(Language::Es);
        let scores = scores_from([4; 8]);
        let composite = composite_score(&scores, &objectives);
        assert!((composite - 100.0).abs() < 1e-9, "got {composite}");
    }

    #[test]
    fn composite_weights_objectives_individually() {
        // SOV-1 (0.15) and SOV-4 (0.15) at the top level, rest zero:
        // (1.0 * 0.15 + 1.0 * 0.15) * 100 = 30.0
        let objectives = objectives_for(Language::Es);
        let scores = scores_from([4, 0, 0, 4, 0, 0, 0, 0]);
        let composite = composite_score(&scores, &objectives);
        assert!((composite - 30.0).abs() < 1e-9, "got {composite}");
    }

    #[test]
    fn composite_is_monotone_in_each_score() {
        let objectives = objectives_for(Language::Es);
        for (index, id) in ObjectiveId::ordered().into_iter().enumerate() {
            let mut values = [1u8; 8];
            let base = composite_score(&scores_from(values), &objectives);
            values[index] = 2;
            let bumped = composite_score(&scores_from(values), &objectives);
            assert!(bumped > base, "raising {id} did not raise the composite");
        }
    }

    #[test]
    fn missing_scores_contribute_nothing() {
        let objectives = objectives_for(Language::Es);
        let mut scores = BTreeMap::new();
        scores.insert(ObjectiveId::Sov5, 4);
        let composite = composite_score(&scores, &objectives);
        assert!((composite - 20.0).abs() < 1e-9, "got {composite}");
    }

    #[test]
    fn average_maturity_is_the_plain_mean() {
        let objectives = objectives_for(Language::Es);
        let scores = scores_from([4, 0, 0, 4, 0, 0, 0, 0]);
        let average = average_maturity(&scores, &objectives);
        assert!((average - 1.0).abs() < 1e-9, "got {average}");
        assert_eq!(average_maturity(&BTreeMap::new(), &[]), 0.0);
    }

    #[test]
    fn seal_lookup_rounds_then_clamps() {
        let definitions = seal_definitions_for(Language::En);
        assert_eq!(seal_for(-5.0, &definitions).level, 0);
        assert_eq!(seal_for(2.0, &definitions).level, 2);
        assert_eq!(seal_for(2.4, &definitions).level, 2);
        assert_eq!(seal_for(3.5, &definitions).level, 4);
        assert_eq!(seal_for(4.9, &definitions).level, 4);
        assert_eq!(seal_for(f64::NAN, &definitions).level, 0);
    }

    #[test]
    fn seal_lookup_survives_a_gutted_scale() {
        let only_top = vec![SealDefinition {
            level: 4,
            name: "Total Digital Sovereignty",
            description: "Complete EU control.",
        }];
        // Level 2 is absent and so is level 0; the static floor steps in.
        assert_eq!(seal_for(2.0, &only_top).level, 0);
        assert_eq!(seal_for(2.0, &[]).level, 0);
        assert_eq!(seal_for(4.0, &only_top).level, 4);
    }
}
