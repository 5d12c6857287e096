//! Deterministic plain-text export of an assessment. The output is the
//! clipboard/print payload, so identical input must produce identical
//! bytes. All strings arrive pre-localized; this module does no lookup
//! of its own.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use super::catalog::{Objective, SealDefinition};
use super::domain::ObjectiveId;
use super::scoring::seal_for;

const SEPARATOR_WIDTH: usize = 60;
const EMPTY_NOTE_PLACEHOLDER: &str = "---";

#[allow(clippy::too_many_arguments)]
pub fn format_report(
    title: &str,
    subtitle: &str,
    composite: f64,
    objectives: &[Objective],
    scores: &BTreeMap<ObjectiveId, u8>,
    notes: &BTreeMap<ObjectiveId, String>,
    seal_definitions: &[SealDefinition],
) -> String {
    let mut report = String::new();

    writeln!(&mut report, "{title}").expect("write title");
    writeln!(&mut report, "{subtitle}").expect("write subtitle");
    writeln!(&mut report, "{}", "=".repeat(SEPARATOR_WIDTH)).expect("write separator");
    writeln!(&mut report, "Total: {composite:.1}%").expect("write total");
    report.push('\n');

    for objective in objectives {
        let score = scores.get(&objective.id).copied().unwrap_or(0);
        let seal = seal_for(f64::from(score), seal_definitions);
        let note = notes
            .get(&objective.id)
            .map(String::as_str)
            .filter(|text| !text.trim().is_empty())
            .unwrap_or(EMPTY_NOTE_PLACEHOLDER);

        writeln!(&mut report, "[{}] {}", objective.id, objective.name).expect("write objective");
        writeln!(&mut report, "SEAL-{}: {}", seal.level, seal.name).expect("write seal");
        writeln!(&mut report, "{note}").expect("write note");
        report.push('\n');
    }

    report
}
