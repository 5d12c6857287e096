use clap::Args;
use serde::Deserialize;
use sovereignty_ai::assessment::{
    catalog_for, composite_score, format_report, i18n, seal_definitions_for, seal_for,
    AssessmentState, Language, ObjectiveId, MAX_SEAL_LEVEL,
};
use sovereignty_ai::error::AppError;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Demo language ('es' or 'en')
    #[arg(long, default_value = "es", value_parser = crate::infra::parse_language)]
    pub(crate) lang: Language,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Report language ('es' or 'en')
    #[arg(long, default_value = "es", value_parser = crate::infra::parse_language)]
    pub(crate) lang: Language,
    /// Inline score as ID=LEVEL, e.g. --score SOV-1=3 (repeatable)
    #[arg(long = "score", value_parser = crate::infra::parse_score_pair)]
    pub(crate) scores: Vec<(ObjectiveId, f64)>,
    /// Path to a JSON session file with scores and notes keyed by objective id
    #[arg(long, conflicts_with = "scores")]
    pub(crate) input: Option<PathBuf>,
}

/// On-disk session shape accepted by the report command. Levels are
/// clamped like every other write path; unknown ids fail the run
/// instead of being dropped.
#[derive(Debug, Deserialize)]
struct SessionFile {
    #[serde(default)]
    scores: BTreeMap<String, f64>,
    #[serde(default)]
    notes: BTreeMap<String, String>,
}

pub(crate) fn run_assessment_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        lang,
        scores,
        input,
    } = args;

    let mut state = AssessmentState::new(lang);
    if let Some(path) = input {
        let raw = std::fs::read_to_string(&path)?;
        let session: SessionFile = serde_json::from_str(&raw).map_err(|err| {
            AppError::InvalidInput(format!("failed to parse session file: {err}"))
        })?;
        apply_session(&mut state, session)?;
    } else {
        for (id, level) in scores {
            state.set_score(id, level);
        }
    }

    println!("{}", render_report(&state));
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { lang } = args;

    println!("Cloud sovereignty assessment demo");

    let mut state = AssessmentState::new(lang);
    for (id, level) in demo_profile() {
        state.set_score(id, level);
    }
    state.set_note(ObjectiveId::Sov1, "EU parent entity with an EU board.");
    state.set_note(
        ObjectiveId::Sov5,
        "Hypervisor licensed from a non-EU vendor.",
    );

    let labels = i18n::labels_for(state.language());
    let seal_definitions = seal_definitions_for(state.language());
    let snapshot = state.snapshot();

    println!();
    for row in &snapshot.rows {
        println!(
            "- {} [{}] {} | {:.0}% | SEAL-{} {}",
            labels.objective,
            row.id,
            row.name,
            row.weight * 100.0,
            row.seal_level,
            row.seal_name
        );
    }

    println!(
        "\n{}: {:.1}%",
        labels.global_score, snapshot.composite_score
    );
    let seal = seal_for(snapshot.average_maturity, &seal_definitions);
    println!(
        "{}: {:.1} / {} (SEAL-{}: {})",
        labels.average_maturity, snapshot.average_maturity, MAX_SEAL_LEVEL, seal.level, seal.name
    );

    println!("\n{}", labels.seal_guide);
    for definition in &seal_definitions {
        println!(
            "- SEAL-{} {}: {}",
            definition.level, definition.name, definition.description
        );
    }

    println!("\n{}", render_report(&state));
    Ok(())
}

fn demo_profile() -> [(ObjectiveId, f64); 8] {
    [
        (ObjectiveId::Sov1, 3.0),
        (ObjectiveId::Sov2, 2.0),
        (ObjectiveId::Sov3, 2.0),
        (ObjectiveId::Sov4, 3.0),
        (ObjectiveId::Sov5, 1.0),
        (ObjectiveId::Sov6, 2.0),
        (ObjectiveId::Sov7, 3.0),
        (ObjectiveId::Sov8, 2.0),
    ]
}

fn apply_session(state: &mut AssessmentState, session: SessionFile) -> Result<(), AppError> {
    for (id, level) in session.scores {
        let id = ObjectiveId::parse(&id).ok_or_else(|| {
            AppError::InvalidInput(format!("unknown objective id '{id}' in session scores"))
        })?;
        state.set_score(id, level);
    }
    for (id, note) in session.notes {
        let id = ObjectiveId::parse(&id).ok_or_else(|| {
            AppError::InvalidInput(format!("unknown objective id '{id}' in session notes"))
        })?;
        state.set_note(id, note);
    }
    Ok(())
}

fn render_report(state: &AssessmentState) -> String {
    let labels = i18n::labels_for(state.language());
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
