//! The assessment core: localized catalogs for the eight sovereignty
//! objectives, the single-session state with clamped scoring, the
//! weighted composite engine, the deterministic report exporter, and the
//! HTTP router over all of it.

pub mod catalog;
pub mod domain;
pub mod i18n;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;
pub mod state;
pub mod views;

#[cfg(test)]
mod tests;

pub use catalog::{
    catalog_for, objective_for, objectives_for, seal_definitions_for, Objective, SealDefinition,
};
pub use domain::{clamp_level, Language, ObjectiveId, MAX_SEAL_LEVEL};
pub use report::format_report;
pub use router::assessment_router;
pub use scoring::{average_maturity, composite_score, seal_for};
pub use service::{AdviceResult, AppliedAssessment, AssessmentService};
pub use state::AssessmentState;
pub use views::{AssessmentSnapshot, ObjectiveRowView, RadarPointView};
