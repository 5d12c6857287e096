//! EU cloud sovereignty self-assessment engine.
//!
//! The [`assessment`] module owns the localized objective and SEAL catalogs,
//! the session-scoped assessment state, the weighted scoring arithmetic, and
//! the plain-text report export. The [`advisor`] module is the boundary to a
//! hosted language model used for written advice, auto-filled assessments,
//! diagram descriptions, and chat replies; everything ingested from it is
//! validated and clamped before it touches assessment state.

pub mod advisor;
pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
