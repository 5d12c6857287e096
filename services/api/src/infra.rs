use metrics_exporter_prometheus::PrometheusHandle;
use sovereignty_ai::assessment::{Language, ObjectiveId};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_language(raw: &str) -> Result<Language, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "es" => Ok(Language::Es),
        "en" => Ok(Language::En),
        _ => Err(format!("unsupported language '{raw}' (expected 'es' or 'en')")),
    }
}

pub(crate) fn parse_score_pair(raw: &str) -> Result<(ObjectiveId, f64), String> {
    let (id, level) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ID=LEVEL, got '{raw}'"))?;
    let id = ObjectiveId::parse(id)
        .ok_or_else(|| format!("unknown objective id '{}'", id.trim()))?;
    let level = level
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("failed to parse '{level}' as a level ({err})"))?;
    Ok((id, level))
}
