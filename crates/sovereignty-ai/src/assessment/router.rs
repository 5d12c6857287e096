use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use base64::{engine::general_purpose, Engine as _};
use serde::Deserialize;
use serde_json::json;

use super::catalog::catalog_for;
use super::domain::{Language, ObjectiveId};
use super::i18n::labels_for;
use super::service::AssessmentService;
use crate::advisor::{AdvisorError, AdvisoryGateway, ChatTurn};

/// Router builder exposing the assessment session and the advisory
/// endpoints.
pub fn assessment_router<G>(service: Arc<AssessmentService<G>>) -> Router
where
    G: AdvisoryGateway + 'static,
{
    Router::new()
        .route("/api/v1/catalog", get(catalog_handler))
        .route("/api/v1/assessment", get(snapshot_handler::<G>))
        .route("/api/v1/assessment/score", put(score_handler::<G>))
        .route("/api/v1/assessment/note", put(note_handler::<G>))
        .route("/api/v1/assessment/language", post(language_handler::<G>))
        .route("/api/v1/assessment/reset", post(reset_handler::<G>))
        .route("/api/v1/assessment/report", get(report_handler::<G>))
        .route("/api/v1/assessment/auto", post(auto_assess_handler::<G>))
        .route("/api/v1/advice", post(advice_handler::<G>))
        .route("/api/v1/image/describe", post(describe_image_handler::<G>))
        .route("/api/v1/chat", post(chat_handler::<G>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct CatalogQuery {
    lang: Option<String>,
}

pub(crate) async fn catalog_handler(Query(query): Query<CatalogQuery>) -> Response {
    let language = query
        .lang
        .as_deref()
        .map(Language::from_code)
        .unwrap_or_default();
    let (objectives, seal_definitions) = catalog_for(language);
    let payload = json!({
        "language": language,
        "objectives": objectives,
        "seal_definitions": seal_definitions,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn snapshot_handler<G>(
    State(service): State<Arc<AssessmentService<G>>>,
) -> Response
where
    G: AdvisoryGateway + 'static,
{
    (StatusCode::OK, axum::Json(service.snapshot())).into_response()
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    id: ObjectiveId,
    score: f64,
}

pub(crate) async fn score_handler<G>(
    State(service): State<Arc<AssessmentService<G>>>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response
where
    G: AdvisoryGateway + 'static,
{
    service.set_score(request.id, request.score);
    (StatusCode::OK, axum::Json(service.snapshot())).into_response()
}

#[derive(Debug, Deserialize)]
pub(crate) struct NoteRequest {
    id: ObjectiveId,
    note: String,
}

pub(crate) async fn note_handler<G>(
    State(service): State<Arc<AssessmentService<G>>>,
    axum::Json(request): axum::Json<NoteRequest>,
) -> Response
where
    G: AdvisoryGateway + 'static,
{
    service.set_note(request.id, request.note);
    (StatusCode::OK, axum::Json(service.snapshot())).into_response()
}

#[derive(Debug, Deserialize)]
pub(crate) struct LanguageRequest {
    lang: String,
}

pub(crate) async fn language_handler<G>(
    State(service): State<Arc<AssessmentService<G>>>,
    axum::Json(request): axum::Json<LanguageRequest>,
) -> Response
where
    G: AdvisoryGateway + 'static,
{
    service.switch_language(Language::from_code(&request.lang));
    (StatusCode::OK, axum::Json(service.snapshot())).into_response()
}

pub(crate) async fn reset_handler<G>(State(service): State<Arc<AssessmentService<G>>>) -> Response
where
    G: AdvisoryGateway + 'static,
{
    service.reset();
    (StatusCode::OK, axum::Json(service.snapshot())).into_response()
}

pub(crate) async fn report_handler<G>(State(service): State<Arc<AssessmentService<G>>>) -> Response
where
    G: AdvisoryGateway + 'static,
{
    let report = service.report_text();
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        report,
    )
        .into_response()
}

#[derive(Debug, Deserialize)]
pub(crate) struct AdviceRequest {
    id: ObjectiveId,
}

pub(crate) async fn advice_handler<G>(
    State(service): State<Arc<AssessmentService<G>>>,
    axum::Json(request): axum::Json<AdviceRequest>,
) -> Response
where
    G: AdvisoryGateway + 'static,
{
    match service.advice(request.id).await {
        Ok(result) => {
            let payload = json!({
                "objective": result.objective,
                "advice": result.text,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => advisory_error_response(service.language(), error),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AutoAssessRequest {
    description: String,
}

pub(crate) async fn auto_assess_handler<G>(
    State(service): State<Arc<AssessmentService<G>>>,
    axum::Json(request): axum::Json<AutoAssessRequest>,
) -> Response
where
    G: AdvisoryGateway + 'static,
{
    match service.auto_assess(&request.description).await {
        Ok(applied) => {
            let snapshot = service.snapshot();
            let payload = json!({
                "applied": applied,
                "composite_score": snapshot.composite_score,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => advisory_error_response(service.language(), error),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DescribeImageRequest {
    mime_type: String,
    data_base64: String,
}

pub(crate) async fn describe_image_handler<G>(
    State(service): State<Arc<AssessmentService<G>>>,
    axum::Json(request): axum::Json<DescribeImageRequest>,
) -> Response
where
    G: AdvisoryGateway + 'static,
{
    let data = match general_purpose::STANDARD.decode(&request.data_base64) {
        Ok(data) => data,
        Err(error) => {
            let payload = json!({
                "error": format!("invalid base64 image payload: {error}"),
            });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };

    match service.describe_image(&data, &request.mime_type).await {
        Ok(description) => {
            let payload = json!({ "description": description });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => advisory_error_response(service.language(), error),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatRequest {
    message: String,
    #[serde(default)]
    history: Vec<ChatTurn>,
}

pub(crate) async fn chat_handler<G>(
    State(service): State<Arc<AssessmentService<G>>>,
    axum::Json(request): axum::Json<ChatRequest>,
) -> Response
where
    G: AdvisoryGateway + 'static,
{
    match service.chat(&request.message, &request.history).await {
        Ok(reply) => {
            let payload = json!({ "reply": reply });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => advisory_error_response(service.language(), error),
    }
}

/// Gateway failures never change session state. The body carries the
/// localized generic message plus the technical detail; a disabled
/// gateway answers 503, anything else 502.
fn advisory_error_response(language: Language, error: AdvisorError) -> Response {
    let labels = labels_for(language);
    let status = match &error {
        AdvisorError::Disabled => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::BAD_GATEWAY,
    };
    let payload = json!({
        "error": labels.advisor_error,
        "detail": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
