use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use sovereignty_ai::advisor::GeminiAdvisor;
use sovereignty_ai::assessment::AssessmentService;
use sovereignty_ai::config::AppConfig;
use sovereignty_ai::error::AppError;
use sovereignty_ai::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    if config.advisor.api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; advisory endpoints will answer 503");
    }
    let advisor = GeminiAdvisor::new(config.advisor.clone())?;
    let assessment_service = Arc::new(AssessmentService::new(
        Arc::new(advisor),
        config.assessment.language,
    ));

    let app = with_assessment_routes(assessment_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "cloud sovereignty assessor ready");

    axum::serve(listener, app).await?;
    Ok(())
}
