use crate::cli::ServeArgs;
use crate::infra::{load_seed, AppState, InMemoryCandidateRepository, InMemoryJobRepository};
use crate::routes::with_match_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use govjob_match::config::AppConfig;
use govjob_match::eligibility::MatchService;
use govjob_match::error::AppError;
use govjob_match::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

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

    let seed = load_seed(args.seed.as_deref())?;
    let candidates = Arc::new(InMemoryCandidateRepository::seeded(seed.candidates));
    let jobs = Arc::new(InMemoryJobRepository::seeded(seed.jobs));
    info!(
        candidates = candidates.len(),
        jobs = jobs.len(),
        "loaded match catalog"
    );

    let match_service = Arc::new(MatchService::new(candidates, jobs, &config.matching));

    let app = with_match_routes(match_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "job match service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
