use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{CandidateId, CandidateProfile, JobId, JobRequirement};
use super::recommend::Recommendation;
use super::repository::{CandidateRepository, JobRepository};
use super::service::{MatchService, MatchServiceError};

/// Inline scoring payload for callers that already hold both records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub candidate: CandidateProfile,
    pub job: JobRequirement,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct EvaluationDateQuery {
    #[serde(default)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RecommendationQuery {
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    #[serde(default)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsView {
    pub candidate_id: CandidateId,
    pub evaluated_on: NaiveDate,
    pub recommendations: Vec<Recommendation>,
}

/// Router builder exposing scoring, checklist, and recommendation endpoints.
pub fn match_router<C, J>(service: Arc<MatchService<C, J>>) -> Router
where
    C: CandidateRepository + 'static,
    J: JobRepository + 'static,
{
    Router::new()
        .route("/api/v1/eligibility/score", post(score_handler::<C, J>))
        .route(
            "/api/v1/candidates/:candidate_id/jobs/:job_id/match",
            get(match_handler::<C, J>),
        )
        .route(
            "/api/v1/candidates/:candidate_id/jobs/:job_id/checklist",
            get(checklist_handler::<C, J>),
        )
        .route(
            "/api/v1/candidates/:candidate_id/recommendations",
            get(recommendations_handler::<C, J>),
        )
        .with_state(service)
}

fn resolve_today(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| Local::now().date_naive())
}

pub(crate) async fn score_handler<C, J>(
    State(service): State<Arc<MatchService<C, J>>>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response
where
    C: CandidateRepository + 'static,
    J: JobRepository + 'static,
{
    let today = resolve_today(request.today);
    let result = service.score(&request.candidate, &request.job, today);
    (StatusCode::OK, axum::Json(result)).into_response()
}

pub(crate) async fn match_handler<C, J>(
    State(service): State<Arc<MatchService<C, J>>>,
    Path((candidate_id, job_id)): Path<(String, String)>,
    Query(query): Query<EvaluationDateQuery>,
) -> Response
where
    C: CandidateRepository + 'static,
    J: JobRepository + 'static,
{
    let today = resolve_today(query.today);
    match service.evaluate(&CandidateId(candidate_id), &JobId(job_id), today) {
        Ok(result) => (StatusCode::OK, axum::Json(result)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn checklist_handler<C, J>(
    State(service): State<Arc<MatchService<C, J>>>,
    Path((candidate_id, job_id)): Path<(String, String)>,
    Query(query): Query<EvaluationDateQuery>,
) -> Response
where
    C: CandidateRepository + 'static,
    J: JobRepository + 'static,
{
    let today = resolve_today(query.today);
    match service.checklist(&CandidateId(candidate_id), &JobId(job_id), today) {
        Ok(checklist) => (StatusCode::OK, axum::Json(checklist)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn recommendations_handler<C, J>(
    State(service): State<Arc<MatchService<C, J>>>,
    Path(candidate_id): Path<String>,
    Query(query): Query<RecommendationQuery>,
) -> Response
where
    C: CandidateRepository + 'static,
    J: JobRepository + 'static,
{
    let today = resolve_today(query.today);
    let candidate_id = CandidateId(candidate_id);
    match service.recommendations(&candidate_id, query.limit, today) {
        Ok(recommendations) => {
            let view = RecommendationsView {
                candidate_id,
                evaluated_on: today,
                recommendations,
            };
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

fn error_response(error: MatchServiceError) -> Response {
    let status = if error.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
