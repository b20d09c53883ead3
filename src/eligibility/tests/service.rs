use super::common::*;
use crate::eligibility::domain::{CandidateId, JobId};
use crate::eligibility::engine::{MatchEngine, ScoringConfig};
use crate::eligibility::repository::RepositoryError;
use crate::eligibility::service::{MatchService, MatchServiceError};
use crate::eligibility::{recommend, Recommendation};
use std::sync::Arc;

fn ids(recommendations: &[Recommendation]) -> Vec<&str> {
    recommendations
        .iter()
        .map(|recommendation| recommendation.job_id.0.as_str())
        .collect()
}

#[test]
fn evaluate_scores_stored_records() {
    let service = build_service();

    let result = service
        .evaluate(
            &CandidateId("cand-1".to_string()),
            &JobId("maharashtra".to_string()),
            today(),
        )
        .expect("evaluation succeeds");

    assert!(result.is_eligible);
    assert_eq!(result.score, 70);
}

#[test]
fn evaluate_reports_missing_candidate_and_job() {
    let service = build_service();

    match service.evaluate(
        &CandidateId("ghost".to_string()),
        &JobId("nationwide".to_string()),
        today(),
    ) {
        Err(MatchServiceError::CandidateNotFound(id)) => assert_eq!(id.0, "ghost"),
        other => panic!("expected missing candidate, got {other:?}"),
    }

    let error = service
        .evaluate(
            &CandidateId("cand-1".to_string()),
            &JobId("retired".to_string()),
            today(),
        )
        .expect_err("unknown job rejected");
    assert!(error.is_not_found());
    assert_eq!(error.to_string(), "job retired not found");
}

#[test]
fn repository_outage_is_not_a_missing_record() {
    let service = MatchService::new(
        Arc::new(MemoryCandidates::with([candidate_record("cand-1", candidate())])),
        Arc::new(UnavailableJobs),
        &crate::config::MatchingConfig::default(),
    );

    match service.recommendations(&CandidateId("cand-1".to_string()), None, today()) {
        Err(error @ MatchServiceError::Repository(RepositoryError::Unavailable(_))) => {
            assert!(!error.is_not_found());
        }
        other => panic!("expected repository outage, got {other:?}"),
    }
}

#[test]
fn checklist_uses_stored_records() {
    let service = build_service();

    let checklist = service
        .checklist(
            &CandidateId("cand-1".to_string()),
            &JobId("women-only".to_string()),
            today(),
        )
        .expect("checklist builds");

    assert!(!checklist.result.is_eligible);
    assert_eq!(checklist.criteria.len(), 4);
}

#[test]
fn recommendations_rank_open_eligible_postings() {
    let service = build_service();

    let recommendations = service
        .recommendations(&CandidateId("cand-1".to_string()), None, today())
        .expect("recommendations build");

    assert_eq!(ids(&recommendations), vec!["maharashtra", "nationwide", "karnataka"]);
    let scores: Vec<u8> = recommendations
        .iter()
        .map(|recommendation| recommendation.result.score)
        .collect();
    assert_eq!(scores, vec![70, 60, 60]);
    assert!(recommendations
        .iter()
        .all(|recommendation| recommendation.result.is_eligible));
}

#[test]
fn recommendation_limit_is_clamped() {
    let service = build_service();
    let candidate_id = CandidateId("cand-1".to_string());

    let top = service
        .recommendations(&candidate_id, Some(1), today())
        .expect("limited recommendations");
    assert_eq!(ids(&top), vec!["maharashtra"]);

    let zero = service
        .recommendations(&candidate_id, Some(0), today())
        .expect("zero limit clamps to one");
    assert_eq!(zero.len(), 1);

    let capped = MatchService::with_engine(
        Arc::new(MemoryCandidates::with([candidate_record("cand-1", candidate())])),
        Arc::new(MemoryJobs::with(catalog())),
        MatchEngine::default(),
        2,
    );
    let clamped = capped
        .recommendations(&candidate_id, Some(50), today())
        .expect("oversized limit clamps to maximum");
    assert_eq!(clamped.len(), 2);
}

#[test]
fn expired_posting_is_recommended_before_its_last_date() {
    let earlier = today().pred_opt().and_then(|day| day.pred_opt()).expect("valid date");
    let postings = catalog();

    let recommendations = recommend(&engine(), &candidate(), &postings, earlier, 10);

    assert!(ids(&recommendations).contains(&"expired"));
    assert!(!ids(&recommendations).contains(&"closed"));
}

#[test]
fn service_honours_configured_nationwide_sentinel() {
    let config = crate::config::MatchingConfig {
        nationwide_state: "Pan India".to_string(),
        ..crate::config::MatchingConfig::default()
    };
    let service = MatchService::new(
        Arc::new(MemoryCandidates::default()),
        Arc::new(MemoryJobs::default()),
        &config,
    );

    let mut job = open_job();
    job.state = Some("pan india".to_string());
    let result = service.score(&candidate(), &job, today());

    assert_eq!(result.score, 60);
    assert_eq!(
        service.engine().config().nationwide_state,
        ScoringConfig::default()
            .with_nationwide_state("Pan India")
            .nationwide_state
    );
}
