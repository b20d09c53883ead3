use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};

use super::checklist::QualificationChecklist;
use super::domain::{
    CandidateId, CandidateProfile, CandidateRecord, JobId, JobPosting, JobRequirement,
};
use super::engine::{MatchEngine, MatchResult, ScoringConfig};
use super::recommend::{recommend, Recommendation};
use super::repository::{CandidateRepository, JobRepository, RepositoryError};
use crate::config::MatchingConfig;

/// Upper bound on open postings pulled from the catalog for one recommendation batch.
const OPEN_POSTING_WINDOW: usize = 250;

/// Service composing the CMS repositories with the match engine.
pub struct MatchService<C, J> {
    candidates: Arc<C>,
    jobs: Arc<J>,
    engine: Arc<MatchEngine>,
    max_recommendations: usize,
}

impl<C, J> MatchService<C, J>
where
    C: CandidateRepository + 'static,
    J: JobRepository + 'static,
{
    pub fn new(candidates: Arc<C>, jobs: Arc<J>, config: &MatchingConfig) -> Self {
        let scoring =
            ScoringConfig::default().with_nationwide_state(config.nationwide_state.clone());
        Self::with_engine(
            candidates,
            jobs,
            MatchEngine::new(scoring),
            config.max_recommendations,
        )
    }

    pub fn with_engine(
        candidates: Arc<C>,
        jobs: Arc<J>,
        engine: MatchEngine,
        max_recommendations: usize,
    ) -> Self {
        Self {
            candidates,
            jobs,
            engine: Arc::new(engine),
            max_recommendations: max_recommendations.max(1),
        }
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Scores inline records without touching the repositories.
    pub fn score(
        &self,
        candidate: &CandidateProfile,
        job: &JobRequirement,
        today: NaiveDate,
    ) -> MatchResult {
        self.engine.score(candidate, job, today)
    }

    /// Score a stored candidate against a stored job posting.
    pub fn evaluate(
        &self,
        candidate_id: &CandidateId,
        job_id: &JobId,
        today: NaiveDate,
    ) -> Result<MatchResult, MatchServiceError> {
        let candidate = self.candidate(candidate_id)?;
        let posting = self.posting(job_id)?;

        let result = self
            .engine
            .score(&candidate.profile, &posting.requirement, today);
        debug!(
            candidate = %candidate_id,
            job = %job_id,
            score = result.score,
            eligible = result.is_eligible,
            "scored candidate against job"
        );

        Ok(result)
    }

    /// Per-criterion badges for a stored candidate and job.
    pub fn checklist(
        &self,
        candidate_id: &CandidateId,
        job_id: &JobId,
        today: NaiveDate,
    ) -> Result<QualificationChecklist, MatchServiceError> {
        let candidate = self.candidate(candidate_id)?;
        let posting = self.posting(job_id)?;

        let checklist = QualificationChecklist::evaluate(
            &self.engine,
            &candidate.profile,
            &posting.requirement,
            today,
        );
        debug!(
            candidate = %candidate_id,
            job = %job_id,
            incomplete = checklist.needs_profile_completion(),
            "built qualification checklist"
        );

        Ok(checklist)
    }

    /// Eligible open postings for a candidate, best score first.
    pub fn recommendations(
        &self,
        candidate_id: &CandidateId,
        limit: Option<usize>,
        today: NaiveDate,
    ) -> Result<Vec<Recommendation>, MatchServiceError> {
        let candidate = self.candidate(candidate_id)?;
        let limit = limit
            .unwrap_or(self.max_recommendations)
            .clamp(1, self.max_recommendations);

        let postings = self.jobs.open_postings(today, OPEN_POSTING_WINDOW)?;
        let ranked = recommend(&self.engine, &candidate.profile, &postings, today, limit);
        info!(
            candidate = %candidate_id,
            considered = postings.len(),
            recommended = ranked.len(),
            "built job recommendations"
        );

        Ok(ranked)
    }

    fn candidate(&self, id: &CandidateId) -> Result<CandidateRecord, MatchServiceError> {
        self.candidates
            .fetch(id)?
            .ok_or_else(|| MatchServiceError::CandidateNotFound(id.clone()))
    }

    fn posting(&self, id: &JobId) -> Result<JobPosting, MatchServiceError> {
        self.jobs
            .fetch(id)?
            .ok_or_else(|| MatchServiceError::JobNotFound(id.clone()))
    }
}

/// Error raised by the match service.
#[derive(Debug, thiserror::Error)]
pub enum MatchServiceError {
    #[error("candidate {0} not found")]
    CandidateNotFound(CandidateId),
    #[error("job {0} not found")]
    JobNotFound(JobId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl MatchServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            MatchServiceError::CandidateNotFound(_) | MatchServiceError::JobNotFound(_)
        )
    }
}
