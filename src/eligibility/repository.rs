use chrono::NaiveDate;

use super::domain::{CandidateId, CandidateRecord, JobId, JobPosting};

/// Read access to candidate profiles stored by the CMS.
pub trait CandidateRepository: Send + Sync {
    fn fetch(&self, id: &CandidateId) -> Result<Option<CandidateRecord>, RepositoryError>;
}

/// Read access to published job postings.
pub trait JobRepository: Send + Sync {
    fn fetch(&self, id: &JobId) -> Result<Option<JobPosting>, RepositoryError>;
    /// Postings accepting applications on `today`, in catalog order, at most `limit`.
    fn open_postings(
        &self,
        today: NaiveDate,
        limit: usize,
    ) -> Result<Vec<JobPosting>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
