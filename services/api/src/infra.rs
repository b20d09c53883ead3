use chrono::NaiveDate;
use govjob_match::eligibility::{
    CandidateId, CandidateRecord, CandidateRepository, JobId, JobPosting, JobRepository,
    RepositoryError,
};
use govjob_match::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, RwLock};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Records loaded into the in-memory repositories at startup.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SeedData {
    #[serde(default)]
    pub(crate) candidates: Vec<CandidateRecord>,
    #[serde(default)]
    pub(crate) jobs: Vec<JobPosting>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryCandidateRepository {
    records: Arc<RwLock<HashMap<CandidateId, CandidateRecord>>>,
}

impl InMemoryCandidateRepository {
    pub(crate) fn seeded(records: Vec<CandidateRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (record.id.clone(), record))
            .collect();
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.records.read().map(|guard| guard.len()).unwrap_or(0)
    }
}

impl CandidateRepository for InMemoryCandidateRepository {
    fn fetch(&self, id: &CandidateId) -> Result<Option<CandidateRecord>, RepositoryError> {
        let guard = self
            .records
            .read()
            .map_err(|_| RepositoryError::Unavailable("candidate store poisoned".to_string()))?;
        Ok(guard.get(id).cloned())
    }
}

/// Job catalog kept in insertion order so recommendation ties stay stable.
#[derive(Default, Clone)]
pub(crate) struct InMemoryJobRepository {
    postings: Arc<RwLock<Vec<JobPosting>>>,
}

impl InMemoryJobRepository {
    pub(crate) fn seeded(postings: Vec<JobPosting>) -> Self {
        Self {
            postings: Arc::new(RwLock::new(postings)),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.postings.read().map(|guard| guard.len()).unwrap_or(0)
    }
}

impl JobRepository for InMemoryJobRepository {
    fn fetch(&self, id: &JobId) -> Result<Option<JobPosting>, RepositoryError> {
        let guard = self
            .postings
            .read()
            .map_err(|_| RepositoryError::Unavailable("job store poisoned".to_string()))?;
        Ok(guard.iter().find(|posting| &posting.id == id).cloned())
    }

    fn open_postings(
        &self,
        today: NaiveDate,
        limit: usize,
    ) -> Result<Vec<JobPosting>, RepositoryError> {
        let guard = self
            .postings
            .read()
            .map_err(|_| RepositoryError::Unavailable("job store poisoned".to_string()))?;
        Ok(guard
            .iter()
            .filter(|posting| posting.is_open_on(today))
            .take(limit)
            .cloned()
            .collect())
    }
}

pub(crate) fn load_seed(path: Option<&Path>) -> Result<SeedData, AppError> {
    match path {
        Some(path) => read_json(path),
        None => Ok(SeedData::default()),
    }
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
