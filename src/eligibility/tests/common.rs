use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{Datelike, NaiveDate};
use serde_json::Value;

use crate::config::MatchingConfig;
use crate::eligibility::domain::{
    AgeRelaxationRule, CandidateId, CandidateProfile, CandidateRecord, EducationEntry,
    EducationLevel, EducationRequirementGroup, Gender, GenderRequirement, JobId, JobPosting,
    JobRequirement, JobStatus, ReservationCategory, StructuredRequirements,
};
use crate::eligibility::engine::MatchEngine;
use crate::eligibility::repository::{CandidateRepository, JobRepository, RepositoryError};
use crate::eligibility::service::MatchService;

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
}

pub(super) fn born_years_ago(years: i32) -> NaiveDate {
    let today = today();
    today
        .with_year(today.year() - years)
        .expect("valid birth date")
}

pub(super) fn engine() -> MatchEngine {
    MatchEngine::default()
}

/// General-category male graduate, 25 years old, domiciled in Maharashtra.
pub(super) fn candidate() -> CandidateProfile {
    CandidateProfile {
        date_of_birth: Some(born_years_ago(25)),
        category: ReservationCategory::General,
        gender: Some(Gender::Male),
        domicile_state: Some("Maharashtra".to_string()),
        preferred_states: vec!["Karnataka".to_string()],
        education_history: vec![
            EducationEntry::new(EducationLevel::Twelfth).with_stream("Science"),
            EducationEntry::new(EducationLevel::Graduate).with_stream("Computer Science"),
        ],
    }
}

pub(super) fn reserved_candidate(category: ReservationCategory, age: i32) -> CandidateProfile {
    CandidateProfile {
        date_of_birth: Some(born_years_ago(age)),
        category,
        ..candidate()
    }
}

/// Nationwide job for ages 21-30 with no gender or education constraint.
pub(super) fn open_job() -> JobRequirement {
    JobRequirement {
        minimum_age: Some(21),
        maximum_age: Some(30),
        state: Some("All India".to_string()),
        ..JobRequirement::default()
    }
}

pub(super) fn relaxed_job(category: ReservationCategory, years: u32) -> JobRequirement {
    JobRequirement {
        age_relaxation_rules: vec![AgeRelaxationRule { category, years }],
        ..open_job()
    }
}

pub(super) fn engineering_group() -> EducationRequirementGroup {
    EducationRequirementGroup::new([EducationLevel::Graduate, EducationLevel::PostGraduate])
        .with_streams(["Computer Science", "IT"])
}

pub(super) fn posting(id: &str, requirement: JobRequirement) -> JobPosting {
    JobPosting {
        id: JobId(id.to_string()),
        title: format!("Posting {id}"),
        organization: Some("Staff Selection Commission".to_string()),
        status: JobStatus::Open,
        last_date: None,
        requirement,
    }
}

pub(super) fn candidate_record(id: &str, profile: CandidateProfile) -> CandidateRecord {
    CandidateRecord {
        id: CandidateId(id.to_string()),
        display_name: Some("Test Candidate".to_string()),
        profile,
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryCandidates {
    records: Arc<Mutex<HashMap<CandidateId, CandidateRecord>>>,
}

impl MemoryCandidates {
    pub(super) fn with(records: impl IntoIterator<Item = CandidateRecord>) -> Self {
        let store = Self::default();
        {
            let mut guard = store.records.lock().expect("candidate mutex poisoned");
            for record in records {
                guard.insert(record.id.clone(), record);
            }
        }
        store
    }
}

impl CandidateRepository for MemoryCandidates {
    fn fetch(&self, id: &CandidateId) -> Result<Option<CandidateRecord>, RepositoryError> {
        let guard = self.records.lock().expect("candidate mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryJobs {
    postings: Arc<Mutex<Vec<JobPosting>>>,
}

impl MemoryJobs {
    pub(super) fn with(postings: impl IntoIterator<Item = JobPosting>) -> Self {
        Self {
            postings: Arc::new(Mutex::new(postings.into_iter().collect())),
        }
    }
}

impl JobRepository for MemoryJobs {
    fn fetch(&self, id: &JobId) -> Result<Option<JobPosting>, RepositoryError> {
        let guard = self.postings.lock().expect("job mutex poisoned");
        Ok(guard.iter().find(|posting| &posting.id == id).cloned())
    }

    fn open_postings(
        &self,
        today: NaiveDate,
        limit: usize,
    ) -> Result<Vec<JobPosting>, RepositoryError> {
        let guard = self.postings.lock().expect("job mutex poisoned");
        Ok(guard
            .iter()
            .filter(|posting| posting.is_open_on(today))
            .take(limit)
            .cloned()
            .collect())
    }
}

pub(super) struct UnavailableJobs;

impl JobRepository for UnavailableJobs {
    fn fetch(&self, _id: &JobId) -> Result<Option<JobPosting>, RepositoryError> {
        Err(RepositoryError::Unavailable("cms offline".to_string()))
    }

    fn open_postings(
        &self,
        _today: NaiveDate,
        _limit: usize,
    ) -> Result<Vec<JobPosting>, RepositoryError> {
        Err(RepositoryError::Unavailable("cms offline".to_string()))
    }
}

pub(super) fn catalog() -> Vec<JobPosting> {
    let mut closed = posting("closed", open_job());
    closed.status = JobStatus::Closed;

    let mut expired = posting("expired", open_job());
    expired.last_date = today().pred_opt();

    vec![
        posting("nationwide", open_job()),
        posting(
            "maharashtra",
            JobRequirement {
                state: Some("Maharashtra".to_string()),
                ..open_job()
            },
        ),
        posting(
            "women-only",
            JobRequirement {
                structured_requirements: StructuredRequirements {
                    gender: GenderRequirement::Female,
                    education: Vec::new(),
                },
                ..open_job()
            },
        ),
        posting(
            "karnataka",
            JobRequirement {
                state: Some("Karnataka".to_string()),
                ..open_job()
            },
        ),
        closed,
        expired,
    ]
}

pub(super) fn build_service() -> Arc<MatchService<MemoryCandidates, MemoryJobs>> {
    let candidates = MemoryCandidates::with([candidate_record("cand-1", candidate())]);
    let jobs = MemoryJobs::with(catalog());
    Arc::new(MatchService::new(
        Arc::new(candidates),
        Arc::new(jobs),
        &MatchingConfig::default(),
    ))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
