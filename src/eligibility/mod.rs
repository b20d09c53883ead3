//! Candidate/job eligibility gates and match scoring.
//!
//! The engine is a pure function of a candidate profile, a job requirement, and the
//! evaluation date. Repositories, the service, and the router wrap it for the portal's
//! API; none of them persist results.

pub mod checklist;
pub mod domain;
pub mod engine;
pub mod recommend;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use checklist::{Criterion, CriterionCheck, CriterionStatus, QualificationChecklist};
pub use domain::{
    AgeRelaxationRule, CandidateId, CandidateProfile, CandidateRecord, EducationEntry,
    EducationLevel, EducationRequirementGroup, Gender, GenderRequirement, JobId, JobPosting,
    JobRequirement, JobStatus, ReservationCategory, StructuredRequirements, NATIONWIDE_STATE,
};
pub use engine::{
    completed_years, BonusKind, EligibilityGate, GateCheck, GateFailure, GateOutcome,
    MatchEngine, MatchResult, MissingData, ScoreComponent, ScoringConfig,
};
pub use recommend::{recommend, Recommendation};
pub use repository::{CandidateRepository, JobRepository, RepositoryError};
pub use router::{match_router, RecommendationsView, ScoreRequest};
pub use service::{MatchService, MatchServiceError};
