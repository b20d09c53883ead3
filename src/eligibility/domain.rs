use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// State value the CMS stores on jobs open to candidates from every state.
pub const NATIONWIDE_STATE: &str = "All India";

/// Identifier wrapper for candidate profiles held by the CMS.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CandidateId(pub String);

/// Identifier wrapper for published job postings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JobId(pub String);

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fixed education ladder recognised by job notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "10th")]
    Tenth,
    #[serde(rename = "12th")]
    Twelfth,
    Diploma,
    Graduate,
    PostGraduate,
    #[serde(rename = "PhD")]
    Phd,
}

impl EducationLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tenth => "10th",
            Self::Twelfth => "12th",
            Self::Diploma => "Diploma",
            Self::Graduate => "Graduate",
            Self::PostGraduate => "PostGraduate",
            Self::Phd => "PhD",
        }
    }

    /// Position on the ladder, lowest first.
    pub const fn rank(self) -> u8 {
        match self {
            Self::Tenth => 0,
            Self::Twelfth => 1,
            Self::Diploma => 2,
            Self::Graduate => 3,
            Self::PostGraduate => 4,
            Self::Phd => 5,
        }
    }

    pub const fn is_higher_qualification(self) -> bool {
        match self {
            Self::PostGraduate | Self::Phd => true,
            Self::Tenth | Self::Twelfth | Self::Diploma | Self::Graduate => false,
        }
    }
}

/// Reservation categories used for age relaxation and seat reservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReservationCategory {
    #[default]
    #[serde(alias = "UR", alias = "Unreserved")]
    General,
    #[serde(rename = "OBC")]
    Obc,
    #[serde(rename = "SC")]
    Sc,
    #[serde(rename = "ST")]
    St,
    #[serde(rename = "EWS")]
    Ews,
}

impl ReservationCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Obc => "OBC",
            Self::Sc => "SC",
            Self::St => "ST",
            Self::Ews => "EWS",
        }
    }

    pub const fn is_unreserved(self) -> bool {
        matches!(self, Self::General)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

/// Gender restriction declared on a job; `Any` imposes no constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GenderRequirement {
    Male,
    Female,
    #[default]
    Any,
}

impl GenderRequirement {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Any => "Any",
        }
    }

    pub const fn admits(self, gender: Gender) -> bool {
        match self {
            Self::Any => true,
            Self::Male => matches!(gender, Gender::Male),
            Self::Female => matches!(gender, Gender::Female),
        }
    }
}

/// One record of the candidate's education history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub level: EducationLevel,
    #[serde(default)]
    pub stream: Option<String>,
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub passing_year: Option<u16>,
    #[serde(default)]
    pub percentage: Option<f32>,
}

impl EducationEntry {
    pub fn new(level: EducationLevel) -> Self {
        Self {
            level,
            stream: None,
            degree: None,
            passing_year: None,
            percentage: None,
        }
    }

    pub fn with_stream(mut self, stream: impl Into<String>) -> Self {
        self.stream = Some(stream.into());
        self
    }
}

/// Scoring-relevant subset of the job seeker's stored profile.
///
/// Education entries are independent: a `Graduate` entry does not imply a `12th` pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub category: ReservationCategory,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub domicile_state: Option<String>,
    #[serde(default)]
    pub preferred_states: Vec<String>,
    #[serde(default)]
    pub education_history: Vec<EducationEntry>,
}

impl CandidateProfile {
    pub fn highest_education(&self) -> Option<EducationLevel> {
        self.education_history
            .iter()
            .map(|entry| entry.level)
            .max_by_key(|level| level.rank())
    }

    /// Compares trimmed entries, the same way domicile is compared.
    pub fn prefers_state(&self, state: &str) -> bool {
        let state = state.trim();
        self.preferred_states
            .iter()
            .any(|preferred| preferred.trim() == state)
    }
}

/// Extra years granted on top of the maximum age for a reservation category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgeRelaxationRule {
    pub category: ReservationCategory,
    pub years: u32,
}

/// One acceptable combination of education levels and optional stream keywords.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationRequirementGroup {
    #[serde(default)]
    pub levels: Vec<EducationLevel>,
    #[serde(default)]
    pub streams: Vec<String>,
}

impl EducationRequirementGroup {
    pub fn new(levels: impl IntoIterator<Item = EducationLevel>) -> Self {
        Self {
            levels: levels.into_iter().collect(),
            streams: Vec::new(),
        }
    }

    pub fn with_streams<S: Into<String>>(mut self, streams: impl IntoIterator<Item = S>) -> Self {
        self.streams = streams.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredRequirements {
    #[serde(default)]
    pub gender: GenderRequirement,
    #[serde(default)]
    pub education: Vec<EducationRequirementGroup>,
}

/// Structured eligibility criteria attached to a job posting.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequirement {
    #[serde(default)]
    pub minimum_age: Option<u32>,
    #[serde(default)]
    pub maximum_age: Option<u32>,
    #[serde(default)]
    pub age_relaxation_rules: Vec<AgeRelaxationRule>,
    #[serde(default)]
    pub structured_requirements: StructuredRequirements,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub category: Vec<String>,
}

impl JobRequirement {
    /// First relaxation rule declared for `category`, matching the CMS lookup order.
    pub fn relaxation_for(&self, category: ReservationCategory) -> Option<&AgeRelaxationRule> {
        self.age_relaxation_rules
            .iter()
            .find(|rule| rule.category == category)
    }

    /// True when the job carries no state restriction or names the nationwide sentinel.
    pub fn is_nationwide(&self, sentinel: &str) -> bool {
        match self.state.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(state) => state.eq_ignore_ascii_case(sentinel.trim()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    #[default]
    Open,
    Closed,
}

/// Candidate profile together with its CMS identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    pub id: CandidateId,
    #[serde(default)]
    pub display_name: Option<String>,
    pub profile: CandidateProfile,
}

/// Published job with the requirement record the scorer consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: JobId,
    pub title: String,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default)]
    pub last_date: Option<NaiveDate>,
    #[serde(default)]
    pub requirement: JobRequirement,
}

impl JobPosting {
    pub fn is_open_on(&self, date: NaiveDate) -> bool {
        self.status == JobStatus::Open && self.last_date.map_or(true, |last| last >= date)
    }
}
