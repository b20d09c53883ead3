mod bonuses;
mod config;
mod gates;
mod policy;

pub use config::ScoringConfig;
pub use gates::completed_years;
pub use policy::{GateFailure, MissingData};

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::domain::{CandidateProfile, JobRequirement};

/// Stateless scorer applying the hard gates and soft bonuses to one candidate/job pair.
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    config: ScoringConfig,
}

impl MatchEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Scores `candidate` against `job` as of `today`.
    ///
    /// Every gate is evaluated and reported even after a failure. A failed gate forces a
    /// zero score and suppresses the bonuses.
    pub fn score(
        &self,
        candidate: &CandidateProfile,
        job: &JobRequirement,
        today: NaiveDate,
    ) -> MatchResult {
        let gates = gates::evaluate_gates(candidate, job, today);
        let mut reasons: Vec<String> = gates
            .iter()
            .flat_map(|check| check.notes.iter().cloned())
            .collect();

        if !policy::gates_clear(&gates) {
            return MatchResult {
                score: 0,
                is_eligible: false,
                reasons,
                gates,
                bonuses: Vec::new(),
            };
        }

        let bonuses = bonuses::score_bonuses(candidate, job, &self.config);
        let total = bonuses
            .iter()
            .fold(u16::from(self.config.base_score), |total, component| {
                total + u16::from(component.points)
            });
        reasons.extend(bonuses.iter().map(|component| component.notes.clone()));

        let capped = total.min(u16::from(self.config.max_score));
        MatchResult {
            score: u8::try_from(capped).unwrap_or(u8::MAX),
            is_eligible: true,
            reasons,
            gates,
            bonuses,
        }
    }

    /// Scores against the local calendar date, read once per call.
    pub fn score_now(&self, candidate: &CandidateProfile, job: &JobRequirement) -> MatchResult {
        self.score(candidate, job, Local::now().date_naive())
    }
}

/// Hard criteria evaluated before any points are awarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityGate {
    Age,
    Gender,
    Education,
}

impl EligibilityGate {
    pub const fn label(self) -> &'static str {
        match self {
            EligibilityGate::Age => "Age",
            EligibilityGate::Gender => "Gender",
            EligibilityGate::Education => "Education",
        }
    }
}

/// Three-valued gate result; `Indeterminate` means candidate data was missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum GateOutcome {
    Pass,
    Fail(GateFailure),
    Indeterminate(MissingData),
}

/// Outcome of one gate plus the reasons it contributed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateCheck {
    pub gate: EligibilityGate,
    pub outcome: GateOutcome,
    pub notes: Vec<String>,
}

impl GateCheck {
    pub(crate) fn pass(gate: EligibilityGate, notes: Vec<String>) -> Self {
        Self {
            gate,
            outcome: GateOutcome::Pass,
            notes,
        }
    }

    pub(crate) fn fail(
        gate: EligibilityGate,
        mut notes: Vec<String>,
        failure: GateFailure,
    ) -> Self {
        notes.push(failure.summary());
        Self {
            gate,
            outcome: GateOutcome::Fail(failure),
            notes,
        }
    }

    pub(crate) fn indeterminate(gate: EligibilityGate, missing: MissingData) -> Self {
        Self {
            gate,
            outcome: GateOutcome::Indeterminate(missing),
            notes: Vec::new(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, GateOutcome::Fail(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusKind {
    DomicileState,
    PreferredState,
    NationwideJob,
    CategoryBenefit,
    HigherQualification,
}

/// Discrete bonus contribution so callers can show where the points came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub bonus: BonusKind,
    pub points: u8,
    pub notes: String,
}

/// Score, decision, and reasons for one evaluation. Built fresh on every call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub score: u8,
    pub is_eligible: bool,
    pub reasons: Vec<String>,
    pub gates: Vec<GateCheck>,
    pub bonuses: Vec<ScoreComponent>,
}

impl MatchResult {
    pub fn gate(&self, gate: EligibilityGate) -> Option<&GateCheck> {
        self.gates.iter().find(|check| check.gate == gate)
    }

    pub fn failures(&self) -> impl Iterator<Item = &GateFailure> {
        self.gates.iter().filter_map(|check| match &check.outcome {
            GateOutcome::Fail(failure) => Some(failure),
            _ => None,
        })
    }

    /// Gates skipped for missing profile data, for "complete your profile" prompts.
    pub fn indeterminate_gates(
        &self,
    ) -> impl Iterator<Item = (EligibilityGate, MissingData)> + '_ {
        self.gates.iter().filter_map(|check| match check.outcome {
            GateOutcome::Indeterminate(missing) => Some((check.gate, missing)),
            _ => None,
        })
    }

    pub fn bonus_points(&self, bonus: BonusKind) -> Option<u8> {
        self.bonuses
            .iter()
            .find(|component| component.bonus == bonus)
            .map(|component| component.points)
    }
}
