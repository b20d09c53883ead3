use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{CandidateProfile, JobRequirement};
use super::engine::{EligibilityGate, GateOutcome, MatchEngine, MatchResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Age,
    Gender,
    Education,
    State,
}

impl Criterion {
    pub const fn label(self) -> &'static str {
        match self {
            Criterion::Age => "Age",
            Criterion::Gender => "Gender",
            Criterion::Education => "Education",
            Criterion::State => "State",
        }
    }
}

impl From<EligibilityGate> for Criterion {
    fn from(gate: EligibilityGate) -> Self {
        match gate {
            EligibilityGate::Age => Criterion::Age,
            EligibilityGate::Gender => Criterion::Gender,
            EligibilityGate::Education => Criterion::Education,
        }
    }
}

/// Badge state for a single criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionStatus {
    Pass,
    Fail,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionCheck {
    pub criterion: Criterion,
    pub status: CriterionStatus,
    pub detail: String,
}

/// Per-criterion view of a match, used to render pass/fail/warning badges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualificationChecklist {
    pub criteria: Vec<CriterionCheck>,
    pub result: MatchResult,
}

impl QualificationChecklist {
    pub fn evaluate(
        engine: &MatchEngine,
        candidate: &CandidateProfile,
        job: &JobRequirement,
        today: NaiveDate,
    ) -> Self {
        let result = engine.score(candidate, job, today);
        Self::from_result(engine, candidate, job, result)
    }

    pub fn from_result(
        engine: &MatchEngine,
        candidate: &CandidateProfile,
        job: &JobRequirement,
        result: MatchResult,
    ) -> Self {
        let mut criteria: Vec<CriterionCheck> = result
            .gates
            .iter()
            .map(|check| {
                let criterion = Criterion::from(check.gate);
                match &check.outcome {
                    GateOutcome::Pass if check.notes.is_empty() => CriterionCheck {
                        criterion,
                        status: CriterionStatus::Pass,
                        detail: "No requirement for this job".to_string(),
                    },
                    GateOutcome::Pass => CriterionCheck {
                        criterion,
                        status: CriterionStatus::Pass,
                        detail: check.notes.join("; "),
                    },
                    GateOutcome::Fail(_)
                        if check.gate == EligibilityGate::Education
                            && candidate.education_history.is_empty() =>
                    {
                        CriterionCheck {
                            criterion,
                            status: CriterionStatus::Warning,
                            detail: "Add your education history to check this requirement"
                                .to_string(),
                        }
                    }
                    GateOutcome::Fail(failure) => CriterionCheck {
                        criterion,
                        status: CriterionStatus::Fail,
                        detail: failure.summary(),
                    },
                    GateOutcome::Indeterminate(missing) => CriterionCheck {
                        criterion,
                        status: CriterionStatus::Warning,
                        detail: missing.prompt().to_string(),
                    },
                }
            })
            .collect();

        criteria.push(state_check(engine, candidate, job));

        Self { criteria, result }
    }

    pub fn status_of(&self, criterion: Criterion) -> Option<CriterionStatus> {
        self.criteria
            .iter()
            .find(|check| check.criterion == criterion)
            .map(|check| check.status)
    }

    pub fn needs_profile_completion(&self) -> bool {
        self.criteria
            .iter()
            .any(|check| check.status == CriterionStatus::Warning)
    }
}

fn state_check(
    engine: &MatchEngine,
    candidate: &CandidateProfile,
    job: &JobRequirement,
) -> CriterionCheck {
    let state = job
        .state
        .as_deref()
        .map(str::trim)
        .filter(|_| !job.is_nationwide(&engine.config().nationwide_state));

    let (status, detail) = match state {
        None => (
            CriterionStatus::Pass,
            "Open to candidates from every state".to_string(),
        ),
        Some(state) => match candidate.domicile_state.as_deref().map(str::trim) {
            Some(domicile) if domicile == state => (
                CriterionStatus::Pass,
                format!("Domicile matches {state}"),
            ),
            _ if candidate.prefers_state(state) => (
                CriterionStatus::Pass,
                format!("{state} is one of your preferred states"),
            ),
            None => (
                CriterionStatus::Warning,
                "Add your domicile state to check state preference".to_string(),
            ),
            Some(domicile) => (
                CriterionStatus::Warning,
                format!("State job for {state}; your domicile is {domicile}"),
            ),
        },
    };

    CriterionCheck {
        criterion: Criterion::State,
        status,
        detail,
    }
}
