use serde::{Deserialize, Serialize};

use super::super::domain::{Gender, GenderRequirement};
use super::{GateCheck, GateOutcome};

/// Hard-gate failures, each rendering the reason shown to the candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GateFailure {
    OverAge {
        age: i32,
        maximum: u32,
    },
    UnderAge {
        age: i32,
        minimum: u32,
    },
    GenderMismatch {
        required: GenderRequirement,
        actual: Gender,
    },
    NoEducationHistory,
    EducationMismatch,
}

impl GateFailure {
    pub fn summary(&self) -> String {
        match self {
            GateFailure::OverAge { age, maximum } => {
                format!("Age {age} exceeds maximum age limit of {maximum}")
            }
            GateFailure::UnderAge { age, minimum } => {
                format!("Age {age} is below minimum age requirement of {minimum}")
            }
            GateFailure::GenderMismatch { required, actual } => format!(
                "Job is open to {} candidates only (profile lists {})",
                required.label(),
                actual.label()
            ),
            GateFailure::NoEducationHistory => "No education history found".to_string(),
            GateFailure::EducationMismatch => {
                "Education qualifications do not match requirements".to_string()
            }
        }
    }
}

/// Profile data whose absence caused a gate to be skipped rather than failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingData {
    DateOfBirth,
    Gender,
}

impl MissingData {
    pub const fn prompt(self) -> &'static str {
        match self {
            MissingData::DateOfBirth => "Add your date of birth to verify the age limit",
            MissingData::Gender => "Add your gender to verify the gender requirement",
        }
    }
}

/// Eligibility is decided from failed gates only; skipped gates never block.
pub(crate) fn gates_clear(checks: &[GateCheck]) -> bool {
    !checks
        .iter()
        .any(|check| matches!(check.outcome, GateOutcome::Fail(_)))
}
