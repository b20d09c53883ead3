use chrono::{Datelike, NaiveDate};

use super::super::domain::{
    CandidateProfile, EducationEntry, EducationRequirementGroup, GenderRequirement,
    JobRequirement,
};
use super::policy::{GateFailure, MissingData};
use super::{EligibilityGate, GateCheck};

/// Whole years completed between `birth` and `on`.
pub fn completed_years(birth: NaiveDate, on: NaiveDate) -> i32 {
    let years = on.year() - birth.year();
    if (on.month(), on.day()) < (birth.month(), birth.day()) {
        years - 1
    } else {
        years
    }
}

/// Runs the hard gates in their fixed order: age, gender, education.
pub(crate) fn evaluate_gates(
    candidate: &CandidateProfile,
    job: &JobRequirement,
    today: NaiveDate,
) -> Vec<GateCheck> {
    vec![
        age_gate(candidate, job, today),
        gender_gate(candidate, job),
        education_gate(candidate, job),
    ]
}

pub(crate) fn age_gate(
    candidate: &CandidateProfile,
    job: &JobRequirement,
    today: NaiveDate,
) -> GateCheck {
    let Some(maximum_age) = job.maximum_age else {
        return GateCheck::pass(EligibilityGate::Age, Vec::new());
    };
    let Some(date_of_birth) = candidate.date_of_birth else {
        return GateCheck::indeterminate(EligibilityGate::Age, MissingData::DateOfBirth);
    };

    let age = completed_years(date_of_birth, today);
    let mut notes = Vec::new();
    let mut effective_max = maximum_age;

    if !candidate.category.is_unreserved() {
        if let Some(rule) = job
            .relaxation_for(candidate.category)
            .filter(|rule| rule.years > 0)
        {
            effective_max = effective_max.saturating_add(rule.years);
            notes.push(format!(
                "Age relaxation of {} years applied for {} category",
                rule.years,
                candidate.category.label()
            ));
        }
    }

    let failure = if i64::from(age) > i64::from(effective_max) {
        Some(GateFailure::OverAge {
            age,
            maximum: effective_max,
        })
    } else {
        job.minimum_age
            .filter(|minimum| i64::from(age) < i64::from(*minimum))
            .map(|minimum| GateFailure::UnderAge { age, minimum })
    };

    match failure {
        Some(failure) => GateCheck::fail(EligibilityGate::Age, notes, failure),
        None => {
            notes.push("Age requirement met".to_string());
            GateCheck::pass(EligibilityGate::Age, notes)
        }
    }
}

pub(crate) fn gender_gate(candidate: &CandidateProfile, job: &JobRequirement) -> GateCheck {
    let required = job.structured_requirements.gender;
    if required == GenderRequirement::Any {
        return GateCheck::pass(EligibilityGate::Gender, Vec::new());
    }

    match candidate.gender {
        None => GateCheck::indeterminate(EligibilityGate::Gender, MissingData::Gender),
        Some(gender) if required.admits(gender) => GateCheck::pass(
            EligibilityGate::Gender,
            vec!["Gender requirement met".to_string()],
        ),
        Some(gender) => GateCheck::fail(
            EligibilityGate::Gender,
            Vec::new(),
            GateFailure::GenderMismatch {
                required,
                actual: gender,
            },
        ),
    }
}

pub(crate) fn education_gate(candidate: &CandidateProfile, job: &JobRequirement) -> GateCheck {
    let groups = &job.structured_requirements.education;
    if groups.is_empty() {
        return GateCheck::pass(EligibilityGate::Education, Vec::new());
    }

    if candidate.education_history.is_empty() {
        return GateCheck::fail(
            EligibilityGate::Education,
            Vec::new(),
            GateFailure::NoEducationHistory,
        );
    }

    // First satisfied group wins; outcome does not depend on group order.
    let matched = groups
        .iter()
        .any(|group| group_satisfied(group, &candidate.education_history));

    if matched {
        GateCheck::pass(
            EligibilityGate::Education,
            vec!["Education requirements met".to_string()],
        )
    } else {
        GateCheck::fail(
            EligibilityGate::Education,
            Vec::new(),
            GateFailure::EducationMismatch,
        )
    }
}

/// A group holds when one entry matches both its level set and, if any, a stream keyword.
pub(crate) fn group_satisfied(
    group: &EducationRequirementGroup,
    history: &[EducationEntry],
) -> bool {
    let keywords: Vec<String> = group
        .streams
        .iter()
        .map(|stream| stream.trim().to_lowercase())
        .filter(|stream| !stream.is_empty())
        .collect();

    history.iter().any(|entry| {
        if !group.levels.contains(&entry.level) {
            return false;
        }
        if keywords.is_empty() {
            return true;
        }

        entry.stream.as_deref().map_or(false, |stream| {
            let stream = stream.to_lowercase();
            keywords.iter().any(|keyword| stream.contains(keyword.as_str()))
        })
    })
}
