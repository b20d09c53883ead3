use super::super::domain::{CandidateProfile, JobRequirement};
use super::config::ScoringConfig;
use super::{BonusKind, ScoreComponent};

/// Soft bonuses in reporting order: state, category benefit, qualification.
pub(crate) fn score_bonuses(
    candidate: &CandidateProfile,
    job: &JobRequirement,
    config: &ScoringConfig,
) -> Vec<ScoreComponent> {
    let mut components = Vec::new();

    if let Some(component) = state_bonus(candidate, job, config) {
        components.push(component);
    }

    // Proxy for reserved vacancies: the notification only tells us a relaxation exists.
    if let Some(rule) = job
        .relaxation_for(candidate.category)
        .filter(|rule| rule.years > 0)
    {
        components.push(ScoreComponent {
            bonus: BonusKind::CategoryBenefit,
            points: config.category_benefit_bonus,
            notes: format!(
                "{} category receives {} years of age relaxation for this job",
                candidate.category.label(),
                rule.years
            ),
        });
    }

    if let Some(entry) = candidate
        .education_history
        .iter()
        .find(|entry| entry.level.is_higher_qualification())
    {
        components.push(ScoreComponent {
            bonus: BonusKind::HigherQualification,
            points: config.higher_qualification_bonus,
            notes: format!("Holds a {} qualification", entry.level.label()),
        });
    }

    components
}

fn state_bonus(
    candidate: &CandidateProfile,
    job: &JobRequirement,
    config: &ScoringConfig,
) -> Option<ScoreComponent> {
    if job.is_nationwide(&config.nationwide_state) {
        return Some(ScoreComponent {
            bonus: BonusKind::NationwideJob,
            points: config.nationwide_bonus,
            notes: "Nationwide job open to candidates from every state".to_string(),
        });
    }

    let state = job.state.as_deref().map(str::trim)?;

    if candidate.domicile_state.as_deref().map(str::trim) == Some(state) {
        return Some(ScoreComponent {
            bonus: BonusKind::DomicileState,
            points: config.domicile_bonus,
            notes: format!("Domicile state matches job state {state}"),
        });
    }

    if candidate.prefers_state(state) {
        return Some(ScoreComponent {
            bonus: BonusKind::PreferredState,
            points: config.preferred_state_bonus,
            notes: format!("{state} is one of your preferred states"),
        });
    }

    None
}
