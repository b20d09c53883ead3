use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{CandidateProfile, JobId, JobPosting};
use super::engine::{MatchEngine, MatchResult};

/// Eligible posting paired with the result that ranked it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub job_id: JobId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    pub result: MatchResult,
}

/// Scores every posting open on `today` and keeps the eligible ones, best first.
///
/// Postings are scored independently; equal scores keep catalog order.
pub fn recommend<'a, I>(
    engine: &MatchEngine,
    candidate: &CandidateProfile,
    postings: I,
    today: NaiveDate,
    limit: usize,
) -> Vec<Recommendation>
where
    I: IntoIterator<Item = &'a JobPosting>,
{
    let mut ranked: Vec<Recommendation> = postings
        .into_iter()
        .filter(|posting| posting.is_open_on(today))
        .filter_map(|posting| {
            let result = engine.score(candidate, &posting.requirement, today);
            result.is_eligible.then(|| Recommendation {
                job_id: posting.id.clone(),
                title: posting.title.clone(),
                organization: posting.organization.clone(),
                result,
            })
        })
        .collect();

    ranked.sort_by(|left, right| right.result.score.cmp(&left.result.score));
    ranked.truncate(limit);
    ranked
}
