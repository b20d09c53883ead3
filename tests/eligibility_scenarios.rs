use chrono::{Datelike, NaiveDate};
use govjob_match::eligibility::{
    BonusKind, CandidateProfile, EducationEntry, EducationLevel, EducationRequirementGroup,
    GenderRequirement, JobRequirement, MatchEngine, ReservationCategory,
};
use serde_json::json;

fn evaluation_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).expect("valid evaluation date")
}

fn birth_date_for_age(age: i32) -> String {
    let today = evaluation_date();
    today
        .with_year(today.year() - age)
        .expect("valid birth date")
        .format("%Y-%m-%d")
        .to_string()
}

fn profile(value: serde_json::Value) -> CandidateProfile {
    serde_json::from_value(value).expect("profile parses")
}

fn requirement(value: serde_json::Value) -> JobRequirement {
    serde_json::from_value(value).expect("requirement parses")
}

#[test]
fn general_candidate_on_nationwide_job_scores_sixty() {
    let candidate = profile(json!({
        "dateOfBirth": birth_date_for_age(25),
        "category": "General"
    }));
    let job = requirement(json!({ "minimumAge": 21, "maximumAge": 30, "state": "All India" }));

    let result = MatchEngine::default().score(&candidate, &job, evaluation_date());

    assert!(result.is_eligible);
    assert_eq!(result.score, 60);
}

#[test]
fn teenager_is_rejected_with_zero_score() {
    let candidate = profile(json!({ "dateOfBirth": birth_date_for_age(15) }));
    let job = requirement(json!({ "minimumAge": 18, "maximumAge": 30 }));

    let result = MatchEngine::default().score(&candidate, &job, evaluation_date());

    assert!(!result.is_eligible);
    assert_eq!(result.score, 0);
    assert!(result.reasons.iter().any(|reason| reason.contains("15")));
}

#[test]
fn mechanical_graduate_fails_computer_science_requirement() {
    let candidate = profile(json!({
        "educationHistory": [{ "level": "Graduate", "stream": "Mechanical Engineering" }]
    }));
    let job = requirement(json!({
        "structuredRequirements": {
            "education": [{
                "levels": ["Graduate", "PostGraduate"],
                "streams": ["Computer Science", "IT"]
            }]
        }
    }));

    let result = MatchEngine::default().score(&candidate, &job, evaluation_date());

    assert!(!result.is_eligible);
}

#[test]
fn domicile_and_preferred_state_bonuses() {
    let engine = MatchEngine::default();
    let candidate = profile(json!({
        "domicileState": "Maharashtra",
        "preferredStates": ["Delhi"]
    }));

    let home = engine.score(
        &candidate,
        &requirement(json!({ "state": "Maharashtra" })),
        evaluation_date(),
    );
    let preferred = engine.score(
        &candidate,
        &requirement(json!({ "state": "Delhi" })),
        evaluation_date(),
    );

    assert_eq!(home.bonus_points(BonusKind::DomicileState), Some(20));
    assert_eq!(home.score, 70);
    assert_eq!(preferred.bonus_points(BonusKind::PreferredState), Some(10));
    assert_eq!(preferred.score, 60);
}

#[test]
fn sc_candidate_uses_relaxation_and_category_benefit() {
    let candidate = profile(json!({
        "dateOfBirth": birth_date_for_age(34),
        "category": "SC"
    }));
    let job = requirement(json!({
        "maximumAge": 30,
        "ageRelaxationRules": [{ "category": "SC", "years": 5 }],
        "state": "All India"
    }));

    let result = MatchEngine::default().score(&candidate, &job, evaluation_date());

    assert!(result.is_eligible);
    assert_eq!(result.score, 75);
}

#[test]
fn postgraduate_earns_qualification_bonus() {
    let candidate = profile(json!({
        "educationHistory": [{ "level": "PostGraduate", "stream": "Sociology" }]
    }));
    let job = requirement(json!({
        "state": "All India",
        "structuredRequirements": { "gender": "Any" }
    }));

    let result = MatchEngine::default().score(&candidate, &job, evaluation_date());

    assert!(result.is_eligible);
    assert_eq!(result.score, 75);
}

#[test]
fn score_bounds_hold_across_profiles() {
    let engine = MatchEngine::default();
    let categories = [
        ReservationCategory::General,
        ReservationCategory::Obc,
        ReservationCategory::Sc,
        ReservationCategory::St,
        ReservationCategory::Ews,
    ];
    let states = [None, Some("All India"), Some("Maharashtra"), Some("Delhi")];

    for category in categories {
        for age in [17, 21, 26, 31, 35, 40] {
            for state in states {
                let candidate = CandidateProfile {
                    date_of_birth: NaiveDate::parse_from_str(
                        &birth_date_for_age(age),
                        "%Y-%m-%d",
                    )
                    .ok(),
                    category,
                    domicile_state: Some("Maharashtra".to_string()),
                    preferred_states: vec!["Delhi".to_string()],
                    education_history: vec![EducationEntry::new(EducationLevel::PostGraduate)
                        .with_stream("Computer Science")],
                    ..CandidateProfile::default()
                };
                let mut job = requirement(json!({
                    "minimumAge": 18,
                    "maximumAge": 32,
                    "ageRelaxationRules": [
                        { "category": "OBC", "years": 3 },
                        { "category": "SC", "years": 5 },
                        { "category": "ST", "years": 5 }
                    ]
                }));
                job.state = state.map(str::to_string);
                job.structured_requirements.education = vec![EducationRequirementGroup::new([
                    EducationLevel::PostGraduate,
                ])];

                let result = engine.score(&candidate, &job, evaluation_date());

                assert!(result.score <= 100);
                if result.is_eligible {
                    assert!(result.score >= 50, "eligible score below base: {result:?}");
                } else {
                    assert_eq!(result.score, 0, "ineligible score not zero: {result:?}");
                    assert!(result.bonuses.is_empty());
                }
            }
        }
    }
}

#[test]
fn absent_gender_never_blocks_but_mismatch_does() {
    let engine = MatchEngine::default();
    let mut job = requirement(json!({ "state": "All India" }));
    job.structured_requirements.gender = GenderRequirement::Female;

    let male = profile(json!({ "gender": "Male" }));
    let unknown = profile(json!({}));

    assert!(!engine.score(&male, &job, evaluation_date()).is_eligible);
    assert!(engine.score(&unknown, &job, evaluation_date()).is_eligible);
}

#[test]
fn result_serializes_with_camel_case_fields() {
    let candidate = profile(json!({ "dateOfBirth": birth_date_for_age(25) }));
    let job = requirement(json!({ "maximumAge": 30 }));

    let result = MatchEngine::default().score(&candidate, &job, evaluation_date());
    let payload = serde_json::to_value(&result).expect("result serializes");

    assert_eq!(payload["isEligible"], json!(true));
    assert_eq!(payload["score"], json!(60));
    assert_eq!(payload["gates"][0]["outcome"]["status"], json!("pass"));
}
