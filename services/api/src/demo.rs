use crate::infra::{parse_date, read_json};
use chrono::{Datelike, Local, NaiveDate};
use clap::Args;
use govjob_match::config::{AppConfig, MatchingConfig};
use govjob_match::eligibility::{
    recommend, AgeRelaxationRule, CandidateProfile, CriterionStatus, EducationEntry,
    EducationLevel, EducationRequirementGroup, Gender, GenderRequirement, JobId, JobPosting,
    JobRequirement, JobStatus, MatchEngine, MatchResult, QualificationChecklist, Recommendation,
    ReservationCategory, ScoringConfig, StructuredRequirements,
};
use govjob_match::error::AppError;
use std::io::Write;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Candidate profile JSON file
    #[arg(long)]
    pub(crate) candidate: PathBuf,
    /// Job requirement JSON file
    #[arg(long)]
    pub(crate) job: PathBuf,
    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the per-criterion checklist as well
    #[arg(long)]
    pub(crate) checklist: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Candidate profile JSON file
    #[arg(long)]
    pub(crate) candidate: PathBuf,
    /// JSON array of job postings
    #[arg(long)]
    pub(crate) jobs: PathBuf,
    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Maximum number of postings to list
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Emit the ranking as CSV on stdout
    #[arg(long)]
    pub(crate) csv: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the evaluation date (defaults to today).
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

fn engine_for(config: &MatchingConfig) -> MatchEngine {
    MatchEngine::new(
        ScoringConfig::default().with_nationwide_state(config.nationwide_state.clone()),
    )
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let CheckArgs {
        candidate,
        job,
        today,
        checklist,
    } = args;

    let candidate: CandidateProfile = read_json(&candidate)?;
    let job: JobRequirement = read_json(&job)?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let engine = engine_for(&AppConfig::load()?.matching);

    render_profile(&candidate);
    let result = engine.score(&candidate, &job, today);
    render_result(&result);
    if checklist {
        let view = QualificationChecklist::from_result(&engine, &candidate, &job, result);
        render_checklist(&view);
    }

    Ok(())
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        candidate,
        jobs,
        today,
        limit,
        csv,
    } = args;

    let candidate: CandidateProfile = read_json(&candidate)?;
    let postings: Vec<JobPosting> = read_json(&jobs)?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let config = AppConfig::load()?.matching;
    let limit = limit
        .unwrap_or(config.max_recommendations)
        .clamp(1, config.max_recommendations);

    let ranked = recommend(&engine_for(&config), &candidate, &postings, today, limit);

    if csv {
        let stdout = std::io::stdout();
        write_csv(stdout.lock(), &ranked)?;
    } else {
        render_recommendations(&ranked, postings.len(), today);
    }

    Ok(())
}

pub(crate) fn write_csv<W: Write>(writer: W, ranked: &[Recommendation]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(writer);
    writer
        .write_record(["rank", "job_id", "title", "organization", "score", "reasons"])
        .map_err(std::io::Error::from)?;
    for (index, recommendation) in ranked.iter().enumerate() {
        let rank = (index + 1).to_string();
        let score = recommendation.result.score.to_string();
        let reasons = recommendation.result.reasons.join("; ");
        writer
            .write_record([
                rank.as_str(),
                recommendation.job_id.0.as_str(),
                recommendation.title.as_str(),
                recommendation.organization.as_deref().unwrap_or(""),
                score.as_str(),
                reasons.as_str(),
            ])
            .map_err(std::io::Error::from)?;
    }
    writer.flush()?;
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let engine = engine_for(&MatchingConfig::default());

    println!("Government job eligibility demo (evaluated on {today})");
    for scenario in demo_scenarios(today) {
        println!("\n{}", scenario.title);
        render_profile(&scenario.candidate);
        let result = engine.score(&scenario.candidate, &scenario.job, today);
        render_result(&result);
        let view = QualificationChecklist::from_result(
            &engine,
            &scenario.candidate,
            &scenario.job,
            result,
        );
        render_checklist(&view);
    }

    let candidate = graduate_candidate(today, 25);
    let postings = demo_catalog();
    let ranked = recommend(&engine, &candidate, &postings, today, 5);
    println!();
    render_recommendations(&ranked, postings.len(), today);

    Ok(())
}

fn render_profile(candidate: &CandidateProfile) {
    match candidate.highest_education() {
        Some(level) => println!("- Highest qualification: {}", level.label()),
        None => println!("- Highest qualification: not on file"),
    }
}

fn render_result(result: &MatchResult) {
    let verdict = if result.is_eligible {
        "eligible"
    } else {
        "not eligible"
    };
    println!("- Score {} ({verdict})", result.score);
    for reason in &result.reasons {
        println!("  - {reason}");
    }
    for (gate, missing) in result.indeterminate_gates() {
        println!("  ? {} skipped: {}", gate.label(), missing.prompt());
    }
}

fn render_checklist(checklist: &QualificationChecklist) {
    println!("  Checklist:");
    for check in &checklist.criteria {
        let badge = match check.status {
            CriterionStatus::Pass => "PASS",
            CriterionStatus::Fail => "FAIL",
            CriterionStatus::Warning => "WARN",
        };
        println!("    [{badge}] {}: {}", check.criterion.label(), check.detail);
    }
    if checklist.needs_profile_completion() {
        println!("  Complete your profile to resolve the warnings above.");
    }
}

fn render_recommendations(ranked: &[Recommendation], considered: usize, today: NaiveDate) {
    println!(
        "Recommendations for {today}: {} eligible of {considered} postings",
        ranked.len()
    );
    for (index, recommendation) in ranked.iter().enumerate() {
        match &recommendation.organization {
            Some(organization) => println!(
                "  {}. {} ({organization}) score {}",
                index + 1,
                recommendation.title,
                recommendation.result.score
            ),
            None => println!(
                "  {}. {} score {}",
                index + 1,
                recommendation.title,
                recommendation.result.score
            ),
        }
    }
}

struct DemoScenario {
    title: &'static str,
    candidate: CandidateProfile,
    job: JobRequirement,
}

fn years_before(today: NaiveDate, years: i32) -> Option<NaiveDate> {
    today
        .with_year(today.year() - years)
        .or_else(|| NaiveDate::from_ymd_opt(today.year() - years, 3, 1))
}

fn graduate_candidate(today: NaiveDate, age: i32) -> CandidateProfile {
    CandidateProfile {
        date_of_birth: years_before(today, age),
        category: ReservationCategory::General,
        gender: Some(Gender::Male),
        domicile_state: Some("Maharashtra".to_string()),
        preferred_states: vec!["Delhi".to_string()],
        education_history: vec![
            EducationEntry::new(EducationLevel::Twelfth).with_stream("Science"),
            EducationEntry::new(EducationLevel::Graduate).with_stream("Computer Science"),
        ],
    }
}

fn nationwide_job() -> JobRequirement {
    JobRequirement {
        minimum_age: Some(21),
        maximum_age: Some(30),
        state: Some(govjob_match::eligibility::NATIONWIDE_STATE.to_string()),
        ..JobRequirement::default()
    }
}

fn demo_scenarios(today: NaiveDate) -> Vec<DemoScenario> {
    let mut mechanical = graduate_candidate(today, 25);
    mechanical.education_history =
        vec![EducationEntry::new(EducationLevel::Graduate).with_stream("Mechanical Engineering")];

    let mut postgraduate = graduate_candidate(today, 27);
    postgraduate
        .education_history
        .push(EducationEntry::new(EducationLevel::PostGraduate).with_stream("Economics"));

    let mut incomplete = graduate_candidate(today, 25);
    incomplete.date_of_birth = None;
    incomplete.gender = None;

    vec![
        DemoScenario {
            title: "General candidate, nationwide posting",
            candidate: graduate_candidate(today, 25),
            job: nationwide_job(),
        },
        DemoScenario {
            title: "Stream mismatch on an IT posting",
            candidate: mechanical,
            job: JobRequirement {
                structured_requirements: StructuredRequirements {
                    gender: GenderRequirement::Any,
                    education: vec![EducationRequirementGroup::new([
                        EducationLevel::Graduate,
                        EducationLevel::PostGraduate,
                    ])
                    .with_streams(["Computer Science", "IT"])],
                },
                ..nationwide_job()
            },
        },
        DemoScenario {
            title: "SC candidate using age relaxation",
            candidate: CandidateProfile {
                category: ReservationCategory::Sc,
                ..graduate_candidate(today, 34)
            },
            job: JobRequirement {
                age_relaxation_rules: vec![AgeRelaxationRule {
                    category: ReservationCategory::Sc,
                    years: 5,
                }],
                ..nationwide_job()
            },
        },
        DemoScenario {
            title: "Postgraduate applying in home state",
            candidate: postgraduate,
            job: JobRequirement {
                state: Some("Maharashtra".to_string()),
                ..nationwide_job()
            },
        },
        DemoScenario {
            title: "Incomplete profile on a women-only posting",
            candidate: incomplete,
            job: JobRequirement {
                structured_requirements: StructuredRequirements {
                    gender: GenderRequirement::Female,
                    education: Vec::new(),
                },
                ..nationwide_job()
            },
        },
    ]
}

fn demo_posting(
    id: &str,
    title: &str,
    organization: &str,
    requirement: JobRequirement,
) -> JobPosting {
    JobPosting {
        id: JobId(id.to_string()),
        title: title.to_string(),
        organization: Some(organization.to_string()),
        status: JobStatus::Open,
        last_date: None,
        requirement,
    }
}

fn demo_catalog() -> Vec<JobPosting> {
    let mut archived = demo_posting(
        "ssc-chsl-2023",
        "Combined Higher Secondary Level 2023",
        "Staff Selection Commission",
        nationwide_job(),
    );
    archived.status = JobStatus::Closed;

    vec![
        demo_posting(
            "ssc-cgl",
            "Combined Graduate Level",
            "Staff Selection Commission",
            nationwide_job(),
        ),
        demo_posting(
            "mpsc-clerk",
            "Clerk-Typist",
            "Maharashtra Public Service Commission",
            JobRequirement {
                state: Some("Maharashtra".to_string()),
                ..nationwide_job()
            },
        ),
        demo_posting(
            "dsssb-tgt",
            "Trained Graduate Teacher",
            "Delhi Subordinate Services Selection Board",
            JobRequirement {
                state: Some("Delhi".to_string()),
                ..nationwide_job()
            },
        ),
        demo_posting(
            "bpsc-wcdo",
            "Women Development Officer",
            "Bihar Public Service Commission",
            JobRequirement {
                state: Some("Bihar".to_string()),
                structured_requirements: StructuredRequirements {
                    gender: GenderRequirement::Female,
                    education: Vec::new(),
                },
                ..nationwide_job()
            },
        ),
        archived,
    ]
}
