use crate::infra::InMemoryApplicationRepository;
use clap::Args;
use ghosthire::applications::{
    ApplicationRequest, ApplicationService, JobDraft, SubmissionOutcome,
};
use ghosthire::config::AppConfig;
use ghosthire::eligibility::{
    ApplicantProfile, DisclosureChoices, EligibilityClaim, EligibilityEngine, JobId, JobPosting,
    JobRequirements, PrivacyAssessment,
};
use ghosthire::error::AppError;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Applicant profile JSON (secret, skills, location, expected_salary)
    #[arg(long)]
    pub(crate) profile: PathBuf,
    /// Job requirements JSON (skill_thresholds, salary bounds, allowed_regions)
    #[arg(long)]
    pub(crate) job: PathBuf,
    /// Job identifier the nullifier is scoped to
    #[arg(long, default_value_t = 1)]
    pub(crate) job_id: u64,
    /// Disclose the precise location instead of the coarse region
    #[arg(long)]
    pub(crate) reveal_location: bool,
    /// Disclose the exact expected salary
    #[arg(long)]
    pub(crate) reveal_salary: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the duplicate-retry step of the walkthrough.
    #[arg(long)]
    pub(crate) skip_retry: bool,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    claim: EligibilityClaim,
    #[serde(skip_serializing_if = "Option::is_none")]
    privacy_breakdown: Option<PrivacyAssessment>,
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = EligibilityEngine::from_settings(&config.engine);

    let profile: ApplicantProfile = read_json(&args.profile)?;
    let requirements: JobRequirements = read_json(&args.job)?;
    let job = JobPosting {
        id: JobId(args.job_id),
        title: args.job.display().to_string(),
        requirements,
    };
    let disclosure = DisclosureChoices {
        reveal_location_precisely: args.reveal_location,
        reveal_salary_exactly: args.reveal_salary,
    };

    let report = build_check_report(&engine, &profile, &job, disclosure)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn build_check_report(
    engine: &EligibilityEngine,
    profile: &ApplicantProfile,
    job: &JobPosting,
    disclosure: DisclosureChoices,
) -> Result<CheckReport, AppError> {
    let claim = engine.assemble_claim(profile, job, disclosure)?;
    let privacy_breakdown = if claim.eligible {
        Some(
            engine
                .scorer()
                .assess(profile, &job.requirements, disclosure)?,
        )
    } else {
        None
    };

    Ok(CheckReport {
        claim,
        privacy_breakdown,
    })
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = Arc::new(EligibilityEngine::from_settings(&config.engine));
    let repository = Arc::new(InMemoryApplicationRepository::default());
    let service = ApplicationService::new(repository, engine);

    println!("GhostHire eligibility demo");
    println!("Nullifier domain: {}", config.engine.nullifier_domain);

    let draft: JobDraft = serde_json::from_value(json!({
        "title": "Senior Rust Engineer",
        "requirements": {
            "skill_thresholds": [
                { "skill": "rust", "minimum": 80 },
                { "skill": "typescript", "minimum": 60 }
            ],
            "salary_min": 100000,
            "salary_max": 150000,
            "allowed_regions": ["US-CA", "US-NY", "EU"]
        }
    }))?;

    let job = match service.post_job(draft) {
        Ok(job) => job,
        Err(err) => {
            println!("  Job posting rejected: {}", err);
            return Ok(());
        }
    };
    println!(
        "\nPosted job {} \"{}\" (salary {}..={}, {} regions)",
        job.id,
        job.title,
        job.requirements.salary_min,
        job.requirements.salary_max,
        job.requirements.allowed_regions.len()
    );

    let eligible = demo_request(85, "applicant-7f3a")?;
    let underqualified = demo_request(30, "applicant-91c2")?;

    println!("\nApplicant A (rust 85, typescript 78, US-CA, expects 120000)");
    submit_and_report(&service, job.id, eligible.clone());

    if !args.skip_retry {
        println!("\nApplicant A retries the same application");
        submit_and_report(&service, job.id, eligible);
    }

    println!("\nApplicant B (rust 30, typescript 78, US-CA, expects 120000)");
    submit_and_report(&service, job.id, underqualified);

    match service.applications_for_job(job.id) {
        Ok(records) => {
            println!("\nStored applications for job {}: {}", job.id, records.len());
            for record in records {
                match serde_json::to_string_pretty(&record.view()) {
                    Ok(json) => println!("{}", json),
                    Err(err) => println!("  Public view unavailable: {}", err),
                }
            }
        }
        Err(err) => println!("  Listing unavailable: {}", err),
    }

    Ok(())
}

fn demo_request(rust_level: u8, secret: &str) -> Result<ApplicationRequest, AppError> {
    Ok(serde_json::from_value(json!({
        "profile": {
            "secret": secret,
            "skills": { "rust": rust_level, "typescript": 78 },
            "location": "US-CA",
            "expected_salary": 120000
        },
        "disclosure": {
            "reveal_location_precisely": false,
            "reveal_salary_exactly": true
        }
    }))?)
}

fn submit_and_report(
    service: &ApplicationService<InMemoryApplicationRepository>,
    job_id: JobId,
    request: ApplicationRequest,
) {
    match service.submit(job_id, request) {
        Ok(SubmissionOutcome::Accepted(record)) => {
            println!(
                "- Accepted as {} (privacy score {})",
                record.application_id, record.privacy_score
            );
            println!("  Nullifier: {}", record.nullifier);
        }
        Ok(SubmissionOutcome::Rejected(claim)) => {
            println!(
                "- Not eligible: {}",
                claim.failure_reason.as_deref().unwrap_or("unknown")
            );
            println!("  No nullifier derived, nothing stored");
        }
        Err(err) => println!("- Submission refused: {}", err),
    }
}
