//! End-to-end scenarios for eligibility claims and application intake, exercised through the
//! public engine and service facade only.

mod common {
    use std::collections::{BTreeMap, BTreeSet, HashMap};
    use std::sync::{Arc, Mutex};

    use ghosthire::applications::{
        ApplicationId, ApplicationRecord, ApplicationRepository, ApplicationService,
        RepositoryError,
    };
    use ghosthire::eligibility::{
        ApplicantProfile, ApplicantSecret, DisclosureChoices, EligibilityEngine, JobId,
        JobPosting, JobRequirements, SkillId, SkillLevel, SkillThreshold,
    };

    fn skill(name: &str) -> SkillId {
        SkillId::parse(name).expect("valid skill")
    }

    fn level(value: u8) -> SkillLevel {
        SkillLevel::new(value).expect("valid level")
    }

    pub(super) fn applicant(rust: u8) -> ApplicantProfile {
        ApplicantProfile {
            secret: ApplicantSecret::new("0x9c1e-applicant"),
            skills: BTreeMap::from([(skill("rust"), level(rust)), (skill("typescript"), level(78))]),
            location: "US-CA".to_string(),
            expected_salary: 120_000,
        }
    }

    pub(super) fn requirements() -> JobRequirements {
        JobRequirements {
            skill_thresholds: vec![
                SkillThreshold {
                    skill: skill("rust"),
                    minimum: level(80),
                },
                SkillThreshold {
                    skill: skill("typescript"),
                    minimum: level(60),
                },
            ],
            salary_min: 100_000,
            salary_max: 150_000,
            allowed_regions: BTreeSet::from(["US-CA".to_string()]),
        }
    }

    pub(super) fn job() -> JobPosting {
        JobPosting {
            id: JobId(1),
            title: "Protocol Engineer".to_string(),
            requirements: requirements(),
        }
    }

    pub(super) fn disclosure() -> DisclosureChoices {
        DisclosureChoices {
            reveal_location_precisely: false,
            reveal_salary_exactly: true,
        }
    }

    #[derive(Default)]
    pub(super) struct MemoryRepository {
        jobs: Mutex<HashMap<JobId, JobPosting>>,
        records: Mutex<Vec<ApplicationRecord>>,
    }

    impl ApplicationRepository for MemoryRepository {
        fn insert_job(&self, posting: JobPosting) -> Result<JobPosting, RepositoryError> {
            let mut jobs = self.jobs.lock().expect("jobs mutex poisoned");
            jobs.insert(posting.id, posting.clone());
            Ok(posting)
        }

        fn job(&self, id: JobId) -> Result<Option<JobPosting>, RepositoryError> {
            Ok(self.jobs.lock().expect("jobs mutex poisoned").get(&id).cloned())
        }

        fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
            let mut records = self.records.lock().expect("records mutex poisoned");
            if records
                .iter()
                .any(|existing| existing.job_id == record.job_id && existing.nullifier == record.nullifier)
            {
                return Err(RepositoryError::Conflict);
            }
            records.push(record.clone());
            Ok(record)
        }

        fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
            let records = self.records.lock().expect("records mutex poisoned");
            Ok(records
                .iter()
                .find(|record| &record.application_id == id)
                .cloned())
        }

        fn for_job(&self, job_id: JobId) -> Result<Vec<ApplicationRecord>, RepositoryError> {
            let records = self.records.lock().expect("records mutex poisoned");
            Ok(records
                .iter()
                .filter(|record| record.job_id == job_id)
                .cloned()
                .collect())
        }
    }

    pub(super) fn service() -> ApplicationService<MemoryRepository> {
        ApplicationService::new(
            Arc::new(MemoryRepository::default()),
            Arc::new(EligibilityEngine::default()),
        )
    }
}

use common::*;
use ghosthire::applications::{
    ApplicationRequest, ApplicationServiceError, JobDraft, SubmissionOutcome,
};
use ghosthire::eligibility::{check_eligibility, EligibilityEngine, EligibilityResult};

#[test]
fn qualified_applicant_receives_full_privacy_score() {
    let engine = EligibilityEngine::default();

    assert_eq!(
        check_eligibility(&applicant(85), &requirements()).expect("valid"),
        EligibilityResult::Eligible
    );

    let claim = engine
        .assemble_claim(&applicant(85), &job(), disclosure())
        .expect("valid");

    assert!(claim.eligible);
    assert_eq!(claim.privacy_score.map(|score| score.value()), Some(100));
    assert!(claim.nullifier.is_some());
    assert!(claim.failure_reason.is_none());
}

#[test]
fn underqualified_applicant_is_rejected_without_nullifier() {
    let engine = EligibilityEngine::default();

    let claim = engine
        .assemble_claim(&applicant(30), &job(), disclosure())
        .expect("valid");

    assert!(!claim.eligible);
    assert_eq!(claim.failure_reason.as_deref(), Some("insufficient rust"));
    assert!(claim.nullifier.is_none());
    assert!(claim.privacy_score.is_none());
}

#[test]
fn intake_accepts_once_and_blocks_the_retry() {
    let service = service();
    let posting = service
        .post_job(JobDraft {
            title: "Protocol Engineer".to_string(),
            requirements: requirements(),
        })
        .expect("job posts");

    let request = || ApplicationRequest {
        profile: applicant(85),
        disclosure: disclosure(),
    };

    let first = service.submit(posting.id, request()).expect("first submission");
    let record = match first {
        SubmissionOutcome::Accepted(record) => record,
        other => panic!("expected acceptance, got {other:?}"),
    };
    assert_eq!(record.privacy_score, 100);
    assert_eq!(
        service.get(&record.application_id).expect("stored"),
        record
    );

    let retry = service.submit(posting.id, request());
    assert!(matches!(
        retry,
        Err(ApplicationServiceError::DuplicateApplication(_))
    ));

    let rejected = service
        .submit(
            posting.id,
            ApplicationRequest {
                profile: applicant(30),
                disclosure: disclosure(),
            },
        )
        .expect("rejection is not an error");
    assert!(matches!(rejected, SubmissionOutcome::Rejected(_)));
    assert_eq!(
        service
            .applications_for_job(posting.id)
            .expect("job exists")
            .len(),
        1
    );
}
