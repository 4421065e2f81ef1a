use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::domain::{ApplicationId, ApplicationRequest, JobDraft};
use super::repository::{ApplicationRecord, ApplicationRepository, RepositoryError};
use crate::eligibility::{
    validate_requirements, EligibilityClaim, EligibilityEngine, InvalidInput, JobId, JobPosting,
};

/// Outcome of a submission. Rejections are normal results, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted(ApplicationRecord),
    Rejected(EligibilityClaim),
}

/// Service composing the eligibility engine with job and application storage.
pub struct ApplicationService<R> {
    repository: Arc<R>,
    engine: Arc<EligibilityEngine>,
    job_sequence: AtomicU64,
    application_sequence: AtomicU64,
}

impl<R> ApplicationService<R>
where
    R: ApplicationRepository + 'static,
{
    pub fn new(repository: Arc<R>, engine: Arc<EligibilityEngine>) -> Self {
        Self {
            repository,
            engine,
            job_sequence: AtomicU64::new(1),
            application_sequence: AtomicU64::new(1),
        }
    }

    pub fn engine(&self) -> &EligibilityEngine {
        &self.engine
    }

    fn next_application_id(&self) -> ApplicationId {
        let id = self.application_sequence.fetch_add(1, Ordering::Relaxed);
        ApplicationId(format!("app-{id:06}"))
    }

    /// Validate and publish a job posting.
    pub fn post_job(&self, draft: JobDraft) -> Result<JobPosting, ApplicationServiceError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(InvalidInput::BlankTitle.into());
        }
        validate_requirements(&draft.requirements)?;

        let posting = JobPosting {
            id: JobId(self.job_sequence.fetch_add(1, Ordering::Relaxed)),
            title: title.to_string(),
            requirements: draft.requirements,
        };

        let stored = self.repository.insert_job(posting)?;
        info!(job_id = %stored.id, "job posted");
        Ok(stored)
    }

    pub fn job(&self, job_id: JobId) -> Result<JobPosting, ApplicationServiceError> {
        self.repository
            .job(job_id)?
            .ok_or(ApplicationServiceError::UnknownJob(job_id))
    }

    /// Re-verify eligibility and store the application if it qualifies.
    pub fn submit(
        &self,
        job_id: JobId,
        request: ApplicationRequest,
    ) -> Result<SubmissionOutcome, ApplicationServiceError> {
        let job = self.job(job_id)?;
        let claim = self
            .engine
            .assemble_claim(&request.profile, &job, request.disclosure)?;

        let (nullifier, privacy_score) = match (claim.nullifier, claim.privacy_score) {
            (Some(nullifier), Some(privacy_score)) if claim.eligible => (nullifier, privacy_score),
            _ => {
                debug!(
                    job_id = %job_id,
                    reason = claim.failure_reason.as_deref().unwrap_or("unknown"),
                    "application rejected"
                );
                return Ok(SubmissionOutcome::Rejected(claim));
            }
        };

        let record = ApplicationRecord::new(
            self.next_application_id(),
            job_id,
            nullifier,
            privacy_score,
            request.disclosure,
        );

        match self.repository.insert(record) {
            Ok(stored) => {
                info!(
                    job_id = %job_id,
                    application_id = %stored.application_id,
                    privacy_score = stored.privacy_score,
                    "application accepted"
                );
                Ok(SubmissionOutcome::Accepted(stored))
            }
            Err(RepositoryError::Conflict) => {
                warn!(job_id = %job_id, "duplicate application blocked by nullifier");
                Err(ApplicationServiceError::DuplicateApplication(job_id))
            }
            Err(other) => Err(other.into()),
        }
    }

    pub fn get(
        &self,
        application_id: &ApplicationId,
    ) -> Result<ApplicationRecord, ApplicationServiceError> {
        let record = self
            .repository
            .fetch(application_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn applications_for_job(
        &self,
        job_id: JobId,
    ) -> Result<Vec<ApplicationRecord>, ApplicationServiceError> {
        self.job(job_id)?;
        Ok(self.repository.for_job(job_id)?)
    }
}

/// Error raised by the application service.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationServiceError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
    #[error("job {0} does not exist")]
    UnknownJob(JobId),
    #[error("an application to job {0} already exists for this applicant")]
    DuplicateApplication(JobId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
