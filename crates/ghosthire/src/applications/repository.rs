use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::ApplicationId;
use crate::eligibility::{DisclosureChoices, JobId, JobPosting, Nullifier, PrivacyScore};

/// Stored application. Holds no private profile data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub application_id: ApplicationId,
    pub job_id: JobId,
    pub nullifier: Nullifier,
    pub privacy_score: u8,
    pub disclosure: DisclosureChoices,
    pub submitted_at: DateTime<Utc>,
}

impl ApplicationRecord {
    pub fn view(&self) -> ApplicationView {
        ApplicationView {
            application_id: self.application_id.clone(),
            job_id: self.job_id,
            nullifier: self.nullifier.to_hex(),
            privacy_score: self.privacy_score,
            submitted_at: self.submitted_at,
            status: "submitted",
        }
    }

    pub(crate) fn new(
        application_id: ApplicationId,
        job_id: JobId,
        nullifier: Nullifier,
        privacy_score: PrivacyScore,
        disclosure: DisclosureChoices,
    ) -> Self {
        Self {
            application_id,
            job_id,
            nullifier,
            privacy_score: privacy_score.value(),
            disclosure,
            submitted_at: Utc::now(),
        }
    }
}

/// Storage abstraction so the service can be exercised in isolation.
///
/// `insert` must perform an atomic check-and-insert on `(job_id, nullifier)`: two
/// concurrent inserts with the same pair must yield exactly one success and one
/// [`RepositoryError::Conflict`].
pub trait ApplicationRepository: Send + Sync {
    fn insert_job(&self, posting: JobPosting) -> Result<JobPosting, RepositoryError>;
    fn job(&self, id: JobId) -> Result<Option<JobPosting>, RepositoryError>;
    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError>;
    fn for_job(&self, job_id: JobId) -> Result<Vec<ApplicationRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Public representation of a stored application.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationView {
    pub application_id: ApplicationId,
    pub job_id: JobId,
    pub nullifier: String,
    pub privacy_score: u8,
    pub submitted_at: DateTime<Utc>,
    pub status: &'static str,
}
