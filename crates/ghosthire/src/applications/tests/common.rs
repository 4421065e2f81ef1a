use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::{json, Value};

use crate::applications::repository::{
    ApplicationRecord, ApplicationRepository, RepositoryError,
};
use crate::applications::{application_router, ApplicationId, ApplicationRequest, JobDraft};
use crate::applications::ApplicationService;
use crate::eligibility::{EligibilityEngine, JobId, JobPosting, Nullifier};

pub(super) fn job_draft_json() -> Value {
    json!({
        "title": "Senior Rust Engineer",
        "requirements": {
            "skill_thresholds": [
                { "skill": "rust", "minimum": 80 },
                { "skill": "typescript", "minimum": 60 }
            ],
            "salary_min": 100000,
            "salary_max": 150000,
            "allowed_regions": ["US-CA"]
        }
    })
}

pub(super) fn job_draft() -> JobDraft {
    serde_json::from_value(job_draft_json()).expect("valid job draft")
}

pub(super) fn application_json(secret: &str, rust: u8) -> Value {
    json!({
        "profile": {
            "secret": secret,
            "skills": { "rust": rust, "typescript": 78 },
            "location": "US-CA",
            "expected_salary": 120000
        },
        "disclosure": {
            "reveal_location_precisely": false,
            "reveal_salary_exactly": true
        }
    })
}

pub(super) fn application(secret: &str, rust: u8) -> ApplicationRequest {
    serde_json::from_value(application_json(secret, rust)).expect("valid application")
}

pub(super) fn build_service() -> (ApplicationService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service =
        ApplicationService::new(repository.clone(), Arc::new(EligibilityEngine::default()));
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    jobs: Arc<Mutex<HashMap<JobId, JobPosting>>>,
    pub(super) records: Arc<Mutex<HashMap<ApplicationId, ApplicationRecord>>>,
}

impl ApplicationRepository for MemoryRepository {
    fn insert_job(&self, posting: JobPosting) -> Result<JobPosting, RepositoryError> {
        let mut guard = self.jobs.lock().expect("repository mutex poisoned");
        if guard.contains_key(&posting.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(posting.id, posting.clone());
        Ok(posting)
    }

    fn job(&self, id: JobId) -> Result<Option<JobPosting>, RepositoryError> {
        let guard = self.jobs.lock().expect("repository mutex poisoned");
        Ok(guard.get(&id).cloned())
    }

    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let duplicate = guard.values().any(|existing| {
            existing.job_id == record.job_id && existing.nullifier == record.nullifier
        });
        if duplicate || guard.contains_key(&record.application_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.application_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn for_job(&self, job_id: JobId) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .values()
            .filter(|record| record.job_id == job_id)
            .cloned()
            .collect())
    }
}

/// Knows one job but cannot persist applications.
pub(super) struct UnavailableRepository {
    pub(super) job: JobPosting,
}

impl ApplicationRepository for UnavailableRepository {
    fn insert_job(&self, _posting: JobPosting) -> Result<JobPosting, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn job(&self, id: JobId) -> Result<Option<JobPosting>, RepositoryError> {
        Ok((id == self.job.id).then(|| self.job.clone()))
    }

    fn insert(&self, _record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn for_job(&self, _job_id: JobId) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn unavailable_service() -> ApplicationService<UnavailableRepository> {
    let draft = job_draft();
    let repository = UnavailableRepository {
        job: JobPosting {
            id: JobId(7),
            title: draft.title,
            requirements: draft.requirements,
        },
    };
    ApplicationService::new(Arc::new(repository), Arc::new(EligibilityEngine::default()))
}

pub(super) fn sample_nullifier() -> Nullifier {
    Nullifier::new([7u8; 32])
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn router_with_service(service: ApplicationService<MemoryRepository>) -> axum::Router {
    application_router(Arc::new(service))
}
