use ghosthire::applications::{
    ApplicationId, ApplicationRecord, ApplicationRepository, RepositoryError,
};
use ghosthire::eligibility::{JobId, JobPosting, Nullifier};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default)]
struct Tables {
    jobs: BTreeMap<JobId, JobPosting>,
    applications: HashMap<ApplicationId, ApplicationRecord>,
    nullifiers: HashSet<(JobId, Nullifier)>,
}

/// Process-local storage. One mutex covers all tables so the nullifier check and the
/// insert happen atomically.
#[derive(Default, Clone)]
pub(crate) struct InMemoryApplicationRepository {
    tables: Arc<Mutex<Tables>>,
}

impl ApplicationRepository for InMemoryApplicationRepository {
    fn insert_job(&self, posting: JobPosting) -> Result<JobPosting, RepositoryError> {
        let mut guard = self.tables.lock().expect("repository mutex poisoned");
        if guard.jobs.contains_key(&posting.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.jobs.insert(posting.id, posting.clone());
        Ok(posting)
    }

    fn job(&self, id: JobId) -> Result<Option<JobPosting>, RepositoryError> {
        let guard = self.tables.lock().expect("repository mutex poisoned");
        Ok(guard.jobs.get(&id).cloned())
    }

    fn insert(&self, record: ApplicationRecord) -> Result<ApplicationRecord, RepositoryError> {
        let mut guard = self.tables.lock().expect("repository mutex poisoned");
        if guard.applications.contains_key(&record.application_id)
            || !guard.nullifiers.insert((record.job_id, record.nullifier))
        {
            return Err(RepositoryError::Conflict);
        }
        guard
            .applications
            .insert(record.application_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<ApplicationRecord>, RepositoryError> {
        let guard = self.tables.lock().expect("repository mutex poisoned");
        Ok(guard.applications.get(id).cloned())
    }

    fn for_job(&self, job_id: JobId) -> Result<Vec<ApplicationRecord>, RepositoryError> {
        let guard = self.tables.lock().expect("repository mutex poisoned");
        let mut records = guard
            .applications
            .values()
            .filter(|record| record.job_id == job_id)
            .cloned()
            .collect::<Vec<_>>();
        records.sort_by(|a, b| {
            a.submitted_at
                .cmp(&b.submitted_at)
                .then_with(|| a.application_id.0.cmp(&b.application_id.0))
        });
        Ok(records)
    }
}
