//! Job postings and application intake around the eligibility engine.
//!
//! The service re-runs the full eligibility pipeline on every submission and relies on the
//! repository's `(job, nullifier)` uniqueness to block duplicate applications.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{ApplicationId, ApplicationRequest, JobDraft};
pub use repository::{ApplicationRecord, ApplicationRepository, ApplicationView, RepositoryError};
pub use router::application_router;
pub use service::{ApplicationService, ApplicationServiceError, SubmissionOutcome};
