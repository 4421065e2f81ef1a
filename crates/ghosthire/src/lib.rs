//! GhostHire: privacy-preserving job applications.
//!
//! [`eligibility`] holds the pure engine and [`applications`] wraps it in the submission
//! service used by the HTTP boundary.

pub mod applications;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod telemetry;
