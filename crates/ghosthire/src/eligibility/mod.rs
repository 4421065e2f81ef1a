//! Eligibility verification and privacy scoring.
//!
//! Everything here is a pure function of its inputs and holds no process-wide state.
//! [`EligibilityEngine::assemble_claim`] is the single entry point the submission boundary
//! should call; the individual steps are exported for previews and tests.

mod checker;
mod claim;
pub mod domain;
mod nullifier;
pub mod scoring;
mod validation;

#[cfg(test)]
mod tests;

pub use checker::{check_eligibility, EligibilityResult, IneligibilityReason};
pub use claim::{EligibilityClaim, EligibilityEngine};
pub use domain::{
    coarse_region, ApplicantProfile, ApplicantSecret, DisclosureChoices, JobId, JobPosting,
    JobRequirements, SkillId, SkillLevel, SkillThreshold,
};
pub use nullifier::{Nullifier, NullifierDeriver, DEFAULT_NULLIFIER_DOMAIN};
pub use scoring::{
    PrivacyAssessment, PrivacyFactor, PrivacyScore, PrivacyScorer, ScoreComponent, ScoringConfig,
};
pub use validation::{validate_profile, validate_requirements, InvalidInput};
