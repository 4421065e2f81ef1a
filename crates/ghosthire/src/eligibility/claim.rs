use serde::Serialize;

use super::checker::{check_eligibility, EligibilityResult, IneligibilityReason};
use super::domain::{ApplicantProfile, DisclosureChoices, JobId, JobPosting, JobRequirements};
use super::nullifier::{Nullifier, NullifierDeriver};
use super::scoring::{PrivacyScore, PrivacyScorer, ScoringConfig};
use super::validation::InvalidInput;
use crate::config::EngineSettings;

/// Bundled outcome handed to the submission boundary.
///
/// `nullifier` and `privacy_score` are only present for eligible applicants. The claim
/// never carries profile values; a failure is reported by its summary alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityClaim {
    pub job_id: JobId,
    pub eligible: bool,
    pub nullifier: Option<Nullifier>,
    pub privacy_score: Option<PrivacyScore>,
    pub failure_reason: Option<String>,
}

impl EligibilityClaim {
    fn ineligible(job_id: JobId, reason: &IneligibilityReason) -> Self {
        Self {
            job_id,
            eligible: false,
            nullifier: None,
            privacy_score: None,
            failure_reason: Some(reason.summary()),
        }
    }
}

/// Entry point for the proof/submission boundary. Owns no I/O and no shared state.
#[derive(Debug, Clone, Default)]
pub struct EligibilityEngine {
    nullifiers: NullifierDeriver,
    scorer: PrivacyScorer,
}

impl EligibilityEngine {
    pub fn new(nullifiers: NullifierDeriver, scorer: PrivacyScorer) -> Self {
        Self { nullifiers, scorer }
    }

    pub fn from_settings(settings: &EngineSettings) -> Self {
        Self::new(
            NullifierDeriver::new(settings.nullifier_domain.clone()),
            PrivacyScorer::new(ScoringConfig::default()),
        )
    }

    pub fn nullifiers(&self) -> &NullifierDeriver {
        &self.nullifiers
    }

    pub fn scorer(&self) -> &PrivacyScorer {
        &self.scorer
    }

    pub fn check(
        &self,
        profile: &ApplicantProfile,
        requirements: &JobRequirements,
    ) -> Result<EligibilityResult, InvalidInput> {
        check_eligibility(profile, requirements)
    }

    /// Re-checks eligibility from scratch, then derives the nullifier and score.
    ///
    /// Ineligible applicants get neither, so no nullifier exists for an application
    /// that was never submitted.
    pub fn assemble_claim(
        &self,
        profile: &ApplicantProfile,
        job: &JobPosting,
        disclosure: DisclosureChoices,
    ) -> Result<EligibilityClaim, InvalidInput> {
        if let EligibilityResult::Ineligible(reason) = self.check(profile, &job.requirements)? {
            return Ok(EligibilityClaim::ineligible(job.id, &reason));
        }

        let nullifier = self.nullifiers.derive(&profile.secret, job.id)?;
        let privacy_score = self
            .scorer
            .compute_score(profile, &job.requirements, disclosure)?;

        Ok(EligibilityClaim {
            job_id: job.id,
            eligible: true,
            nullifier: Some(nullifier),
            privacy_score: Some(privacy_score),
            failure_reason: None,
        })
    }
}
