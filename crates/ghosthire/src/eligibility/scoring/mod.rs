mod config;
mod rules;

pub use config::ScoringConfig;

use serde::Serialize;
use std::fmt;

use super::domain::{ApplicantProfile, DisclosureChoices, JobRequirements};
use super::validation::{validate_profile, validate_requirements, InvalidInput};

/// Integer score in `[0, 100]`; higher means less was revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PrivacyScore(u8);

impl PrivacyScore {
    pub const MAX: u8 = 100;

    fn from_raw(raw: f64) -> Self {
        Self(raw.clamp(0.0, f64::from(Self::MAX)).round() as u8)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for PrivacyScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrivacyFactor {
    Baseline,
    SkillDisclosure,
    LocationPrecision,
    SalaryPrecision,
}

/// Contribution of a single factor, kept for audits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub factor: PrivacyFactor,
    pub points: f64,
    pub notes: String,
}

/// Final score plus the itemized breakdown it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrivacyAssessment {
    pub score: PrivacyScore,
    pub raw_total: f64,
    pub components: Vec<ScoreComponent>,
}

/// Stateless scorer applying a [`ScoringConfig`].
#[derive(Debug, Clone, Default)]
pub struct PrivacyScorer {
    config: ScoringConfig,
}

impl PrivacyScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn assess(
        &self,
        profile: &ApplicantProfile,
        requirements: &JobRequirements,
        disclosure: DisclosureChoices,
    ) -> Result<PrivacyAssessment, InvalidInput> {
        validate_profile(profile)?;
        validate_requirements(requirements)?;

        let components = rules::score_components(profile, requirements, disclosure, &self.config);
        let raw_total: f64 = components.iter().map(|component| component.points).sum();

        Ok(PrivacyAssessment {
            score: PrivacyScore::from_raw(raw_total),
            raw_total,
            components,
        })
    }

    pub fn compute_score(
        &self,
        profile: &ApplicantProfile,
        requirements: &JobRequirements,
        disclosure: DisclosureChoices,
    ) -> Result<PrivacyScore, InvalidInput> {
        self.assess(profile, requirements, disclosure)
            .map(|assessment| assessment.score)
    }
}
