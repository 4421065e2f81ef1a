use serde::Serialize;

use super::domain::{ApplicantProfile, JobRequirements, SkillId, SkillLevel};
use super::validation::{validate_profile, validate_requirements, InvalidInput};

/// Verdict for one applicant against one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EligibilityResult {
    Eligible,
    Ineligible(IneligibilityReason),
}

impl EligibilityResult {
    pub fn is_eligible(&self) -> bool {
        matches!(self, EligibilityResult::Eligible)
    }

    pub fn reason(&self) -> Option<&IneligibilityReason> {
        match self {
            EligibilityResult::Eligible => None,
            EligibilityResult::Ineligible(reason) => Some(reason),
        }
    }
}

/// The first check that failed. Later checks are never evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IneligibilityReason {
    InsufficientSkill {
        skill: SkillId,
        required: SkillLevel,
        actual: SkillLevel,
    },
    SalaryOutOfRange {
        expected: i64,
        min: i64,
        max: i64,
    },
    LocationNotAllowed {
        location: String,
    },
}

impl IneligibilityReason {
    /// Applicant-facing text. Carries no private values.
    pub fn summary(&self) -> String {
        match self {
            IneligibilityReason::InsufficientSkill { skill, .. } => {
                format!("insufficient {skill}")
            }
            IneligibilityReason::SalaryOutOfRange { .. } => "salary out of range".to_string(),
            IneligibilityReason::LocationNotAllowed { .. } => "location not allowed".to_string(),
        }
    }
}

/// Check skills (in declaration order), then salary, then location.
pub fn check_eligibility(
    profile: &ApplicantProfile,
    requirements: &JobRequirements,
) -> Result<EligibilityResult, InvalidInput> {
    validate_profile(profile)?;
    validate_requirements(requirements)?;

    for threshold in &requirements.skill_thresholds {
        let actual = profile.skill_level(&threshold.skill);
        if actual < threshold.minimum {
            return Ok(EligibilityResult::Ineligible(
                IneligibilityReason::InsufficientSkill {
                    skill: threshold.skill.clone(),
                    required: threshold.minimum,
                    actual,
                },
            ));
        }
    }

    if !requirements.salary_in_range(profile.expected_salary) {
        return Ok(EligibilityResult::Ineligible(
            IneligibilityReason::SalaryOutOfRange {
                expected: profile.expected_salary,
                min: requirements.salary_min,
                max: requirements.salary_max,
            },
        ));
    }

    if !requirements
        .allowed_regions
        .contains(profile.location.as_str())
    {
        return Ok(EligibilityResult::Ineligible(
            IneligibilityReason::LocationNotAllowed {
                location: profile.location.clone(),
            },
        ));
    }

    Ok(EligibilityResult::Eligible)
}
