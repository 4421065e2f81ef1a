use super::domain::{ApplicantProfile, JobRequirements, SkillId};
use std::collections::BTreeSet;

/// Malformed profile or job configuration. Always a caller bug, never an applicant outcome.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidInput {
    #[error("skill identifier {0:?} is malformed")]
    MalformedSkill(String),
    #[error("skill level {0} exceeds the maximum of 100")]
    SkillLevelOutOfRange(u8),
    #[error("skill {0} is listed more than once")]
    DuplicateSkill(SkillId),
    #[error("{field} must not be negative (found {value})")]
    NegativeSalary { field: &'static str, value: i64 },
    #[error("salary bounds are inverted (min {min} > max {max})")]
    InvertedSalaryRange { min: i64, max: i64 },
    #[error("salary range has zero width (min = max = {0})")]
    ZeroWidthSalaryRange(i64),
    #[error("job must allow at least one region")]
    EmptyAllowedRegions,
    #[error("allowed region codes must not be blank")]
    BlankRegion,
    #[error("allowed region code {0:?} has surrounding whitespace")]
    PaddedRegion(String),
    #[error("applicant location must not be blank")]
    BlankLocation,
    #[error("applicant location has surrounding whitespace")]
    PaddedLocation,
    #[error("applicant secret must not be blank")]
    EmptySecret,
    #[error("job title must not be blank")]
    BlankTitle,
}

pub fn validate_profile(profile: &ApplicantProfile) -> Result<(), InvalidInput> {
    if profile.expected_salary < 0 {
        return Err(InvalidInput::NegativeSalary {
            field: "expected_salary",
            value: profile.expected_salary,
        });
    }

    let trimmed = profile.location.trim();
    if trimmed.is_empty() {
        return Err(InvalidInput::BlankLocation);
    }
    // Regions are matched verbatim.
    if trimmed.len() != profile.location.len() {
        return Err(InvalidInput::PaddedLocation);
    }

    Ok(())
}

pub fn validate_requirements(requirements: &JobRequirements) -> Result<(), InvalidInput> {
    let mut seen = BTreeSet::new();
    for threshold in &requirements.skill_thresholds {
        if !seen.insert(&threshold.skill) {
            return Err(InvalidInput::DuplicateSkill(threshold.skill.clone()));
        }
    }

    for (field, value) in [
        ("salary_min", requirements.salary_min),
        ("salary_max", requirements.salary_max),
    ] {
        if value < 0 {
            return Err(InvalidInput::NegativeSalary { field, value });
        }
    }

    if requirements.salary_min > requirements.salary_max {
        return Err(InvalidInput::InvertedSalaryRange {
            min: requirements.salary_min,
            max: requirements.salary_max,
        });
    }

    // The privacy score divides by the range width.
    if requirements.salary_range() == 0 {
        return Err(InvalidInput::ZeroWidthSalaryRange(requirements.salary_min));
    }

    if requirements.allowed_regions.is_empty() {
        return Err(InvalidInput::EmptyAllowedRegions);
    }

    for region in &requirements.allowed_regions {
        let trimmed = region.trim();
        if trimmed.is_empty() {
            return Err(InvalidInput::BlankRegion);
        }
        if trimmed.len() != region.len() {
            return Err(InvalidInput::PaddedRegion(region.clone()));
        }
    }

    Ok(())
}
