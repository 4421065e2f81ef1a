use std::collections::{BTreeMap, BTreeSet};

use crate::eligibility::domain::{
    ApplicantProfile, ApplicantSecret, DisclosureChoices, JobId, JobPosting, JobRequirements,
    SkillId, SkillLevel, SkillThreshold,
};

pub(super) fn skill(name: &str) -> SkillId {
    SkillId::parse(name).expect("valid skill id")
}

pub(super) fn level(value: u8) -> SkillLevel {
    SkillLevel::new(value).expect("valid skill level")
}

pub(super) fn profile(skills: &[(&str, u8)], location: &str, expected_salary: i64) -> ApplicantProfile {
    ApplicantProfile {
        secret: ApplicantSecret::new("applicant-7f3a"),
        skills: skills
            .iter()
            .map(|(name, value)| (skill(name), level(*value)))
            .collect::<BTreeMap<_, _>>(),
        location: location.to_string(),
        expected_salary,
    }
}

pub(super) fn requirements(
    thresholds: &[(&str, u8)],
    salary_min: i64,
    salary_max: i64,
    regions: &[&str],
) -> JobRequirements {
    JobRequirements {
        skill_thresholds: thresholds
            .iter()
            .map(|(name, minimum)| SkillThreshold {
                skill: skill(name),
                minimum: level(*minimum),
            })
            .collect(),
        salary_min,
        salary_max,
        allowed_regions: regions
            .iter()
            .map(|region| region.to_string())
            .collect::<BTreeSet<_>>(),
    }
}

pub(super) fn reference_profile() -> ApplicantProfile {
    profile(&[("rust", 85), ("typescript", 78)], "US-CA", 120_000)
}

pub(super) fn reference_requirements() -> JobRequirements {
    requirements(
        &[("rust", 80), ("typescript", 60)],
        100_000,
        150_000,
        &["US-CA"],
    )
}

pub(super) fn reference_job() -> JobPosting {
    JobPosting {
        id: JobId(42),
        title: "Senior Rust Engineer".to_string(),
        requirements: reference_requirements(),
    }
}

pub(super) fn reference_disclosure() -> DisclosureChoices {
    DisclosureChoices {
        reveal_location_precisely: false,
        reveal_salary_exactly: true,
    }
}

pub(super) fn all_disclosures() -> [DisclosureChoices; 4] {
    [
        DisclosureChoices {
            reveal_location_precisely: false,
            reveal_salary_exactly: false,
        },
        DisclosureChoices {
            reveal_location_precisely: true,
            reveal_salary_exactly: false,
        },
        DisclosureChoices {
            reveal_location_precisely: false,
            reveal_salary_exactly: true,
        },
        DisclosureChoices {
            reveal_location_precisely: true,
            reveal_salary_exactly: true,
        },
    ]
}
