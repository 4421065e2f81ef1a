use super::super::domain::{coarse_region, ApplicantProfile, DisclosureChoices, JobRequirements};
use super::config::ScoringConfig;
use super::{PrivacyFactor, ScoreComponent};

/// One component per factor, in a fixed order. Requirements must already be validated.
pub(crate) fn score_components(
    profile: &ApplicantProfile,
    requirements: &JobRequirements,
    disclosure: DisclosureChoices,
    config: &ScoringConfig,
) -> Vec<ScoreComponent> {
    vec![
        ScoreComponent {
            factor: PrivacyFactor::Baseline,
            points: config.baseline,
            notes: "baseline".to_string(),
        },
        skill_component(profile, config),
        location_component(profile, disclosure, config),
        salary_component(profile, requirements, disclosure, config),
    ]
}

fn skill_component(profile: &ApplicantProfile, config: &ScoringConfig) -> ScoreComponent {
    let disclosed = profile.skills.len();
    let counted = disclosed.min(config.max_counted_skills);

    ScoreComponent {
        factor: PrivacyFactor::SkillDisclosure,
        points: counted as f64 * config.points_per_skill,
        notes: if counted < disclosed {
            format!("{disclosed} skill(s) disclosed, {counted} counted")
        } else {
            format!("{disclosed} skill(s) disclosed")
        },
    }
}

fn location_component(
    profile: &ApplicantProfile,
    disclosure: DisclosureChoices,
    config: &ScoringConfig,
) -> ScoreComponent {
    let disclosed = if disclosure.reveal_location_precisely {
        profile.location.as_str()
    } else {
        coarse_region(&profile.location)
    };

    let coarse = disclosed.chars().count() <= config.coarse_location_max_chars;
    ScoreComponent {
        factor: PrivacyFactor::LocationPrecision,
        points: if coarse {
            config.coarse_location_bonus
        } else {
            0.0
        },
        notes: if coarse {
            format!("coarse location {disclosed:?} disclosed")
        } else {
            "precise location disclosed".to_string()
        },
    }
}

fn salary_component(
    profile: &ApplicantProfile,
    requirements: &JobRequirements,
    disclosure: DisclosureChoices,
    config: &ScoringConfig,
) -> ScoreComponent {
    if !disclosure.reveal_salary_exactly {
        return ScoreComponent {
            factor: PrivacyFactor::SalaryPrecision,
            points: config.salary_bonus_max,
            notes: "only salary range membership disclosed".to_string(),
        };
    }

    let distance = (profile.expected_salary as f64 - requirements.salary_midpoint()).abs();
    let range = requirements.salary_range() as f64;
    let bonus = (config.salary_bonus_max - config.salary_bonus_max * distance / range).max(0.0);

    ScoreComponent {
        factor: PrivacyFactor::SalaryPrecision,
        points: bonus,
        notes: format!(
            "exact salary disclosed {:.0} from range midpoint",
            distance
        ),
    }
}
