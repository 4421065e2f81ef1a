use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use super::validation::InvalidInput;

const MAX_SKILL_ID_LEN: usize = 64;

/// Identifier of a job posting. Nullifiers are scoped to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub u64);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalized skill identifier (`rust`, `typescript`, `c++`, ...).
///
/// Input is trimmed and lowercased; only `[a-z0-9+#._-]` is accepted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SkillId(String);

impl SkillId {
    pub fn parse(raw: &str) -> Result<Self, InvalidInput> {
        let normalized = raw.trim().to_ascii_lowercase();
        let well_formed = !normalized.is_empty()
            && normalized.len() <= MAX_SKILL_ID_LEN
            && normalized
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '#' | '.' | '_' | '-'));

        if well_formed {
            Ok(Self(normalized))
        } else {
            Err(InvalidInput::MalformedSkill(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SkillId {
    type Error = InvalidInput;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SkillId> for String {
    fn from(value: SkillId) -> Self {
        value.0
    }
}

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Proficiency on a 0–100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SkillLevel(u8);

impl SkillLevel {
    pub const ZERO: SkillLevel = SkillLevel(0);
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Result<Self, InvalidInput> {
        if value > Self::MAX {
            return Err(InvalidInput::SkillLevelOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for SkillLevel {
    type Error = InvalidInput;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SkillLevel> for u8 {
    fn from(value: SkillLevel) -> Self {
        value.0
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The applicant's private identifier. It only ever feeds the nullifier hash.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ApplicantSecret(String);

impl ApplicantSecret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub(crate) fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApplicantSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApplicantSecret(<redacted>)")
    }
}

/// Private attributes supplied by the applicant at submission time.
///
/// Deliberately not `Serialize`: the profile never leaves the engine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApplicantProfile {
    pub secret: ApplicantSecret,
    #[serde(default, deserialize_with = "deserialize_skills")]
    pub skills: BTreeMap<SkillId, SkillLevel>,
    pub location: String,
    pub expected_salary: i64,
}

impl ApplicantProfile {
    /// Level for `skill`, treating an undeclared skill as zero.
    pub fn skill_level(&self, skill: &SkillId) -> SkillLevel {
        self.skills.get(skill).copied().unwrap_or(SkillLevel::ZERO)
    }
}

/// Keys that normalize to the same [`SkillId`] (`"rust"` and `"Rust"`) are rejected
/// instead of silently overwriting each other.
fn deserialize_skills<'de, D>(deserializer: D) -> Result<BTreeMap<SkillId, SkillLevel>, D::Error>
where
    D: Deserializer<'de>,
{
    struct SkillsVisitor;

    impl<'de> Visitor<'de> for SkillsVisitor {
        type Value = BTreeMap<SkillId, SkillLevel>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of skill identifiers to levels")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut skills = BTreeMap::new();
            while let Some((skill, level)) = access.next_entry::<SkillId, SkillLevel>()? {
                if skills.contains_key(&skill) {
                    return Err(serde::de::Error::custom(InvalidInput::DuplicateSkill(skill)));
                }
                skills.insert(skill, level);
            }
            Ok(skills)
        }
    }

    deserializer.deserialize_map(SkillsVisitor)
}

/// Minimum level for one required skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillThreshold {
    pub skill: SkillId,
    pub minimum: SkillLevel,
}

/// Public requirements of a job. Thresholds are checked in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRequirements {
    #[serde(default)]
    pub skill_thresholds: Vec<SkillThreshold>,
    pub salary_min: i64,
    pub salary_max: i64,
    pub allowed_regions: BTreeSet<String>,
}

impl JobRequirements {
    pub fn salary_midpoint(&self) -> f64 {
        (self.salary_min as f64 + self.salary_max as f64) / 2.0
    }

    pub fn salary_range(&self) -> i64 {
        self.salary_max - self.salary_min
    }

    pub fn salary_in_range(&self, salary: i64) -> bool {
        (self.salary_min..=self.salary_max).contains(&salary)
    }
}

/// A published job: identifier, display title and requirements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: JobId,
    pub title: String,
    pub requirements: JobRequirements,
}

/// What the applicant agreed to reveal beyond the eligibility predicate itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisclosureChoices {
    pub reveal_location_precisely: bool,
    pub reveal_salary_exactly: bool,
}

/// Region part of a location code: `"US-CA"` becomes `"US"`.
pub fn coarse_region(location: &str) -> &str {
    let location = location.trim();
    location
        .split_once('-')
        .map(|(region, _)| region)
        .unwrap_or(location)
}
