use std::fmt;

use serde::{Deserialize, Serialize};

use crate::eligibility::{ApplicantProfile, DisclosureChoices, JobRequirements};

/// Identifier wrapper for stored applications.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Inbound application: the applicant's private profile plus disclosure toggles.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationRequest {
    pub profile: ApplicantProfile,
    #[serde(default)]
    pub disclosure: DisclosureChoices,
}

/// Job posting before an identifier has been assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDraft {
    pub title: String,
    pub requirements: JobRequirements,
}
