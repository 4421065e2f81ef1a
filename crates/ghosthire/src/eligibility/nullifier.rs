//! Per-application nullifiers.
//!
//! `nf = SHA-256(len(domain) || domain || len(secret) || secret || job_id)` with all
//! lengths and the job id as big-endian u64. Nothing time- or randomness-dependent enters
//! the hash, so honest retries of the same application collide by construction.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};

use super::domain::{ApplicantSecret, JobId};
use super::validation::InvalidInput;

pub const DEFAULT_NULLIFIER_DOMAIN: &str = "ghosthire.nullifier.v1";

/// Uniqueness key for one applicant applying to one job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nullifier([u8; 32]);

impl Nullifier {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(s: &str) -> Result<Self, hex::FromHexError> {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Nullifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Nullifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Nullifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_hex(&raw).map_err(serde::de::Error::custom)
    }
}

/// Derives nullifiers under one deployment-wide domain tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullifierDeriver {
    domain: String,
}

impl NullifierDeriver {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn derive(&self, secret: &ApplicantSecret, job: JobId) -> Result<Nullifier, InvalidInput> {
        let secret = secret.expose();
        if secret.trim().is_empty() {
            return Err(InvalidInput::EmptySecret);
        }

        let mut hasher = Sha256::new();
        hasher.update((self.domain.len() as u64).to_be_bytes());
        hasher.update(self.domain.as_bytes());
        hasher.update((secret.len() as u64).to_be_bytes());
        hasher.update(secret.as_bytes());
        hasher.update(job.0.to_be_bytes());

        Ok(Nullifier(hasher.finalize().into()))
    }
}

impl Default for NullifierDeriver {
    fn default() -> Self {
        Self::new(DEFAULT_NULLIFIER_DOMAIN)
    }
}
