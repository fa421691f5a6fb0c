//! Signature identifiers and the random source that backs them.
//!
//! Every random value in qrgen (the default signature identifier and the
//! per-run HMAC key) is drawn through [`RandomSource`], so tests can swap in
//! [`FixedRandom`] and get reproducible output.

use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Builder;

/// Errors raised while producing identifiers or random bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The platform random generator refused to produce bytes
    #[error("Random source unavailable: {0}")]
    RandomUnavailable(String),
}

/// Source of random bytes.
pub trait RandomSource {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), IdError>;
}

/// Operating-system backed random source.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), IdError> {
        rand::rngs::OsRng
            .try_fill_bytes(buf)
            .map_err(|e| IdError::RandomUnavailable(e.to_string()))
    }
}

/// Deterministic source that repeats a byte pattern. Meant for tests.
#[derive(Debug, Clone)]
pub struct FixedRandom {
    pattern: Vec<u8>,
    cursor: usize,
}

impl FixedRandom {
    pub fn new(pattern: impl Into<Vec<u8>>) -> Self {
        let mut pattern = pattern.into();
        if pattern.is_empty() {
            pattern.push(0);
        }
        Self { pattern, cursor: 0 }
    }
}

impl RandomSource for FixedRandom {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), IdError> {
        for byte in buf.iter_mut() {
            *byte = self.pattern[self.cursor % self.pattern.len()];
            self.cursor += 1;
        }
        Ok(())
    }
}

/// Opaque identifier embedded in issued tokens as the `sig` claim.
///
/// This is a label chosen by the caller (or generated), not the
/// cryptographic signature of the token.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignatureId(String);

impl SignatureId {
    /// Generate a fresh identifier: 128 random bits shaped as a version-4
    /// UUID, rendered as 32 lowercase hex characters.
    pub fn generate(rng: &mut dyn RandomSource) -> Result<Self, IdError> {
        let mut bytes = [0u8; 16];
        rng.fill(&mut bytes)?;
        let uuid = Builder::from_random_bytes(bytes).into_uuid();
        Ok(Self(uuid.simple().to_string()))
    }

    /// Accept a caller-supplied identifier verbatim.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SignatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
