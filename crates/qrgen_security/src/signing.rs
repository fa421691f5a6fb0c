//! HMAC-SHA256 token signing
//!
//! Keys are generated fresh for every run and never persisted. Tokens issued
//! here are for display only; nothing in qrgen verifies them.

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use qrgen_ids::{IdError, RandomSource};
use std::fmt;
use thiserror::Error;
use tracing::debug;

use crate::claims::ClaimsSet;

/// Smallest HS256 key accepted, in bytes (256 bits).
pub const MIN_HS256_KEY_BYTES: usize = 32;

#[derive(Error, Debug)]
pub enum SigningError {
    #[error("Token service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Signing key unavailable: {0}")]
    KeyUnavailable(#[from] IdError),

    #[error("Signing key too short: {actual} bytes (need at least {required})")]
    KeyTooShort { actual: usize, required: usize },

    #[error("Token encoding failed: {0}")]
    Encode(#[from] jsonwebtoken::errors::Error),
}

/// Serializes and signs a claims set into a compact token string.
pub trait TokenSigner {
    fn algorithm(&self) -> Algorithm;

    /// Verify the signer is usable before any claims are handed to it.
    fn check_capability(&self) -> Result<(), SigningError> {
        Ok(())
    }

    fn sign(&self, claims: &ClaimsSet) -> Result<String, SigningError>;
}

/// HS256 signer holding a symmetric secret.
pub struct Hs256Signer {
    secret: Vec<u8>,
}

impl Hs256Signer {
    /// Draw a fresh 256-bit secret from `rng`.
    pub fn generate(rng: &mut dyn RandomSource) -> Result<Self, SigningError> {
        let mut secret = vec![0u8; MIN_HS256_KEY_BYTES];
        rng.fill(&mut secret)?;
        Ok(Self { secret })
    }

    pub fn from_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for Hs256Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hs256Signer")
            .field("secret", &format_args!("<{} bytes>", self.secret.len()))
            .finish()
    }
}

impl TokenSigner for Hs256Signer {
    fn algorithm(&self) -> Algorithm {
        Algorithm::HS256
    }

    fn check_capability(&self) -> Result<(), SigningError> {
        if self.secret.len() < MIN_HS256_KEY_BYTES {
            return Err(SigningError::KeyTooShort {
                actual: self.secret.len(),
                required: MIN_HS256_KEY_BYTES,
            });
        }
        Ok(())
    }

    fn sign(&self, claims: &ClaimsSet) -> Result<String, SigningError> {
        let header = Header::new(self.algorithm());
        let token = jsonwebtoken::encode(&header, claims, &EncodingKey::from_secret(&self.secret))?;
        debug!(
            signature_id = %claims.signature_id,
            token_len = token.len(),
            "Signed claims set"
        );
        Ok(token)
    }
}
