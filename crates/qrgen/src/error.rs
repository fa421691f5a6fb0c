//! Error types for the qrgen pipeline.

use qrgen_ids::IdError;
use qrgen_protocol::EccLevel;
use qrgen_security::SigningError;
use thiserror::Error;

/// Pipeline result type.
pub type Result<T> = std::result::Result<T, QrGenError>;

/// Every way a pipeline run can fail. None of these are retried.
#[derive(Error, Debug)]
pub enum QrGenError {
    /// Unrecognized level name, malformed minutes, bad config file, or an
    /// inverted validity window
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Tokenization requested with a claims profile other than JWT
    #[error("Unsupported token type: '{0}' (only 'jwt' is supported)")]
    UnsupportedTokenType(String),

    /// Text too long for any QR version at the requested level
    #[error("Encoding capacity exceeded: {length} bytes do not fit any QR version at {ecc} error correction")]
    EncodingCapacityExceeded { length: usize, ecc: EccLevel },

    /// Token service failed or is missing
    #[error("Signing failure: {0}")]
    SigningFailure(#[from] SigningError),

    /// Encoder failed for a reason other than capacity
    #[error("Encoding failure: {0}")]
    Encoding(String),

    /// Random source could not produce the signature identifier
    #[error("Random source unavailable: {0}")]
    RandomUnavailable(String),
}

impl QrGenError {
    /// Create an invalid configuration error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Stable name of the error kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            QrGenError::InvalidConfiguration(_) => "InvalidConfiguration",
            QrGenError::UnsupportedTokenType(_) => "UnsupportedTokenType",
            QrGenError::EncodingCapacityExceeded { .. } => "EncodingCapacityExceeded",
            QrGenError::SigningFailure(_) => "SigningFailure",
            QrGenError::Encoding(_) => "EncodingFailure",
            QrGenError::RandomUnavailable(_) => "RandomUnavailable",
        }
    }
}

impl From<IdError> for QrGenError {
    fn from(err: IdError) -> Self {
        match err {
            IdError::RandomUnavailable(msg) => QrGenError::RandomUnavailable(msg),
        }
    }
}
