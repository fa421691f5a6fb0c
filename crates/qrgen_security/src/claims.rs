use chrono::{DateTime, Utc};
use qrgen_ids::SignatureId;
use serde::{Deserialize, Serialize};

/// Claims embedded in an issued token.
///
/// Timestamps travel as seconds since the Unix epoch, the JWT NumericDate form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimsSet {
    /// The original input text
    #[serde(rename = "msg")]
    pub message: String,

    #[serde(rename = "iss")]
    pub issuer: String,

    #[serde(rename = "sub")]
    pub subject: String,

    #[serde(rename = "aud")]
    pub audience: String,

    #[serde(rename = "exp", with = "chrono::serde::ts_seconds")]
    pub expires_at: DateTime<Utc>,

    #[serde(rename = "nbf", with = "chrono::serde::ts_seconds")]
    pub not_before: DateTime<Utc>,

    #[serde(rename = "iat", with = "chrono::serde::ts_seconds")]
    pub issued_at: DateTime<Utc>,

    #[serde(rename = "sig")]
    pub signature_id: SignatureId,
}
