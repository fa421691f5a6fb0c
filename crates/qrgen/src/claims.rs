//! Claims composition for tokenized payloads.
//!
//! Only one claims profile exists (`jwt`). The validity window is anchored at
//! the composition instant: `iat = now`, `nbf = now + offset`,
//! `exp = now + expiry`.

use chrono::{DateTime, Duration, Utc};
use qrgen_security::ClaimsSet;

use crate::error::{QrGenError, Result};
use crate::options::ResolvedOptions;

/// The single supported token type, matched case-insensitively.
pub const JWT_TOKEN_TYPE: &str = "jwt";

/// Build the claims set for `options` with `issued_at` as the current instant.
pub fn compose_claims(options: &ResolvedOptions, issued_at: DateTime<Utc>) -> Result<ClaimsSet> {
    if !options.token_type.eq_ignore_ascii_case(JWT_TOKEN_TYPE) {
        return Err(QrGenError::UnsupportedTokenType(options.token_type.clone()));
    }

    if options.not_before_offset_minutes > options.expires_in_minutes {
        return Err(QrGenError::invalid_config(format!(
            "token not-before offset ({} min) is later than its expiry ({} min)",
            options.not_before_offset_minutes, options.expires_in_minutes
        )));
    }

    Ok(ClaimsSet {
        message: options.input_text.clone(),
        issuer: options.issuer.clone(),
        subject: options.subject.clone(),
        audience: options.audience.clone(),
        expires_at: offset_minutes(issued_at, options.expires_in_minutes)?,
        not_before: offset_minutes(issued_at, options.not_before_offset_minutes)?,
        issued_at,
        signature_id: options.signature_id.clone(),
    })
}

/// [`compose_claims`] at the current system time.
pub fn compose_claims_now(options: &ResolvedOptions) -> Result<ClaimsSet> {
    compose_claims(options, Utc::now())
}

fn offset_minutes(base: DateTime<Utc>, minutes: u32) -> Result<DateTime<Utc>> {
    base.checked_add_signed(Duration::minutes(i64::from(minutes)))
        .ok_or_else(|| {
            QrGenError::invalid_config(format!("{} minutes overflows the token timestamp", minutes))
        })
}
