//! Option resolution: sparse caller input in, fully populated options out.
//!
//! Each field is defaulted independently and the caller's value always wins
//! when present. Blank strings count as absent.

use qrgen_ids::{RandomSource, SignatureId};
use qrgen_protocol::defaults::{
    DEFAULT_AUDIENCE, DEFAULT_ECC_LEVEL, DEFAULT_EXPIRES_IN_MINUTES, DEFAULT_INPUT_TEXT,
    DEFAULT_ISSUER, DEFAULT_NOT_BEFORE_OFFSET_MINUTES, DEFAULT_SUBJECT, DEFAULT_TOKENIZE,
    DEFAULT_TOKEN_TYPE,
};
use qrgen_protocol::EccLevel;
use tracing::debug;

use crate::error::{QrGenError, Result};

/// Caller-supplied values. Any subset may be absent.
///
/// Level names and minute counts stay textual here so that malformed input
/// is reported by the resolver as `InvalidConfiguration`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionOverrides {
    pub input_text: Option<String>,
    pub ecc_level: Option<String>,
    pub tokenize: Option<bool>,
    pub token_type: Option<String>,
    pub expires_in_minutes: Option<String>,
    pub not_before_offset_minutes: Option<String>,
    pub issuer: Option<String>,
    pub subject: Option<String>,
    pub audience: Option<String>,
    pub signature_id: Option<String>,
}

impl OptionOverrides {
    /// Take each field from `self` when present, otherwise from `lower`.
    pub fn layered_over(self, lower: OptionOverrides) -> Self {
        Self {
            input_text: present(self.input_text).or(present(lower.input_text)),
            ecc_level: present(self.ecc_level).or(present(lower.ecc_level)),
            tokenize: self.tokenize.or(lower.tokenize),
            token_type: present(self.token_type).or(present(lower.token_type)),
            expires_in_minutes: present(self.expires_in_minutes)
                .or(present(lower.expires_in_minutes)),
            not_before_offset_minutes: present(self.not_before_offset_minutes)
                .or(present(lower.not_before_offset_minutes)),
            issuer: present(self.issuer).or(present(lower.issuer)),
            subject: present(self.subject).or(present(lower.subject)),
            audience: present(self.audience).or(present(lower.audience)),
            signature_id: present(self.signature_id).or(present(lower.signature_id)),
        }
    }
}

/// Fully populated parameter set for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub input_text: String,
    pub ecc_level: EccLevel,
    pub tokenize: bool,
    pub token_type: String,
    pub expires_in_minutes: u32,
    pub not_before_offset_minutes: u32,
    pub issuer: String,
    pub subject: String,
    pub audience: String,
    pub signature_id: SignatureId,
}

/// Merge `overrides` with the default table.
///
/// `rng` is only consulted when no signature ID was supplied.
pub fn resolve_options(
    overrides: &OptionOverrides,
    rng: &mut dyn RandomSource,
) -> Result<ResolvedOptions> {
    let ecc_level = match present_ref(&overrides.ecc_level) {
        Some(raw) => raw.parse::<EccLevel>().map_err(QrGenError::InvalidConfiguration)?,
        None => DEFAULT_ECC_LEVEL,
    };

    let expires_in_minutes = match present_ref(&overrides.expires_in_minutes) {
        Some(raw) => parse_minutes("token expiry", raw)?,
        None => DEFAULT_EXPIRES_IN_MINUTES,
    };

    let not_before_offset_minutes = match present_ref(&overrides.not_before_offset_minutes) {
        Some(raw) => parse_minutes("token not-before offset", raw)?,
        None => DEFAULT_NOT_BEFORE_OFFSET_MINUTES,
    };

    let signature_id = match present_ref(&overrides.signature_id) {
        Some(raw) => SignatureId::new(raw),
        None => SignatureId::generate(rng)?,
    };

    let options = ResolvedOptions {
        input_text: text_or(&overrides.input_text, DEFAULT_INPUT_TEXT),
        ecc_level,
        tokenize: overrides.tokenize.unwrap_or(DEFAULT_TOKENIZE),
        token_type: text_or(&overrides.token_type, DEFAULT_TOKEN_TYPE),
        expires_in_minutes,
        not_before_offset_minutes,
        issuer: text_or(&overrides.issuer, DEFAULT_ISSUER),
        subject: text_or(&overrides.subject, DEFAULT_SUBJECT),
        audience: text_or(&overrides.audience, DEFAULT_AUDIENCE),
        signature_id,
    };

    debug!(
        ecc = %options.ecc_level,
        tokenize = options.tokenize,
        token_type = %options.token_type,
        signature_id = %options.signature_id,
        "Resolved options"
    );

    Ok(options)
}

fn parse_minutes(field: &str, raw: &str) -> Result<u32> {
    raw.trim().parse::<u32>().map_err(|_| {
        QrGenError::invalid_config(format!(
            "{} must be a non-negative whole number of minutes, got '{}'",
            field, raw
        ))
    })
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn present_ref(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn text_or(value: &Option<String>, default: &str) -> String {
    present_ref(value).unwrap_or(default).to_string()
}
