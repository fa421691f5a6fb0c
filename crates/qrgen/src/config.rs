//! TOML configuration file.
//!
//! Every key is optional and mirrors a CLI flag. Values from the file sit
//! between command-line flags and the built-in defaults.
//!
//! ```toml
//! input_text = "Hello World"
//! ecc_level = "QUARTILE"
//! tokenize = true
//! expires_in_minutes = 60
//! issuer = "qrcodegen"
//! ```

use serde::Deserialize;
use std::path::Path;

use crate::error::{QrGenError, Result};
use crate::options::OptionOverrides;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub input_text: Option<String>,
    #[serde(default)]
    pub ecc_level: Option<String>,
    #[serde(default)]
    pub tokenize: Option<bool>,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Signed so that negative values reach the resolver and get reported
    #[serde(default)]
    pub expires_in_minutes: Option<i64>,
    #[serde(default)]
    pub not_before_offset_minutes: Option<i64>,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default)]
    pub signature_id: Option<String>,
}

impl ConfigFile {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            QrGenError::invalid_config(format!(
                "failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::parse(&content).map_err(|e| match e {
            QrGenError::InvalidConfiguration(msg) => QrGenError::invalid_config(format!(
                "{} ({})",
                msg,
                path.display()
            )),
            other => other,
        })
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| QrGenError::invalid_config(format!("failed to parse config file: {}", e)))
    }

    pub fn into_overrides(self) -> OptionOverrides {
        OptionOverrides {
            input_text: self.input_text,
            ecc_level: self.ecc_level,
            tokenize: self.tokenize,
            token_type: self.token_type,
            expires_in_minutes: self.expires_in_minutes.map(|m| m.to_string()),
            not_before_offset_minutes: self.not_before_offset_minutes.map(|m| m.to_string()),
            issuer: self.issuer,
            subject: self.subject,
            audience: self.audience,
            signature_id: self.signature_id,
        }
    }
}
