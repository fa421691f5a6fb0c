//! Helpful error output for the CLI
//!
//! Every error includes:
//! - What went wrong
//! - Context about the situation
//! - Suggestions for how to fix it

use qrgen::QrGenError;
use std::fmt;

/// An error with helpful context and suggestions
#[derive(Debug)]
pub struct HelpfulError {
    /// The main error message
    pub message: String,
    /// Additional context about what was happening
    pub context: Option<String>,
    /// Suggestions for how to fix the error
    pub suggestions: Vec<String>,
}

impl HelpfulError {
    /// Create a new helpful error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
        }
    }

    /// Add context to the error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add multiple suggestions
    pub fn with_suggestions(mut self, suggestions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.suggestions.extend(suggestions.into_iter().map(|s| s.into()));
        self
    }

    /// Describe a pipeline failure for the terminal.
    pub fn from_pipeline(err: &QrGenError) -> Self {
        let base = Self::new(err.to_string()).with_context(format!("kind: {}", err.kind()));
        match err {
            QrGenError::InvalidConfiguration(_) => base.with_suggestions([
                "TRY: Error correction levels are LOW, MEDIUM, QUARTILE, HIGH",
                "TRY: Minute values must be whole numbers >= 0, with --token-notbefore <= --token-expires",
                "TRY: Check config file keys against `qrgen --help`",
            ]),
            QrGenError::UnsupportedTokenType(_) => {
                base.with_suggestions(["TRY: Use --token-type jwt or drop --token-type"])
            }
            QrGenError::EncodingCapacityExceeded { .. } => base.with_suggestions([
                "TRY: Shorten the input text",
                "TRY: Use a lower error correction level, e.g. --ecc-lvl LOW",
                "TRY: Drop --tokenize; the token is several times longer than the text",
            ]),
            QrGenError::SigningFailure(_) | QrGenError::RandomUnavailable(_) => {
                base.with_suggestions(["TRY: Run again without --tokenize to encode the plain text"])
            }
            QrGenError::Encoding(_) => base,
        }
    }
}

impl fmt::Display for HelpfulError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ERROR: {}", self.message)?;

        if let Some(ctx) = &self.context {
            writeln!(f, "CONTEXT: {}", ctx)?;
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            for suggestion in &self.suggestions {
                writeln!(f, "  {}", suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for HelpfulError {}
