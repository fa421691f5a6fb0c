//! Flags for the `qrgen` binary.
//!
//! Short flags match the legacy qrcodegen demo (`-i`, `-e`, `-t`, `-T`, `-E`, `-B`,
//! `-I`, `-S`, `-A`, `-G`, `-p`); the camelCase long names it used are kept
//! as aliases.

use clap::{Args, ValueEnum};
use qrgen::{OptionOverrides, RenderTarget};
use qrgen_protocol::defaults::DEFAULT_MODULE_SCALE;

/// Options that feed the resolver. Numeric values stay textual so the
/// resolver reports malformed input.
#[derive(Debug, Args)]
pub struct OptionArgs {
    /// The text to encode
    #[arg(short = 'i', long = "input-text", alias = "inputText")]
    pub input_text: Option<String>,

    /// Error correction level (LOW, MEDIUM, QUARTILE, HIGH)
    #[arg(short = 'e', long = "ecc-lvl", alias = "eccLvl")]
    pub ecc_level: Option<String>,

    /// Wrap the text in a signed token (JWT, HS256) before encoding
    #[arg(short = 't', long, overrides_with = "no_tokenize")]
    pub tokenize: bool,

    /// Encode the plain text even if the config file sets `tokenize = true`
    #[arg(long = "no-tokenize", overrides_with = "tokenize")]
    pub no_tokenize: bool,

    /// Token type (requires --tokenize; only jwt is supported)
    #[arg(short = 'T', long = "token-type")]
    pub token_type: Option<String>,

    /// Token lifetime in minutes (default 1000)
    #[arg(short = 'E', long = "token-expires")]
    pub token_expires: Option<String>,

    /// Minutes from now before the token becomes valid (default 0)
    #[arg(short = 'B', long = "token-notbefore")]
    pub token_not_before: Option<String>,

    /// Token issuer
    #[arg(short = 'I', long = "token-issuer")]
    pub token_issuer: Option<String>,

    /// Token subject
    #[arg(short = 'S', long = "token-subject")]
    pub token_subject: Option<String>,

    /// Token audience
    #[arg(short = 'A', long = "token-audience")]
    pub token_audience: Option<String>,

    /// Signature identifier embedded as the `sig` claim (random if omitted)
    #[arg(short = 'G', long = "token-signature")]
    pub token_signature: Option<String>,
}

impl OptionArgs {
    pub fn into_overrides(self) -> OptionOverrides {
        OptionOverrides {
            input_text: self.input_text,
            ecc_level: self.ecc_level,
            // Neither flag leaves the decision to the config file or default.
            tokenize: match (self.tokenize, self.no_tokenize) {
                (true, _) => Some(true),
                (false, true) => Some(false),
                (false, false) => None,
            },
            token_type: self.token_type,
            expires_in_minutes: self.token_expires,
            not_before_offset_minutes: self.token_not_before,
            issuer: self.token_issuer,
            subject: self.token_subject,
            audience: self.token_audience,
            signature_id: self.token_signature,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PrintFormat {
    /// SVG document
    Svg,
    /// Block-character grid for the terminal
    Console,
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output form
    #[arg(short = 'p', long = "print", value_enum, default_value_t = PrintFormat::Svg)]
    pub print: PrintFormat,

    /// SVG units per module
    #[arg(long, default_value_t = DEFAULT_MODULE_SCALE)]
    pub scale: u32,

    /// Swap dark and light glyphs in console output
    #[arg(long)]
    pub invert: bool,
}

impl OutputArgs {
    pub fn target(&self) -> RenderTarget {
        match self.print {
            PrintFormat::Svg => RenderTarget::VectorMarkup {
                module_scale: self.scale,
            },
            PrintFormat::Console => RenderTarget::GlyphGrid {
                invert: self.invert,
            },
        }
    }
}
