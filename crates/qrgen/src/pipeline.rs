//! Pipeline orchestration.
//!
//! ```text
//! Resolving ──(tokenize)──> ComposingClaims ──> Encoding ──> Rendering ──> Done
//!     └───────(plain)──────────────────────────────┘
//! ```
//!
//! Single pass, no retries: the first error ends the run and no partial
//! output is produced.

use qrgen_ids::{OsRandom, RandomSource};
use qrgen_security::{SigningError, TokenSigner};
use tracing::{debug, info};

use crate::claims::compose_claims_now;
use crate::encoding::{QrSymbol, SymbolEncoder};
use crate::error::{QrGenError, Result};
use crate::options::{resolve_options, OptionOverrides, ResolvedOptions};
use crate::render::{render, RenderTarget, RenderedOutput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Resolving,
    ComposingClaims,
    Encoding,
    Rendering,
    Done,
}

pub struct Pipeline<E: SymbolEncoder> {
    encoder: E,
    signer: Option<Box<dyn TokenSigner>>,
    rng: Box<dyn RandomSource>,
}

impl<E: SymbolEncoder> Pipeline<E> {
    /// Pipeline without a token service, drawing randomness from the OS.
    pub fn new(encoder: E) -> Self {
        Self {
            encoder,
            signer: None,
            rng: Box::new(OsRandom),
        }
    }

    pub fn with_random_source(mut self, rng: Box<dyn RandomSource>) -> Self {
        self.rng = rng;
        self
    }

    /// Inject the token service. Its capability check runs here, once.
    pub fn with_signer(mut self, signer: Box<dyn TokenSigner>) -> Result<Self> {
        signer.check_capability()?;
        debug!(algorithm = ?signer.algorithm(), "Token service ready");
        self.signer = Some(signer);
        Ok(self)
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    /// Resolve `overrides` and run every remaining stage.
    pub fn run(
        &mut self,
        overrides: &OptionOverrides,
        target: RenderTarget,
    ) -> Result<RenderedOutput> {
        enter(PipelineStage::Resolving);
        let options = resolve_options(overrides, self.rng.as_mut())?;
        self.run_resolved(&options, target)
    }

    /// Run from already resolved options.
    pub fn run_resolved(
        &self,
        options: &ResolvedOptions,
        target: RenderTarget,
    ) -> Result<RenderedOutput> {
        target.validate()?;
        let text = self.payload_text(options)?;

        enter(PipelineStage::Encoding);
        let symbol = self.encoder.encode(&text, options.ecc_level)?;
        info!(
            ecc = %options.ecc_level,
            tokenized = options.tokenize,
            payload_bytes = text.len(),
            size = symbol.size(),
            "Encoded QR symbol"
        );

        enter(PipelineStage::Rendering);
        let output = render(&self.encoder, &symbol, target);

        enter(PipelineStage::Done);
        Ok(output)
    }

    /// Text handed to the encoder: the raw input, or a signed token wrapping it.
    fn payload_text(&self, options: &ResolvedOptions) -> Result<String> {
        if !options.tokenize {
            return Ok(options.input_text.clone());
        }

        enter(PipelineStage::ComposingClaims);
        let signer = self.signer.as_deref().ok_or_else(|| {
            QrGenError::SigningFailure(SigningError::ServiceUnavailable(
                "tokenization requested but no token service was configured".to_string(),
            ))
        })?;
        let claims = compose_claims_now(options)?;
        let token = signer.sign(&claims)?;
        Ok(token)
    }
}

fn enter(stage: PipelineStage) {
    debug!(?stage, "Pipeline stage");
}
