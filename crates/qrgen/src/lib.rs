//! qrgen - text to QR code, optionally wrapped in a signed token.
//!
//! The pipeline resolves options, optionally composes and signs a claims set,
//! encodes the resulting text, and renders the symbol as a terminal glyph
//! grid or as SVG markup. See [`pipeline::Pipeline`].

pub mod claims;
pub mod config;
pub mod encoding;
pub mod error;
pub mod options;
pub mod pipeline;
pub mod render;

pub use config::ConfigFile;
pub use encoding::{EncodeError, QrSymbol, QrcodeEncoder, QrcodeSymbol, SymbolEncoder};
pub use error::{QrGenError, Result};
pub use options::{resolve_options, OptionOverrides, ResolvedOptions};
pub use pipeline::{Pipeline, PipelineStage};
pub use render::{render_glyph_grid, RenderTarget, RenderedOutput};
