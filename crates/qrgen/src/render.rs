//! Rendering a symbol to a terminal glyph grid or to SVG markup.

use qrgen_protocol::defaults::{GLYPH_BORDER, MAX_MODULE_SCALE};
use std::fmt;

use crate::encoding::{QrSymbol, SymbolEncoder};
use crate::error::{QrGenError, Result};

const DARK_GLYPH: &str = "\u{2588}\u{2588}";
const LIGHT_GLYPH: &str = "  ";

/// Which form the symbol is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderTarget {
    /// Block characters for the terminal. `invert` swaps dark and light,
    /// for dark terminal backgrounds.
    GlyphGrid { invert: bool },
    /// SVG document with each module `module_scale` units wide
    VectorMarkup { module_scale: u32 },
}

impl RenderTarget {
    pub fn validate(&self) -> Result<()> {
        match self {
            RenderTarget::VectorMarkup { module_scale }
                if !(1..=MAX_MODULE_SCALE).contains(module_scale) =>
            {
                Err(QrGenError::invalid_config(format!(
                    "SVG module scale must be between 1 and {}, got {}",
                    MAX_MODULE_SCALE, module_scale
                )))
            }
            _ => Ok(()),
        }
    }
}

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedOutput {
    GlyphGrid(Vec<String>),
    VectorMarkup(String),
}

impl fmt::Display for RenderedOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderedOutput::GlyphGrid(lines) => {
                for line in lines {
                    writeln!(f, "{}", line)?;
                }
                Ok(())
            }
            RenderedOutput::VectorMarkup(markup) => writeln!(f, "{}", markup),
        }
    }
}

/// Draw `symbol` as text, one line per module row, with a light border of
/// [`GLYPH_BORDER`] modules on every side. Each module is two characters wide.
pub fn render_glyph_grid<S: QrSymbol + ?Sized>(symbol: &S, invert: bool) -> Vec<String> {
    let size = symbol.size() as i32;
    let (dark, light) = if invert {
        (LIGHT_GLYPH, DARK_GLYPH)
    } else {
        (DARK_GLYPH, LIGHT_GLYPH)
    };

    (-GLYPH_BORDER..size + GLYPH_BORDER)
        .map(|y| {
            (-GLYPH_BORDER..size + GLYPH_BORDER)
                .map(|x| if symbol.module_at(x, y) { dark } else { light })
                .collect::<String>()
        })
        .collect()
}

/// Render `symbol` into `target`. Markup serialization is delegated to the encoder.
pub fn render<E: SymbolEncoder>(
    encoder: &E,
    symbol: &E::Symbol,
    target: RenderTarget,
) -> RenderedOutput {
    match target {
        RenderTarget::GlyphGrid { invert } => {
            RenderedOutput::GlyphGrid(render_glyph_grid(symbol, invert))
        }
        RenderTarget::VectorMarkup { module_scale } => {
            RenderedOutput::VectorMarkup(encoder.to_markup(symbol, module_scale))
        }
    }
}
