//! Encoding service seam and its `qrcode` crate adapter.
//!
//! The pipeline hands the encoder one unsegmented block of text. Mode
//! selection, version selection and masking stay inside the encoder.

use qrcode::render::svg;
use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode};
use qrgen_protocol::EccLevel;
use std::fmt;
use thiserror::Error;

use crate::error::QrGenError;

/// Square matrix of dark/light modules.
pub trait QrSymbol {
    /// Side length in modules (at least 1)
    fn size(&self) -> usize;

    /// Whether the module at `(x, y)` is dark. Coordinates outside
    /// `[0, size)` are light, which is what the quiet zone relies on.
    fn module_at(&self, x: i32, y: i32) -> bool;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("{length} bytes do not fit any QR version at {ecc}")]
    CapacityExceeded { length: usize, ecc: EccLevel },

    #[error("{0}")]
    Other(String),
}

impl From<EncodeError> for QrGenError {
    fn from(err: EncodeError) -> Self {
        match err {
            EncodeError::CapacityExceeded { length, ecc } => {
                QrGenError::EncodingCapacityExceeded { length, ecc }
            }
            EncodeError::Other(msg) => QrGenError::Encoding(msg),
        }
    }
}

/// Turns text into a symbol and a symbol into vector markup.
pub trait SymbolEncoder {
    type Symbol: QrSymbol;

    fn encode(&self, text: &str, ecc: EccLevel) -> Result<Self::Symbol, EncodeError>;

    /// Self-contained SVG document for `symbol`, each module drawn
    /// `module_scale` units wide.
    fn to_markup(&self, symbol: &Self::Symbol, module_scale: u32) -> String;
}

/// Encoder backed by the `qrcode` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct QrcodeEncoder;

/// Symbol produced by [`QrcodeEncoder`].
pub struct QrcodeSymbol {
    code: QrCode,
}

impl fmt::Debug for QrcodeSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QrcodeSymbol")
            .field("version", &self.code.version())
            .field("size", &self.code.width())
            .finish()
    }
}

impl QrcodeSymbol {
    pub fn version(&self) -> qrcode::Version {
        self.code.version()
    }
}

impl QrSymbol for QrcodeSymbol {
    fn size(&self) -> usize {
        self.code.width()
    }

    fn module_at(&self, x: i32, y: i32) -> bool {
        let size = self.code.width() as i32;
        if x < 0 || y < 0 || x >= size || y >= size {
            return false;
        }
        self.code[(x as usize, y as usize)] == Color::Dark
    }
}

impl SymbolEncoder for QrcodeEncoder {
    type Symbol = QrcodeSymbol;

    fn encode(&self, text: &str, ecc: EccLevel) -> Result<QrcodeSymbol, EncodeError> {
        QrCode::with_error_correction_level(text.as_bytes(), ec_level(ecc))
            .map(|code| QrcodeSymbol { code })
            .map_err(|err| match err {
                QrError::DataTooLong => EncodeError::CapacityExceeded {
                    length: text.len(),
                    ecc,
                },
                other => EncodeError::Other(other.to_string()),
            })
    }

    fn to_markup(&self, symbol: &QrcodeSymbol, module_scale: u32) -> String {
        symbol
            .code
            .render::<svg::Color>()
            .quiet_zone(true)
            .module_dimensions(module_scale, module_scale)
            .build()
    }
}

fn ec_level(level: EccLevel) -> EcLevel {
    match level {
        EccLevel::Low => EcLevel::L,
        EccLevel::Medium => EcLevel::M,
        EccLevel::Quartile => EcLevel::Q,
        EccLevel::High => EcLevel::H,
    }
}
