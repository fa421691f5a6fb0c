//! Canonical default values for every resolved option.

use crate::types::EccLevel;

pub const DEFAULT_INPUT_TEXT: &str = "Hello World";
pub const DEFAULT_ECC_LEVEL: EccLevel = EccLevel::Low;
pub const DEFAULT_TOKENIZE: bool = false;
pub const DEFAULT_TOKEN_TYPE: &str = "jwt";
pub const DEFAULT_EXPIRES_IN_MINUTES: u32 = 1000;
pub const DEFAULT_NOT_BEFORE_OFFSET_MINUTES: u32 = 0;
pub const DEFAULT_ISSUER: &str = "qrcodegen";
pub const DEFAULT_SUBJECT: &str = "qrcodegen block";
pub const DEFAULT_AUDIENCE: &str = "qrcodegen";

/// Quiet zone drawn around the glyph grid, in modules.
pub const GLYPH_BORDER: i32 = 4;
/// Module scale used for SVG output when none is given.
pub const DEFAULT_MODULE_SCALE: u32 = 4;
/// Largest SVG module scale accepted. Keeps the document size within `u32`
/// for the biggest symbol (version 40 plus quiet zone).
pub const MAX_MODULE_SCALE: u32 = 1024;
