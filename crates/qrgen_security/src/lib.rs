//! Token issuing for qrgen.
//!
//! - `claims`: the fixed claims profile embedded in issued tokens
//! - `signing`: the [`TokenSigner`] seam and its HMAC-SHA256 implementation

pub mod claims;
pub mod signing;

pub use claims::ClaimsSet;
pub use signing::{Hs256Signer, SigningError, TokenSigner, MIN_HS256_KEY_BYTES};
