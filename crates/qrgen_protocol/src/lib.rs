//! Shared vocabulary for qrgen.
//!
//! Holds the pieces every other crate agrees on: the default option table,
//! the error-correction level enum, and the on-disk locations used for logs.

pub mod defaults;
pub mod paths;
pub mod types;

pub use types::EccLevel;
