//! Command-line surface for qrgen.

pub mod args;
pub mod error;

pub use args::{OptionArgs, OutputArgs};
pub use error::HelpfulError;
