//! Utility modules for common functionality.
//!
//! - constants: Defaults shared by the CLI and the bootstrap code
//! - logging: Logging setup
//! - parsing: Parsers for addresses and integer arguments

pub mod constants;
pub mod logging;
pub mod parsing;

pub use constants::*;
