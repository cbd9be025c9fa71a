//! Command modules for the tslex CLI.
//!
//! Each subcommand is implemented in its own file following a standardized pattern.

pub mod common;
pub mod traits;

pub mod check;
pub mod codes;
pub mod tokens;

// Re-export command types and functions
pub use check::{run_check, CheckArgs};
pub use codes::{run_codes, CodesArgs};
pub use tokens::{run_tokens, TokensArgs};
