//! Password generation.

pub mod charset;
mod generate;

pub use charset::Classes;
pub use generate::{GenerateError, Generated, generate};

/// Shortest length the interactive shell and CLI accept.
pub const MIN_LENGTH: usize = 8;

/// Longest length the interactive shell and CLI accept.
pub const MAX_LENGTH: usize = 32;

/// Length validation predicate used by the shell's retry loop and the CLI.
/// The core itself only rejects zero; this range is an interface constraint.
pub fn is_valid_length(n: usize) -> bool {
    (MIN_LENGTH..=MAX_LENGTH).contains(&n)
}
