//! Password generation.

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};

use super::charset::{self, Classes};

/// Failure modes of [`generate`]. Zero is the only invalid length; the
/// `usize` surface makes negative lengths unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    InvalidLength,
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateError::InvalidLength => write!(f, "Password length must be greater than zero"),
        }
    }
}

/// A generated password plus the fallback warning signal.
///
/// `used_fallback` is true when the class selection was empty and the
/// lowercase+digits pool was substituted. Non-fatal; callers print the
/// warning and keep the password.
#[derive(Debug)]
pub struct Generated {
    pub password: String,
    pub used_fallback: bool,
}

/// Generate a password of exactly `length` characters drawn uniformly and
/// independently from the pool implied by `classes`.
///
/// Each call reads fresh OS entropy; repeats between positions are allowed
/// and two calls with identical arguments agree only by collision.
pub fn generate(length: usize, classes: Classes) -> Result<Generated, GenerateError> {
    if length == 0 {
        return Err(GenerateError::InvalidLength);
    }

    let (pool, used_fallback) = charset::build(classes);
    let bytes = draw(&mut OsRng, &pool, length);

    // Safety: the pool is all ASCII
    let password = unsafe { String::from_utf8_unchecked(bytes) };

    Ok(Generated {
        password,
        used_fallback,
    })
}

/// `length` independent uniform draws from `pool`.
///
/// The `CryptoRng` bound keeps general-purpose PRNGs out at compile time.
/// `gen_range` samples without modulo bias for any pool size.
fn draw<R: Rng + CryptoRng>(rng: &mut R, pool: &[u8], length: usize) -> Vec<u8> {
    (0..length).map(|_| pool[rng.gen_range(0..pool.len())]).collect()
}
