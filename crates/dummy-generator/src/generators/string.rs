//! String value generators.

use crate::error::PopulateError;
use rand::seq::SliceRandom;
use rand::Rng;

/// Generate a string of exactly `length` characters drawn uniformly from `alphabet`.
pub fn random_string<R: Rng>(
    rng: &mut R,
    length: usize,
    alphabet: &str,
) -> Result<String, PopulateError> {
    let chars: Vec<char> = alphabet.chars().collect();
    if chars.is_empty() {
        return Err(PopulateError::EmptyAlphabet);
    }

    Ok((0..length)
        .filter_map(|_| chars.choose(rng).copied())
        .collect())
}
