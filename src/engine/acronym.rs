//! Random acronym generation

use rand::seq::SliceRandom;
use rand::Rng;

/// Lengths used when the caller does not specify one (BOBODDY is 7 letters)
const DEFAULT_LENGTHS: [usize; 4] = [5, 6, 7, 8];

/// Generate a random uppercase acronym.
///
/// With no length, picks one uniformly from {5, 6, 7, 8}. A provided length is
/// used as-is; callers are trusted internal code and the HTTP surface never
/// exposes the parameter.
pub fn generate(length: Option<usize>) -> String {
    let mut rng = rand::thread_rng();

    let length = match length {
        Some(n) => n,
        None => DEFAULT_LENGTHS.choose(&mut rng).copied().unwrap_or(7),
    };

    (0..length)
        .map(|_| char::from(b'A' + rng.gen_range(0u8..26)))
        .collect()
}
