//! Polynomial string hashing.
//!
//! Strings hash as `s[0]*31^(n-1) + s[1]*31^(n-2) + ... + s[n-1]` over their
//! UTF-16 code units with wrapping 32-bit arithmetic. Seeding a hash with the
//! result of a previous one continues the polynomial, so a sequence of
//! strings hashes exactly like their concatenation:
//!
//! ```
//! use urn_syntax::hash_code::{hash_str, hash_strs};
//!
//! assert_eq!(hash_strs(&["ab", "cd"]), hash_str(0, "abcd"));
//! assert_eq!(hash_str(hash_str(0, "ab"), "cd"), hash_str(0, "abcd"));
//! ```

/// Folds `units` into `seed` with `h = 31 * h + unit`.
#[must_use]
pub fn hash_units<I>(seed: u32, units: I) -> u32
where
    I: IntoIterator<Item = u16>,
{
    units
        .into_iter()
        .fold(seed, |h, unit| h.wrapping_mul(31).wrapping_add(u32::from(unit)))
}

/// Hashes the UTF-16 code units of `s`, continuing from `seed`.
///
/// `hash_str(0, s)` is the plain string hash.
#[must_use]
pub fn hash_str(seed: u32, s: &str) -> u32 {
    hash_units(seed, s.encode_utf16())
}

/// Hashes `parts` as though they were one concatenated string.
#[must_use]
pub fn hash_strs(parts: &[&str]) -> u32 {
    parts.iter().fold(0, |h, s| hash_str(h, s))
}
