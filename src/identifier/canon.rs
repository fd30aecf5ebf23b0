//! Identifier canonicalization
//!
//! User-typed container codes arrive with stray spaces, dashes, and mixed
//! case. Comparison happens on a canonical form: uppercase, alphanumerics
//! only.

/// Length of the fuzzy comparison key: ISO 6346 owner code + serial number,
/// deliberately excluding the trailing check digit (the character most often
/// mistyped by hand).
pub const KEY_LEN: usize = 10;

/// Canonical form: uppercase, every character outside `[A-Z0-9]` stripped.
///
/// Idempotent: `canon(canon(s)) == canon(s)`.
pub fn canon(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Fuzzy key: the first [`KEY_LEN`] characters of the canonical form, or the
/// whole canonical form when shorter.
pub fn key10(s: &str) -> String {
    let mut k = canon(s);
    k.truncate(KEY_LEN);
    k
}
