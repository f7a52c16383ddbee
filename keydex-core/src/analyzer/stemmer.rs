//! Suffix-stripping stemmer.
//!
//! Not a linguistic stemmer: one trailing suffix is cut mechanically.

/// Suffixes in priority order. Only the first match is removed.
pub const SUFFIXES: [&str; 3] = ["ing", "ed", "s"];

/// Reduces a token to its stem.
///
/// Checks `ing`, then `ed`, then `s`, and strips the first one the token
/// ends with. At most one suffix is removed, so `"testses"` becomes
/// `"testse"`, not `"test"`. The stem may be empty (`"ing"` → `""`).
///
/// ```
/// use keydex_core::analyzer::stem;
///
/// assert_eq!(stem("testing"), "test");
/// assert_eq!(stem("status"), "statu");
/// ```
#[inline]
pub fn stem(token: &str) -> &str {
    SUFFIXES
        .iter()
        .find_map(|suffix| token.strip_suffix(suffix))
        .unwrap_or(token)
}
