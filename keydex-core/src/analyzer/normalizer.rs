//! Lower-casing and literal substitution.
//!
//! First stage of the keyword pipeline. The output keeps every byte the
//! input had apart from case folding and the rewrites in the
//! [`SubstitutionTable`]; whitespace is left alone so multi-word patterns
//! still line up.

use keydex_types::SubstitutionTable;
use memchr::memmem;

#[rustfmt::skip]
const LOWERCASE_TABLE: [u8; 128] = [
    0x00,0x01,0x02,0x03,0x04,0x05,0x06,0x07,0x08,0x09,0x0a,0x0b,0x0c,0x0d,0x0e,0x0f,
    0x10,0x11,0x12,0x13,0x14,0x15,0x16,0x17,0x18,0x19,0x1a,0x1b,0x1c,0x1d,0x1e,0x1f,
    0x20,0x21,0x22,0x23,0x24,0x25,0x26,0x27,0x28,0x29,0x2a,0x2b,0x2c,0x2d,0x2e,0x2f,
    0x30,0x31,0x32,0x33,0x34,0x35,0x36,0x37,0x38,0x39,0x3a,0x3b,0x3c,0x3d,0x3e,0x3f,
    0x40,0x61,0x62,0x63,0x64,0x65,0x66,0x67,0x68,0x69,0x6a,0x6b,0x6c,0x6d,0x6e,0x6f,
    0x70,0x71,0x72,0x73,0x74,0x75,0x76,0x77,0x78,0x79,0x7a,0x5b,0x5c,0x5d,0x5e,0x5f,
    0x60,0x61,0x62,0x63,0x64,0x65,0x66,0x67,0x68,0x69,0x6a,0x6b,0x6c,0x6d,0x6e,0x6f,
    0x70,0x71,0x72,0x73,0x74,0x75,0x76,0x77,0x78,0x79,0x7a,0x7b,0x7c,0x7d,0x7e,0x7f,
];

/// Case folding plus ordered literal rewrites.
///
/// Performs the following operations:
/// - Converts all characters to lowercase (Unicode-aware)
/// - Applies every substitution pair in table order
///
/// Substitution is plain substring replacement: non-overlapping,
/// left to right, not aware of word boundaries. A replacement may be empty,
/// which deletes the match.
///
/// # Examples
///
/// ```
/// use keydex_core::analyzer::TextNormalizer;
/// use keydex_types::SubstitutionTable;
///
/// let table = SubstitutionTable::from_pairs([("this", "that")]);
/// assert_eq!(TextNormalizer::new().normalize("This Works", &table), "that works");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Creates a normalizer.
    pub const fn new() -> Self {
        Self
    }

    /// Lower-cases `input` into an existing buffer.
    ///
    /// Clears the buffer first and reuses its capacity.
    #[inline]
    pub fn lowercase_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        let bytes = input.as_bytes();
        let mut i = 0usize;

        while i < bytes.len() {
            let b = bytes[i];
            if b < 128 {
                out.push(LOWERCASE_TABLE[b as usize] as char);
                i += 1;
                continue;
            }

            // `i` only ever advances by whole chars, so it sits on a boundary.
            let Some(ch) = input[i..].chars().next() else {
                break;
            };
            i += ch.len_utf8();
            out.extend(ch.to_lowercase());
        }
    }

    /// Applies every pair of `table`, in order, to `text`.
    ///
    /// Each pair sees the output of the previous one.
    pub fn substitute(&self, text: &mut String, table: &SubstitutionTable) {
        let mut scratch = String::new();
        for (pattern, replacement) in table.iter() {
            if replace_all(text, pattern, replacement, &mut scratch) {
                core::mem::swap(text, &mut scratch);
            }
        }
    }

    /// Lower-cases and substitutes into an existing buffer.
    #[inline]
    pub fn normalize_into(&self, input: &str, table: &SubstitutionTable, out: &mut String) {
        self.lowercase_into(input, out);
        self.substitute(out, table);
    }

    /// Lower-cases and substitutes, returning a new String.
    #[inline]
    pub fn normalize(&self, input: &str, table: &SubstitutionTable) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, table, &mut out);
        out
    }
}

/// Writes `text` with every match of `pattern` replaced into `out`.
///
/// Returns false, leaving `out` untouched, when nothing matched.
fn replace_all(text: &str, pattern: &str, replacement: &str, out: &mut String) -> bool {
    if pattern.is_empty() {
        return false;
    }

    let haystack = text.as_bytes();
    let finder = memmem::Finder::new(pattern.as_bytes());
    let mut matches = finder.find_iter(haystack).peekable();
    if matches.peek().is_none() {
        return false;
    }

    out.clear();
    out.reserve(text.len());
    let mut last = 0usize;
    for start in matches {
        // Both `pattern` and `text` are valid UTF-8, so a match starts and
        // ends on char boundaries.
        out.push_str(&text[last..start]);
        out.push_str(replacement);
        last = start + pattern.len();
    }
    out.push_str(&text[last..]);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lower(input: &str) -> String {
        let mut out = String::new();
        TextNormalizer::new().lowercase_into(input, &mut out);
        out
    }

    fn subst(input: &str, pairs: &[(&str, &str)]) -> String {
        let table = SubstitutionTable::from_pairs(pairs.iter().copied());
        TextNormalizer::new().normalize(input, &table)
    }

    #[test]
    fn ascii_basic_lowercase() {
        assert_eq!(lower("HELLO"), "hello");
        assert_eq!(lower("HeLlO"), "hello");
        assert_eq!(lower("123 ABC!"), "123 abc!");
    }

    #[test]
    fn ascii_full_alphabet() {
        let upper: String = (b'A'..=b'Z').map(|b| b as char).collect();
        let lower_case: String = (b'a'..=b'z').map(|b| b as char).collect();
        assert_eq!(lower(&upper), lower_case);
    }

    #[test]
    fn whitespace_preserved() {
        assert_eq!(lower("  Hello \t\n World  "), "  hello \t\n world  ");
    }

    #[test]
    fn unicode_lowercase() {
        assert_eq!(lower("ÀÉÎ Straße"), "àéî straße");
    }

    #[test]
    fn expanding_lowercase_does_not_panic() {
        // U+0130 lowercases to two chars.
        assert_eq!(lower("İ"), "i\u{307}");
    }

    #[test]
    fn lowercase_into_reuses_buffer() {
        let mut buf = String::with_capacity(64);
        let cap = buf.capacity();
        TextNormalizer::new().lowercase_into("ONE", &mut buf);
        TextNormalizer::new().lowercase_into("TWO", &mut buf);
        assert_eq!(buf, "two");
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn substitution_is_literal_substring() {
        assert_eq!(subst("my company", &[("com", "X")]), "my Xpany");
    }

    #[test]
    fn substitution_cascades_in_order() {
        assert_eq!(subst("a", &[("a", "b"), ("b", "c")]), "c");
        assert_eq!(subst("a", &[("b", "c"), ("a", "b")]), "b");
    }

    #[test]
    fn substitution_sees_lowercased_text() {
        assert_eq!(subst("THIS", &[("this", "that")]), "that");
        assert_eq!(subst("this", &[("THIS", "that")]), "this");
    }

    #[test]
    fn empty_replacement_deletes() {
        assert_eq!(subst("a dummy value", &[("dummy", "")]), "a  value");
    }

    #[test]
    fn matches_are_non_overlapping() {
        assert_eq!(subst("aaaa", &[("aa", "b")]), "bb");
        assert_eq!(subst("aaa", &[("aa", "b")]), "ba");
    }

    #[test]
    fn replacement_not_rescanned_by_same_pair() {
        assert_eq!(subst("ab", &[("a", "aa")]), "aab");
    }

    #[test]
    fn multi_word_pattern_spans_whitespace() {
        assert_eq!(subst("New\nYork", &[("new\nyork", "nyc")]), "nyc");
    }

    #[test]
    fn no_match_leaves_text() {
        assert_eq!(subst("nothing here", &[("zzz", "y")]), "nothing here");
    }

    #[test]
    fn unicode_around_match() {
        assert_eq!(subst("café com", &[("com", "x")]), "café x");
    }
}
