//! Streaming Tokenizer Module
//!
//! Splits normalized text into the alphabetic runs the keyword pipeline
//! works on. It is the second stage of the pipeline, after lower-casing and
//! substitution.
//!
//! ## What It Does
//!
//! Given normalized input like `"i am testing 2 filters!"`, it emits every
//! maximal run of ASCII `a`-`z` in input order:
//!
//! ```ignore
//! "i"
//! "am"
//! "testing"
//! "filters"
//! ```
//!
//! Everything else (digits, punctuation, whitespace, non-ASCII letters) is
//! a separator. Empty runs are never emitted.
//!
//! ## Key Features
//!
//! - **Zero Allocation**: Tokens are slices of the original string
//! - **Streaming**: A callback receives each token, no intermediate collection
//! - **Length Filter**: Runs shorter than a minimum can be skipped at the source
//!
//! ## Usage
//!
//! ```rust
//! use keydex_core::analyzer::tokenizer::Tokenizer;
//!
//! let mut words = Vec::new();
//! Tokenizer::with_min_len(3).tokenize("i am testing", |text| words.push(text));
//! assert_eq!(words, ["testing"]);
//! ```
//!
//! ## The Input Contract
//!
//! The tokenizer only recognizes lowercase letters. Upper-case input is not
//! an error, but `A`-`Z` act as separators, so callers lower-case first.

use core::str;

#[inline(always)]
const fn is_token_byte(b: u8) -> bool {
    b.is_ascii_lowercase()
}

/// Streaming tokenizer over `[a-z]+` runs.
///
/// There is no upper bound on the number of tokens; the whole input is
/// always scanned.
///
/// ## Example
///
/// ```
/// use keydex_core::analyzer::tokenizer::Tokenizer;
///
/// let mut count = 0;
/// Tokenizer::new().tokenize("hello, world-42 foo", |_text| {
///     count += 1;
/// });
/// assert_eq!(count, 3);
/// ```
#[derive(Debug, Copy, Clone)]
pub struct Tokenizer {
    min_len: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Creates a tokenizer that emits every non-empty run.
    #[inline]
    pub const fn new() -> Self {
        Self { min_len: 1 }
    }

    /// Creates a tokenizer that drops runs shorter than `min_len` bytes.
    #[inline]
    pub const fn with_min_len(min_len: usize) -> Self {
        Self {
            min_len: if min_len == 0 { 1 } else { min_len },
        }
    }

    /// Tokenizes `text` and emits every run in input order.
    #[inline]
    pub fn tokenize<'n, F>(&self, text: &'n str, mut emit: F)
    where
        F: FnMut(&'n str),
    {
        let bytes = text.as_bytes();
        let mut i = 0usize;

        while i < bytes.len() {
            if !is_token_byte(bytes[i]) {
                i += 1;
                continue;
            }

            let start = i;
            while i < bytes.len() && is_token_byte(bytes[i]) {
                i += 1;
            }

            if i - start < self.min_len {
                continue;
            }

            // SAFETY: the run holds only ASCII bytes, each a complete UTF-8
            // char, and is bounded by ASCII or char-leading bytes.
            let token = unsafe { str::from_utf8_unchecked(&bytes[start..i]) };
            emit(token);
        }
    }
}
