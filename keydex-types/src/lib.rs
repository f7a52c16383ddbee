//! Core types and errors for the keydex keyword extractor.
//!
//! This crate provides the values that flow between the loader, the
//! keyword pipeline and the reporter. Keeping them separate ensures:
//!
//! - **Stable invariants**: `KeywordSet` can only be built sorted and unique
//! - **Cross-crate compatibility**: core and CLI share the same types
//! - **Clean boundaries**: No circular dependencies between crates

#![warn(missing_docs)]

use core::fmt;
use std::io;
use std::path::PathBuf;

use rustc_hash::FxHashSet;
use serde::Deserialize;

/// Stem-level stopwords excluded from the final keyword set.
///
/// Immutable once built; only used for membership tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoiseWordSet {
    words: FxHashSet<String>,
}

impl NoiseWordSet {
    /// Builds a set from any collection of words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact membership test.
    #[inline(always)]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct noise words.
    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no noise word is defined.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates the words in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for NoiseWordSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter)
    }
}

/// Ordered `(pattern, replacement)` literal rewrites.
///
/// Order is significant: pairs are applied one after another and each pair
/// sees the text produced by the previous one, so `[("a","b"), ("b","c")]`
/// turns `"a"` into `"c"`.
///
/// Patterns match as plain substrings, not whole words. A pattern like
/// `"com"` also rewrites the inside of `"company"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionTable {
    pairs: Vec<(String, String)>,
}

impl SubstitutionTable {
    /// Creates an empty table.
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Appends a pair.
    ///
    /// A pattern that is already present keeps its position and takes the new
    /// replacement. Empty patterns are refused and `false` is returned.
    pub fn push(&mut self, pattern: impl Into<String>, replacement: impl Into<String>) -> bool {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return false;
        }
        let replacement = replacement.into();
        match self.pairs.iter_mut().find(|(p, _)| *p == pattern) {
            Some((_, existing)) => *existing = replacement,
            None => self.pairs.push((pattern, replacement)),
        }
        true
    }

    /// Builds a table from pairs in iteration order, with the same rules as [`push`](Self::push).
    pub fn from_pairs<I, P, R>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, R)>,
        P: Into<String>,
        R: Into<String>,
    {
        let mut table = Self::new();
        for (pattern, replacement) in pairs {
            table.push(pattern, replacement);
        }
        table
    }

    /// Iterates pairs in application order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(p, r)| (p.as_str(), r.as_str()))
    }

    /// Number of pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if the table holds no pair.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Final extractor output: distinct keywords in ascending byte order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl KeywordSet {
    /// Sorts and deduplicates an arbitrary collection.
    pub fn from_unsorted<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut keywords: Vec<String> = words.into_iter().map(Into::into).collect();
        keywords.sort_unstable();
        keywords.dedup();
        Self { keywords }
    }

    /// Merges two sets, keeping the result sorted and unique.
    pub fn union(self, other: KeywordSet) -> Self {
        if other.is_empty() {
            return self;
        }
        if self.is_empty() {
            return other;
        }

        let mut merged = Vec::with_capacity(self.len() + other.len());
        let mut left = self.keywords.into_iter().peekable();
        let mut right = other.keywords.into_iter().peekable();

        loop {
            let next = match (left.peek(), right.peek()) {
                (Some(a), Some(b)) => match a.cmp(b) {
                    core::cmp::Ordering::Less => left.next(),
                    core::cmp::Ordering::Greater => right.next(),
                    core::cmp::Ordering::Equal => {
                        right.next();
                        left.next()
                    }
                },
                (Some(_), None) => left.next(),
                (None, Some(_)) => right.next(),
                (None, None) => break,
            };
            merged.extend(next);
        }

        Self { keywords: merged }
    }

    /// Keywords as a sorted slice.
    #[inline(always)]
    pub fn as_slice(&self) -> &[String] {
        &self.keywords
    }

    /// Iterates keywords in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    /// Binary-search membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.keywords
            .binary_search_by(|k| k.as_str().cmp(word))
            .is_ok()
    }

    /// Number of keywords.
    #[inline]
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Returns true if nothing survived filtering.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Consumes the set, returning the sorted vector.
    pub fn into_vec(self) -> Vec<String> {
        self.keywords
    }
}

impl fmt::Display for KeywordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.keywords.join(", "))
    }
}

/// Errors raised while reading input files.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file is missing or unreadable.
    #[error("cannot read {}: {source}", .path.display())]
    FileAccess {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The file is not valid UTF-8 where a whole-file decode is required.
    #[error("{} is not valid UTF-8", .path.display())]
    Decode {
        /// File that failed.
        path: PathBuf,
    },
}

/// Errors raised while writing the HTML report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The destination cannot be created or written.
    #[error("cannot write report to {}: {source}", .path.display())]
    Write {
        /// Destination that failed.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// How much of the article the pipeline sees at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// The whole article in one pass. Substitutions may span lines.
    #[default]
    Document,
    /// Each line on its own; per-line keyword sets are unioned.
    Line,
}

/// Keyword pipeline options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// Tokens shorter than this are dropped before stemming.
    /// Default: 3
    pub min_token_len: usize,
    /// Whole-document or per-line processing.
    pub scope: Scope,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            min_token_len: 3,
            scope: Scope::Document,
        }
    }
}

impl KeywordConfig {
    /// Default options with per-line processing.
    pub const fn per_line() -> Self {
        Self {
            min_token_len: 3,
            scope: Scope::Line,
        }
    }
}

/// HTML report options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Document `<title>`.
    pub title: String,
    /// Centered page heading.
    pub heading: String,
    /// Keywords per table cell; 0 keeps everything in one cell.
    pub column_size: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Index".to_string(),
            heading: "Welcome to U.S. patent center".to_string(),
            column_size: 1000,
        }
    }
}
