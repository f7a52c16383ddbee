//! Keyword extraction.
//!
//! Runs the analyzer stages in their fixed order:
//!
//! 1. lower-case the article
//! 2. apply the substitution table
//! 3. split into `[a-z]+` tokens, dropping tokens shorter than
//!    [`KeywordConfig::min_token_len`]
//! 4. stem every surviving token
//! 5. deduplicate, drop noise words, sort
//!
//! With [`Scope::Line`] the same stages run on each line separately and the
//! per-line results are unioned. Substitution patterns then never match
//! across a line break, so the two scopes can disagree.

use keydex_types::{KeywordConfig, KeywordSet, NoiseWordSet, Scope, SubstitutionTable};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::debug;

use crate::analyzer::{stem, TextNormalizer, Tokenizer};

/// Extracts the sorted keyword set of an article.
///
/// Stateless apart from its configuration; one extractor can serve any
/// number of articles.
///
/// # Examples
///
/// ```
/// use keydex_core::pipeline::KeywordExtractor;
/// use keydex_types::{KeywordConfig, NoiseWordSet, SubstitutionTable};
///
/// let extractor = KeywordExtractor::new(KeywordConfig::default());
/// let noise: NoiseWordSet = ["these"].into_iter().collect();
/// let keywords = extractor.extract("Testing these filters", &SubstitutionTable::new(), &noise);
/// assert_eq!(keywords.as_slice(), ["filter", "test"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct KeywordExtractor {
    config: KeywordConfig,
    normalizer: TextNormalizer,
    tokenizer: Tokenizer,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(KeywordConfig::default())
    }
}

impl KeywordExtractor {
    /// Creates an extractor with the given options.
    pub fn new(config: KeywordConfig) -> Self {
        Self {
            config,
            normalizer: TextNormalizer::new(),
            tokenizer: Tokenizer::with_min_len(config.min_token_len),
        }
    }

    /// Runs the full pipeline over `article`.
    ///
    /// Never fails: any string is a valid article.
    pub fn extract(
        &self,
        article: &str,
        substitutions: &SubstitutionTable,
        noise: &NoiseWordSet,
    ) -> KeywordSet {
        let keywords = match self.config.scope {
            Scope::Document => self.extract_document(article, substitutions, noise),
            Scope::Line => self.extract_lines(article, substitutions, noise),
        };
        debug!("Parsed keywords ({}): {}", keywords.len(), keywords);
        keywords
    }

    fn extract_document(
        &self,
        article: &str,
        substitutions: &SubstitutionTable,
        noise: &NoiseWordSet,
    ) -> KeywordSet {
        let mut normalized = String::with_capacity(article.len());
        self.normalizer.lowercase_into(article, &mut normalized);
        debug!("Lowered article: {} bytes", normalized.len());
        self.normalizer.substitute(&mut normalized, substitutions);
        debug!("Replaced article: {} bytes", normalized.len());

        let mut tokens = 0usize;
        let mut stems: FxHashSet<&str> = FxHashSet::default();
        self.tokenizer.tokenize(&normalized, |token| {
            tokens += 1;
            stems.insert(stem(token));
        });
        debug!("Tokens: {} kept, {} distinct stems", tokens, stems.len());

        KeywordSet::from_unsorted(stems.into_iter().filter(|s| !noise.contains(s)))
    }

    fn extract_lines(
        &self,
        article: &str,
        substitutions: &SubstitutionTable,
        noise: &NoiseWordSet,
    ) -> KeywordSet {
        let mut buf = String::new();
        let mut keywords: FxHashSet<String> = FxHashSet::default();
        let mut lines = 0usize;

        for line in article.lines() {
            lines += 1;
            self.normalizer.normalize_into(line, substitutions, &mut buf);

            let mut line_stems: SmallVec<[&str; 32]> = SmallVec::new();
            self.tokenizer.tokenize(&buf, |token| {
                let s = stem(token);
                if !noise.contains(s) {
                    line_stems.push(s);
                }
            });

            for s in line_stems {
                if !keywords.contains(s) {
                    keywords.insert(s.to_owned());
                }
            }
        }
        debug!("Processed {} lines, {} distinct keywords", lines, keywords.len());

        KeywordSet::from_unsorted(keywords)
    }
}

/// Extracts keywords with the default options (whole document, 3-letter minimum).
///
/// ```
/// use keydex_core::pipeline::extract_keywords;
/// use keydex_types::{NoiseWordSet, SubstitutionTable};
///
/// let table = SubstitutionTable::from_pairs([("this", "that")]);
/// let noise: NoiseWordSet = ["these", "null"].into_iter().collect();
/// let article = "This is an long article. I am testing these filters working status";
///
/// let keywords = extract_keywords(article, &table, &noise);
/// assert_eq!(
///     keywords.as_slice(),
///     ["article", "filter", "long", "statu", "test", "that", "work"]
/// );
/// ```
pub fn extract_keywords(
    article: &str,
    substitutions: &SubstitutionTable,
    noise: &NoiseWordSet,
) -> KeywordSet {
    KeywordExtractor::default().extract(article, substitutions, noise)
}
