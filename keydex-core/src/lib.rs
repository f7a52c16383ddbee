//! Keyword extraction core.
//!
//! Turns a plain-text article into a sorted, deduplicated keyword list and
//! renders it as a static HTML index.
//!
//! ```text
//! article ──► normalizer ──► tokenizer ──► stemmer ──► noise filter ──► KeywordSet ──► report
//!            (lowercase,     ([a-z]+,      (ing/ed/s)   (dedup, sort)
//!             substitute)     len >= 3)
//! ```
//!
//! - [`analyzer`]: the per-stage building blocks
//! - [`pipeline`]: [`KeywordExtractor`] wiring the stages together
//! - [`loader`]: reading the noise-word, substitution and article files
//! - [`report`]: the HTML [`Reporter`]

pub mod analyzer;
pub mod loader;
pub mod pipeline;
pub mod report;

pub use pipeline::{extract_keywords, KeywordExtractor};
pub use report::Reporter;
