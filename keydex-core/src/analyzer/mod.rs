//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Lower-cases raw text and applies literal substitutions
//! - **Tokenizer**: Splits normalized text into `[a-z]+` tokens
//! - **Stemmer**: Strips one `ing`/`ed`/`s` suffix from a token

pub mod normalizer;
pub mod stemmer;
pub mod tokenizer;

pub use normalizer::TextNormalizer;
pub use stemmer::stem;
pub use tokenizer::Tokenizer;
