//! Keyword Pipeline Benchmarking Tool
//!
//! Measures the throughput of the keyword pipeline on a large text file,
//! such as a concatenated patent corpus or a Wikipedia dump.
//!
//! ## What It Benchmarks
//!
//! 1. **Normalize**: lower-casing plus substitution
//! 2. **Tokenize**: `[a-z]+` splitting of pre-normalized text
//! 3. **Pipeline**: the full extractor, whole-document or per-line
//!
//! ## Usage
//!
//! ```bash
//! # Whole-document pipeline with no substitutions
//! ./target/release/keyword_bench /path/to/article.txt
//!
//! # Per-line pipeline with a substitution file
//! ./target/release/keyword_bench /path/to/article.txt line /path/to/subs.txt
//! ```
//!
//! Run with `--release`; debug builds are an order of magnitude slower.

use std::env;
use std::time::{Duration, Instant};

use keydex_core::analyzer::{TextNormalizer, Tokenizer};
use keydex_core::loader::{load_article, load_substitutions};
use keydex_core::KeywordExtractor;
use keydex_types::{KeywordConfig, LoadError, NoiseWordSet, Scope, SubstitutionTable};

const MEASURE_RUNS: usize = 5;
const MIB: f64 = 1024.0 * 1024.0;

fn main() -> Result<(), LoadError> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: keyword_bench <path> [document|line] [substitutions]");
        std::process::exit(1);
    }

    let scope = match args.get(2).map(String::as_str) {
        Some("line") => Scope::Line,
        _ => Scope::Document,
    };

    let table = match args.get(3) {
        Some(path) => load_substitutions(path)?,
        None => SubstitutionTable::new(),
    };

    println!("Loading file...");
    let input = load_article(&args[1])?;

    println!("File size:     {:.2} MiB", input.len() as f64 / MIB);
    println!("Scope:         {:?}", scope);
    println!("Substitutions: {}\n", table.len());

    bench_normalize(&input, &table);
    bench_tokenize(&input);
    bench_pipeline(&input, &table, scope);

    Ok(())
}

fn bench_normalize(input: &str, table: &SubstitutionTable) {
    let normalizer = TextNormalizer::new();
    let mut out = String::with_capacity(input.len());

    run_timed("Normalize", input.len(), || {
        normalizer.normalize_into(input, table, &mut out);
        out.len()
    });
}

fn bench_tokenize(input: &str) {
    let normalized = TextNormalizer::new().normalize(input, &SubstitutionTable::new());
    let tokenizer = Tokenizer::with_min_len(3);

    run_timed("Tokenize", input.len(), || {
        let mut tokens = 0usize;
        tokenizer.tokenize(&normalized, |_| tokens += 1);
        tokens
    });
}

fn bench_pipeline(input: &str, table: &SubstitutionTable, scope: Scope) {
    let extractor = KeywordExtractor::new(KeywordConfig {
        scope,
        ..KeywordConfig::default()
    });
    let noise = NoiseWordSet::default();

    run_timed("Pipeline", input.len(), || {
        extractor.extract(input, table, &noise).len()
    });
}

/// Runs `f` once untimed, then averages `MEASURE_RUNS` timed calls.
/// `f` returns an output size that is printed and kept from being optimized out.
fn run_timed<F: FnMut() -> usize>(label: &str, input_bytes: usize, mut f: F) {
    std::hint::black_box(f());

    let mut total = Duration::ZERO;
    let mut output = 0;
    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        output = std::hint::black_box(f());
        total += start.elapsed();
    }

    let secs = (total / MEASURE_RUNS as u32).as_secs_f64();
    let mib = input_bytes as f64 / MIB;
    println!("{label:<10} {secs:>8.3} s  {:>9.1} MiB/s  output {output}", mib / secs);
}
