mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use keydex_core::loader::{load_article, load_noise_words, load_substitutions};
use keydex_core::{KeywordExtractor, Reporter};
use keydex_types::Scope;
use tracing::{debug, info};

use crate::config::Settings;

/// Extract keywords from an article and write them as an HTML index
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Noise-word list, one word per line
    #[arg(long)]
    noise_words: Option<PathBuf>,

    /// Substitution table, one `pattern,replacement` per line
    #[arg(long)]
    substitutions: Option<PathBuf>,

    /// Article to index
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Destination HTML file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Process the article whole or line by line
    #[arg(long, value_enum)]
    scope: Option<ScopeArg>,

    /// Drop tokens shorter than this
    #[arg(long)]
    min_token_len: Option<usize>,

    /// Keywords per report column (0 = single column)
    #[arg(long)]
    column_size: Option<usize>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScopeArg {
    Document,
    Line,
}

impl From<ScopeArg> for Scope {
    fn from(value: ScopeArg) -> Self {
        match value {
            ScopeArg::Document => Scope::Document,
            ScopeArg::Line => Scope::Line,
        }
    }
}

impl Args {
    /// Resolves defaults, config file and flags into one `Settings`.
    fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                debug!("Using config file from --config argument: {}", path.display());
                Settings::from_file(path)?
            }
            None => Settings::default(),
        };

        let paths = &mut settings.paths;
        if let Some(p) = &self.noise_words {
            paths.noise_words = p.clone();
        }
        if let Some(p) = &self.substitutions {
            paths.substitutions = p.clone();
        }
        if let Some(p) = &self.input {
            paths.input = p.clone();
        }
        if let Some(p) = &self.output {
            paths.output = p.clone();
        }
        if let Some(scope) = self.scope {
            settings.keywords.scope = scope.into();
        }
        if let Some(n) = self.min_token_len {
            settings.keywords.min_token_len = n;
        }
        if let Some(n) = self.column_size {
            settings.report.column_size = n;
        }

        Ok(settings)
    }
}

fn run(settings: Settings) -> Result<()> {
    let paths = &settings.paths;

    let noise = load_noise_words(&paths.noise_words).context("loading noise words")?;
    info!("Noise words: {}", noise.len());

    let substitutions =
        load_substitutions(&paths.substitutions).context("loading substitutions")?;
    info!("Substitutions: {}", substitutions.len());

    let article = load_article(&paths.input).context("loading article")?;

    let keywords =
        KeywordExtractor::new(settings.keywords).extract(&article, &substitutions, &noise);
    info!("Keywords: {}", keywords.len());

    Reporter::new(settings.report)
        .write(keywords.as_slice(), &paths.output)
        .context("writing report")?;

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    let settings = args.settings()?;
    debug!("Settings: {:?}", settings);

    run(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "keydex",
            "--input",
            "a.txt",
            "--scope",
            "line",
            "--column-size",
            "10",
        ]);
        let settings = args.settings().expect("settings");
        assert_eq!(settings.paths.input, PathBuf::from("a.txt"));
        assert_eq!(settings.paths.output, PathBuf::from("index.html"));
        assert_eq!(settings.keywords.scope, Scope::Line);
        assert_eq!(settings.report.column_size, 10);
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let cfg = dir.path().join("keydex.toml");
        fs::write(
            &cfg,
            "[paths]\ninput = \"from_file.txt\"\noutput = \"file.html\"\n",
        )
        .expect("write config");

        let cfg = cfg.to_str().expect("utf-8 temp path");

        let args = Args::parse_from(["keydex", "--config", cfg, "--output", "flag.html"]);
        let settings = args.settings().expect("settings");
        assert_eq!(settings.paths.input, PathBuf::from("from_file.txt"));
        assert_eq!(settings.paths.output, PathBuf::from("flag.html"));
    }

    #[test]
    fn run_writes_report() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = |name: &str| dir.path().join(name);
        fs::write(path("noise.txt"), "these\nnull\n").expect("noise");
        fs::write(path("subs.txt"), "this,that\ndummy,none\n").expect("subs");
        fs::write(
            path("input.txt"),
            "This is an long article. I am testing these filters working status",
        )
        .expect("input");

        let mut settings = Settings::default();
        settings.paths.noise_words = path("noise.txt");
        settings.paths.substitutions = path("subs.txt");
        settings.paths.input = path("input.txt");
        settings.paths.output = path("index.html");

        run(settings).expect("run");

        let html = fs::read_to_string(path("index.html")).expect("report");
        for kw in ["article", "filter", "long", "statu", "test", "that", "work"] {
            assert!(html.contains(&format!("<a href=\"#\">{kw}</a>")), "missing {kw}");
        }
        assert!(!html.contains(">these<"));
    }

    #[test]
    fn run_fails_on_missing_input() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut settings = Settings::default();
        settings.paths.noise_words = dir.path().join("missing.txt");

        let err = run(settings).expect_err("missing noise file");
        assert!(format!("{err:#}").contains("loading noise words"));
    }
}
