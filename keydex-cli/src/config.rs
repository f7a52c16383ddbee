//! Run configuration.
//!
//! Values come from three layers, later ones winning: built-in defaults, an
//! optional TOML file, command-line flags.
//!
//! ```toml
//! [paths]
//! noise_words = "noise.txt"
//! output = "out/index.html"
//!
//! [keywords]
//! scope = "line"
//!
//! [report]
//! column_size = 500
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use keydex_types::{KeywordConfig, ReportConfig};
use serde::Deserialize;

/// Input and output locations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Paths {
    pub noise_words: PathBuf,
    pub substitutions: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            noise_words: PathBuf::from("MilestoneA_noise_words.txt"),
            substitutions: PathBuf::from("MilestoneA_replacement_words.txt"),
            input: PathBuf::from("MilestoneA_input.txt"),
            output: PathBuf::from("index.html"),
        }
    }
}

/// Everything one run needs.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub paths: Paths,
    pub keywords: KeywordConfig,
    pub report: ReportConfig,
}

impl Settings {
    /// Parses settings from TOML text. Missing tables and keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Reads and parses a TOML settings file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keydex_types::Scope;

    #[test]
    fn empty_file_is_defaults() {
        let settings = Settings::from_toml_str("").expect("parse");
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.paths.output, PathBuf::from("index.html"));
    }

    #[test]
    fn partial_tables_keep_other_defaults() {
        let settings = Settings::from_toml_str(
            r#"
            [paths]
            input = "article.txt"

            [keywords]
            scope = "line"

            [report]
            column_size = 500
            "#,
        )
        .expect("parse");

        assert_eq!(settings.paths.input, PathBuf::from("article.txt"));
        assert_eq!(
            settings.paths.noise_words,
            PathBuf::from("MilestoneA_noise_words.txt")
        );
        assert_eq!(settings.keywords.scope, Scope::Line);
        assert_eq!(settings.keywords.min_token_len, 3);
        assert_eq!(settings.report.column_size, 500);
        assert_eq!(settings.report.title, "Index");
    }

    #[test]
    fn unknown_table_rejected() {
        assert!(Settings::from_toml_str("[logging]\nlevel = \"debug\"").is_err());
    }

    #[test]
    fn bad_scope_rejected() {
        assert!(Settings::from_toml_str("[keywords]\nscope = \"page\"").is_err());
    }

    #[test]
    fn from_file_reports_path() {
        let err = Settings::from_file(Path::new("/definitely/not/here.toml"))
            .expect_err("missing file");
        assert!(format!("{err:#}").contains("/definitely/not/here.toml"));
    }
}
