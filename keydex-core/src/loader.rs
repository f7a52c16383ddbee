//! Input file loading.
//!
//! Three plain-text inputs feed the pipeline:
//!
//! - **Noise words**: one word per line, blank lines ignored
//! - **Substitutions**: `pattern,replacement` per line, split on the first
//!   comma; lines without a comma are ignored
//! - **Article**: read whole
//!
//! Every file is read in one scoped call, nothing stays open. A missing or
//! unreadable file is a [`LoadError::FileAccess`]. A substitution line that
//! is not valid UTF-8 is logged and skipped; the rest of the file still loads.
//! A leading UTF-8 byte order mark is dropped from the noise-word and
//! substitution lists so it never sticks to the first entry.

use std::fs;
use std::path::Path;

use keydex_types::{LoadError, NoiseWordSet, SubstitutionTable};
use memchr::memchr;
use tracing::{debug, warn};

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

fn read_bytes(path: &Path) -> Result<Vec<u8>, LoadError> {
    fs::read(path).map_err(|source| LoadError::FileAccess {
        path: path.to_path_buf(),
        source,
    })
}

fn read_utf8(path: &Path) -> Result<String, LoadError> {
    String::from_utf8(read_bytes(path)?).map_err(|_| LoadError::Decode {
        path: path.to_path_buf(),
    })
}

/// Parses a noise-word list held in memory.
///
/// Lines are trimmed; blank lines are skipped.
pub fn parse_noise_words(content: &str) -> NoiseWordSet {
    content
        .strip_prefix('\u{feff}')
        .unwrap_or(content)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Parses a substitution table held in memory as raw bytes.
///
/// Lines are trimmed and split on the first comma. The replacement may be
/// empty. Lines without a comma, lines with an empty pattern, and lines that
/// are not valid UTF-8 are skipped; the latter two are logged.
pub fn parse_substitutions(content: &[u8]) -> SubstitutionTable {
    let mut table = SubstitutionTable::new();
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);

    for (index, raw) in content.split(|&b| b == b'\n').enumerate() {
        let line_no = index + 1;
        let line = match std::str::from_utf8(raw) {
            Ok(line) => line.trim(),
            Err(err) => {
                warn!("Skipping substitution line {}: {}", line_no, err);
                continue;
            }
        };

        if line.is_empty() {
            continue;
        }

        let Some(comma) = memchr(b',', line.as_bytes()) else {
            continue;
        };

        let (pattern, replacement) = (&line[..comma], &line[comma + 1..]);
        if !table.push(pattern, replacement) {
            warn!("Skipping substitution line {}: empty pattern", line_no);
        }
    }

    table
}

/// Loads the noise-word list at `path`.
pub fn load_noise_words(path: impl AsRef<Path>) -> Result<NoiseWordSet, LoadError> {
    let path = path.as_ref();
    let words = parse_noise_words(&read_utf8(path)?);
    debug!("Noise words from {}: {}", path.display(), words.len());
    Ok(words)
}

/// Loads the substitution table at `path`.
pub fn load_substitutions(path: impl AsRef<Path>) -> Result<SubstitutionTable, LoadError> {
    let path = path.as_ref();
    let table = parse_substitutions(&read_bytes(path)?);
    debug!("Substitutions from {}: {:?}", path.display(), table);
    Ok(table)
}

/// Loads the whole article at `path`.
pub fn load_article(path: impl AsRef<Path>) -> Result<String, LoadError> {
    let path = path.as_ref();
    let article = read_utf8(path)?;
    debug!("Article from {}: {} bytes", path.display(), article.len());
    Ok(article)
}
