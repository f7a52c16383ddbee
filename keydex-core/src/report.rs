//! HTML index rendering.
//!
//! The report is a fixed page: a title, a centered heading and a one-row
//! table whose cells hold the keyword list. A new cell starts every
//! [`ReportConfig::column_size`] keywords so long lists wrap into columns.

use std::fs;
use std::path::Path;

use keydex_types::{ReportConfig, ReportError};
use tracing::info;

const COLUMN_BREAK: &str = "</td>\n<td style=\"padding-right: 50px\">";

/// Renders keyword lists into the HTML index page.
///
/// # Example
///
/// ```
/// use keydex_core::report::Reporter;
///
/// let html = Reporter::default().render(&["alpha", "beta"]);
/// assert!(html.contains("<a href=\"#\">alpha</a>"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Reporter {
    config: ReportConfig,
}

impl Reporter {
    /// Creates a reporter with the given page options.
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Renders the complete HTML document.
    ///
    /// Keywords are emitted in the order given; callers pass a sorted list.
    pub fn render<S: AsRef<str>>(&self, keywords: &[S]) -> String {
        let mut items = String::with_capacity(keywords.len() * 64);
        let column_size = self.config.column_size;

        for (i, keyword) in keywords.iter().enumerate() {
            if column_size > 0 && i > 0 && i % column_size == 0 {
                items.push_str(COLUMN_BREAK);
            }
            items.push_str("<li style=\"margin-bottom: 5px\"><a href=\"#\">");
            push_escaped(&mut items, keyword.as_ref());
            items.push_str("</a></li>\n");
        }

        let mut page = String::with_capacity(items.len() + 512);
        page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        page.push_str("    <meta charset=\"UTF-8\">\n    <title>");
        push_escaped(&mut page, &self.config.title);
        page.push_str("</title>\n</head>\n<body bgcolor=\"#faebd7\">\n    <div>\n");
        page.push_str("        <h1 align=\"center\">");
        push_escaped(&mut page, &self.config.heading);
        page.push_str("</h1>\n    </div>\n    <hr/>\n");
        page.push_str("    <div style=\"margin-left: 200px; font-size: large\">\n");
        page.push_str("        <table>\n            <tr>\n");
        page.push_str("                <td style=\"padding-right: 50px\">\n");
        page.push_str(&items);
        page.push_str("                </td>\n            </tr>\n        </table>\n");
        page.push_str("    </div>\n</body>\n</html>\n");
        page
    }

    /// Renders and writes the document to `destination`.
    pub fn write<S: AsRef<str>>(
        &self,
        keywords: &[S],
        destination: impl AsRef<Path>,
    ) -> Result<(), ReportError> {
        let destination = destination.as_ref();
        fs::write(destination, self.render(keywords)).map_err(|source| ReportError::Write {
            path: destination.to_path_buf(),
            source,
        })?;
        info!("Report generated at {}", destination.display());
        Ok(())
    }
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("kw{i:05}")).collect()
    }

    fn breaks(html: &str) -> usize {
        html.matches(COLUMN_BREAK).count()
    }

    #[test]
    fn renders_items_in_order() {
        let html = Reporter::default().render(&["article", "filter", "long"]);
        let a = html.find(">article<").expect("article");
        let f = html.find(">filter<").expect("filter");
        let l = html.find(">long<").expect("long");
        assert!(a < f && f < l);
        assert_eq!(html.matches("<li ").count(), 3);
    }

    #[test]
    fn page_has_title_and_heading() {
        let html = Reporter::default().render::<&str>(&[]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Index</title>"));
        assert!(html.contains("Welcome to U.S. patent center</h1>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn exactly_one_column_has_no_break() {
        let html = Reporter::default().render(&keywords(1000));
        assert_eq!(breaks(&html), 0);
    }

    #[test]
    fn one_past_a_column_adds_one_break() {
        let html = Reporter::default().render(&keywords(1001));
        assert_eq!(breaks(&html), 1);
        let brk = html.find(COLUMN_BREAK).expect("break");
        let last_first_col = html.find(">kw00999<").expect("kw00999");
        let first_second_col = html.find(">kw01000<").expect("kw01000");
        assert!(last_first_col < brk && brk < first_second_col);
    }

    #[test]
    fn custom_column_size() {
        let reporter = Reporter::new(ReportConfig {
            column_size: 2,
            ..ReportConfig::default()
        });
        assert_eq!(breaks(&reporter.render(&keywords(5))), 2);
    }

    #[test]
    fn zero_column_size_never_breaks() {
        let reporter = Reporter::new(ReportConfig {
            column_size: 0,
            ..ReportConfig::default()
        });
        assert_eq!(breaks(&reporter.render(&keywords(3000))), 0);
    }

    #[test]
    fn escapes_markup() {
        let reporter = Reporter::new(ReportConfig {
            title: "A & B".to_string(),
            ..ReportConfig::default()
        });
        let html = reporter.render(&["<b>\"x\"</b>"]);
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains("&lt;b&gt;&quot;x&quot;&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn write_to_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let dest = dir.path().join("index.html");
        Reporter::default()
            .write(&["alpha"], &dest)
            .expect("write report");
        let html = fs::read_to_string(&dest).expect("read report");
        assert!(html.contains("<a href=\"#\">alpha</a>"));
    }

    #[test]
    fn write_to_missing_dir_fails() {
        let dir = tempfile::tempdir().expect("temp dir");
        let dest = dir.path().join("missing").join("index.html");
        match Reporter::default().write(&["alpha"], &dest) {
            Err(ReportError::Write { path, .. }) => assert_eq!(path, dest),
            Ok(()) => panic!("expected write error"),
        }
    }
}
