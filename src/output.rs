//! CLI output formatting.
//!
//! Output is **information-centric**: each page is shown by its title first,
//! with the file it came from as secondary context. Nesting mirrors the
//! table of contents, so what `check` prints is what the home page will list.
//!
//! ## Check
//!
//! ```text
//! Pages
//! 001 Guide
//!     Source: guide.md (heading)
//! 002 Tips
//!     Source: notes/tips.md (front matter)
//!
//! 2 pages
//! ```
//!
//! ## Build
//!
//! ```text
//! Home → index.html
//! 001 Guide → guide.html
//!     002 Tips → notes/tips.html
//!
//! Rendered 2 pages with pandoc into _site
//! ```
//!
//! Each `format_*` function is pure and returns lines for testability; the
//! `print_*` wrappers write them to stdout.

use crate::types::{BuildReport, Page};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Directory depth of a root-relative path.
fn depth(path: &Path) -> usize {
    path.components().count().saturating_sub(1)
}

/// Forward-slash display of a relative path.
fn slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

pub fn format_check_output(pages: &[Page]) -> Vec<String> {
    let mut lines = Vec::new();
    if pages.is_empty() {
        lines.push("No pages found".to_string());
        return lines;
    }

    lines.push("Pages".to_string());
    for (i, page) in pages.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), page.title));
        lines.push(format!(
            "{}Source: {} ({})",
            indent(1),
            slash_path(&page.source),
            page.title_source
        ));
    }
    lines.push(String::new());
    lines.push(plural(pages.len(), "page"));
    lines
}

pub fn print_check_output(pages: &[Page]) {
    for line in format_check_output(pages) {
        println!("{}", line);
    }
}

pub fn format_build_output(report: &BuildReport) -> Vec<String> {
    let mut lines = Vec::new();

    let index_name = report
        .index
        .strip_prefix(&report.output_dir)
        .unwrap_or(&report.index);
    lines.push(format!("Home \u{2192} {}", slash_path(index_name)));

    for (i, page) in report.pages.iter().enumerate() {
        lines.push(format!(
            "{}{} {} \u{2192} {}",
            indent(depth(&page.source)),
            format_index(i + 1),
            page.title,
            slash_path(&page.output)
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Rendered {} with {} into {}",
        plural(report.pages.len(), "page"),
        report.renderer,
        report.output_dir.display()
    ));
    lines
}

pub fn print_build_output(report: &BuildReport) {
    for line in format_build_output(report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::title::TitleSource;
    use std::path::PathBuf;

    fn page(source: &str, title: &str, title_source: TitleSource) -> Page {
        let source = PathBuf::from(source);
        Page {
            output: source.with_extension("html"),
            source,
            title: title.to_string(),
            title_source,
        }
    }

    fn sample_pages() -> Vec<Page> {
        vec![
            page("guide.md", "Guide", TitleSource::Heading),
            page("notes/tips.md", "Tips", TitleSource::FrontMatter),
        ]
    }

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1000), "1000");
    }

    #[test]
    fn check_output_lists_sources_and_rules() {
        let lines = format_check_output(&sample_pages());
        assert_eq!(
            lines,
            vec![
                "Pages",
                "001 Guide",
                "    Source: guide.md (heading)",
                "002 Tips",
                "    Source: notes/tips.md (front matter)",
                "",
                "2 pages",
            ]
        );
    }

    #[test]
    fn check_output_fallback_rule_named() {
        let pages = vec![page("faq.md", "Faq", TitleSource::Fallback)];
        let lines = format_check_output(&pages);
        assert_eq!(lines[2], "    Source: faq.md (file name)");
        assert_eq!(lines.last().unwrap(), "1 page");
    }

    #[test]
    fn check_output_empty() {
        assert_eq!(format_check_output(&[]), vec!["No pages found"]);
    }

    #[test]
    fn build_output_nests_by_depth() {
        let report = BuildReport {
            pages: sample_pages(),
            index: PathBuf::from("/site/_site/index.html"),
            output_dir: PathBuf::from("/site/_site"),
            renderer: "pandoc".to_string(),
        };
        let lines = format_build_output(&report);
        assert_eq!(lines[0], "Home \u{2192} index.html");
        assert_eq!(lines[1], "001 Guide \u{2192} guide.html");
        assert_eq!(lines[2], "    002 Tips \u{2192} notes/tips.html");
        assert_eq!(lines[4], "Rendered 2 pages with pandoc into /site/_site");
    }

    #[test]
    fn build_output_empty_site() {
        let report = BuildReport {
            pages: vec![],
            index: PathBuf::from("/out/index.html"),
            output_dir: PathBuf::from("/out"),
            renderer: "builtin".to_string(),
        };
        let lines = format_build_output(&report);
        assert_eq!(
            lines,
            vec![
                "Home \u{2192} index.html",
                "",
                "Rendered 0 pages with builtin into /out",
            ]
        );
    }
}
