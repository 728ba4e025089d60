//! Home page table of contents.
//!
//! Turns the title map into a nested Markdown list and splices it into the
//! index template in place of the placeholder marker:
//!
//! ```text
//! guide.md            "Guide"   →  - [Guide](guide.html)
//! notes/tips.md       "Tips"    →    - [Tips](notes/tips.html)
//! notes/deep/leaf.md  "Leaf"    →      - [Leaf](notes/deep/leaf.html)
//! ```
//!
//! Nesting is purely positional: each directory level adds two spaces of
//! indentation, no matter whether the parent directory has a page of its own.
//! Links always use `/`, whatever the host path separator.

use crate::types::TitleMap;
use std::path::Path;
use tracing::warn;

/// Body substituted for the table of contents when the site has no pages.
pub const EMPTY_TOC: &str = "No pages yet.";

/// Title the rendered home page is given.
pub const HOME_TITLE: &str = "Home";

/// One line of the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    /// Path segments minus one: `a.md` is 0, `a/b/c.md` is 2.
    pub depth: usize,
    pub title: String,
    /// Output path with forward slashes, relative to the site root.
    pub link: String,
}

impl NavEntry {
    /// Markdown list item, indented two spaces per level.
    pub fn to_markdown(&self) -> String {
        format!(
            "{}- [{}]({})",
            "  ".repeat(self.depth),
            self.title,
            self.link
        )
    }
}

/// Navigation entries for every page, in path order.
pub fn nav_entries(titles: &TitleMap, output_extension: &str) -> Vec<NavEntry> {
    titles
        .iter()
        .map(|(path, title)| NavEntry {
            depth: path.components().count().saturating_sub(1),
            title: title.clone(),
            link: web_link(path, output_extension),
        })
        .collect()
}

/// The relative output path of `source`, joined with `/`.
pub fn web_link(source: &Path, output_extension: &str) -> String {
    source
        .with_extension(output_extension)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Render entries as a newline-joined Markdown list, or [`EMPTY_TOC`].
pub fn render_toc(entries: &[NavEntry]) -> String {
    if entries.is_empty() {
        return EMPTY_TOC.to_string();
    }
    entries
        .iter()
        .map(NavEntry::to_markdown)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the index document text from its template.
///
/// Only the first occurrence of `placeholder` is replaced. A template with no
/// placeholder is returned unchanged.
pub fn synthesize_index(
    template: &str,
    titles: &TitleMap,
    placeholder: &str,
    output_extension: &str,
) -> String {
    if !template.contains(placeholder) {
        warn!(placeholder, "index template has no table of contents placeholder");
        return template.to_string();
    }
    let toc = render_toc(&nav_entries(titles, output_extension));
    template.replacen(placeholder, &toc, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const MARKER: &str = "<!-- TABLE_OF_CONTENTS -->";

    fn titles(pairs: &[(&str, &str)]) -> TitleMap {
        pairs
            .iter()
            .map(|(p, t)| (PathBuf::from(p), t.to_string()))
            .collect()
    }

    #[test]
    fn depth_follows_path_segments() {
        let map = titles(&[("a.md", "A"), ("a/b/c.md", "C"), ("x/y.md", "Y")]);
        let entries = nav_entries(&map, "html");
        let depths: Vec<usize> = entries.iter().map(|e| e.depth).collect();
        assert_eq!(depths, vec![0, 2, 1]);
    }

    #[test]
    fn deep_entry_indented_four_spaces() {
        let map = titles(&[("a.md", "A"), ("a/b/c.md", "C")]);
        let toc = render_toc(&nav_entries(&map, "html"));
        assert_eq!(toc, "- [A](a.html)\n    - [C](a/b/c.html)");
    }

    #[test]
    fn entries_sorted_by_path_not_title() {
        let map = titles(&[("zeta.md", "Alpha"), ("alpha.md", "Zeta")]);
        let entries = nav_entries(&map, "html");
        assert_eq!(entries[0].link, "alpha.html");
        assert_eq!(entries[0].title, "Zeta");
        assert_eq!(entries[1].link, "zeta.html");
    }

    #[test]
    fn link_swaps_only_last_extension() {
        assert_eq!(web_link(Path::new("v1.2/notes.md"), "html"), "v1.2/notes.html");
        assert_eq!(web_link(Path::new("release.notes.md"), "htm"), "release.notes.htm");
    }

    #[cfg(windows)]
    #[test]
    fn link_uses_forward_slashes_on_windows() {
        assert_eq!(web_link(Path::new(r"notes\tips.md"), "html"), "notes/tips.html");
    }

    #[test]
    fn empty_map_renders_placeholder_text() {
        assert_eq!(render_toc(&[]), EMPTY_TOC);
        let index = synthesize_index(MARKER, &TitleMap::new(), MARKER, "html");
        assert_eq!(index, "No pages yet.");
    }

    #[test]
    fn marker_replaced_in_place() {
        let template = "# Welcome\n\n<!-- TABLE_OF_CONTENTS -->\n\nFooter\n";
        let map = titles(&[("guide.md", "Guide"), ("notes/tips.md", "Tips")]);
        let index = synthesize_index(template, &map, MARKER, "html");
        assert_eq!(
            index,
            "# Welcome\n\n- [Guide](guide.html)\n  - [Tips](notes/tips.html)\n\nFooter\n"
        );
    }

    #[test]
    fn template_without_marker_passes_through() {
        let template = "# Just a home page\n";
        let map = titles(&[("guide.md", "Guide")]);
        assert_eq!(synthesize_index(template, &map, MARKER, "html"), template);
    }

    #[test]
    fn only_first_marker_replaced() {
        let template = "<!-- TABLE_OF_CONTENTS -->\n<!-- TABLE_OF_CONTENTS -->";
        let map = titles(&[("a.md", "A")]);
        assert_eq!(
            synthesize_index(template, &map, MARKER, "html"),
            "- [A](a.html)\n<!-- TABLE_OF_CONTENTS -->"
        );
    }

    #[test]
    fn custom_placeholder() {
        let map = titles(&[("a.md", "A")]);
        assert_eq!(synthesize_index("{{toc}}", &map, "{{toc}}", "html"), "- [A](a.html)");
    }

    #[test]
    fn title_text_inserted_verbatim() {
        let map = titles(&[("a.md", "Pointers & [Brackets]")]);
        assert_eq!(
            render_toc(&nav_entries(&map, "html")),
            "- [Pointers & [Brackets]](a.html)"
        );
    }
}
