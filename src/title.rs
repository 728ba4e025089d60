//! Document title extraction.
//!
//! Every page needs exactly one display title, used both as the `<title>` of
//! its rendered HTML and as its label in the home-page table of contents.
//!
//! ## Priority (first match wins)
//!
//! ```text
//! 1. Front matter   ---\ntitle: Install Guide\n---   → "Install Guide"
//! 2. H1 heading     # Install Guide                  → "Install Guide"
//! 3. H2 heading     ## Install Guide                 → "Install Guide"
//! 4. Fallback       install-guide.md                 → "Install Guide" (caller-supplied)
//! ```
//!
//! Front matter is only scanned line by line for a flat `title:` key; it is
//! never parsed as YAML. An unterminated block is scanned to the end of the
//! text and extraction then falls through to headings. Extraction never fails.

use std::fmt;

/// Line that opens and closes a front matter block.
const FRONT_MATTER_DELIMITER: &str = "---";

/// Where a page's title came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleSource {
    FrontMatter,
    Heading,
    Subheading,
    Fallback,
}

impl TitleSource {
    fn as_str(&self) -> &'static str {
        match self {
            TitleSource::FrontMatter => "front matter",
            TitleSource::Heading => "heading",
            TitleSource::Subheading => "subheading",
            TitleSource::Fallback => "file name",
        }
    }
}

impl fmt::Display for TitleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved title and the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    pub text: String,
    pub source: TitleSource,
}

/// Resolve a document's title, returning the fallback when nothing matches.
pub fn extract_title(text: &str, fallback: &str) -> String {
    resolve_title(text, fallback).text
}

/// Resolve a document's title along with the rule that matched.
pub fn resolve_title(text: &str, fallback: &str) -> Title {
    if let Some(title) = front_matter_title(text) {
        return Title {
            text: title.to_string(),
            source: TitleSource::FrontMatter,
        };
    }
    if let Some(title) = text.lines().find_map(|line| heading_text(line, "#")) {
        return Title {
            text: title.to_string(),
            source: TitleSource::Heading,
        };
    }
    if let Some(title) = text.lines().find_map(|line| heading_text(line, "##")) {
        return Title {
            text: title.to_string(),
            source: TitleSource::Subheading,
        };
    }
    Title {
        text: fallback.to_string(),
        source: TitleSource::Fallback,
    }
}

/// The lines of the front matter block, excluding both delimiters.
///
/// Returns `None` when the text doesn't open with a delimiter line. An
/// unterminated block runs to the end of the text.
fn front_matter_lines(text: &str) -> Option<impl Iterator<Item = &str>> {
    let mut lines = text.lines();
    if lines.next()? != FRONT_MATTER_DELIMITER {
        return None;
    }
    Some(lines.take_while(|line| line.trim() != FRONT_MATTER_DELIMITER))
}

/// Byte offset where the body starts after a terminated front matter block.
///
/// Returns 0 when there is no front matter or it is never closed.
pub fn body_offset(text: &str) -> usize {
    let mut lines = text.split_inclusive('\n');
    let mut offset = match lines.next() {
        Some(first) if trim_eol(first) == FRONT_MATTER_DELIMITER => first.len(),
        _ => return 0,
    };
    for line in lines {
        offset += line.len();
        if trim_eol(line).trim() == FRONT_MATTER_DELIMITER {
            return offset;
        }
    }
    0
}

fn trim_eol(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

fn front_matter_title(text: &str) -> Option<&str> {
    front_matter_lines(text)?.find_map(title_value)
}

/// Value of a `title:` line, key matched case-insensitively.
fn title_value(line: &str) -> Option<&str> {
    let key = line.get(..6)?;
    if !key.eq_ignore_ascii_case("title:") {
        return None;
    }
    non_blank(&line[6..])
}

/// Text of an ATX heading whose marker is exactly `marker`.
///
/// The marker must be followed by whitespace, so `#` never matches `##`.
fn heading_text<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(marker)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    non_blank(rest)
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
