//! Fallback titles derived from file names.
//!
//! A document without front matter or headings is still listed in the index,
//! under a title built from its file stem:
//! - `getting-started` → "Getting Started"
//! - `faq` → "Faq"
//! - `API-reference` → "Api Reference"
//! - `v2-notes` → "V2 Notes"

/// Build a display title from a file stem.
///
/// Dashes become spaces, then each word is title-cased: a letter following a
/// non-letter is uppercased, any other letter is lowercased.
pub fn fallback_title(stem: &str) -> String {
    let spaced = stem.replace('-', " ");
    let mut title = String::with_capacity(spaced.len());
    let mut prev_is_letter = false;
    for c in spaced.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                title.extend(c.to_lowercase());
            } else {
                title.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            title.push(c);
            prev_is_letter = false;
        }
    }
    title
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_word_capitalized() {
        assert_eq!(fallback_title("faq"), "Faq");
    }

    #[test]
    fn dashes_become_spaces() {
        assert_eq!(fallback_title("getting-started"), "Getting Started");
    }

    #[test]
    fn uppercase_runs_lowered() {
        assert_eq!(fallback_title("API-reference"), "Api Reference");
    }

    #[test]
    fn digits_start_a_new_word() {
        assert_eq!(fallback_title("v2-notes"), "V2 Notes");
        assert_eq!(fallback_title("2nd-draft"), "2Nd Draft");
    }

    #[test]
    fn underscores_and_dots_kept() {
        assert_eq!(fallback_title("release_notes.v1"), "Release_Notes.V1");
    }

    #[test]
    fn non_ascii_letters() {
        assert_eq!(fallback_title("écoute-ça"), "Écoute Ça");
    }

    #[test]
    fn empty_stem() {
        assert_eq!(fallback_title(""), "");
    }
}
