//! Title and keyword cleanup applied to every enrichment response.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use stockprompt_core::constants::{MAX_KEYWORDS, TITLE_MAX_CHARS};

static WHITESPACE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\s+").ok());

/// Trailing characters stripped from a title.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', '-', '"', '\''];

fn collapse_whitespace(text: &str) -> String {
    match WHITESPACE.as_ref() {
        Some(re) => re.replace_all(text.trim(), " ").into_owned(),
        None => text.split_whitespace().collect::<Vec<_>>().join(" "),
    }
}

/// Collapse whitespace, cap at `TITLE_MAX_CHARS`, then strip trailing
/// punctuation and whitespace.
pub fn sanitize_title(raw: &str) -> String {
    let collapsed = collapse_whitespace(raw);
    let capped: String = collapsed.chars().take(TITLE_MAX_CHARS).collect();
    capped
        .trim_end_matches(|c: char| c.is_whitespace() || TRAILING_PUNCTUATION.contains(&c))
        .to_string()
}

/// Split every entry on commas, trim, drop empties, dedupe ignoring case
/// (first spelling wins), and keep at most `MAX_KEYWORDS`.
pub fn sanitize_keywords<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.iter()
        .flat_map(|entry| entry.as_ref().split(','))
        .map(collapse_whitespace)
        .filter(|keyword| !keyword.is_empty())
        .filter(|keyword| seen.insert(keyword.to_lowercase()))
        .take(MAX_KEYWORDS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_capped_and_unpunctuated() {
        assert_eq!(sanitize_title("  Golden   marble texture.  "), "Golden marble texture");
        assert_eq!(sanitize_title("Wow!!!"), "Wow");
        let long = "a".repeat(100);
        assert_eq!(sanitize_title(&long).chars().count(), TITLE_MAX_CHARS);
    }

    #[test]
    fn keywords_split_trim_and_dedupe() {
        let out = sanitize_keywords(&["Marble, texture", " marble ", "", "gold,,Texture"]);
        assert_eq!(out, vec!["Marble", "texture", "gold"]);
    }

    #[test]
    fn keywords_capped() {
        let many: Vec<String> = (0..80).map(|i| format!("kw{i}")).collect();
        let out = sanitize_keywords(&many);
        assert_eq!(out.len(), MAX_KEYWORDS);
        assert_eq!(out[0], "kw0");
    }
}
