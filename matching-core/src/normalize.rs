//! Free-text normalization
//!
//! Watchlist text and transaction text both pass through here before
//! any metric runs, so that case, punctuation and street-abbreviation
//! differences never show up as similarity penalties.

use once_cell::sync::Lazy;
use regex::Regex;

static PUNCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\(\)\[\]\.,;:!@#\$%\^&\*\-_/\\]+").unwrap());

/// Whole-word abbreviation expansions, applied in this order after
/// punctuation has been stripped to spaces. The `po box` pattern
/// tolerates leftover dots and any spacing between the letters.
static ABBREVIATIONS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"\bst\b", "street"),
        (r"\bstr\b", "street"),
        (r"\brd\b", "road"),
        (r"\bave\b", "avenue"),
        (r"\bav\b", "avenue"),
        (r"\bblvd\b", "boulevard"),
        (r"\bln\b", "lane"),
        (r"\bp\.?\s*o\.?\s*box\b", "po box"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
    .collect()
});

/// Canonicalize free text for comparison.
///
/// Lowercases, strips punctuation to spaces, expands street
/// abbreviations as whole words, then collapses runs of whitespace.
/// Idempotent: normalizing twice gives the same string.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let lowered = text.to_lowercase();
    let mut cleaned = PUNCT.replace_all(&lowered, " ").into_owned();
    for (pattern, replacement) in ABBREVIATIONS.iter() {
        cleaned = pattern.replace_all(&cleaned, *replacement).into_owned();
    }
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split text into normalized comparison tokens.
///
/// Duplicate tokens survive; metrics wanting set semantics deduplicate
/// themselves.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
