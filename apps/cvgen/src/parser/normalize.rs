//! Comparison keys and URL slugs for headings.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

static NON_SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("slug regex"));

/// Lowercase, trim and strip diacritics: "Educación" → "educacion".
pub fn normalize(text: &str) -> String {
    text.trim()
        .to_lowercase()
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Converts a heading into a URL-safe identifier.
///
/// Every run of characters outside `[a-z0-9]` (after normalization) collapses to a
/// single hyphen; leading and trailing hyphens are dropped. Idempotent.
pub fn slugify(text: &str) -> String {
    let normalized = normalize(text);
    NON_SLUG_RE
        .replace_all(&normalized, "-")
        .trim_matches('-')
        .to_string()
}
