//! Human-readable titles from file and directory names.
//!
//! `"01-Getting-Started.md"` → `"Getting Started"`, `"intro_doc.md"` → `"Intro Doc"`.

use regex::Regex;
use std::sync::LazyLock;

/// Extension of the files picked up as documents.
pub const MARKDOWN_EXT: &str = ".md";

/// Ordering prefix such as `01-`, `2_` or `10.` at the start of a name.
static RE_ORDER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[-_.]+").unwrap());

/// Remove a trailing `.md`, unless that would leave nothing (e.g. a file named `.md`).
pub fn strip_extension(name: &str) -> &str {
    match name.strip_suffix(MARKDOWN_EXT) {
        Some(stem) if !stem.is_empty() => stem,
        _ => name,
    }
}

/// Derive a display title from a file or directory name.
pub fn derive_title(name: &str) -> String {
    let stem = strip_extension(name);
    let stem = RE_ORDER_PREFIX.replace(stem, "");
    let spaced = stem.replace(['-', '_'], " ");
    title_case(&spaced)
}

/// Upper-case the first cased letter of every word, lower-case the rest.
///
/// A word starts after any character that is not itself cased, so digits and
/// punctuation begin a new word: `"2nd"` → `"2Nd"`, `"o'neil"` → `"O'Neil"`.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;
    for c in s.chars() {
        if prev_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_cased = is_cased(c);
    }
    out
}

fn is_cased(c: char) -> bool {
    c.is_uppercase() || c.is_lowercase()
}
