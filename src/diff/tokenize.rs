use once_cell::sync::Lazy;
use regex::Regex;

// Maximal runs of non-whitespace or whitespace characters. Every input
// character lands in exactly one match, so the split is invertible.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+|\s+").unwrap());

/// Splits `text` into word and whitespace-run tokens.
///
/// A token is either a maximal run of non-whitespace characters or a
/// maximal run of whitespace; punctuation stays attached to its word run.
/// Concatenating the returned tokens reproduces `text` byte-for-byte.
pub fn tokenize(text: &str) -> Vec<&str> {
    TOKEN_RE.find_iter(text).map(|m| m.as_str()).collect()
}
