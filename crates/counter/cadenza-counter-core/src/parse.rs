//! Splitting counter text into prefix / number / suffix.

use serde::{Deserialize, Serialize};

/// Parsed pieces of a counter's text, e.g. "$1,250+" -> ("$", 1250, "+").
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberParts {
    pub prefix: String,
    /// `None` when the text has no single run of digits.
    pub value: Option<f64>,
    pub suffix: String,
}

/// Parse a locale-agnostic number: commas stripped, surrounding whitespace trimmed.
///
/// An empty string parses as 0. Non-finite results ("Infinity", "NaN") are absent.
pub fn to_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Some(0.0);
    }
    // Rust's float grammar accepts spelled-out specials that a decimal literal does not.
    if cleaned.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Match `^([^0-9]*)([0-9][0-9,]*)([^0-9]*)$` against the trimmed text.
///
/// Text with no digits, or with more than one digit run ("1.5k", "24/7"),
/// yields empty prefix/suffix and no value.
pub fn parse_number_parts(text: &str) -> NumberParts {
    let s = text.trim();
    let Some(start) = s.find(|c: char| c.is_ascii_digit()) else {
        return NumberParts::default();
    };
    let run_len = s[start..]
        .find(|c: char| !(c.is_ascii_digit() || c == ','))
        .unwrap_or(s.len() - start);
    let end = start + run_len;
    let suffix = &s[end..];
    if suffix.chars().any(|c| c.is_ascii_digit()) {
        return NumberParts::default();
    }
    NumberParts {
        prefix: s[..start].to_string(),
        value: to_number(&s[start..end]),
        suffix: suffix.to_string(),
    }
}
