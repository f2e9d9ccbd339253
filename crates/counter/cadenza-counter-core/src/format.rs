//! Integer rendering with digit grouping.

use crate::config::Grouping;

/// Floor `value` and render it with the configured grouping.
///
/// Every integer digit is kept, however large; non-finite values render as "0".
pub fn format_count(value: f64, grouping: Grouping) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    // + 0.0 turns -0 into 0
    let floored = value.floor() + 0.0;
    let negative = floored < 0.0;
    let digits = format!("{:.0}", floored.abs());
    match grouping {
        Grouping::Plain => with_sign(negative, digits),
        Grouping::Thousands { separator } => {
            with_sign(negative, group_thousands(&digits, separator))
        }
    }
}

fn with_sign(negative: bool, digits: String) -> String {
    if negative {
        format!("-{digits}")
    } else {
        digits
    }
}

fn group_thousands(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let lead = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - lead) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
