//! Phone number normalization.
//!
//! Stored phone numbers are free-form; every comparison (lookup, duplicate
//! grouping, area-code statistics) runs over the normalized digit string
//! instead of the raw input.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D+").expect("static pattern"));

/// Strips every non-digit character from a phone number.
///
/// # Examples
///
/// ```
/// use rolodex::phone::normalize;
///
/// assert_eq!(normalize("(402) 555-1111"), "4025551111");
/// assert_eq!(normalize("402-555-1111"), "4025551111");
/// assert_eq!(normalize("ext. 12"), "12");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    NON_DIGITS.replace_all(raw, "").into_owned()
}

/// The first three digits of the normalized number, if it has that many.
#[must_use]
pub fn area_code(raw: &str) -> Option<String> {
    let digits = normalize(raw);
    if digits.len() >= 3 {
        Some(digits[..3].to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_punctuation_and_whitespace() {
        assert_eq!(normalize("(402) 555-1111"), "4025551111");
        assert_eq!(normalize("+1 402.555.1111"), "14025551111");
        assert_eq!(normalize("4025551111"), "4025551111");
    }

    #[test]
    fn normalize_of_digit_free_input_is_empty() {
        assert_eq!(normalize("no digits here"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn area_code_needs_three_digits() {
        assert_eq!(area_code("(402) 555-1111").as_deref(), Some("402"));
        assert_eq!(area_code("40").as_deref(), None);
        assert_eq!(area_code("4-0-2").as_deref(), Some("402"));
        assert_eq!(area_code("").as_deref(), None);
    }
}
