//! Entry-time normalisation of free-text inputs

use crate::limits::MAX_AMOUNT_DIGITS;

/// Keeps digits and hyphens and inserts hyphens the way the policy number
/// field formats as the claimant types: after the third character when there
/// is no hyphen yet, then after the seventh when there is exactly one.
///
/// `123456789` becomes `123-456-789`; already-hyphenated input is left alone.
pub fn normalize_policy_number(raw: &str) -> String {
    let mut value: String = raw.chars().filter(|c| c.is_ascii_digit() || *c == '-').collect();

    if value.len() > 3 && !value.contains('-') {
        value.insert(3, '-');
    }
    if value.len() > 7 && value.split('-').count() == 2 {
        value.insert(7, '-');
    }
    value
}

/// Keeps only ASCII digits, without leading zeros and at most
/// [`MAX_AMOUNT_DIGITS`] of them; the amount box is a plain number of won
pub fn normalize_amount(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.trim_start_matches('0') {
        "" if !digits.is_empty() => "0".to_string(),
        trimmed => trimmed.chars().take(MAX_AMOUNT_DIGITS).collect(),
    }
}

/// Cuts `raw` to at most `max_chars` characters
pub fn truncate_chars(raw: &str, max_chars: usize) -> String {
    match raw.char_indices().nth(max_chars) {
        Some((byte_index, _)) => raw[..byte_index].to_string(),
        None => raw.to_string(),
    }
}

/// Whether a text input counts as filled in
pub(crate) fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_number_auto_hyphen() {
        assert_eq!(normalize_policy_number("123"), "123");
        assert_eq!(normalize_policy_number("1234"), "123-4");
        assert_eq!(normalize_policy_number("123456789"), "123-456-789");
        assert_eq!(normalize_policy_number("12-345678"), "12-3456-78");
    }

    #[test]
    fn test_policy_number_strips_other_characters() {
        assert_eq!(normalize_policy_number("No. 123 456"), "123-456");
        assert_eq!(normalize_policy_number("abc"), "");
    }

    #[test]
    fn test_policy_number_is_idempotent() {
        for raw in ["123456789", "1234", "12-345678", "123-456-789-0"] {
            let once = normalize_policy_number(raw);
            assert_eq!(normalize_policy_number(&once), once);
        }
    }

    #[test]
    fn test_amount_keeps_digits() {
        assert_eq!(normalize_amount("1,500,000원"), "1500000");
        assert_eq!(normalize_amount("모름"), "");
        assert_eq!(normalize_amount("007"), "7");
        assert_eq!(normalize_amount("000"), "0");
    }

    #[test]
    fn test_amount_stops_at_digit_limit() {
        let typed = "9".repeat(30);
        assert_eq!(normalize_amount(&typed), "9".repeat(MAX_AMOUNT_DIGITS));
        assert_eq!(normalize_amount(&format!("000{}", "1".repeat(20))).len(), MAX_AMOUNT_DIGITS);
    }

    #[test]
    fn test_truncate_counts_characters_not_bytes() {
        let message = "가".repeat(600);
        let cut = truncate_chars(&message, 500);
        assert_eq!(cut.chars().count(), 500);
        assert_eq!(truncate_chars("short", 500), "short");
    }
}
