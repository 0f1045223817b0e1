//! Order-id extraction from free text

use regex::Regex;
use std::sync::LazyLock;

/// A run of 4 to 12 digits on word boundaries. Runs of 13 or more digits do
/// not match at all: the trailing boundary rejects every 4-12 digit window
/// inside them.
static ORDER_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{4,12}\b").expect("order-id pattern is valid"));

/// Extract the first plausible order id from `text`.
///
/// Scans left to right for a run of 4 to 12 decimal digits bounded by word
/// boundaries. Digits glued to other word characters (ASCII letters,
/// underscores, CJK ideographs) are rejected. Returns `None` when no such
/// run exists.
pub fn extract_order_id(text: &str) -> Option<&str> {
    ORDER_ID_RE.find(text).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_plain_id() {
        assert_eq!(extract_order_id("123456"), Some("123456"));
    }

    #[test]
    fn test_extracts_id_from_sentence() {
        assert_eq!(extract_order_id("订单号是 123456 谢谢"), Some("123456"));
    }

    #[test]
    fn test_length_bounds() {
        assert_eq!(extract_order_id("123"), None);
        assert_eq!(extract_order_id("1234"), Some("1234"));
        assert_eq!(extract_order_id("123456789012"), Some("123456789012"));
    }

    #[test]
    fn test_overlong_run_matches_nothing() {
        assert_eq!(extract_order_id("1234567890123"), None);
        assert_eq!(extract_order_id("口令 12345678901234567 结尾"), None);
    }

    #[test]
    fn test_digits_glued_to_ascii_letters() {
        assert_eq!(extract_order_id("abc1234"), None);
        assert_eq!(extract_order_id("1234abc"), None);
        assert_eq!(extract_order_id("ab1234cd"), None);
    }

    #[test]
    fn test_underscore_is_a_word_character() {
        assert_eq!(extract_order_id("_1234"), None);
        assert_eq!(extract_order_id("1234_"), None);
    }

    #[test]
    fn test_digits_glued_to_cjk() {
        // Han ideographs count as word characters, same as letters.
        assert_eq!(extract_order_id("订单123456"), None);
        assert_eq!(extract_order_id("123456号"), None);
    }

    #[test]
    fn test_punctuation_is_a_boundary() {
        assert_eq!(extract_order_id("id:12345678."), Some("12345678"));
        assert_eq!(extract_order_id("（123456）"), Some("123456"));
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(extract_order_id("编号 1234 和 567890"), Some("1234"));
    }

    #[test]
    fn test_short_run_skipped_for_later_valid_run() {
        assert_eq!(extract_order_id("123-45678"), Some("45678"));
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(extract_order_id(""), None);
        assert_eq!(extract_order_id("我想查订单"), None);
    }
}
