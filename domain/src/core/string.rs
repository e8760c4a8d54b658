//! String utilities for the domain layer.

/// Truncate a string to at most `max_chars` characters (not bytes).
///
/// Length caps in persona instructions are expressed in characters
/// (e.g. "100文字以内"), so generated text is bounded the same way.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => s[..end].to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello world", 5), "hello");
    }

    #[test]
    fn test_truncate_multibyte_counts_characters() {
        assert_eq!(truncate_chars("日本語テスト", 3), "日本語");
        assert_eq!(truncate_chars("日本語テスト", 6), "日本語テスト");
        assert_eq!(truncate_chars("Hello、世界！", 7), "Hello、世");
    }

    #[test]
    fn test_truncate_zero_and_empty() {
        assert_eq!(truncate_chars("だべ", 0), "");
        assert_eq!(truncate_chars("", 10), "");
    }
}
