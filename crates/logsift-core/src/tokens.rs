//! Token estimation utilities

/// Bytes per token assumed by the estimate (English-ish log text)
const BYTES_PER_TOKEN: usize = 4;

/// Estimate the model token count of `text`
///
/// This is a cheap proxy (byte length / 4) used only to decide whether a
/// chunk needs shrinking before it is sent. It never calls a tokenizer.
pub fn estimate_tokens(text: &str) -> usize {
    text.len() / BYTES_PER_TOKEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_tokens_empty() {
        assert_eq!(estimate_tokens(""), 0);
    }

    #[test]
    fn test_estimate_tokens_truncates() {
        assert_eq!(estimate_tokens("abc"), 0);
        assert_eq!(estimate_tokens("abcd"), 1);
        assert_eq!(estimate_tokens("abcdefghi"), 2);
    }

    #[test]
    fn test_estimate_tokens_counts_bytes() {
        // "é" is two bytes in UTF-8
        assert_eq!(estimate_tokens("éééé"), 2);
    }
}
