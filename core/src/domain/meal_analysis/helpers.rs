/// Longest upstream text echoed back to callers, in characters.
pub const MAX_EXCERPT_CHARS: usize = 2000;

/// First [`MAX_EXCERPT_CHARS`] characters of `text`.
pub fn excerpt(text: &str) -> String {
    text.chars().take(MAX_EXCERPT_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_short_text_unchanged() {
        assert_eq!(excerpt("rate limited"), "rate limited");
    }

    #[test]
    fn test_excerpt_counts_characters_not_bytes() {
        let text = "é".repeat(MAX_EXCERPT_CHARS + 10);
        let cut = excerpt(&text);
        assert_eq!(cut.chars().count(), MAX_EXCERPT_CHARS);
    }
}
