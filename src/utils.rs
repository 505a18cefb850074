//! Common utility functions shared across the codebase.

/// Checks if the text contains at least one CJK ideograph in the
/// U+4E00..=U+9FA5 block.
///
/// This is the fixed target-script test: a literal is a translation
/// candidate if any such code point occurs anywhere in it.
///
/// # Examples
///
/// ```
/// use xi18nt::utils::contains_cjk;
///
/// assert!(contains_cjk("你好"));
/// assert!(contains_cjk("hello 世界"));
/// assert!(!contains_cjk("hello"));
/// assert!(!contains_cjk("123"));
/// assert!(!contains_cjk(""));
/// ```
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(|c| ('\u{4E00}'..='\u{9FA5}').contains(&c))
}

#[cfg(test)]
mod tests {
    use crate::utils::*;

    #[test]
    fn test_contains_cjk() {
        assert!(contains_cjk("你好"));
        assert!(contains_cjk("名称"));
        assert!(contains_cjk("hello 世界"));
        assert!(contains_cjk("值aaa"));
        assert!(contains_cjk("数组1"));

        assert!(!contains_cjk("hello"));
        assert!(!contains_cjk("123"));
        assert!(!contains_cjk("---"));
        assert!(!contains_cjk(""));
        // Katakana and Hangul are outside the target block
        assert!(!contains_cjk("カタカナ"));
        assert!(!contains_cjk("한글"));
    }
}
