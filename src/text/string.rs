//! Whitespace handling pinned to the Unicode `White_Space` property, so
//! results never depend on process locale.

#[inline]
pub(crate) fn is_space(ch: char) -> bool {
    ch.is_whitespace()
}

#[inline]
pub(crate) fn trim(text: &str) -> &str {
    text.trim_matches(is_space)
}

/// Splits on the first `separator`, trimming both halves. Later separators
/// stay in the right half.
pub(crate) fn split_trimmed(text: &str, separator: char) -> Option<(&str, &str)> {
    let (left, right) = text.split_once(separator)?;
    Some((trim(left), trim(right)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_trim_unicode_whitespace() {
        assert_eq!(trim("\u{3000} value\t\r"), "value");
        assert_eq!(trim("\u{feff}value"), "\u{feff}value");
    }

    #[rstest::rstest]
    fn test_split_trimmed_uses_first_separator() {
        assert_eq!(
            split_trimmed(" url = http://x?y=1 ", '='),
            Some(("url", "http://x?y=1"))
        );
        assert_eq!(split_trimmed("=v", '='), Some(("", "v")));
        assert_eq!(split_trimmed("no separator", '='), None);
    }
}
