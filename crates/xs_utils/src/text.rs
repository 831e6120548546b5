//! ASCII case-insensitive string helpers.

/// Returns `true` if `text` ends with `suffix`, ignoring ASCII case.
///
/// # Examples
///
/// ```
/// use xs_utils::text::ends_with_ignore_ascii_case;
///
/// assert!(ends_with_ignore_ascii_case("Foo.Bar.{PLATFORM}", ".{Platform}"));
/// assert!(!ends_with_ignore_ascii_case("Foo.Bar", ".{Platform}"));
/// ```
pub fn ends_with_ignore_ascii_case(text: &str, suffix: &str) -> bool {
    let Some(start) = text.len().checked_sub(suffix.len()) else {
        return false;
    };
    text.is_char_boundary(start) && text[start..].eq_ignore_ascii_case(suffix)
}

/// Removes `suffix` from the end of `text`, ignoring ASCII case.
///
/// Returns `None` if `text` does not end with `suffix`.
pub fn strip_suffix_ignore_ascii_case<'a>(text: &'a str, suffix: &str) -> Option<&'a str> {
    if ends_with_ignore_ascii_case(text, suffix) {
        Some(&text[..text.len() - suffix.len()])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_matching() {
        assert!(ends_with_ignore_ascii_case("abc", ""));
        assert!(ends_with_ignore_ascii_case("ABC", "bc"));
        assert!(!ends_with_ignore_ascii_case("bc", "abc"));
        // Multi-byte characters must not split a char boundary.
        assert!(!ends_with_ignore_ascii_case("你好", "x"));
    }

    #[test]
    fn strip_suffix() {
        assert_eq!(
            strip_suffix_ignore_ascii_case("Foo.Bar.{platform}", ".{Platform}"),
            Some("Foo.Bar")
        );
        assert_eq!(strip_suffix_ignore_ascii_case("Foo.Bar", ".{Platform}"), None);
    }
}
