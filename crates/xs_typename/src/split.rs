use alloc::vec::Vec;

// -----------------------------------------------------------------------------
// Splitter

/// Splits text at delimiters that are not nested inside a bracket group.
///
/// An empty result is how malformed input is reported: callers treat
/// "no valid split" as "not this shape" rather than as a fault.
///
/// # Examples
///
/// ```
/// use xs_typename::Splitter;
///
/// let splitter = Splitter::TYPE_NAME;
/// assert_eq!(splitter.split("a,[b,c],d"), ["a", "[b,c]", "d"]);
///
/// // Unbalanced
/// assert!(splitter.split("[a,b").is_empty());
///
/// // Other bracket pairs
/// let angle = Splitter::new(';', '<', '>');
/// assert_eq!(angle.split("x<y;z>;w"), ["x<y;z>", "w"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Splitter {
    delimiter: char,
    open: char,
    close: char,
}

impl Splitter {
    /// The splitter of the type-name grammar: `,` outside `[` `]`.
    pub const TYPE_NAME: Splitter = Splitter::new(crate::DELIMITER, crate::OPEN, crate::CLOSE);

    /// Creates a splitter from a delimiter and a bracket pair.
    #[inline]
    pub const fn new(delimiter: char, open: char, close: char) -> Self {
        Self {
            delimiter,
            open,
            close,
        }
    }

    /// Splits `text` at top-level delimiters, keeping segments verbatim.
    ///
    /// Returns an empty vector if `text` is empty or whitespace only,
    /// if the brackets are unbalanced, or if `text` ends with a delimiter.
    #[inline]
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.split_impl(text, false)
    }

    /// Like [`split`](Self::split), but trims whitespace off every segment.
    #[inline]
    pub fn split_trimmed<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.split_impl(text, true)
    }

    fn split_impl<'a>(&self, text: &'a str, trim: bool) -> Vec<&'a str> {
        let mut segments = Vec::new();
        if text.trim().is_empty() {
            return segments;
        }

        let mut push = |segment: &'a str| {
            segments.push(if trim { segment.trim() } else { segment });
        };

        let mut depth = 0_usize;
        let mut start = 0_usize;
        for (index, c) in text.char_indices() {
            if c == self.open {
                depth += 1;
            } else if c == self.close {
                match depth.checked_sub(1) {
                    Some(d) => depth = d,
                    // Closed more than was opened.
                    None => return Vec::new(),
                }
            } else if c == self.delimiter && depth == 0 {
                push(&text[start..index]);
                start = index + c.len_utf8();
            }
        }

        if depth != 0 || start >= text.len() {
            return Vec::new();
        }

        push(&text[start..]);
        segments
    }
}

impl Default for Splitter {
    #[inline]
    fn default() -> Self {
        Self::TYPE_NAME
    }
}

/// Shorthand for [`Splitter::TYPE_NAME`]`.split(text)`.
#[inline]
pub fn split(text: &str) -> Vec<&str> {
    Splitter::TYPE_NAME.split(text)
}

/// Shorthand for [`Splitter::TYPE_NAME`]`.split_trimmed(text)`.
#[inline]
pub fn split_trimmed(text: &str) -> Vec<&str> {
    Splitter::TYPE_NAME.split_trimmed(text)
}

// -----------------------------------------------------------------------------
// Tests
