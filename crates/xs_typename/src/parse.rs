use alloc::string::String;
use alloc::vec::Vec;

use log::trace;

use crate::{ARITY_MARKER, CLOSE, DEFAULT_MAX_DEPTH, DELIMITER, MAX_ARRAY_RANK, OPEN};
use crate::{QualifiedName, Splitter, TypeShape};

// -----------------------------------------------------------------------------
// Public API

/// Parses a qualified type name with the default nesting bound.
///
/// Returns `None` for anything that is not a well formed name. See
/// [`parse_with_depth`] for details.
///
/// # Examples
///
/// ```
/// use xs_typename::{TypeShape, parse};
///
/// let name = parse("i32[], core").unwrap();
/// assert_eq!(name.module.as_deref(), Some("core"));
/// assert_eq!(name.shape, TypeShape::simple("i32").array_of(1));
///
/// assert!(parse("Pair`2[[i32],[bool]").is_none());
/// ```
#[inline]
pub fn parse(text: &str) -> Option<QualifiedName> {
    parse_with_depth(text, DEFAULT_MAX_DEPTH)
}

/// Parses a qualified type name, allowing at most `max_depth` levels of
/// nesting. Generic arguments and array designators each count as a level.
///
/// - Segments after the module name (e.g. `Version=1.0`) are ignored.
/// - A bracket group directly after an arity-marked name (``Pair`2``) is a
///   generic argument list, unless it holds nothing but commas.
/// - Every other bracket group must be an array designator.
pub fn parse_with_depth(text: &str, max_depth: usize) -> Option<QualifiedName> {
    Parser { max_depth }.qualified(text, 0)
}

/// Returns the arity encoded in a generic definition name.
///
/// ```
/// use xs_typename::arity_marker;
///
/// assert_eq!(arity_marker("Fixtures.Pair`2"), Some(2));
/// assert_eq!(arity_marker("Fixtures.Widget"), None);
/// assert_eq!(arity_marker("Broken`"), None);
/// ```
pub fn arity_marker(name: &str) -> Option<usize> {
    let index = name.rfind(ARITY_MARKER)?;
    let digits = &name[index + ARITY_MARKER.len_utf8()..];
    if index == 0 || digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

// -----------------------------------------------------------------------------
// Parser

struct Parser {
    max_depth: usize,
}

impl Parser {
    fn qualified(&self, text: &str, depth: usize) -> Option<QualifiedName> {
        if depth > self.max_depth {
            trace!("type name nested deeper than {} levels", self.max_depth);
            return None;
        }

        let segments = Splitter::TYPE_NAME.split_trimmed(text);
        let (body, module) = match segments.as_slice() {
            [] => {
                trace!("no top-level segments in `{text}`");
                return None;
            }
            [body] => (*body, None),
            [body, module, ..] => {
                if module.is_empty() {
                    trace!("empty module name in `{text}`");
                    return None;
                }
                (*body, Some(String::from(*module)))
            }
        };

        let shape = self.shape(body, depth)?;
        Some(QualifiedName { shape, module })
    }

    fn shape(&self, body: &str, mut depth: usize) -> Option<TypeShape> {
        let (name, mut rest) = match body.find(OPEN) {
            Some(index) => body.split_at(index),
            None => (body, ""),
        };

        let name = name.trim();
        if name.is_empty() || name.contains(CLOSE) || name.contains(DELIMITER) {
            trace!("invalid type name `{body}`");
            return None;
        }

        let mut arguments = None;
        if !rest.is_empty() && arity_marker(name).is_some() {
            let Some(close) = matching_close(rest) else {
                trace!("unbalanced generic argument list in `{body}`");
                return None;
            };
            let inner = &rest[OPEN.len_utf8()..close];
            if !is_array_designator(inner) {
                arguments = Some(inner);
                rest = &rest[close + CLOSE.len_utf8()..];
            }
        }

        // Every designator wraps the element in another level.
        let mut ranks = Vec::new();
        loop {
            rest = rest.trim_start();
            if rest.is_empty() {
                break;
            }
            let Some(group) = rest.strip_prefix(OPEN) else {
                trace!("unexpected trailing text in `{body}`");
                return None;
            };
            let Some(close) = group.find(CLOSE) else {
                trace!("unterminated array designator in `{body}`");
                return None;
            };
            let inner = &group[..close];
            if !is_array_designator(inner) {
                trace!("`[{inner}]` is not an array designator");
                return None;
            }
            depth += 1;
            if depth > self.max_depth {
                trace!("array designators nested deeper than {} levels", self.max_depth);
                return None;
            }
            ranks.push(array_rank(inner)?);
            rest = &group[close + CLOSE.len_utf8()..];
        }

        let shape = match arguments {
            Some(inner) => TypeShape::generic(name, self.arguments(inner, depth)?),
            None => TypeShape::simple(name),
        };
        Some(ranks.into_iter().fold(shape, TypeShape::array_of))
    }

    fn arguments(&self, inner: &str, depth: usize) -> Option<Vec<QualifiedName>> {
        let segments = Splitter::TYPE_NAME.split_trimmed(inner);
        if segments.is_empty() {
            trace!("empty generic argument list `[{inner}]`");
            return None;
        }

        segments
            .into_iter()
            .map(|segment| {
                let Some(argument) = segment
                    .strip_prefix(OPEN)
                    .and_then(|s| s.strip_suffix(CLOSE))
                else {
                    trace!("generic argument `{segment}` is not bracketed");
                    return None;
                };
                self.qualified(argument, depth + 1)
            })
            .collect()
    }
}

// -----------------------------------------------------------------------------
// Helpers

/// Byte index of the bracket closing the one `text` starts with.
fn matching_close(text: &str) -> Option<usize> {
    let mut depth = 0_usize;
    for (index, c) in text.char_indices() {
        if c == OPEN {
            depth += 1;
        } else if c == CLOSE {
            depth = depth.checked_sub(1)?;
            if depth == 0 {
                return Some(index);
            }
        }
    }
    None
}

#[inline]
fn is_array_designator(inner: &str) -> bool {
    inner.chars().all(|c| c == DELIMITER || c.is_whitespace())
}

fn array_rank(inner: &str) -> Option<u8> {
    let commas = inner.chars().filter(|&c| c == DELIMITER).count();
    match u8::try_from(commas + 1) {
        Ok(rank) if rank <= MAX_ARRAY_RANK => Some(rank),
        _ => {
            trace!("array rank {} exceeds {MAX_ARRAY_RANK}", commas + 1);
            None
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
