//! Grammar of qualified type names.
//!
//! A qualified type name is the textual tag written in front of every
//! envelope payload:
//!
//! ```text
//! QualifiedName := GenericForm | ArrayForm | PlainForm
//! PlainForm     := TypeName (',' ModuleName)?
//! GenericForm   := DefName '[' ('[' QualifiedName ']') (',' '[' QualifiedName ']')* ']' ArraySuffix*
//! ArraySuffix   := '[' ','* ']'
//! ```
//!
//! This crate only deals with syntax. It turns text into a [`QualifiedName`]
//! tree ([`parse`]) and back ([`QualifiedName`]'s `Display` impl). Looking
//! the names up is left to the caller.
//!
//! # Examples
//!
//! ```
//! use xs_typename::{QualifiedName, TypeShape, parse};
//!
//! let text = "Fixtures.Pair`2[[i32],[Fixtures.Widget, Fixtures]][,], Fixtures";
//! let name = parse(text).unwrap();
//!
//! assert_eq!(name.module.as_deref(), Some("Fixtures"));
//! assert!(matches!(name.shape, TypeShape::Array { rank: 2, .. }));
//! assert_eq!(name.to_string(), text);
//! ```
#![no_std]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod parse;
mod print;
mod split;
mod tree;

// -----------------------------------------------------------------------------
// Exports

pub use parse::{arity_marker, parse, parse_with_depth};
pub use split::{Splitter, split, split_trimmed};
pub use tree::{QualifiedName, TypeShape};

// -----------------------------------------------------------------------------
// Constants

/// Separates the type body from its module name, and generic arguments
/// from each other.
pub const DELIMITER: char = ',';

/// Opens a generic argument list, a single generic argument, or an array designator.
pub const OPEN: char = '[';

/// Closes what [`OPEN`] opened.
pub const CLOSE: char = ']';

/// Precedes the generic arity in a generic definition name, e.g. ``Pair`2``.
pub const ARITY_MARKER: char = '`';

/// Largest array rank accepted by the parser.
pub const MAX_ARRAY_RANK: u8 = 32;

/// Default bound on generic argument nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;
