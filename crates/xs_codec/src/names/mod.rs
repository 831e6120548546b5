//! Conversion between qualified type names and [`TypeIdentity`](crate::info::TypeIdentity).
//!
//! - [`TypeResolver`]: finds a definition by module and type name.
//! - [`TypeNameParser`]: text to identity, through the
//!   [`xs_typename`] syntax tree.
//! - [`TypeNameSerializer`]: identity to text.
//!
//! Both directions agree on a [`CodecConfig`](crate::CodecConfig): parsing
//! what the serializer wrote yields an equal identity.

// -----------------------------------------------------------------------------
// Modules

mod parser;
mod resolver;
mod serializer;

// -----------------------------------------------------------------------------
// Exports

pub use parser::TypeNameParser;
pub use resolver::TypeResolver;
pub use serializer::TypeNameSerializer;
