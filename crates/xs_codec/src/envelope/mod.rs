//! The `TypeName:Payload` envelope.
//!
//! - [`EnvelopeCodec`]: encodes a [`Value`](crate::value::Value) together
//!   with the qualified name of its type, and decodes it back.
//! - [`ArrayWrapper`]: the adapter arrays travel through.

// -----------------------------------------------------------------------------
// Modules

mod array_wrapper;
mod codec;

// -----------------------------------------------------------------------------
// Exports

pub use array_wrapper::ArrayWrapper;
pub use codec::{EnvelopeCodec, SEPARATOR};
