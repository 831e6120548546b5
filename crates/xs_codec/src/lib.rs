//! Type-tagged envelopes: a value together with the qualified name of its
//! type, as one `TypeName:Payload` string.
//!
//! The receiving process parses the type name, finds the type in its own
//! modules, and rebuilds the value through the type's serialization
//! capability.
//!
//! ## Menu
//!
//! - [`info`]: module descriptors, type definitions and [`TypeIdentity`].
//! - [`registry`]: modules, [`ModuleLookup`](registry::ModuleLookup) and the
//!   built-in `core` module.
//! - [`names`]: qualified type names to identities and back.
//! - [`value`]: the values carried and the self-describing capability.
//! - [`envelope`]: [`EnvelopeCodec`].
//!
//! # Examples
//!
//! ```
//! use xs_codec::{CodecConfig, EnvelopeCodec};
//! use xs_codec::registry::ModuleRegistryArc;
//! use xs_codec::value::Value;
//!
//! let registry = ModuleRegistryArc::default();
//! let codec = EnvelopeCodec::with_config(&registry, CodecConfig::default());
//!
//! let envelope = codec.serialize(&Value::from(42_u16)).unwrap();
//! assert_eq!(envelope, "u16:42");
//! assert_eq!(codec.deserialize(envelope.as_str()).unwrap(), Value::from(42_u16));
//!
//! assert!(codec.deserialize("Nonexistent.Type, Nonexistent.Module:x").is_err());
//! ```

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod config;
mod error;

pub mod envelope;
pub mod info;
pub mod names;
pub mod registry;
pub mod value;

#[cfg(test)]
mod fixtures;

// -----------------------------------------------------------------------------
// Exports

pub use config::{
    CodecConfig, DEFAULT_IMPLICIT_MODULES, DEFAULT_MAX_NESTING_DEPTH, DEFAULT_SUBSTITUTION_TOKEN,
};
pub use envelope::EnvelopeCodec;
pub use error::{EnvelopeError, LoadError};
pub use info::TypeIdentity;

// -----------------------------------------------------------------------------
// Re-export crates

pub use xs_typename;
