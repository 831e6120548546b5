use alloc::string::{String, ToString};
use core::fmt::Display;

use thiserror::Error;

// -----------------------------------------------------------------------------
// EnvelopeError

/// Argument errors raised by [`EnvelopeCodec`](crate::envelope::EnvelopeCodec).
///
/// Every variant describes a problem with what the caller handed in: a
/// missing value, a malformed envelope, a type that cannot be found in this
/// process, or a type that does not take part in serialization.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EnvelopeError {
    #[error("cannot serialize a null value")]
    NullValue,

    #[error("cannot deserialize a null envelope")]
    NullEnvelope,

    #[error("envelope `{0}` is not of the form `TypeName:Payload`")]
    Malformed(String),

    #[error("could not find target type `{0}`")]
    TypeNotFound(String),

    #[error("type `{0}` does not support self-describing serialization")]
    MissingCapability(String),

    #[error("invalid payload for `{type_name}`: {reason}")]
    InvalidPayload { type_name: String, reason: String },

    #[error("serialization info has no member `{0}`")]
    MissingMember(String),

    #[error("member `{key}` is not a {expected}")]
    InvalidMember { key: String, expected: &'static str },

    #[error("envelope nested deeper than {0} levels")]
    NestingTooDeep(usize),

    #[error("malformed serialization info: {0}")]
    Json(#[from] serde_json::Error),
}

impl EnvelopeError {
    #[cold]
    pub(crate) fn invalid_payload(type_name: impl Into<String>, reason: impl Display) -> Self {
        Self::InvalidPayload {
            type_name: type_name.into(),
            reason: reason.to_string(),
        }
    }
}

// -----------------------------------------------------------------------------
// LoadError

/// Failure reported by a module loader.
///
/// Never surfaced by the codec: an unloadable module is indistinguishable
/// from a missing one on the receiving side.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LoadError {
    #[error("no loader is registered for module `{0}`")]
    NoLoader(String),

    #[error("module `{name}` failed to load: {reason}")]
    Failed { name: String, reason: String },

    #[error("loader for module `{requested}` produced module `{loaded}`")]
    Mismatch {
        requested: String,
        loaded: &'static str,
    },
}
