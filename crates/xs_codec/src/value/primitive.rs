use alloc::string::{String, ToString};
use core::str::FromStr;

use crate::error::EnvelopeError;
use crate::info::{TypeDef, TypeIdentity};
use crate::registry::builtin;

// -----------------------------------------------------------------------------
// PrimitiveKind

/// The primitive types of the `core` module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    String,
    Type,
}

impl PrimitiveKind {
    /// Returns the [`builtin`] definition of this kind.
    pub fn type_def(self) -> &'static TypeDef {
        match self {
            Self::Bool => &builtin::BOOL,
            Self::Char => &builtin::CHAR,
            Self::I8 => &builtin::I8,
            Self::I16 => &builtin::I16,
            Self::I32 => &builtin::I32,
            Self::I64 => &builtin::I64,
            Self::U8 => &builtin::U8,
            Self::U16 => &builtin::U16,
            Self::U32 => &builtin::U32,
            Self::U64 => &builtin::U64,
            Self::F32 => &builtin::F32,
            Self::F64 => &builtin::F64,
            Self::String => &builtin::STRING,
            Self::Type => &builtin::TYPE,
        }
    }
}

// -----------------------------------------------------------------------------
// Primitive

/// A primitive value.
///
/// Payloads are plain text: `true`/`false`, decimal integers, the shortest
/// round-tripping float text, the character itself, the string verbatim,
/// and the qualified name of a type.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    String(String),
    Type(TypeIdentity),
}

impl Primitive {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Bool(_) => PrimitiveKind::Bool,
            Self::Char(_) => PrimitiveKind::Char,
            Self::I8(_) => PrimitiveKind::I8,
            Self::I16(_) => PrimitiveKind::I16,
            Self::I32(_) => PrimitiveKind::I32,
            Self::I64(_) => PrimitiveKind::I64,
            Self::U8(_) => PrimitiveKind::U8,
            Self::U16(_) => PrimitiveKind::U16,
            Self::U32(_) => PrimitiveKind::U32,
            Self::U64(_) => PrimitiveKind::U64,
            Self::F32(_) => PrimitiveKind::F32,
            Self::F64(_) => PrimitiveKind::F64,
            Self::String(_) => PrimitiveKind::String,
            Self::Type(_) => PrimitiveKind::Type,
        }
    }

    /// Runtime type of the value. Type values report
    /// [`RUNTIME_TYPE`](builtin::RUNTIME_TYPE).
    pub fn type_identity(&self) -> TypeIdentity {
        match self {
            Self::Type(_) => TypeIdentity::of(&builtin::RUNTIME_TYPE),
            other => TypeIdentity::of(other.kind().type_def()),
        }
    }

    /// Renders the payload, naming type values with `type_name`.
    pub fn to_payload(&self, type_name: impl FnOnce(&TypeIdentity) -> String) -> String {
        match self {
            Self::Bool(v) => v.to_string(),
            Self::Char(v) => v.to_string(),
            Self::I8(v) => v.to_string(),
            Self::I16(v) => v.to_string(),
            Self::I32(v) => v.to_string(),
            Self::I64(v) => v.to_string(),
            Self::U8(v) => v.to_string(),
            Self::U16(v) => v.to_string(),
            Self::U32(v) => v.to_string(),
            Self::U64(v) => v.to_string(),
            Self::F32(v) => v.to_string(),
            Self::F64(v) => v.to_string(),
            Self::String(v) => v.clone(),
            Self::Type(identity) => type_name(identity),
        }
    }

    /// Parses a payload of the given kind, resolving type names with `parse_type`.
    pub fn from_payload(
        kind: PrimitiveKind,
        payload: &str,
        parse_type: impl FnOnce(&str) -> Option<TypeIdentity>,
    ) -> Result<Self, EnvelopeError> {
        Ok(match kind {
            PrimitiveKind::Bool => Self::Bool(parse_text(kind, payload)?),
            PrimitiveKind::Char => {
                let mut chars = payload.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c),
                    _ => {
                        return Err(EnvelopeError::invalid_payload(
                            kind.type_def().name(),
                            "expected exactly one character",
                        ));
                    }
                }
            }
            PrimitiveKind::I8 => Self::I8(parse_text(kind, payload)?),
            PrimitiveKind::I16 => Self::I16(parse_text(kind, payload)?),
            PrimitiveKind::I32 => Self::I32(parse_text(kind, payload)?),
            PrimitiveKind::I64 => Self::I64(parse_text(kind, payload)?),
            PrimitiveKind::U8 => Self::U8(parse_text(kind, payload)?),
            PrimitiveKind::U16 => Self::U16(parse_text(kind, payload)?),
            PrimitiveKind::U32 => Self::U32(parse_text(kind, payload)?),
            PrimitiveKind::U64 => Self::U64(parse_text(kind, payload)?),
            PrimitiveKind::F32 => Self::F32(parse_text(kind, payload)?),
            PrimitiveKind::F64 => Self::F64(parse_text(kind, payload)?),
            PrimitiveKind::String => Self::String(String::from(payload)),
            PrimitiveKind::Type => match parse_type(payload) {
                Some(identity) => Self::Type(identity),
                None => return Err(EnvelopeError::TypeNotFound(String::from(payload))),
            },
        })
    }
}

fn parse_text<T>(kind: PrimitiveKind, payload: &str) -> Result<T, EnvelopeError>
where
    T: FromStr,
    T::Err: core::fmt::Display,
{
    payload
        .parse()
        .map_err(|err| EnvelopeError::invalid_payload(kind.type_def().name(), err))
}
