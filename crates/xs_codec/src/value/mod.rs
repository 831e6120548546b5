//! Values the codec carries.
//!
//! ## Menu
//!
//! - [`Value`]: null, a [`Primitive`], a boxed [`Object`] or an [`ArrayValue`].
//! - [`Object`] and [`SelfDescribing`]: how user types take part.
//! - [`SerializationInfo`]: the key/value bag self-describing objects write
//!   their state into.

// -----------------------------------------------------------------------------
// Modules

mod array;
mod info;
mod object;
mod primitive;
mod value;

// -----------------------------------------------------------------------------
// Exports

pub use array::ArrayValue;
pub use info::{FromValue, SerializationInfo};
pub use object::{DynObject, Object, SelfDescribing};
pub use primitive::{Primitive, PrimitiveKind};
pub use value::Value;
