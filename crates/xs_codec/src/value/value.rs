use alloc::boxed::Box;
use alloc::string::String;

use crate::info::TypeIdentity;
use crate::value::{ArrayValue, Object, Primitive};

// -----------------------------------------------------------------------------
// Value

/// Anything the codec can carry.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The absent value. Cannot be encoded on its own.
    #[default]
    Null,
    Primitive(Primitive),
    Object(Box<dyn Object>),
    Array(ArrayValue),
}

impl Value {
    /// Boxes a user value.
    #[inline]
    pub fn object(value: impl Object) -> Self {
        Self::Object(Box::new(value))
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Runtime type of the value, `None` for [`Value::Null`].
    pub fn type_identity(&self) -> Option<TypeIdentity> {
        match self {
            Self::Null => None,
            Self::Primitive(primitive) => Some(primitive.type_identity()),
            Self::Object(object) => Some(object.type_identity()),
            Self::Array(array) => Some(array.type_identity()),
        }
    }

    #[inline]
    pub fn as_primitive(&self) -> Option<&Primitive> {
        match self {
            Self::Primitive(primitive) => Some(primitive),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object(&self) -> Option<&dyn Object> {
        match self {
            Self::Object(object) => Some(&**object),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array(&self) -> Option<&ArrayValue> {
        match self {
            Self::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Returns the boxed object if it is a `T`.
    #[inline]
    pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
        self.as_object()?.downcast_ref::<T>()
    }
}

// -----------------------------------------------------------------------------
// Conversions

macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident,)*) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::Primitive(Primitive::$variant(value))
                }
            }
        )*
    };
}

impl_from_primitive! {
    bool => Bool,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => String,
    TypeIdentity => Type,
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Primitive(Primitive::String(String::from(value)))
    }
}

impl From<Primitive> for Value {
    #[inline]
    fn from(value: Primitive) -> Self {
        Self::Primitive(value)
    }
}

impl From<ArrayValue> for Value {
    #[inline]
    fn from(value: ArrayValue) -> Self {
        Self::Array(value)
    }
}

impl From<Box<dyn Object>> for Value {
    #[inline]
    fn from(value: Box<dyn Object>) -> Self {
        Self::Object(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::Value;
    use crate::fixtures::Widget;
    use crate::info::TypeIdentity;
    use crate::registry::builtin::{I64, RUNTIME_TYPE, STRING};

    #[test]
    fn identities() {
        assert_eq!(Value::Null.type_identity(), None);
        assert_eq!(Value::from(1_i64).type_identity(), Some(TypeIdentity::of(&I64)));
        assert_eq!(Value::from("x").type_identity(), Some(TypeIdentity::of(&STRING)));
        assert_eq!(
            Value::from(TypeIdentity::of(&I64)).type_identity(),
            Some(TypeIdentity::of(&RUNTIME_TYPE))
        );
    }

    #[test]
    fn options_and_objects() {
        assert!(Value::from(None::<i32>).is_null());
        assert_eq!(Value::from(Some(3_u8)), Value::from(3_u8));

        let value = Value::object(Widget::new("dial"));
        assert_eq!(value.downcast_ref::<Widget>(), Some(&Widget::new("dial")));
        assert!(value.as_array().is_none());
        assert_eq!(value.clone(), value);
    }
}
