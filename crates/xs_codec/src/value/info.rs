use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::error::EnvelopeError;
use crate::info::TypeIdentity;
use crate::value::{ArrayValue, Object, Primitive, Value};

// -----------------------------------------------------------------------------
// SerializationInfo

/// The state of a self-describing object, as named values.
///
/// Keys are unique and kept in order. On the wire the bag is a JSON object
/// mapping every key to the envelope of its value, or to `null`.
///
/// # Examples
///
/// ```
/// use xs_codec::value::SerializationInfo;
///
/// let mut info = SerializationInfo::new();
/// info.add("Timeout", 30);
/// info.add("SkipReason", None::<String>);
///
/// assert_eq!(info.get::<i32>("Timeout").unwrap(), 30);
/// assert_eq!(info.get::<Option<String>>("SkipReason").unwrap(), None);
/// assert!(info.get::<String>("Timeout").is_err());
/// assert!(info.get::<i32>("Missing").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SerializationInfo {
    entries: BTreeMap<String, Value>,
}

impl SerializationInfo {
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Stores a value, replacing any previous value of the same key.
    #[inline]
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Returns the value stored under `key`.
    pub fn get_value(&self, key: &str) -> Result<&Value, EnvelopeError> {
        self.entries
            .get(key)
            .ok_or_else(|| EnvelopeError::MissingMember(String::from(key)))
    }

    /// Returns the value stored under `key`, if any.
    #[inline]
    pub fn try_get_value(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Converts the value stored under `key`.
    pub fn get<T: FromValue>(&self, key: &str) -> Result<T, EnvelopeError> {
        convert(key, self.get_value(key)?)
    }

    /// Like [`get`](Self::get), but an absent key is `Ok(None)`.
    pub fn try_get<T: FromValue>(&self, key: &str) -> Result<Option<T>, EnvelopeError> {
        self.try_get_value(key)
            .map(|value| convert(key, value))
            .transpose()
    }

    /// Clones the object stored under `key` if it is a `T`.
    pub fn get_object<T: Object + Clone>(&self, key: &str) -> Result<T, EnvelopeError> {
        self.get_value(key)?
            .downcast_ref::<T>()
            .cloned()
            .ok_or_else(|| EnvelopeError::InvalidMember {
                key: String::from(key),
                expected: core::any::type_name::<T>(),
            })
    }

    #[inline]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates the entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

fn convert<T: FromValue>(key: &str, value: &Value) -> Result<T, EnvelopeError> {
    T::from_value(value).ok_or_else(|| EnvelopeError::InvalidMember {
        key: String::from(key),
        expected: T::EXPECTED,
    })
}

// -----------------------------------------------------------------------------
// FromValue

/// Conversion out of a borrowed [`Value`], used by [`SerializationInfo::get`].
pub trait FromValue: Sized {
    /// Describes the accepted values in error messages.
    const EXPECTED: &'static str;

    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! impl_from_value {
    ($($ty:ty => $variant:ident,)*) => {
        $(
            impl FromValue for $ty {
                const EXPECTED: &'static str = stringify!($ty);

                #[inline]
                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::Primitive(Primitive::$variant(v)) => Some(<$ty as Clone>::clone(v)),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_from_value! {
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

impl FromValue for ArrayValue {
    const EXPECTED: &'static str = "array";

    #[inline]
    fn from_value(value: &Value) -> Option<Self> {
        value.as_array().cloned()
    }
}

impl FromValue for Value {
    const EXPECTED: &'static str = "value";

    #[inline]
    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl<T: FromValue> FromValue for Option<T> {
    const EXPECTED: &'static str = T::EXPECTED;

    #[inline]
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(None),
            other => T::from_value(other).map(Some),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::SerializationInfo;
    use crate::error::EnvelopeError;
    use crate::fixtures::Widget;
    use crate::value::Value;

    #[test]
    fn members() {
        let mut info = SerializationInfo::new();
        info.add("b", true);
        info.add("a", "text");
        info.add("c", Value::object(Widget::new("slider")));

        assert_eq!(info.len(), 3);
        assert_eq!(info.keys().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert_eq!(info.get::<String>("a").unwrap(), "text");
        assert_eq!(info.get_object::<Widget>("c").unwrap(), Widget::new("slider"));
        assert_eq!(info.try_get::<bool>("z").unwrap(), None);
        assert_eq!(info.try_get::<bool>("b").unwrap(), Some(true));
        assert_eq!(info.try_get_value("b"), Some(&Value::from(true)));
        assert!(info.try_get_value("z").is_none());
    }

    #[test]
    fn member_errors() {
        let mut info = SerializationInfo::new();
        info.add("flag", true);

        assert!(matches!(
            info.get::<bool>("missing"),
            Err(EnvelopeError::MissingMember(key)) if key == "missing"
        ));
        assert!(matches!(
            info.get::<u8>("flag"),
            Err(EnvelopeError::InvalidMember { expected: "u8", .. })
        ));
        assert!(info.get_object::<Widget>("flag").is_err());
        assert!(matches!(
            info.try_get::<u8>("flag"),
            Err(EnvelopeError::InvalidMember { expected: "u8", .. })
        ));
    }
}
