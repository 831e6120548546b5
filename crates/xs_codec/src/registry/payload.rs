use alloc::boxed::Box;
use core::fmt;

use crate::error::EnvelopeError;
use crate::info::TypeIdentity;
use crate::value::{Object, SelfDescribing, SerializationInfo};

/// Reads a self-describing value back from its [`SerializationInfo`].
///
/// Attached to a [`TypeDef`](crate::info::TypeDef) through
/// [`with_payload`](crate::info::TypeDef::with_payload), so that a type found
/// by name can rebuild its values.
///
/// # Examples
///
/// ```
/// use xs_codec::EnvelopeError;
/// use xs_codec::info::{ModuleDescriptor, TypeDef, TypeIdentity};
/// use xs_codec::registry::TypeTraitPayload;
/// use xs_codec::value::{Object, SelfDescribing, SerializationInfo};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Point {
///     x: i32,
/// }
///
/// static SHAPES: ModuleDescriptor = ModuleDescriptor::new("Shapes");
/// static POINT: TypeDef =
///     TypeDef::new("Shapes.Point", &SHAPES).with_payload(TypeTraitPayload::of::<Point>());
///
/// impl Object for Point {
///     fn type_identity(&self) -> TypeIdentity {
///         TypeIdentity::of(&POINT)
///     }
///
///     fn as_self_describing(&self) -> Option<&dyn SelfDescribing> {
///         Some(self)
///     }
/// }
///
/// impl SelfDescribing for Point {
///     fn write_info(&self, info: &mut SerializationInfo) {
///         info.add("X", self.x);
///     }
///
///     fn read_info(_: &TypeIdentity, info: &SerializationInfo) -> Result<Self, EnvelopeError> {
///         Ok(Point { x: info.get("X")? })
///     }
/// }
///
/// let mut info = SerializationInfo::new();
/// info.add("X", 7);
///
/// let reader = TypeTraitPayload::of::<Point>();
/// let value = reader.read(&TypeIdentity::of(&POINT), &info).unwrap();
/// assert_eq!(value.downcast_ref::<Point>(), Some(&Point { x: 7 }));
/// ```
#[derive(Clone, Copy)]
pub struct TypeTraitPayload {
    func: fn(&TypeIdentity, &SerializationInfo) -> Result<Box<dyn Object>, EnvelopeError>,
}

impl TypeTraitPayload {
    /// Creates the reader of `T`.
    #[inline]
    pub const fn of<T: SelfDescribing>() -> Self {
        Self {
            func: read_boxed::<T>,
        }
    }

    /// Rebuilds a value of the type `identity` from `info`.
    #[inline(always)]
    pub fn read(
        &self,
        identity: &TypeIdentity,
        info: &SerializationInfo,
    ) -> Result<Box<dyn Object>, EnvelopeError> {
        (self.func)(identity, info)
    }
}

fn read_boxed<T: SelfDescribing>(
    identity: &TypeIdentity,
    info: &SerializationInfo,
) -> Result<Box<dyn Object>, EnvelopeError> {
    Ok(Box::new(T::read_info(identity, info)?))
}

impl fmt::Debug for TypeTraitPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeTraitPayload").finish_non_exhaustive()
    }
}
