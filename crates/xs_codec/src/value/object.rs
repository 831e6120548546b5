use alloc::boxed::Box;
use core::any::Any;
use core::fmt::Debug;

use crate::error::EnvelopeError;
use crate::info::TypeIdentity;
use crate::value::SerializationInfo;

// -----------------------------------------------------------------------------
// Object

/// A user value that can be stored in a [`Value`](crate::value::Value).
///
/// Cloning, comparison and downcasting come from [`DynObject`], which is
/// implemented for every `Clone + PartialEq` object.
pub trait Object: DynObject + Debug + Send + Sync + 'static {
    /// The exact runtime type of this value.
    fn type_identity(&self) -> TypeIdentity;

    /// Returns `Some(self)` if the type implements [`SelfDescribing`].
    ///
    /// Objects returning `None` are rejected by the codec.
    #[inline]
    fn as_self_describing(&self) -> Option<&dyn SelfDescribing> {
        None
    }
}

/// Object-safe helpers of [`Object`], see its documentation.
pub trait DynObject: Any {
    fn as_any(&self) -> &dyn Any;

    fn clone_object(&self) -> Box<dyn Object>;

    fn object_eq(&self, other: &dyn Object) -> bool;
}

impl<T: Object + Clone + PartialEq> DynObject for T {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn clone_object(&self) -> Box<dyn Object> {
        Box::new(self.clone())
    }

    #[inline]
    fn object_eq(&self, other: &dyn Object) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}

impl dyn Object {
    /// Returns `true` if the concrete type is `T`.
    #[inline]
    pub fn is<T: Object>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Returns a reference to the concrete value if it is a `T`.
    #[inline]
    pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

impl Clone for Box<dyn Object> {
    #[inline]
    fn clone(&self) -> Self {
        self.clone_object()
    }
}

impl PartialEq for dyn Object {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.object_eq(other)
    }
}

// -----------------------------------------------------------------------------
// SelfDescribing

/// The serialization capability of an [`Object`].
///
/// A type implementing this trait also has to
///
/// - return `Some(self)` from [`Object::as_self_describing`];
/// - attach [`TypeTraitPayload::of::<Self>()`](crate::registry::TypeTraitPayload::of)
///   to its [`TypeDef`](crate::info::TypeDef), so the decoding side can find
///   [`read_info`](Self::read_info).
pub trait SelfDescribing: Object {
    /// Writes the state of `self` into `info`.
    fn write_info(&self, info: &mut SerializationInfo);

    /// Rebuilds a value of type `identity` from `info`.
    ///
    /// `identity` carries the generic arguments of generic types.
    fn read_info(identity: &TypeIdentity, info: &SerializationInfo) -> Result<Self, EnvelopeError>
    where
        Self: Sized;
}
