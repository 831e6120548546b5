use core::fmt;
use core::hash::{Hash, Hasher};

use crate::info::ModuleDescriptor;
use crate::registry::TypeTraitPayload;
use crate::value::PrimitiveKind;

// -----------------------------------------------------------------------------
// Capability

/// How values of a type take part in envelope serialization.
///
/// This is a closed set, dispatched statically by the codec.
#[derive(Debug, Clone, Copy)]
pub enum Capability {
    /// Values of this type cannot be serialized.
    None,
    /// A built-in primitive with a fixed text payload.
    Primitive(PrimitiveKind),
    /// A user type implementing [`SelfDescribing`](crate::value::SelfDescribing).
    Object(TypeTraitPayload),
    /// The adapter used to carry arrays, see [`ArrayWrapper`](crate::envelope::ArrayWrapper).
    ArrayWrapper,
}

impl Capability {
    /// Returns `false` for [`Capability::None`].
    #[inline]
    pub const fn is_serializable(&self) -> bool {
        !matches!(self, Self::None)
    }
}

// -----------------------------------------------------------------------------
// TypeDef

/// A type definition living in a module.
///
/// `name` is the full type name as written on the wire, including the
/// generic arity marker for generic definitions (``Fixtures.Pair`2``).
///
/// Two definitions are equal if their names and module names are equal.
///
/// # Examples
///
/// ```
/// use xs_codec::info::{ModuleDescriptor, TypeDef};
///
/// static SHAPES: ModuleDescriptor = ModuleDescriptor::new("Shapes");
/// static GRID: TypeDef = TypeDef::new("Shapes.Grid`1", &SHAPES).with_arity(1);
///
/// assert!(GRID.is_generic_definition());
/// assert_eq!(GRID.module().name(), "Shapes");
/// assert!(!GRID.capability().is_serializable());
/// ```
pub struct TypeDef {
    name: &'static str,
    module: &'static ModuleDescriptor,
    arity: usize,
    capability: Capability,
    alias_of: Option<&'static TypeDef>,
}

impl TypeDef {
    /// Creates a non-generic definition without serialization capability.
    #[inline]
    pub const fn new(name: &'static str, module: &'static ModuleDescriptor) -> Self {
        Self {
            name,
            module,
            arity: 0,
            capability: Capability::None,
            alias_of: None,
        }
    }

    /// Sets the number of generic parameters.
    #[inline]
    pub const fn with_arity(mut self, arity: usize) -> Self {
        self.arity = arity;
        self
    }

    /// Attaches a self-describing payload reader.
    ///
    /// See [`TypeTraitPayload::of`].
    #[inline]
    pub const fn with_payload(mut self, payload: TypeTraitPayload) -> Self {
        self.capability = Capability::Object(payload);
        self
    }

    #[inline]
    pub(crate) const fn with_capability(mut self, capability: Capability) -> Self {
        self.capability = capability;
        self
    }

    /// Makes this definition serialize under the name of `target`.
    ///
    /// Used for runtime stand-ins of a type that should never appear on the wire.
    #[inline]
    pub const fn alias_of(mut self, target: &'static TypeDef) -> Self {
        self.alias_of = Some(target);
        self
    }

    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline(always)]
    pub const fn module(&self) -> &'static ModuleDescriptor {
        self.module
    }

    #[inline(always)]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    #[inline(always)]
    pub const fn capability(&self) -> Capability {
        self.capability
    }

    /// Whether this is an open generic definition.
    #[inline]
    pub const fn is_generic_definition(&self) -> bool {
        self.arity > 0
    }

    /// Returns the definition written on the wire for this one.
    #[inline]
    pub fn canonical(&'static self) -> &'static TypeDef {
        match self.alias_of {
            Some(target) => target,
            None => self,
        }
    }
}

impl PartialEq for TypeDef {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.module == other.module
    }
}

impl Eq for TypeDef {}

impl Hash for TypeDef {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.module.hash(state);
    }
}

/// This implementation will only output the name and module of the type.
impl fmt::Debug for TypeDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.module.name())
    }
}
