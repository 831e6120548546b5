use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use xs_typename::{MAX_ARRAY_RANK, QualifiedName, TypeShape};

use crate::info::{Capability, ModuleDescriptor, TypeDef};

// -----------------------------------------------------------------------------
// TypeIdentity

/// A concrete runtime type: a simple type, a closed generic, or an array.
///
/// The constructors keep two invariants:
///
/// - a generic instantiation has exactly as many arguments as its
///   definition's arity, and that arity is at least 1;
/// - an array rank is within `1..=32`.
///
/// `Display` renders the qualified name body without any module qualifier;
/// `Debug` qualifies every definition with its module.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum TypeIdentity {
    /// A non-generic type, or an open generic definition.
    Simple(&'static TypeDef),
    /// A generic definition closed over its arguments.
    Generic {
        definition: &'static TypeDef,
        arguments: Box<[TypeIdentity]>,
    },
    /// An array of `element`.
    Array { element: Box<TypeIdentity>, rank: u8 },
}

impl TypeIdentity {
    /// Creates a [`TypeIdentity::Simple`].
    #[inline]
    pub const fn of(definition: &'static TypeDef) -> Self {
        Self::Simple(definition)
    }

    /// Closes `definition` over `arguments`.
    ///
    /// Returns `None` if `definition` is not generic or the argument count
    /// differs from its arity.
    pub fn generic(definition: &'static TypeDef, arguments: Vec<TypeIdentity>) -> Option<Self> {
        if !definition.is_generic_definition() || definition.arity() != arguments.len() {
            return None;
        }
        Some(Self::Generic {
            definition,
            arguments: arguments.into_boxed_slice(),
        })
    }

    /// Creates an array of `element` with the given rank.
    ///
    /// Returns `None` if `rank` is not within `1..=32`.
    pub fn array(element: TypeIdentity, rank: u8) -> Option<Self> {
        if rank == 0 || rank > MAX_ARRAY_RANK {
            return None;
        }
        Some(Self::Array {
            element: Box::new(element),
            rank,
        })
    }

    /// Returns the innermost definition: the element definition of an
    /// array, or the open definition of a generic.
    pub fn definition(&self) -> &'static TypeDef {
        match self {
            Self::Simple(definition) | Self::Generic { definition, .. } => *definition,
            Self::Array { element, .. } => element.definition(),
        }
    }

    /// Returns the module of [`definition`](Self::definition).
    #[inline]
    pub fn module(&self) -> &'static ModuleDescriptor {
        self.definition().module()
    }

    /// Generic arguments, empty unless this is a [`TypeIdentity::Generic`].
    #[inline]
    pub fn arguments(&self) -> &[TypeIdentity] {
        match self {
            Self::Generic { arguments, .. } => arguments,
            _ => &[],
        }
    }

    /// Returns the element type and rank if this is an array.
    #[inline]
    pub fn as_array(&self) -> Option<(&TypeIdentity, u8)> {
        match self {
            Self::Array { element, rank } => Some((element, *rank)),
            _ => None,
        }
    }

    /// Serialization capability of this exact type.
    ///
    /// Open generic definitions have no values and arrays have no capability
    /// of their own; the codec carries arrays through
    /// [`ArrayWrapper`](crate::envelope::ArrayWrapper).
    pub fn capability(&self) -> Capability {
        match self {
            Self::Simple(definition) if !definition.is_generic_definition() => {
                definition.capability()
            }
            Self::Generic { definition, .. } => definition.capability(),
            _ => Capability::None,
        }
    }

    /// Builds the syntax tree of this identity.
    ///
    /// `qualifier` decides the module name written for each definition;
    /// `None` omits it. Aliased definitions are written under their target.
    pub fn to_qualified_name(
        &self,
        qualifier: &mut dyn FnMut(&'static ModuleDescriptor) -> Option<String>,
    ) -> QualifiedName {
        match self {
            Self::Simple(definition) => {
                let definition = definition.canonical();
                QualifiedName {
                    shape: TypeShape::simple(definition.name()),
                    module: qualifier(definition.module()),
                }
            }
            Self::Generic {
                definition,
                arguments,
            } => {
                let definition = definition.canonical();
                let arguments = arguments
                    .iter()
                    .map(|argument| argument.to_qualified_name(qualifier))
                    .collect();
                QualifiedName {
                    shape: TypeShape::generic(definition.name(), arguments),
                    module: qualifier(definition.module()),
                }
            }
            Self::Array { element, rank } => {
                let QualifiedName { shape, module } = element.to_qualified_name(qualifier);
                QualifiedName {
                    shape: shape.array_of(*rank),
                    module,
                }
            }
        }
    }
}

impl From<&'static TypeDef> for TypeIdentity {
    #[inline]
    fn from(definition: &'static TypeDef) -> Self {
        Self::Simple(definition)
    }
}

impl fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_qualified_name(&mut |_| None).shape, f)
    }
}

impl fmt::Debug for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.to_qualified_name(&mut |module| Some(String::from(module.name())));
        fmt::Display::fmt(&name, f)
    }
}
