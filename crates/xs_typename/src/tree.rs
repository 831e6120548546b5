use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

// -----------------------------------------------------------------------------
// QualifiedName

/// A parsed type name: a [`TypeShape`] plus the optional module it lives in.
///
/// The module belongs to the innermost definition of the shape, i.e. to
/// `Pair`2` in `Pair`2[[i32],[bool]][], Fixtures`. Generic arguments carry
/// their own modules.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    pub shape: TypeShape,
    pub module: Option<String>,
}

impl QualifiedName {
    /// Creates a name without module qualifier.
    #[inline]
    pub const fn new(shape: TypeShape) -> Self {
        Self {
            shape,
            module: None,
        }
    }

    /// Sets the module qualifier.
    #[inline]
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    /// Returns the name of the innermost definition.
    #[inline]
    pub fn definition(&self) -> &str {
        self.shape.definition()
    }
}

// -----------------------------------------------------------------------------
// TypeShape

/// Structure of a type name, without module information.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeShape {
    /// A non-generic, non-array name, or an open generic definition.
    Simple(String),
    /// A generic definition closed over its arguments.
    Generic {
        definition: String,
        arguments: Vec<QualifiedName>,
    },
    /// An array of `element`, `rank` is at least 1.
    Array { element: Box<TypeShape>, rank: u8 },
}

impl TypeShape {
    /// Creates a [`TypeShape::Simple`].
    #[inline]
    pub fn simple(name: impl Into<String>) -> Self {
        Self::Simple(name.into())
    }

    /// Creates a [`TypeShape::Generic`].
    #[inline]
    pub fn generic(definition: impl Into<String>, arguments: Vec<QualifiedName>) -> Self {
        Self::Generic {
            definition: definition.into(),
            arguments,
        }
    }

    /// Wraps `self` in an array of the given rank.
    #[inline]
    pub fn array_of(self, rank: u8) -> Self {
        debug_assert!(rank >= 1, "array rank must be at least 1");
        Self::Array {
            element: Box::new(self),
            rank,
        }
    }

    /// Returns the name of the innermost definition.
    pub fn definition(&self) -> &str {
        match self {
            Self::Simple(name) => name,
            Self::Generic { definition, .. } => definition,
            Self::Array { element, .. } => element.definition(),
        }
    }
}
