use core::fmt;

use xs_utils::hash::HashMap;

use crate::info::{ModuleDescriptor, TypeDef};

// -----------------------------------------------------------------------------
// Module

/// A loaded module: its descriptor and the types it defines, by full type name.
///
/// # Examples
///
/// ```
/// use xs_codec::info::{ModuleDescriptor, TypeDef};
/// use xs_codec::registry::Module;
///
/// static SHAPES: ModuleDescriptor = ModuleDescriptor::new("Shapes");
/// static POINT: TypeDef = TypeDef::new("Shapes.Point", &SHAPES);
///
/// let module = Module::new(&SHAPES).with_type(&POINT);
/// assert_eq!(module.get("Shapes.Point"), Some(&POINT));
/// assert!(module.get("shapes.point").is_none());
/// ```
pub struct Module {
    descriptor: &'static ModuleDescriptor,
    types: HashMap<&'static str, &'static TypeDef>,
}

impl Module {
    /// Creates an empty module.
    #[inline]
    pub fn new(descriptor: &'static ModuleDescriptor) -> Self {
        Self {
            descriptor,
            types: HashMap::default(),
        }
    }

    /// Adds a type, see [`insert`](Self::insert).
    #[inline]
    pub fn with_type(mut self, definition: &'static TypeDef) -> Self {
        self.insert(definition);
        self
    }

    /// Adds a type, replacing any type of the same name.
    ///
    /// # Panics
    ///
    /// Panics if `definition` belongs to another module.
    pub fn insert(&mut self, definition: &'static TypeDef) {
        assert!(
            definition.module() == self.descriptor,
            "type `{}` belongs to module `{}`, not `{}`",
            definition.name(),
            definition.module().name(),
            self.descriptor.name(),
        );
        self.types.insert(definition.name(), definition);
    }

    /// Looks up a type by its exact full name.
    #[inline]
    pub fn get(&self, type_name: &str) -> Option<&'static TypeDef> {
        self.types.get(type_name).copied()
    }

    #[inline(always)]
    pub fn descriptor(&self) -> &'static ModuleDescriptor {
        self.descriptor
    }

    #[inline(always)]
    pub fn name(&self) -> &'static str {
        self.descriptor.name()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterates the types in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &'static TypeDef> + '_ {
        self.types.values().copied()
    }
}

impl fmt::Debug for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Module")
            .field("name", &self.descriptor.name())
            .field("types", &self.types.keys())
            .finish()
    }
}
