use alloc::vec::Vec;

use log::debug;
use xs_typename::{QualifiedName, TypeShape};

use crate::CodecConfig;
use crate::info::{TypeDef, TypeIdentity};
use crate::names::TypeResolver;
use crate::registry::ModuleLookup;

// -----------------------------------------------------------------------------
// TypeNameParser

/// Parses qualified type names into [`TypeIdentity`] values.
///
/// Parsing runs in two passes: [`xs_typename::parse_with_depth`] builds the
/// syntax tree, then every definition in the tree is resolved through a
/// [`TypeResolver`]. Names without module qualifier are looked up in the
/// implicit modules.
///
/// Any syntax error, unknown module or type, or arity mismatch makes the
/// whole name unresolvable.
///
/// # Examples
///
/// ```
/// use xs_codec::CodecConfig;
/// use xs_codec::names::TypeNameParser;
/// use xs_codec::registry::ModuleRegistry;
///
/// let registry = ModuleRegistry::new();
/// let config = CodecConfig::default();
/// let parser = TypeNameParser::new(&registry, &config);
///
/// let identity = parser.parse("String[][,]").unwrap();
/// assert_eq!(identity.to_string(), "String[][,]");
///
/// assert!(parser.parse("String[[i32]]").is_none());
/// assert!(parser.parse("Shapes.Point, Shapes").is_none());
/// ```
pub struct TypeNameParser<'a, L: ModuleLookup + ?Sized> {
    resolver: TypeResolver<'a, L>,
    max_depth: usize,
}

impl<'a, L: ModuleLookup + ?Sized> TypeNameParser<'a, L> {
    #[inline]
    pub const fn new(lookup: &'a L, config: &'a CodecConfig) -> Self {
        Self {
            resolver: TypeResolver::new(lookup, config),
            max_depth: config.max_nesting_depth,
        }
    }

    #[inline(always)]
    pub fn resolver(&self) -> &TypeResolver<'a, L> {
        &self.resolver
    }

    /// Parses and resolves `text`.
    pub fn parse(&self, text: &str) -> Option<TypeIdentity> {
        let Some(name) = xs_typename::parse_with_depth(text, self.max_depth) else {
            debug!("`{text}` is not a well formed type name");
            return None;
        };
        let identity = self.resolve_name(&name);
        if identity.is_none() {
            debug!("could not resolve type name `{text}`");
        }
        identity
    }

    /// Resolves an already parsed name.
    #[inline]
    pub fn resolve_name(&self, name: &QualifiedName) -> Option<TypeIdentity> {
        self.resolve_shape(&name.shape, name.module.as_deref())
    }

    fn resolve_shape(&self, shape: &TypeShape, module: Option<&str>) -> Option<TypeIdentity> {
        match shape {
            TypeShape::Simple(name) => self.definition(name, module).map(TypeIdentity::of),
            TypeShape::Generic {
                definition,
                arguments,
            } => {
                let arguments = arguments
                    .iter()
                    .map(|argument| self.resolve_name(argument))
                    .collect::<Option<Vec<_>>>()?;
                let definition = self.definition(definition, module)?;
                let count = arguments.len();
                let identity = TypeIdentity::generic(definition, arguments);
                if identity.is_none() {
                    debug!(
                        "`{}` takes {} type arguments, not {count}",
                        definition.name(),
                        definition.arity()
                    );
                }
                identity
            }
            TypeShape::Array { element, rank } => {
                TypeIdentity::array(self.resolve_shape(element, module)?, *rank)
            }
        }
    }

    fn definition(&self, name: &str, module: Option<&str>) -> Option<&'static TypeDef> {
        match module {
            Some(module) => self.resolver.find_type(module, name),
            None => self.resolver.find_implicit_type(name),
        }
    }
}
