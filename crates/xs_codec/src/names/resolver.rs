use alloc::borrow::Cow;
use alloc::format;
use alloc::sync::Arc;

use log::debug;
use xs_utils::text::strip_suffix_ignore_ascii_case;

use crate::CodecConfig;
use crate::info::{TypeDef, TypeIdentity};
use crate::registry::{Module, ModuleLookup};

// -----------------------------------------------------------------------------
// TypeResolver

/// Finds type definitions by module and type name.
///
/// A module name ending with the substitution token (compared ASCII
/// case-insensitively) has the token replaced by `.` and the platform
/// suffix first, so `Foo.Bar.{Platform}` looks up `Foo.Bar.DesktopImpl`
/// when the suffix is `DesktopImpl`.
///
/// Modules that are not loaded are loaded on demand. A failed load is
/// logged and treated like a missing module.
pub struct TypeResolver<'a, L: ModuleLookup + ?Sized> {
    lookup: &'a L,
    config: &'a CodecConfig,
}

impl<L: ModuleLookup + ?Sized> Clone for TypeResolver<'_, L> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: ModuleLookup + ?Sized> Copy for TypeResolver<'_, L> {}

impl<'a, L: ModuleLookup + ?Sized> TypeResolver<'a, L> {
    #[inline]
    pub const fn new(lookup: &'a L, config: &'a CodecConfig) -> Self {
        Self { lookup, config }
    }

    /// Resolves `type_name` in the module called `module`.
    #[inline]
    pub fn resolve(&self, module: &str, type_name: &str) -> Option<TypeIdentity> {
        self.find_type(module, type_name).map(TypeIdentity::of)
    }

    /// Resolves a name written without module qualifier, searching the
    /// implicit modules in order.
    #[inline]
    pub fn resolve_implicit(&self, type_name: &str) -> Option<TypeIdentity> {
        self.find_implicit_type(type_name).map(TypeIdentity::of)
    }

    /// Like [`resolve`](Self::resolve), returning the definition.
    pub fn find_type(&self, module: &str, type_name: &str) -> Option<&'static TypeDef> {
        let module = self.find_module(module)?;
        let found = module.get(type_name);
        if found.is_none() {
            debug!("module `{}` has no type `{type_name}`", module.name());
        }
        found
    }

    /// Like [`resolve_implicit`](Self::resolve_implicit), returning the definition.
    pub fn find_implicit_type(&self, type_name: &str) -> Option<&'static TypeDef> {
        let found = self
            .config
            .implicit_modules
            .iter()
            .filter_map(|module| self.find_module(module))
            .find_map(|module| module.get(type_name));
        if found.is_none() {
            debug!("no implicit module has a type `{type_name}`");
        }
        found
    }

    /// Finds a loaded module, or loads it.
    pub fn find_module(&self, name: &str) -> Option<Arc<Module>> {
        let name = self.substitute(name);
        if let Some(module) = self.lookup.find_loaded(&name) {
            return Some(module);
        }
        match self.lookup.load(&name) {
            Ok(module) => Some(module),
            Err(err) => {
                debug!("module `{name}` is unavailable: {err}");
                None
            }
        }
    }

    /// Replaces a trailing substitution token by the platform suffix.
    pub fn substitute<'n>(&self, name: &'n str) -> Cow<'n, str> {
        let token = self.config.substitution_token.as_str();
        if token.is_empty() {
            return Cow::Borrowed(name);
        }
        match strip_suffix_ignore_ascii_case(name, token) {
            Some(stem) => Cow::Owned(format!("{stem}.{}", self.config.platform_suffix)),
            None => Cow::Borrowed(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TypeResolver;
    use crate::fixtures::{TEST_CASE, WIDGET, config, registry};
    use crate::info::TypeIdentity;
    use crate::registry::ModuleLookup;
    use crate::registry::builtin::I32;

    #[test]
    fn explicit_and_implicit_modules() {
        let (registry, config) = (registry(), config());
        let resolver = TypeResolver::new(&registry, &config);

        assert_eq!(
            resolver.resolve("Fixtures", "Fixtures.TestCase"),
            Some(TypeIdentity::of(&TEST_CASE))
        );
        assert_eq!(
            resolver.resolve("Fixtures, Version=1.0.0", "Fixtures.TestCase"),
            Some(TypeIdentity::of(&TEST_CASE))
        );
        assert_eq!(resolver.resolve_implicit("i32"), Some(TypeIdentity::of(&I32)));
        assert_eq!(resolver.resolve("core", "i32"), Some(TypeIdentity::of(&I32)));

        assert!(resolver.resolve_implicit("Fixtures.TestCase").is_none());
        assert!(resolver.resolve("Fixtures", "fixtures.testcase").is_none());
        assert!(resolver.resolve("Nonexistent.Module", "Nonexistent.Type").is_none());
    }

    #[test]
    fn platform_token_is_substituted() {
        let (registry, config) = (registry(), config());
        let resolver = TypeResolver::new(&registry, &config);

        assert_eq!(resolver.substitute("Foo.Bar.{Platform}"), "Foo.Bar.DesktopImpl");
        assert_eq!(resolver.substitute("Foo.Bar.{PLATFORM}"), "Foo.Bar.DesktopImpl");
        assert_eq!(resolver.substitute("Foo.Bar.Desktop"), "Foo.Bar.Desktop");
        assert_eq!(
            resolver.resolve("Foo.Bar.{Platform}", "Foo.Bar.Widget"),
            Some(TypeIdentity::of(&WIDGET))
        );
    }

    #[test]
    fn load_failures_are_not_found() {
        let (registry, config) = (registry(), config());
        let resolver = TypeResolver::new(&registry, &config);

        assert!(resolver.find_module("Broken").is_none());
        assert!(resolver.resolve("Broken", "Broken.Thing").is_none());

        // Loaded on demand.
        assert!(registry.find_loaded("Lazy").is_none());
        assert!(resolver.resolve("Lazy", "Lazy.Thing").is_some());
        assert!(registry.find_loaded("Lazy").is_some());
    }
}
