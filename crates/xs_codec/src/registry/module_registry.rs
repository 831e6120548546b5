use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::debug;
use xs_utils::hash::HashMap;

use crate::error::LoadError;
use crate::registry::{Module, ModuleLookup, builtin};

/// Produces a module on demand, see [`ModuleRegistry::register_loader`].
pub type ModuleLoader = Arc<dyn Fn() -> Result<Module, LoadError> + Send + Sync>;

// -----------------------------------------------------------------------------
// ModuleRegistry

/// Loaded modules plus loaders for modules that are not loaded yet.
///
/// Modules are keyed by their short name; [`get`](Self::get) also accepts
/// full names. The plain registry never caches what a loader produced, use
/// [`ModuleRegistryArc`] for that.
///
/// # Examples
///
/// ```
/// use xs_codec::registry::{ModuleLookup, ModuleRegistry};
///
/// let registry = ModuleRegistry::new();
/// assert!(registry.contains("core"));
/// assert!(registry.find_loaded("Fixtures").is_none());
/// assert!(registry.load("Fixtures").is_err());
/// ```
pub struct ModuleRegistry {
    modules: HashMap<&'static str, Arc<Module>>,
    loaders: HashMap<String, ModuleLoader>,
}

impl Default for ModuleRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleRegistry {
    /// Creates a registry holding only the [`builtin`] `core` module.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.insert(builtin::core_module());
        registry
    }

    /// Creates a registry without any module.
    #[inline]
    pub fn empty() -> Self {
        Self {
            modules: HashMap::default(),
            loaders: HashMap::default(),
        }
    }

    /// Adds a loaded module, replacing any module of the same short name.
    pub fn insert(&mut self, module: impl Into<Arc<Module>>) {
        let module = module.into();
        self.modules.insert(module.name(), module);
    }

    /// Registers the loader of the module called `name`.
    ///
    /// The loader runs on [`ModuleLookup::load`], outside of any lock held
    /// by [`ModuleRegistryArc`].
    pub fn register_loader<F>(&mut self, name: impl Into<String>, loader: F)
    where
        F: Fn() -> Result<Module, LoadError> + Send + Sync + 'static,
    {
        self.loaders.insert(name.into(), Arc::new(loader));
    }

    /// Whether a module called `name` is loaded.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the loaded module whose short or full name is `name`.
    pub fn get(&self, name: &str) -> Option<&Arc<Module>> {
        self.modules.get(name).or_else(|| {
            self.modules
                .values()
                .find(|module| module.descriptor().matches(name))
        })
    }

    /// Returns the loader registered for `name`.
    #[inline]
    pub fn loader(&self, name: &str) -> Option<&ModuleLoader> {
        self.loaders.get(name)
    }

    /// Iterates the loaded modules in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Module>> {
        self.modules.values()
    }
}

impl ModuleLookup for ModuleRegistry {
    #[inline]
    fn find_loaded(&self, name: &str) -> Option<Arc<Module>> {
        self.get(name).cloned()
    }

    fn load(&self, name: &str) -> Result<Arc<Module>, LoadError> {
        let loader = self
            .loader(name)
            .ok_or_else(|| LoadError::NoLoader(String::from(name)))?;
        run_loader(name, loader).map(Arc::new)
    }
}

/// Runs `loader`, rejecting a module that does not answer to `name`.
fn run_loader(name: &str, loader: &ModuleLoader) -> Result<Module, LoadError> {
    let module = loader()?;
    if !module.descriptor().matches(name) {
        return Err(LoadError::Mismatch {
            requested: String::from(name),
            loaded: module.name(),
        });
    }
    Ok(module)
}

impl fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleRegistry")
            .field("modules", &self.modules.keys())
            .field("loaders", &self.loaders.keys())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// ModuleRegistryArc

/// A thread-safe, shareable [`ModuleRegistry`].
///
/// Modules produced by a loader are kept, so each loader runs at most once
/// per registry unless two threads race on the same module.
#[derive(Clone, Default)]
pub struct ModuleRegistryArc {
    /// The wrapped [`ModuleRegistry`].
    pub internal: Arc<RwLock<ModuleRegistry>>,
}

impl ModuleRegistryArc {
    /// Takes a read lock on the underlying [`ModuleRegistry`].
    pub fn read(&self) -> RwLockReadGuard<'_, ModuleRegistry> {
        self.internal.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Takes a write lock on the underlying [`ModuleRegistry`].
    pub fn write(&self) -> RwLockWriteGuard<'_, ModuleRegistry> {
        self.internal
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<ModuleRegistry> for ModuleRegistryArc {
    #[inline]
    fn from(registry: ModuleRegistry) -> Self {
        Self {
            internal: Arc::new(RwLock::new(registry)),
        }
    }
}

impl ModuleLookup for ModuleRegistryArc {
    #[inline]
    fn find_loaded(&self, name: &str) -> Option<Arc<Module>> {
        self.read().find_loaded(name)
    }

    fn load(&self, name: &str) -> Result<Arc<Module>, LoadError> {
        let loader = {
            let registry = self.read();
            if let Some(module) = registry.get(name) {
                return Ok(Arc::clone(module));
            }
            registry
                .loader(name)
                .cloned()
                .ok_or_else(|| LoadError::NoLoader(String::from(name)))?
        };

        let module = Arc::new(run_loader(name, &loader)?);

        let mut registry = self.write();
        if let Some(existing) = registry.get(name) {
            return Ok(Arc::clone(existing));
        }
        debug!("loaded module `{}`", module.name());
        registry.insert(Arc::clone(&module));
        Ok(module)
    }
}

impl fmt::Debug for ModuleRegistryArc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.read(), f)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::sync::Arc;
    use core::sync::atomic::{AtomicUsize, Ordering};

    use super::{ModuleRegistry, ModuleRegistryArc};
    use crate::error::LoadError;
    use crate::fixtures::{LAZY, fixtures_module};
    use crate::registry::{Module, ModuleLookup};

    fn counting_registry(calls: &Arc<AtomicUsize>) -> ModuleRegistry {
        let mut registry = ModuleRegistry::new();
        registry.insert(fixtures_module());
        let calls = Arc::clone(calls);
        registry.register_loader("Lazy", move || {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok(Module::new(&LAZY))
        });
        registry.register_loader("Broken", || {
            Err(LoadError::Failed {
                name: String::from("Broken"),
                reason: String::from("missing dependency"),
            })
        });
        registry
    }

    #[test]
    fn short_and_full_names() {
        let registry = counting_registry(&Arc::default());
        assert!(registry.contains("Fixtures"));
        assert!(registry.contains("Fixtures, Version=1.0.0"));
        assert!(!registry.contains("fixtures"));
        assert_eq!(registry.iter().count(), 2);
    }

    #[test]
    fn plain_registry_does_not_cache() {
        let calls = Arc::new(AtomicUsize::new(0));
        let registry = counting_registry(&calls);

        assert_eq!(registry.load("Lazy").unwrap().name(), "Lazy");
        assert_eq!(registry.load("Lazy").unwrap().name(), "Lazy");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(registry.find_loaded("Lazy").is_none());
    }

    #[test]
    fn shared_registry_caches() {
        let calls = Arc::new(AtomicUsize::new(0));
        let registry = ModuleRegistryArc::from(counting_registry(&calls));

        assert!(registry.find_loaded("Lazy").is_none());
        let first = registry.load("Lazy").unwrap();
        let second = registry.load("Lazy").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(registry.find_loaded("Lazy").is_some());
    }

    #[test]
    fn load_errors() {
        let registry = ModuleRegistryArc::from(counting_registry(&Arc::default()));
        assert_eq!(
            registry.load("Missing").unwrap_err(),
            LoadError::NoLoader(String::from("Missing"))
        );
        assert!(matches!(
            registry.load("Broken"),
            Err(LoadError::Failed { .. })
        ));
        assert!(!registry.read().contains("Broken"));
    }

    #[test]
    fn loader_must_produce_the_requested_module() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut plain = counting_registry(&calls);
        let counter = Arc::clone(&calls);
        plain.register_loader("Elsewhere", move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(Module::new(&LAZY))
        });
        let mismatch = LoadError::Mismatch {
            requested: String::from("Elsewhere"),
            loaded: "Lazy",
        };
        assert_eq!(plain.load("Elsewhere").unwrap_err(), mismatch);

        let registry = ModuleRegistryArc::from(plain);
        assert_eq!(registry.load("Elsewhere").unwrap_err(), mismatch);
        assert_eq!(registry.load("Elsewhere").unwrap_err(), mismatch);
        assert!(!registry.read().contains("Lazy"));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
