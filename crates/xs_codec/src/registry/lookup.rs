use alloc::sync::Arc;

use crate::error::LoadError;
use crate::registry::Module;

/// Access to the modules of the current process.
///
/// `name` is either a short or a full module name. Implementations must be
/// safe for concurrent reads.
pub trait ModuleLookup: Send + Sync {
    /// Returns an already loaded module.
    fn find_loaded(&self, name: &str) -> Option<Arc<Module>>;

    /// Loads a module that is not loaded yet.
    fn load(&self, name: &str) -> Result<Arc<Module>, LoadError>;
}

impl<T: ModuleLookup + ?Sized> ModuleLookup for Arc<T> {
    #[inline]
    fn find_loaded(&self, name: &str) -> Option<Arc<Module>> {
        (**self).find_loaded(name)
    }

    #[inline]
    fn load(&self, name: &str) -> Result<Arc<Module>, LoadError> {
        (**self).load(name)
    }
}
