//! Modules, and how the codec finds them.
//!
//! ## Menu
//!
//! - [`Module`]: a [`ModuleDescriptor`](crate::info::ModuleDescriptor) plus
//!   the types it defines.
//! - [`ModuleLookup`]: what the resolver needs from the host; find a loaded
//!   module by name, or load it.
//! - [`ModuleRegistry`]: a plain map of modules and loaders.
//! - [`ModuleRegistryArc`]: a shareable registry that caches loaded modules.
//! - [`TypeTraitPayload`]: the reader attached to self-describing types.
//! - [`builtin`]: the `core` module with primitives and codec types.

// -----------------------------------------------------------------------------
// Modules

pub mod builtin;

mod lookup;
mod module;
mod module_registry;
mod payload;

// -----------------------------------------------------------------------------
// Exports

pub use lookup::ModuleLookup;
pub use module::Module;
pub use module_registry::{ModuleLoader, ModuleRegistry, ModuleRegistryArc};
pub use payload::TypeTraitPayload;
