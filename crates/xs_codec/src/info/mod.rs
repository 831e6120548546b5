//! Static descriptions of modules and types, and the runtime [`TypeIdentity`]
//! built from them.
//!
//! ## Menu
//!
//! - [`ModuleDescriptor`]: name and platform marker of a deployable module.
//! - [`TypeDef`]: a named type definition inside a module, with its generic
//!   arity and its serialization [`Capability`].
//! - [`TypeIdentity`]: a simple type, a closed generic, or an array.
//!
//! Descriptors and definitions are `'static` and usually declared as
//! `static` items through their `const` builders:
//!
//! ```
//! use xs_codec::info::{ModuleDescriptor, TypeDef, TypeIdentity};
//!
//! static SHAPES: ModuleDescriptor = ModuleDescriptor::new("Shapes");
//! static POINT: TypeDef = TypeDef::new("Shapes.Point", &SHAPES);
//! static GRID: TypeDef = TypeDef::new("Shapes.Grid`1", &SHAPES).with_arity(1);
//!
//! let point = TypeIdentity::of(&POINT);
//! let grid = TypeIdentity::generic(&GRID, vec![point.clone()]).unwrap();
//! let grids = TypeIdentity::array(grid, 2).unwrap();
//!
//! assert_eq!(grids.to_string(), "Shapes.Grid`1[[Shapes.Point]][,]");
//! assert!(TypeIdentity::generic(&GRID, vec![]).is_none());
//! ```

// -----------------------------------------------------------------------------
// Modules

mod identity;
mod module_descriptor;
mod type_def;

// -----------------------------------------------------------------------------
// Exports

pub use identity::TypeIdentity;
pub use module_descriptor::ModuleDescriptor;
pub use type_def::{Capability, TypeDef};
