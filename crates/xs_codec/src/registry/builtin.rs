//! The `core` module: primitives, `Type` and the array wrapper.
//!
//! `core` is an implicit module by default, so its types are written
//! without module qualifier (`i32`, `String[]`).

use crate::info::{Capability, ModuleDescriptor, TypeDef};
use crate::registry::Module;
use crate::value::PrimitiveKind;

/// Descriptor of the `core` module.
pub static CORE: ModuleDescriptor = ModuleDescriptor::new("core");

macro_rules! primitive {
    ($($(#[$attr:meta])* $ident:ident => $name:literal, $kind:ident;)*) => {
        $(
            $(#[$attr])*
            pub static $ident: TypeDef = TypeDef::new($name, &CORE)
                .with_capability(Capability::Primitive(PrimitiveKind::$kind));
        )*
    };
}

primitive! {
    BOOL => "bool", Bool;
    CHAR => "char", Char;
    I8 => "i8", I8;
    I16 => "i16", I16;
    I32 => "i32", I32;
    I64 => "i64", I64;
    U8 => "u8", U8;
    U16 => "u16", U16;
    U32 => "u32", U32;
    U64 => "u64", U64;
    F32 => "f32", F32;
    F64 => "f64", F64;
    STRING => "String", String;
    /// A type identity used as a value.
    TYPE => "Type", Type;
}

/// Identity carried by type values at runtime, written as [`TYPE`].
pub static RUNTIME_TYPE: TypeDef = TypeDef::new("RuntimeType", &CORE)
    .with_capability(Capability::Primitive(PrimitiveKind::Type))
    .alias_of(&TYPE);

/// Tag of encoded arrays, see [`ArrayWrapper`](crate::envelope::ArrayWrapper).
pub static ARRAY_WRAPPER: TypeDef =
    TypeDef::new("ArrayWrapper", &CORE).with_capability(Capability::ArrayWrapper);

static ALL: [&TypeDef; 16] = [
    &BOOL,
    &CHAR,
    &I8,
    &I16,
    &I32,
    &I64,
    &U8,
    &U16,
    &U32,
    &U64,
    &F32,
    &F64,
    &STRING,
    &TYPE,
    &RUNTIME_TYPE,
    &ARRAY_WRAPPER,
];

/// Builds the `core` module.
pub fn core_module() -> Module {
    let mut module = Module::new(&CORE);
    for definition in ALL {
        module.insert(definition);
    }
    module
}
