//! Modules and types shared by the unit tests.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::CodecConfig;
use crate::error::{EnvelopeError, LoadError};
use crate::info::{ModuleDescriptor, TypeDef, TypeIdentity};
use crate::registry::{Module, ModuleRegistry, ModuleRegistryArc, TypeTraitPayload};
use crate::value::{ArrayValue, Object, SelfDescribing, SerializationInfo, Value};

// -----------------------------------------------------------------------------
// Modules

pub static FIXTURES: ModuleDescriptor =
    ModuleDescriptor::new("Fixtures").with_full_name("Fixtures, Version=1.0.0");

pub static PLATFORM: ModuleDescriptor =
    ModuleDescriptor::new("Foo.Bar.DesktopImpl").platform_specific();

pub static LAZY: ModuleDescriptor = ModuleDescriptor::new("Lazy");

pub static TEST_CASE: TypeDef =
    TypeDef::new("Fixtures.TestCase", &FIXTURES).with_payload(TypeTraitPayload::of::<TestCase>());

pub static BOX: TypeDef = TypeDef::new("Fixtures.Box`1", &FIXTURES)
    .with_arity(1)
    .with_payload(TypeTraitPayload::of::<GenericValue>());

pub static PAIR: TypeDef = TypeDef::new("Fixtures.Pair`2", &FIXTURES)
    .with_arity(2)
    .with_payload(TypeTraitPayload::of::<GenericValue>());

pub static TRIPLE: TypeDef = TypeDef::new("Fixtures.Triple`3", &FIXTURES)
    .with_arity(3)
    .with_payload(TypeTraitPayload::of::<GenericValue>());

pub static OPAQUE: TypeDef = TypeDef::new("Fixtures.Opaque", &FIXTURES);

pub static WIDGET: TypeDef =
    TypeDef::new("Foo.Bar.Widget", &PLATFORM).with_payload(TypeTraitPayload::of::<Widget>());

pub static LAZY_THING: TypeDef = TypeDef::new("Lazy.Thing", &LAZY);

pub fn fixtures_module() -> Module {
    Module::new(&FIXTURES)
        .with_type(&TEST_CASE)
        .with_type(&BOX)
        .with_type(&PAIR)
        .with_type(&TRIPLE)
        .with_type(&OPAQUE)
}

/// `core`, `Fixtures` and `Foo.Bar.DesktopImpl` are loaded; `Lazy` loads on
/// demand and `Broken` always fails to load.
pub fn registry() -> ModuleRegistryArc {
    let mut registry = ModuleRegistry::new();
    registry.insert(fixtures_module());
    registry.insert(Module::new(&PLATFORM).with_type(&WIDGET));
    registry.register_loader("Lazy", || Ok(Module::new(&LAZY).with_type(&LAZY_THING)));
    registry.register_loader("Broken", || {
        Err(LoadError::Failed {
            name: String::from("Broken"),
            reason: String::from("image is corrupt"),
        })
    });
    registry.into()
}

pub fn config() -> CodecConfig {
    CodecConfig::default().with_platform_suffix("DesktopImpl")
}

// -----------------------------------------------------------------------------
// TestCase

#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    pub display_name: String,
    pub timeout: i32,
    pub skip_reason: Option<String>,
    pub arguments: ArrayValue,
}

impl Object for TestCase {
    fn type_identity(&self) -> TypeIdentity {
        TypeIdentity::of(&TEST_CASE)
    }

    fn as_self_describing(&self) -> Option<&dyn SelfDescribing> {
        Some(self)
    }
}

impl SelfDescribing for TestCase {
    fn write_info(&self, info: &mut SerializationInfo) {
        info.add("DisplayName", self.display_name.as_str());
        info.add("Timeout", self.timeout);
        info.add("SkipReason", self.skip_reason.clone());
        info.add("Arguments", self.arguments.clone());
    }

    fn read_info(_: &TypeIdentity, info: &SerializationInfo) -> Result<Self, EnvelopeError> {
        Ok(Self {
            display_name: info.get("DisplayName")?,
            timeout: info.get("Timeout")?,
            skip_reason: info.get("SkipReason")?,
            arguments: info.get("Arguments")?,
        })
    }
}

// -----------------------------------------------------------------------------
// GenericValue

/// A value of any of the generic fixture types, holding one item per type argument.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericValue {
    pub identity: TypeIdentity,
    pub items: Vec<Value>,
}

impl Object for GenericValue {
    fn type_identity(&self) -> TypeIdentity {
        self.identity.clone()
    }

    fn as_self_describing(&self) -> Option<&dyn SelfDescribing> {
        Some(self)
    }
}

impl SelfDescribing for GenericValue {
    fn write_info(&self, info: &mut SerializationInfo) {
        for (index, item) in self.items.iter().enumerate() {
            info.add(format!("Item{index}"), item.clone());
        }
    }

    fn read_info(identity: &TypeIdentity, info: &SerializationInfo) -> Result<Self, EnvelopeError> {
        let items = (0..identity.arguments().len())
            .map(|index| info.get_value(&format!("Item{index}")).cloned())
            .collect::<Result<_, _>>()?;
        Ok(Self {
            identity: identity.clone(),
            items,
        })
    }
}

// -----------------------------------------------------------------------------
// Widget

/// Lives in the platform-specific module.
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    pub label: String,
}

impl Widget {
    pub fn new(label: &str) -> Self {
        Self {
            label: String::from(label),
        }
    }
}

impl Object for Widget {
    fn type_identity(&self) -> TypeIdentity {
        TypeIdentity::of(&WIDGET)
    }

    fn as_self_describing(&self) -> Option<&dyn SelfDescribing> {
        Some(self)
    }
}

impl SelfDescribing for Widget {
    fn write_info(&self, info: &mut SerializationInfo) {
        info.add("Label", self.label.as_str());
    }

    fn read_info(_: &TypeIdentity, info: &SerializationInfo) -> Result<Self, EnvelopeError> {
        Ok(Self {
            label: info.get("Label")?,
        })
    }
}

// -----------------------------------------------------------------------------
// Opaque

/// An object without serialization capability.
#[derive(Debug, Clone, PartialEq)]
pub struct Opaque;

impl Object for Opaque {
    fn type_identity(&self) -> TypeIdentity {
        TypeIdentity::of(&OPAQUE)
    }
}
