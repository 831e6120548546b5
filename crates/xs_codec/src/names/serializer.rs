use alloc::string::{String, ToString};

use log::warn;
use xs_typename::QualifiedName;

use crate::CodecConfig;
use crate::info::{ModuleDescriptor, TypeIdentity};

// -----------------------------------------------------------------------------
// TypeNameSerializer

/// Writes the canonical qualified name of a [`TypeIdentity`].
///
/// - Aliased definitions are written under their target.
/// - Generic arguments are written with their own module qualifiers.
/// - Array suffixes follow the element name, innermost first.
/// - Types of implicit modules have no module qualifier.
/// - The trailing `.`-segment of a platform-specific module name is
///   replaced by the substitution token.
#[derive(Debug, Clone, Copy)]
pub struct TypeNameSerializer<'a> {
    config: &'a CodecConfig,
}

impl<'a> TypeNameSerializer<'a> {
    #[inline]
    pub const fn new(config: &'a CodecConfig) -> Self {
        Self { config }
    }

    /// Returns the canonical name of `identity`.
    #[inline]
    pub fn serialize(&self, identity: &TypeIdentity) -> String {
        self.qualified_name(identity).to_string()
    }

    /// Returns the syntax tree of the canonical name of `identity`.
    pub fn qualified_name(&self, identity: &TypeIdentity) -> QualifiedName {
        identity.to_qualified_name(&mut |module| self.module_qualifier(module))
    }

    /// Returns the module name written for types of `module`, if any.
    pub fn module_qualifier(&self, module: &ModuleDescriptor) -> Option<String> {
        let name = module.name();
        if self.config.is_implicit_module(name) {
            return None;
        }
        if !module.is_platform_specific() {
            return Some(String::from(name));
        }
        match name.rfind('.') {
            Some(index) => {
                let mut qualifier = String::from(&name[..index]);
                qualifier.push_str(&self.config.substitution_token);
                Some(qualifier)
            }
            None => {
                warn!("platform-specific module `{name}` has no segment to substitute");
                Some(String::from(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::TypeNameSerializer;
    use crate::fixtures::{BOX, PAIR, PLATFORM, TEST_CASE, TRIPLE, WIDGET, config, registry};
    use crate::info::{ModuleDescriptor, TypeIdentity};
    use crate::names::TypeNameParser;
    use crate::registry::builtin::{BOOL, CORE, I32, RUNTIME_TYPE, STRING, TYPE};

    fn array(element: TypeIdentity, rank: u8) -> TypeIdentity {
        TypeIdentity::array(element, rank).unwrap()
    }

    #[test]
    fn module_qualifiers() {
        let config = config();
        let serializer = TypeNameSerializer::new(&config);

        assert_eq!(serializer.module_qualifier(&CORE), None);
        assert_eq!(
            serializer.module_qualifier(&PLATFORM).as_deref(),
            Some("Foo.Bar.{Platform}")
        );

        static UNDOTTED: ModuleDescriptor = ModuleDescriptor::new("Desktop").platform_specific();
        assert_eq!(serializer.module_qualifier(&UNDOTTED).as_deref(), Some("Desktop"));

        let config = config.with_implicit_modules(["Fixtures"]);
        let serializer = TypeNameSerializer::new(&config);
        assert_eq!(serializer.module_qualifier(&CORE).as_deref(), Some("core"));
        assert_eq!(serializer.serialize(&TypeIdentity::of(&TEST_CASE)), "Fixtures.TestCase");
    }

    #[test]
    fn canonical_names() {
        let config = config();
        let serializer = TypeNameSerializer::new(&config);
        let i32 = TypeIdentity::of(&I32);

        assert_eq!(serializer.serialize(&i32), "i32");
        assert_eq!(serializer.serialize(&TypeIdentity::of(&RUNTIME_TYPE)), "Type");
        assert_eq!(serializer.serialize(&array(i32.clone(), 3)), "i32[,,]");
        assert_eq!(
            serializer.serialize(&TypeIdentity::of(&WIDGET)),
            "Foo.Bar.Widget, Foo.Bar.{Platform}"
        );

        let pair = TypeIdentity::generic(&PAIR, vec![i32, TypeIdentity::of(&WIDGET)]).unwrap();
        assert_eq!(
            serializer.serialize(&array(pair, 1)),
            "Fixtures.Pair`2[[i32],[Foo.Bar.Widget, Foo.Bar.{Platform}]][], Fixtures"
        );
    }

    #[test]
    fn round_trips() {
        let (registry, config) = (registry(), config());
        let serializer = TypeNameSerializer::new(&config);
        let parser = TypeNameParser::new(&registry, &config);

        let string = TypeIdentity::of(&STRING);
        let boxed = TypeIdentity::generic(&BOX, vec![string.clone()]).unwrap();
        let pair = TypeIdentity::generic(
            &PAIR,
            vec![array(TypeIdentity::of(&BOOL), 2), boxed.clone()],
        )
        .unwrap();
        let triple = TypeIdentity::generic(
            &TRIPLE,
            vec![pair.clone(), TypeIdentity::of(&TYPE), TypeIdentity::of(&WIDGET)],
        )
        .unwrap();

        let identities = [
            string.clone(),
            TypeIdentity::of(&TEST_CASE),
            TypeIdentity::of(&WIDGET),
            TypeIdentity::of(&PAIR),
            array(string.clone(), 1),
            array(string.clone(), 2),
            array(array(string, 3), 1),
            boxed.clone(),
            array(boxed.clone(), 2),
            TypeIdentity::generic(&BOX, vec![array(boxed, 1)]).unwrap(),
            pair,
            array(triple.clone(), 3),
            triple,
        ];

        for identity in identities {
            let text = serializer.serialize(&identity);
            assert_eq!(parser.parse(&text), Some(identity), "`{text}`");
        }
    }

    #[test]
    fn two_dimensional_array_of_generic() {
        let (registry, config) = (registry(), config());
        let serializer = TypeNameSerializer::new(&config);
        let parser = TypeNameParser::new(&registry, &config);

        let boxed = TypeIdentity::generic(&BOX, vec![TypeIdentity::of(&TEST_CASE)]).unwrap();
        let text = serializer.serialize(&array(boxed, 2));
        assert_eq!(text, "Fixtures.Box`1[[Fixtures.TestCase, Fixtures]][,], Fixtures");

        let parsed = parser.parse(&text).unwrap();
        let (element, rank) = parsed.as_array().unwrap();
        assert_eq!(rank, 2);
        assert_eq!(element.arguments(), [TypeIdentity::of(&TEST_CASE)]);
    }
}
