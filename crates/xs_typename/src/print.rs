use core::fmt::{self, Display, Write};

use crate::{CLOSE, DELIMITER, OPEN, QualifiedName, TypeShape};

/// Renders the canonical text form, e.g. `Pair`2[[i32],[bool, Fixtures]][], Fixtures`.
impl Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.shape, f)?;
        if let Some(module) = &self.module {
            write!(f, "{DELIMITER} {module}")?;
        }
        Ok(())
    }
}

impl Display for TypeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeShape::Simple(name) => f.write_str(name),
            TypeShape::Generic {
                definition,
                arguments,
            } => {
                f.write_str(definition)?;
                f.write_char(OPEN)?;
                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        f.write_char(DELIMITER)?;
                    }
                    write!(f, "{OPEN}{argument}{CLOSE}")?;
                }
                f.write_char(CLOSE)
            }
            TypeShape::Array { element, rank } => {
                Display::fmt(element, f)?;
                f.write_char(OPEN)?;
                for _ in 1..*rank {
                    f.write_char(DELIMITER)?;
                }
                f.write_char(CLOSE)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use crate::{QualifiedName, TypeShape};

    #[test]
    fn simple_names() {
        let name = QualifiedName::new(TypeShape::simple("i32"));
        assert_eq!(name.to_string(), "i32");

        let name = name.with_module("Fixtures");
        assert_eq!(name.to_string(), "i32, Fixtures");
    }

    #[test]
    fn array_suffixes_are_outermost_last() {
        let shape = TypeShape::simple("i32").array_of(1).array_of(3);
        assert_eq!(shape.to_string(), "i32[][,,]");
    }

    #[test]
    fn generic_arguments_are_bracketed() {
        let shape = TypeShape::generic(
            "Fixtures.Pair`2",
            vec![
                QualifiedName::new(TypeShape::simple("i32")),
                QualifiedName::new(TypeShape::simple("Fixtures.Widget")).with_module("Fixtures"),
            ],
        );
        let name = QualifiedName::new(shape.array_of(2)).with_module("Fixtures");
        assert_eq!(
            name.to_string(),
            "Fixtures.Pair`2[[i32],[Fixtures.Widget, Fixtures]][,], Fixtures"
        );
        assert_eq!(name.definition(), "Fixtures.Pair`2");
    }
}
