use core::fmt;
use core::hash::{Hash, Hasher};

// -----------------------------------------------------------------------------
// ModuleDescriptor

/// Identifies a deployable unit of code.
///
/// - `name`: the short name written on the wire, e.g. `Fixtures`.
/// - `full_name`: may carry attributes, e.g. `Fixtures, Version=1.0.0`.
///   Defaults to `name`.
/// - platform marker: the trailing `.`-segment of `name` differs per target
///   platform and is replaced by a substitution token on the wire.
///
/// Two descriptors are equal if their short names are equal.
pub struct ModuleDescriptor {
    name: &'static str,
    full_name: &'static str,
    platform_specific: bool,
}

impl ModuleDescriptor {
    /// Creates a descriptor whose full name equals its short name.
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            full_name: name,
            platform_specific: false,
        }
    }

    /// Sets the full name.
    #[inline]
    pub const fn with_full_name(mut self, full_name: &'static str) -> Self {
        self.full_name = full_name;
        self
    }

    /// Marks the module as platform-specific.
    #[inline]
    pub const fn platform_specific(mut self) -> Self {
        self.platform_specific = true;
        self
    }

    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline(always)]
    pub const fn full_name(&self) -> &'static str {
        self.full_name
    }

    #[inline(always)]
    pub const fn is_platform_specific(&self) -> bool {
        self.platform_specific
    }

    /// Whether `name` is either the short or the full name of this module.
    #[inline]
    pub fn matches(&self, name: &str) -> bool {
        self.name == name || self.full_name == name
    }
}

impl PartialEq for ModuleDescriptor {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ModuleDescriptor {}

impl Hash for ModuleDescriptor {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Debug for ModuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleDescriptor")
            .field("name", &self.name)
            .field("full_name", &self.full_name)
            .field("platform_specific", &self.platform_specific)
            .finish()
    }
}
