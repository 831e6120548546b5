use alloc::borrow::ToOwned;
use alloc::string::String;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

/// Default [`CodecConfig::substitution_token`].
pub const DEFAULT_SUBSTITUTION_TOKEN: &str = ".{Platform}";

/// Default [`CodecConfig::implicit_modules`].
pub const DEFAULT_IMPLICIT_MODULES: [&str; 2] = ["core", "std"];

/// Default [`CodecConfig::max_nesting_depth`].
pub const DEFAULT_MAX_NESTING_DEPTH: usize = xs_typename::DEFAULT_MAX_DEPTH;

// -----------------------------------------------------------------------------
// CodecConfig

/// Settings shared by the resolver, the serializer and the codec.
///
/// Both sides of a boundary must agree on `substitution_token` and
/// `implicit_modules`; `platform_suffix` is what the receiving side
/// substitutes for the token.
///
/// Missing fields fall back to their defaults when deserialized.
///
/// # Examples
///
/// ```
/// use xs_codec::CodecConfig;
///
/// let config: CodecConfig = serde_json::from_str(r#"{ "platform_suffix": "DesktopImpl" }"#).unwrap();
/// assert_eq!(config.platform_suffix, "DesktopImpl");
/// assert_eq!(config.substitution_token, ".{Platform}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Sentinel written in place of the trailing segment of a platform-specific module name.
    pub substitution_token: String,
    /// Concrete trailing segment substituted back when resolving.
    pub platform_suffix: String,
    /// Modules whose types are written without module qualifier, compared case-insensitively.
    pub implicit_modules: Vec<String>,
    /// Bound on generic argument, array designator and payload nesting.
    pub max_nesting_depth: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            substitution_token: DEFAULT_SUBSTITUTION_TOKEN.to_owned(),
            platform_suffix: std::env::consts::OS.to_owned(),
            implicit_modules: DEFAULT_IMPLICIT_MODULES.map(String::from).to_vec(),
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl CodecConfig {
    /// Sets [`substitution_token`](Self::substitution_token).
    #[inline]
    pub fn with_substitution_token(mut self, token: impl Into<String>) -> Self {
        self.substitution_token = token.into();
        self
    }

    /// Sets [`platform_suffix`](Self::platform_suffix).
    #[inline]
    pub fn with_platform_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.platform_suffix = suffix.into();
        self
    }

    /// Sets [`implicit_modules`](Self::implicit_modules).
    #[inline]
    pub fn with_implicit_modules<I, S>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.implicit_modules = modules.into_iter().map(Into::into).collect();
        self
    }

    /// Sets [`max_nesting_depth`](Self::max_nesting_depth).
    #[inline]
    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    /// Whether types of `module` are written without module qualifier.
    pub fn is_implicit_module(&self, module: &str) -> bool {
        self.implicit_modules
            .iter()
            .any(|implicit| implicit.eq_ignore_ascii_case(module))
    }
}
