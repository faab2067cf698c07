//! Configuration for building a function map.

/// Selects which groups of helpers a [`FuncMap`](crate::FuncMap) registers.
///
/// The list helpers under their fixed names (`list`, `tuple`, `index`,
/// `append`, `prepend`, `first`, `last`, `initial`, `rest`, `reverse`,
/// `compact`, `uniq`, `without`, `has`, `slice`) plus `concat`, `chunk` and
/// `sortAlpha` are always registered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FuncMapConfig {
    /// Register the strict `must*` variants.
    pub strict_variants: bool,

    /// Register deprecated aliases (`push`, and `mustPush` when strict
    /// variants are on).
    pub aliases: bool,

    /// Register the text helpers `len`, `join`, `splitList` and `regexSplit`
    /// (and `mustRegexSplit` when strict variants are on).
    pub text_helpers: bool,
}

impl Default for FuncMapConfig {
    fn default() -> Self {
        Self {
            strict_variants: true,
            aliases: true,
            text_helpers: true,
        }
    }
}

impl FuncMapConfig {
    /// Creates a configuration with every helper group registered.
    #[must_use]
    pub fn full() -> Self {
        Self::default()
    }

    /// Creates a configuration with only the list helpers.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            strict_variants: false,
            aliases: false,
            text_helpers: false,
        }
    }

    /// Builder method to set whether strict variants are registered.
    #[must_use]
    pub fn with_strict_variants(mut self, enabled: bool) -> Self {
        self.strict_variants = enabled;
        self
    }

    /// Builder method to set whether deprecated aliases are registered.
    #[must_use]
    pub fn with_aliases(mut self, enabled: bool) -> Self {
        self.aliases = enabled;
        self
    }

    /// Builder method to set whether text helpers are registered.
    #[must_use]
    pub fn with_text_helpers(mut self, enabled: bool) -> Self {
        self.text_helpers = enabled;
        self
    }
}
