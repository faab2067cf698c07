//! The name-to-function table handed to a template engine.

use std::collections::HashMap;
use std::fmt;

use tmplseq_foundation::{Error, ErrorContext, Result, Value};

use crate::config::FuncMapConfig;
use crate::sequence::{
    native_append, native_chunk, native_compact, native_concat, native_first, native_has,
    native_index, native_initial, native_last, native_list, native_prepend, native_rest,
    native_reverse, native_slice, native_sort_alpha, native_uniq, native_without,
};
use crate::strict::{
    native_must_append, native_must_chunk, native_must_compact, native_must_first,
    native_must_has, native_must_initial, native_must_last, native_must_prepend,
    native_must_rest, native_must_reverse, native_must_slice, native_must_uniq,
    native_must_without,
};
use crate::text::{
    native_join, native_len, native_must_regex_split, native_regex_split, native_split_list,
};

/// A helper callable from a template.
#[derive(Clone, Copy)]
pub struct NativeFn {
    /// Name the helper is registered under.
    pub name: &'static str,
    /// Function pointer.
    pub func: fn(&[Value]) -> Result<Value>,
}

impl NativeFn {
    /// Creates a helper entry.
    #[must_use]
    pub const fn new(name: &'static str, func: fn(&[Value]) -> Result<Value>) -> Self {
        Self { name, func }
    }

    /// Invokes the helper with already-evaluated arguments.
    ///
    /// # Errors
    ///
    /// Returns whatever error the helper raises.
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        (self.func)(args)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeFn({})", self.name)
    }
}

const LIST_HELPERS: &[NativeFn] = &[
    NativeFn::new("list", native_list),
    NativeFn::new("tuple", native_list),
    NativeFn::new("index", native_index),
    NativeFn::new("append", native_append),
    NativeFn::new("prepend", native_prepend),
    NativeFn::new("first", native_first),
    NativeFn::new("last", native_last),
    NativeFn::new("initial", native_initial),
    NativeFn::new("rest", native_rest),
    NativeFn::new("reverse", native_reverse),
    NativeFn::new("compact", native_compact),
    NativeFn::new("uniq", native_uniq),
    NativeFn::new("without", native_without),
    NativeFn::new("has", native_has),
    NativeFn::new("slice", native_slice),
    NativeFn::new("concat", native_concat),
    NativeFn::new("chunk", native_chunk),
    NativeFn::new("sortAlpha", native_sort_alpha),
];

const STRICT_HELPERS: &[NativeFn] = &[
    NativeFn::new("mustAppend", native_must_append),
    NativeFn::new("mustPrepend", native_must_prepend),
    NativeFn::new("mustFirst", native_must_first),
    NativeFn::new("mustLast", native_must_last),
    NativeFn::new("mustInitial", native_must_initial),
    NativeFn::new("mustRest", native_must_rest),
    NativeFn::new("mustReverse", native_must_reverse),
    NativeFn::new("mustCompact", native_must_compact),
    NativeFn::new("mustUniq", native_must_uniq),
    NativeFn::new("mustWithout", native_must_without),
    NativeFn::new("mustHas", native_must_has),
    NativeFn::new("mustSlice", native_must_slice),
    NativeFn::new("mustChunk", native_must_chunk),
];

const TEXT_HELPERS: &[NativeFn] = &[
    NativeFn::new("len", native_len),
    NativeFn::new("join", native_join),
    NativeFn::new("splitList", native_split_list),
    NativeFn::new("regexSplit", native_regex_split),
];

/// Name-to-function table consulted by a template engine.
#[derive(Clone, Debug)]
pub struct FuncMap {
    functions: HashMap<&'static str, NativeFn>,
}

impl FuncMap {
    /// Builds a function map with the helper groups selected by `config`.
    #[must_use]
    pub fn new(config: &FuncMapConfig) -> Self {
        let mut map = Self {
            functions: HashMap::new(),
        };
        map.register_all(LIST_HELPERS);
        if config.strict_variants {
            map.register_all(STRICT_HELPERS);
        }
        if config.aliases {
            map.register_as("push", native_append);
            if config.strict_variants {
                map.register_as("mustPush", native_must_append);
            }
        }
        if config.text_helpers {
            map.register_all(TEXT_HELPERS);
            if config.strict_variants {
                map.register_as("mustRegexSplit", native_must_regex_split);
            }
        }
        tracing::debug!(
            functions = map.len(),
            strict = config.strict_variants,
            aliases = config.aliases,
            text = config.text_helpers,
            "built function map"
        );
        map
    }

    fn register_all(&mut self, helpers: &[NativeFn]) {
        for helper in helpers {
            self.functions.insert(helper.name, *helper);
        }
    }

    fn register_as(&mut self, name: &'static str, func: fn(&[Value]) -> Result<Value>) {
        self.functions.insert(name, NativeFn::new(name, func));
    }

    /// Looks up a helper by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&NativeFn> {
        self.functions.get(name)
    }

    /// Returns true if a helper is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Returns the number of registered helpers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns true if no helpers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Returns the registered names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.functions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Returns an iterator over the registered helpers.
    pub fn iter(&self) -> impl Iterator<Item = &NativeFn> {
        self.functions.values()
    }

    /// Looks up `name` and calls it with `args`.
    ///
    /// # Errors
    ///
    /// Returns an unknown function error if nothing is registered under
    /// `name`, otherwise whatever the helper raises.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        let helper = self.get(name).ok_or_else(|| {
            Error::unknown_function(name).with_context(ErrorContext::new().with_function(name))
        })?;
        tracing::trace!(function = name, args = args.len(), "calling helper");
        helper.call(args)
    }
}

impl Default for FuncMap {
    fn default() -> Self {
        Self::new(&FuncMapConfig::default())
    }
}

/// Builds the function map with every helper group registered.
#[must_use]
pub fn func_map() -> FuncMap {
    FuncMap::default()
}
