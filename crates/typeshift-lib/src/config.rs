//! Configuration for one transpiler invocation.

use indexmap::IndexMap;

/// Plain-value configuration consumed by the engine. File parsing and
/// validation belong to the caller.
#[derive(Clone, Debug)]
pub struct Config {
    /// Output type substituted whenever no structural mapping applies.
    pub(crate) fallback: String,
    /// Emit unexported symbols and fields too.
    pub(crate) include_unexported: bool,
    /// Qualified symbol name → replacement output text. Keys are
    /// `unit/path.Name` for foreign symbols, bare `Name` for symbols of
    /// the primary unit, and the bare width name (`int64`, …) for
    /// scalars.
    pub(crate) overrides: IndexMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fallback: "any".to_string(),
            include_unexported: false,
            overrides: IndexMap::new(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fallback type name.
    pub fn fallback(mut self, value: impl Into<String>) -> Self {
        self.fallback = value.into();
        self
    }

    /// Set whether unexported symbols are emitted.
    pub fn include_unexported(mut self, value: bool) -> Self {
        self.include_unexported = value;
        self
    }

    /// Add a single type override.
    pub fn override_type(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.overrides.insert(name.into(), text.into());
        self
    }

    /// Merge a whole override table. Later entries win.
    pub fn overrides<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in entries {
            self.overrides.insert(k.into(), v.into());
        }
        self
    }
}
