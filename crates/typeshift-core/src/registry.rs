//! The unit registry: the boundary to the resolution collaborator.
//!
//! Loading and type-checking source happens outside the transpiler. What
//! crosses the boundary is a `Registry`: every unit the resolver could
//! load, plus a record of the units it could not. The distinction between
//! "unit failed to load" and "unit has no such symbol" matters — the
//! first degrades a reference to the fallback type, the second is simply
//! an absent definition.

use indexmap::IndexMap;

use crate::Unit;

/// A unit the resolver failed to load (syntax error, missing module).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UnitFailure {
    pub path: String,
    pub message: String,
}

/// Error returned when a unit cannot be produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("unit `{path}` failed to load: {message}")]
    Failed { path: String, message: String },
    #[error("unknown unit `{0}`")]
    Unknown(String),
}

/// Raw graph-file mirror, 1:1 with the serialized form.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct RawGraph {
    #[serde(default)]
    pub units: Vec<Unit>,
    #[serde(default)]
    pub failures: Vec<UnitFailure>,
}

/// All units known to one invocation, keyed by path, in input order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    units: IndexMap<String, Unit>,
    failures: IndexMap<String, String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the serialized graph-file form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: RawGraph = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    pub fn from_raw(raw: RawGraph) -> Self {
        let mut registry = Self::new();
        for unit in raw.units {
            registry.insert(unit);
        }
        for failure in raw.failures {
            registry.insert_failure(failure.path, failure.message);
        }
        registry
    }

    /// Register a loaded unit. A later unit with the same path wins.
    pub fn insert(&mut self, unit: Unit) {
        self.units.insert(unit.path.clone(), unit);
    }

    /// Record a unit the resolver could not load.
    pub fn insert_failure(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.failures.insert(path.into(), message.into());
    }

    /// Look up a unit by path.
    pub fn unit(&self, path: &str) -> Result<&Unit, LoadError> {
        if let Some(unit) = self.units.get(path) {
            return Ok(unit);
        }
        if let Some(message) = self.failures.get(path) {
            return Err(LoadError::Failed {
                path: path.to_string(),
                message: message.clone(),
            });
        }
        Err(LoadError::Unknown(path.to_string()))
    }

    /// All successfully loaded units, in input order.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }

    /// Paths of units known to exist but unloadable.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &str)> {
        self.failures.iter().map(|(p, m)| (p.as_str(), m.as_str()))
    }
}
