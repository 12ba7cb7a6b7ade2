//! The module name table.
//!
//! Maps every compilation-unit path to a unique short output module name,
//! bijectively. Built once before transpilation begins and immutable
//! afterward. The primary unit is always aliased to `index`.

use indexmap::IndexMap;
use tracing::debug;
use typeshift_core::registry::Registry;
use typeshift_core::utils::{path_base, sanitize_identifier};

pub(crate) const INDEX: &str = "index";

/// Bijective path ↔ module-name mapping.
#[derive(Debug, Clone)]
pub struct NameTable {
    by_path: IndexMap<String, String>,
    by_name: IndexMap<String, String>,
}

impl NameTable {
    /// Build the table for every unit the registry knows, loaded or not.
    ///
    /// Collisions get an increasing numeric suffix. Assignment order is
    /// fixed by (path length, then lexical short name) so identical input
    /// always produces identical names, regardless of registry order.
    pub fn build(registry: &Registry, primary_path: &str) -> Self {
        let mut table = Self {
            by_path: IndexMap::new(),
            by_name: IndexMap::new(),
        };
        table.assign(primary_path.to_string(), INDEX.to_string());

        // Short-name candidates for everything except the primary unit.
        let mut candidates: Vec<(String, String)> = Vec::new();
        for unit in registry.units() {
            if unit.path != primary_path {
                candidates.push((unit.path.clone(), sanitize_identifier(&unit.name)));
            }
        }
        for (path, _) in registry.failures() {
            if path != primary_path {
                candidates.push((path.to_string(), sanitize_identifier(path_base(path))));
            }
        }
        candidates.sort_by(|a, b| {
            a.0.len()
                .cmp(&b.0.len())
                .then_with(|| a.1.cmp(&b.1))
                .then_with(|| a.0.cmp(&b.0))
        });

        for (path, short) in candidates {
            let mut name = short.clone();
            let mut counter: u64 = 1;
            while table.by_name.contains_key(&name) {
                name = format!("{short}{counter}");
                counter += 1;
            }
            if name != short {
                debug!(%path, %name, "module name collision, renamed");
            }
            table.assign(path, name);
        }
        table
    }

    fn assign(&mut self, path: String, name: String) {
        self.by_name.insert(name.clone(), path.clone());
        self.by_path.insert(path, name);
    }

    /// Output module name for a unit path.
    pub fn module_name(&self, path: &str) -> Option<&str> {
        self.by_path.get(path).map(String::as_str)
    }

    /// Unit path owning an output module name.
    pub fn unit_path(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(String::as_str)
    }
}
