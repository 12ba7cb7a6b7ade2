//! Output modules and rendering.
//!
//! A module is one emitted file: ordered import edges (insertion order =
//! first-use order) and an ordered definition table (insertion order =
//! first-transpilation order). Modules are immutable once construction
//! finishes, which is what makes the render fan-out safe.

use indexmap::{IndexMap, IndexSet};
use rayon::prelude::*;

use crate::{Error, Result};

/// One output module.
#[derive(Debug, Clone)]
pub struct Module {
    /// Source compilation-unit path, named in the header comment.
    pub unit_path: String,
    /// Names of modules this one imports, in first-use order.
    pub imports: IndexSet<String>,
    /// Symbol name → finished definition text, in first-definition
    /// order. An empty entry is the in-progress recursion sentinel; none
    /// survive construction.
    pub defs: IndexMap<String, String>,
}

impl Module {
    pub fn new(unit_path: impl Into<String>) -> Self {
        Self {
            unit_path: unit_path.into(),
            imports: IndexSet::new(),
            defs: IndexMap::new(),
        }
    }

    /// Serialize: header comment, one import line per edge, then one
    /// blank-line-separated definition per entry. Pure and
    /// order-preserving.
    pub fn render(&self) -> Vec<u8> {
        let mut out = String::new();
        out.push_str("/* ");
        out.push_str(&self.unit_path);
        out.push_str(" */");
        for name in &self.imports {
            out.push('\n');
            out.push_str("import * as ");
            out.push_str(name);
            out.push_str(" from \"./");
            out.push_str(name);
            out.push_str("\";");
        }
        for def in self.defs.values() {
            out.push_str("\n\n");
            out.push_str(def);
        }
        out.into_bytes()
    }
}

/// The finished set of output modules, keyed by module name.
#[derive(Debug, Clone, Default)]
pub struct ModuleGraph {
    modules: IndexMap<String, Module>,
}

impl ModuleGraph {
    pub(crate) fn from_modules(modules: IndexMap<String, Module>) -> Self {
        Self { modules }
    }

    /// The primary unit's module.
    pub fn index(&self) -> Option<&Module> {
        self.modules.get(crate::names::INDEX)
    }

    pub fn get(&self, name: &str) -> Option<&Module> {
        self.modules.get(name)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Module names and modules, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Module)> {
        self.modules.iter().map(|(n, m)| (n.as_str(), m))
    }

    /// Render every module and hand the bytes to `write`, one task per
    /// module. `limit` caps in-flight tasks (0 = rayon default). The
    /// first error wins; already-started tasks finish and their results
    /// are discarded.
    pub fn render_all<F>(&self, limit: usize, write: F) -> Result<()>
    where
        F: Fn(&str, &[u8]) -> std::io::Result<()> + Sync,
    {
        let entries: Vec<(&String, &Module)> = self.modules.iter().collect();
        let run = || {
            entries.par_iter().try_for_each(|(name, module)| {
                write(name, &module.render()).map_err(|source| Error::Write {
                    module: name.to_string(),
                    source,
                })
            })
        };

        if limit == 0 {
            return run();
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(limit)
            .build()
            .map_err(|e| Error::RenderPool(e.to_string()))?;
        pool.install(run)
    }
}
