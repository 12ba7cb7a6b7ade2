//! Graph construction: symbol walk, type mapping, and routing.
//!
//! Construction is single-threaded by design — the recursion-guard
//! placeholder scheme mutates shared definition tables and is not safe
//! under concurrency. The parallel phase only starts once the graph is
//! immutable (see `module`).

mod consts;
mod mapper;
mod router;
mod structs;

#[cfg(test)]
mod transpile_tests;

use indexmap::IndexMap;
use tracing::debug;
use typeshift_core::registry::Registry;
use typeshift_core::{Decl, Symbol, TypeExpr, TypeParam, Unit};

use crate::names::{INDEX, NameTable};
use crate::{Config, Module, ModuleGraph, Result};

/// The orchestrator: owns the name table, the module map, and all
/// construction-phase state for one invocation.
#[derive(Debug)]
pub struct Transpiler<'a> {
    registry: &'a Registry,
    primary: String,
    names: NameTable,
    modules: IndexMap<String, Module>,
    config: Config,
}

impl<'a> Transpiler<'a> {
    /// Create a transpiler rooted at `primary_path`.
    ///
    /// The primary unit must load; a broken root is fatal since no
    /// meaningful output can be produced from it.
    pub fn new(registry: &'a Registry, primary_path: &str, config: Config) -> Result<Self> {
        let primary = registry.unit(primary_path)?;
        let names = NameTable::build(registry, primary_path);
        let mut modules = IndexMap::new();
        modules.insert(INDEX.to_string(), Module::new(primary.path.clone()));
        Ok(Self {
            registry,
            primary: primary_path.to_string(),
            names,
            modules,
            config,
        })
    }

    /// The name table fixed for this invocation.
    pub fn names(&self) -> &NameTable {
        &self.names
    }

    /// Transpile the eligible top-level symbols of one requested unit
    /// into its module.
    ///
    /// A non-empty `only` set restricts emission to exactly those names,
    /// regardless of visibility; otherwise exported symbols are emitted
    /// (plus unexported ones under the include-unexported flag).
    pub fn transpile_unit(&mut self, path: &str, only: &[String]) -> Result<()> {
        let unit = self.registry.unit(path)?;
        let module = match self.names.module_name(path) {
            Some(name) => name.to_string(),
            None => INDEX.to_string(),
        };
        self.ensure_module(&module, &unit.path);

        for symbol in sorted_symbols(unit) {
            if !self.selected(symbol, only) {
                continue;
            }
            self.transpile_symbol(unit, symbol, &module);
        }
        Ok(())
    }

    /// Consume the transpiler, yielding the immutable module graph.
    pub fn finish(self) -> ModuleGraph {
        ModuleGraph::from_modules(self.modules)
    }

    fn selected(&self, symbol: &Symbol, only: &[String]) -> bool {
        if only.is_empty() {
            symbol.exported || self.config.include_unexported
        } else {
            only.iter().any(|n| n == &symbol.name)
        }
    }

    /// Transpile one symbol into `module`, unless a definition (or an
    /// in-progress placeholder) already exists for its name.
    pub(crate) fn transpile_symbol(&mut self, unit: &Unit, symbol: &Symbol, module: &str) {
        if self.has_def(module, &symbol.name) {
            return;
        }
        match &symbol.decl {
            Decl::Const { value, ty } => {
                self.transpile_const(symbol, value, ty.as_ref(), module);
            }
            Decl::Type { params, underlying } => {
                self.transpile_type_decl(unit, symbol, params, underlying, module);
            }
        }
    }

    fn transpile_type_decl(
        &mut self,
        unit: &Unit,
        symbol: &Symbol,
        params: &[TypeParam],
        underlying: &TypeExpr,
        module: &str,
    ) {
        // Sentinel entry: a self-reference reached while rendering the
        // body sees "already present" and does not re-enter.
        self.set_def(module, &symbol.name, String::new());

        let def = if let Some(text) = self.override_for(&unit.path, &symbol.name) {
            let params_text = self.render_type_params(params, module);
            format!("export type {}{} = {}", symbol.name, params_text, text)
        } else if let TypeExpr::Struct(s) = underlying {
            self.render_struct_decl(&symbol.name, params, s, module)
        } else {
            let params_text = self.render_type_params(params, module);
            let body = self.render_type(underlying, module);
            format!("export type {}{} = {}", symbol.name, params_text, body)
        };
        self.set_def(module, &symbol.name, def);
    }

    /// Override text for a symbol, keyed by its qualified name: bare for
    /// the primary unit, `unit/path.Name` for everything else.
    fn override_for(&self, unit_path: &str, name: &str) -> Option<String> {
        let key = if unit_path == self.primary {
            name.to_string()
        } else {
            format!("{unit_path}.{name}")
        };
        self.config.overrides.get(&key).cloned()
    }

    pub(crate) fn ensure_module(&mut self, name: &str, unit_path: &str) {
        if !self.modules.contains_key(name) {
            debug!(module = %name, unit = %unit_path, "created module");
            self.modules
                .insert(name.to_string(), Module::new(unit_path));
        }
    }

    pub(crate) fn has_def(&self, module: &str, name: &str) -> bool {
        self.modules
            .get(module)
            .is_some_and(|m| m.defs.contains_key(name))
    }

    pub(crate) fn set_def(&mut self, module: &str, name: &str, text: String) {
        if let Some(m) = self.modules.get_mut(module) {
            m.defs.insert(name.to_string(), text);
        }
    }

    pub(crate) fn remove_def(&mut self, module: &str, name: &str) {
        if let Some(m) = self.modules.get_mut(module) {
            m.defs.shift_remove(name);
        }
    }

    pub(crate) fn add_import(&mut self, requesting: &str, owning: &str) {
        if let Some(m) = self.modules.get_mut(requesting) {
            if m.imports.insert(owning.to_string()) {
                debug!(from = %requesting, to = %owning, "recorded import edge");
            }
        }
    }
}

/// Eligible top-level symbols in a stable order: name, then declaration
/// position. Independent of any map iteration order.
pub(crate) fn sorted_symbols(unit: &Unit) -> Vec<&Symbol> {
    let mut symbols: Vec<&Symbol> = unit.symbols.iter().collect();
    symbols.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.pos.cmp(&b.pos)));
    symbols
}
