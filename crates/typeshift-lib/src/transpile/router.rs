//! Cross-module symbol resolution.
//!
//! Given a named reference, decide which output module owns the
//! definition, lazily transpile it there if absent, record the import
//! edge, and hand back the identifier the referencing expression should
//! use. Recursion through cyclic types bottoms out on the placeholder
//! check in step 2.

use tracing::warn;
use typeshift_core::{Decl, NamedRef, Symbol};

use super::{Transpiler, sorted_symbols};

impl Transpiler<'_> {
    /// Resolve a named reference from `requesting`'s point of view.
    ///
    /// Side effect: the referenced symbol — and, for constants, every
    /// sibling constant sharing the same named type, so enumeration-like
    /// groups stay together — is transpiled into its owning module if
    /// not already present.
    pub(crate) fn resolve(&mut self, r: &NamedRef, requesting: &str) -> String {
        // 1. Owning module, from the immutable name table.
        let Some(owning) = self.names.module_name(&r.unit).map(str::to_string) else {
            warn!(unit = %r.unit, name = %r.name, "reference to unknown unit, degraded to fallback");
            return format!("{} /* {} */", self.config.fallback, r.name);
        };
        self.ensure_module(&owning, &r.unit);

        let ident = if owning == requesting {
            r.name.clone()
        } else {
            // 4. Cross-module: record the edge on first use.
            self.add_import(requesting, &owning);
            format!("{}.{}", owning, r.name)
        };

        // 2. An existing entry — finished or in-progress — means stop.
        if self.has_def(&owning, &r.name) {
            return ident;
        }

        // 3. Transpile the symbol (and its constant group) lazily.
        match self.registry.unit(&r.unit) {
            Ok(unit) => {
                for symbol in sorted_symbols(unit) {
                    if symbol.name == r.name || self.in_const_group(symbol, r) {
                        self.transpile_symbol(unit, symbol, &owning);
                    }
                }
            }
            Err(err) => {
                // One broken cross-unit reference must not block
                // unrelated output.
                warn!(%err, "cross-unit reference degraded to fallback");
                let def = format!("export type {} = {}", r.name, self.config.fallback);
                self.set_def(&owning, &r.name, def);
            }
        }
        ident
    }

    /// Whether `symbol` is a visible constant whose named type is `r`.
    fn in_const_group(&self, symbol: &Symbol, r: &NamedRef) -> bool {
        if !(symbol.exported || self.config.include_unexported) {
            return false;
        }
        match &symbol.decl {
            Decl::Const { ty: Some(t), .. } => t.unit == r.unit && t.name == r.name,
            _ => false,
        }
    }
}
