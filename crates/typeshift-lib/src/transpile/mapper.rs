//! Type-expression mapping rules.
//!
//! `render_type` is pure with respect to its inputs except for side
//! effects routed through the router: meeting a named reference may
//! lazily transpile the referenced symbol into its owning module.

use tracing::warn;
use typeshift_core::{InterfaceType, NamedRef, ScalarKind, TypeExpr, TypeParam};

use super::Transpiler;
use super::structs::normalize;

impl Transpiler<'_> {
    /// Render one type expression to output text, in the context of the
    /// module that will contain it.
    pub(crate) fn render_type(&mut self, ty: &TypeExpr, module: &str) -> String {
        match ty {
            TypeExpr::Scalar(kind) => self.render_scalar(*kind),
            TypeExpr::Pointer(inner) => {
                let mut text = self.render_type(inner, module);
                // Idempotent: pointer-to-pointer gains the marker once.
                if !text.ends_with(" | null") {
                    text.push_str(" | null");
                }
                text
            }
            TypeExpr::Array { elem, .. } => format!("{}[]", self.render_type(elem, module)),
            TypeExpr::Slice(elem) => format!("{}[]", self.render_type(elem, module)),
            TypeExpr::Map { value, .. } => {
                // Output maps are always string-keyed; a differing source
                // key type is not reflected.
                format!("{{ [key in string]: {} }}", self.render_type(value, module))
            }
            TypeExpr::Struct(s) => {
                let norm = normalize(s, self.config.include_unexported);
                let mut out = self.render_struct_body(&norm, module);
                for embed in &norm.embeds {
                    let rendered = self.render_type(embed, module);
                    out.push_str(" & ");
                    match rendered.strip_suffix(" | null") {
                        Some(base) => {
                            out.push_str("Partial<");
                            out.push_str(base);
                            out.push('>');
                        }
                        None => out.push_str(&rendered),
                    }
                }
                out
            }
            TypeExpr::Alias(r) | TypeExpr::Named(r) => self.render_named(r, module),
            TypeExpr::Interface(iface) => self.render_interface(iface, module),
            TypeExpr::Union(terms) => self.render_union_terms(terms, module),
            TypeExpr::TypeParam(name) => name.clone(),
        }
    }

    /// Scalar mapping. Every numeric width collapses to `number` with a
    /// width comment — a documented, not silent, precision loss. An
    /// override keyed by the width name replaces the default.
    fn render_scalar(&self, kind: ScalarKind) -> String {
        if let Some(text) = self.config.overrides.get(kind.source_name()) {
            return text.clone();
        }
        match kind {
            ScalarKind::Bool => "boolean".to_string(),
            ScalarKind::String => "string".to_string(),
            numeric if numeric.is_numeric() => {
                format!("number /* {} */", numeric.source_name())
            }
            complex => {
                warn!(width = complex.source_name(), "scalar has no mapping, using fallback");
                format!("{} /* {} */", self.config.fallback, complex.source_name())
            }
        }
    }

    /// Named reference: builtins map inline; everything else resolves
    /// through the router, then type arguments render recursively.
    pub(crate) fn render_named(&mut self, r: &NamedRef, module: &str) -> String {
        if r.is_builtin() {
            return match r.name.as_str() {
                "comparable" => "string | number /* comparable */".to_string(),
                "error" => format!("{} /* error */", self.config.fallback),
                other => other.to_string(),
            };
        }

        let mut out = self.resolve(r, module);
        if !r.args.is_empty() {
            out.push('<');
            for (i, arg) in r.args.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&self.render_type(arg, module));
            }
            out.push('>');
        }
        out
    }

    /// Interface mapping: the intersection of the term-sets of all
    /// embedded unions. A pure method-set interface has no embeds and no
    /// output representation, so it maps to the fallback type.
    fn render_interface(&mut self, iface: &InterfaceType, module: &str) -> String {
        let mut sets: Vec<Vec<&TypeExpr>> = Vec::new();
        for embed in &iface.embeds {
            match embed {
                TypeExpr::Union(terms) => sets.push(dedup_structural(terms)),
                other => sets.push(vec![other]),
            }
        }
        let Some((first, rest)) = sets.split_first() else {
            return self.config.fallback.clone();
        };

        let mut terms = first.clone();
        for set in rest {
            terms.retain(|x| set.iter().any(|y| y == x));
        }
        self.join_union(&terms, module)
    }

    fn render_union_terms(&mut self, terms: &[TypeExpr], module: &str) -> String {
        let terms = dedup_structural(terms);
        self.join_union(&terms, module)
    }

    /// Render terms, dedupe the rendered texts preserving order, and
    /// join as a union. Zero terms yield the fallback type, never an
    /// error.
    fn join_union(&mut self, terms: &[&TypeExpr], module: &str) -> String {
        let mut rendered = indexmap::IndexSet::new();
        for term in terms {
            rendered.insert(self.render_type(term, module));
        }
        if rendered.is_empty() {
            return self.config.fallback.clone();
        }
        rendered.into_iter().collect::<Vec<_>>().join(" | ")
    }

    /// Generic parameter list at a declaration site:
    /// `<T extends C, U extends D>`, empty string when there are none.
    pub(crate) fn render_type_params(&mut self, params: &[TypeParam], module: &str) -> String {
        if params.is_empty() {
            return String::new();
        }
        let mut out = String::from("<");
        for (i, param) in params.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(&param.name);
            out.push_str(" extends ");
            out.push_str(&self.render_type(&param.constraint, module));
        }
        out.push('>');
        out
    }
}

/// Deduplicate terms by structural identity, keeping first occurrences.
fn dedup_structural(terms: &[TypeExpr]) -> Vec<&TypeExpr> {
    let mut out: Vec<&TypeExpr> = Vec::new();
    for term in terms {
        if !out.iter().any(|x| *x == term) {
            out.push(term);
        }
    }
    out
}
