//! Struct normalization and rendering.

use typeshift_core::tag::FieldTag;
use typeshift_core::utils::quote;
use typeshift_core::{Decl, StructType, TypeExpr, TypeParam};

use super::Transpiler;

/// A field after tag normalization.
#[derive(Debug)]
pub(crate) struct NormalizedField<'t> {
    pub name: String,
    pub optional: bool,
    pub ty: &'t TypeExpr,
}

/// Uniform view of a composite type: named properties and embeds.
#[derive(Debug, Default)]
pub(crate) struct NormalizedStruct<'t> {
    pub fields: Vec<NormalizedField<'t>>,
    pub embeds: Vec<&'t TypeExpr>,
}

/// Extract the normalized field list, applying visibility and tag rules:
/// explicit rename, `-` skip, `'-'` escape, `omitempty`/`omitzero`
/// optionality, `inline` forcing embed treatment. Embedded fields are
/// never optional.
pub(crate) fn normalize(s: &StructType, include_unexported: bool) -> NormalizedStruct<'_> {
    let mut norm = NormalizedStruct::default();
    for field in &s.fields {
        if !field.exported && !include_unexported {
            continue;
        }

        let tag = FieldTag::parse(&field.tag);
        let mut name = field.name.clone();
        let embedded = field.embedded || tag.inline;
        if !tag.inline {
            if let Some(rename) = &tag.rename {
                name = rename.clone();
            }
        }
        match name.as_str() {
            "-" => continue,
            "'-'" => name = "-".to_string(),
            _ => {}
        }

        if embedded {
            norm.embeds.push(&field.ty);
        } else {
            norm.fields.push(NormalizedField {
                name,
                optional: tag.optional,
                ty: &field.ty,
            });
        }
    }
    norm
}

impl Transpiler<'_> {
    /// The anonymous record shape: `{ "name"?: T; … }`. Embeds are the
    /// caller's concern (intersection suffixes or an extends clause).
    pub(crate) fn render_struct_body(
        &mut self,
        s: &NormalizedStruct<'_>,
        module: &str,
    ) -> String {
        if s.fields.is_empty() {
            return "{}".to_string();
        }
        let mut out = String::from("{ ");
        for field in &s.fields {
            out.push_str(&quote(&field.name));
            if field.optional {
                out.push('?');
            }
            out.push_str(": ");
            out.push_str(&self.render_type(field.ty, module));
            out.push_str("; ");
        }
        out.push('}');
        out
    }

    /// A top-level struct definition:
    /// `export interface Name<…> extends A, Partial<B> { … }`.
    pub(crate) fn render_struct_decl(
        &mut self,
        name: &str,
        params: &[TypeParam],
        s: &StructType,
        module: &str,
    ) -> String {
        let norm = normalize(s, self.config.include_unexported);
        let params_text = self.render_type_params(params, module);
        let extends = self.render_extends(&norm, module);
        let body = self.render_struct_body(&norm, module);
        format!("export interface {name}{params_text}{extends} {body}")
    }

    /// The extends clause for a struct's embeds. Only struct-like embeds
    /// qualify; an embed that rendered nullable contributes its
    /// all-optional `Partial` shape instead — embedding a possibly-absent
    /// pointer means every inherited field may be missing.
    fn render_extends(&mut self, s: &NormalizedStruct<'_>, module: &str) -> String {
        let mut extends: Vec<String> = Vec::new();
        for embed in &s.embeds {
            if !self.is_struct_like(embed) {
                continue;
            }
            let rendered = self.render_type(embed, module);
            match rendered.strip_suffix(" | null") {
                Some(base) => extends.push(format!("Partial<{base}>")),
                None => extends.push(rendered),
            }
        }
        if extends.is_empty() {
            return String::new();
        }
        format!(" extends {}", extends.join(", "))
    }

    /// Whether a type resolves to a composite, chasing pointers and
    /// named references through the registry. Bounded depth guards
    /// against pathological alias chains.
    pub(crate) fn is_struct_like(&self, ty: &TypeExpr) -> bool {
        self.struct_like(ty, 0)
    }

    fn struct_like(&self, ty: &TypeExpr, depth: usize) -> bool {
        if depth > 32 {
            return false;
        }
        match ty {
            TypeExpr::Struct(_) => true,
            TypeExpr::Pointer(inner) => self.struct_like(inner, depth + 1),
            TypeExpr::Named(r) | TypeExpr::Alias(r) => {
                if r.is_builtin() {
                    return false;
                }
                let Ok(unit) = self.registry.unit(&r.unit) else {
                    return false;
                };
                match unit.symbol(&r.name) {
                    Some(symbol) => match &symbol.decl {
                        Decl::Type { underlying, .. } => self.struct_like(underlying, depth + 1),
                        Decl::Const { .. } => false,
                    },
                    None => false,
                }
            }
            _ => false,
        }
    }
}
