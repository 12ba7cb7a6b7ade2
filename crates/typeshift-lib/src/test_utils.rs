//! Shared builders for transpiler tests.

use typeshift_core::registry::Registry;
use typeshift_core::{
    Decl, Field, Literal, NamedRef, ScalarKind, SourcePos, StructType, Symbol, TypeExpr, Unit,
};

use crate::{Config, ModuleGraph, Transpiler};

pub fn unit(path: &str, name: &str, symbols: Vec<Symbol>) -> Unit {
    Unit {
        path: path.to_string(),
        name: name.to_string(),
        symbols,
    }
}

pub fn registry(units: Vec<Unit>) -> Registry {
    let mut registry = Registry::new();
    for u in units {
        registry.insert(u);
    }
    registry
}

pub fn ty(name: &str, underlying: TypeExpr) -> Symbol {
    Symbol {
        name: name.to_string(),
        exported: true,
        pos: SourcePos::default(),
        decl: Decl::Type {
            params: Vec::new(),
            underlying,
        },
    }
}

pub fn private_ty(name: &str, underlying: TypeExpr) -> Symbol {
    Symbol {
        exported: false,
        ..ty(name, underlying)
    }
}

pub fn constant(name: &str, value: Literal) -> Symbol {
    Symbol {
        name: name.to_string(),
        exported: true,
        pos: SourcePos::default(),
        decl: Decl::Const { value, ty: None },
    }
}

pub fn typed_constant(name: &str, value: Literal, ty_unit: &str, ty_name: &str) -> Symbol {
    Symbol {
        name: name.to_string(),
        exported: true,
        pos: SourcePos::default(),
        decl: Decl::Const {
            value,
            ty: Some(NamedRef::new(ty_unit, ty_name)),
        },
    }
}

pub fn field(name: &str, ty: TypeExpr) -> Field {
    Field {
        name: name.to_string(),
        tag: String::new(),
        ty,
        embedded: false,
        exported: true,
    }
}

pub fn tagged_field(name: &str, tag: &str, ty: TypeExpr) -> Field {
    Field {
        tag: tag.to_string(),
        ..field(name, ty)
    }
}

pub fn embedded_field(name: &str, ty: TypeExpr) -> Field {
    Field {
        embedded: true,
        ..field(name, ty)
    }
}

pub fn strukt(fields: Vec<Field>) -> TypeExpr {
    TypeExpr::Struct(StructType { fields })
}

pub fn named(unit: &str, name: &str) -> TypeExpr {
    TypeExpr::Named(NamedRef::new(unit, name))
}

pub fn int() -> TypeExpr {
    TypeExpr::Scalar(ScalarKind::Int)
}

pub fn string() -> TypeExpr {
    TypeExpr::Scalar(ScalarKind::String)
}

/// Transpile every exported symbol of `path` and return the graph.
pub fn transpile(registry: &Registry, path: &str, config: Config) -> ModuleGraph {
    let mut t = Transpiler::new(registry, path, config).unwrap();
    t.transpile_unit(path, &[]).unwrap();
    t.finish()
}

/// The definition text of `name` in the index module.
pub fn index_def(graph: &ModuleGraph, name: &str) -> String {
    graph
        .index()
        .unwrap()
        .defs
        .get(name)
        .unwrap_or_else(|| panic!("no definition for {name}"))
        .clone()
}
