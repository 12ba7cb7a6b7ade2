//! Core data structures for the typeshift resolved type graph.
//!
//! The transpiler does not parse source code. Its input is an
//! already-resolved, already-type-checked symbol table, expressed with the
//! types in this crate:
//! - **Units** (`Unit`): one compilation unit with its top-level symbols
//! - **Symbols** (`Symbol`): named constants and type definitions
//! - **Type expressions** (`TypeExpr`): a closed tree over the source
//!   language's type algebra
//! - **Registry** (`registry::Registry`): the loading boundary, which
//!   distinguishes "unit failed to load" from "symbol not found"
//!
//! Cycles between named types never appear in the `TypeExpr` value tree
//! itself: a self- or mutually-referential type points at its peer through
//! a `NamedRef`, which is resolved lazily through the registry.

use num_bigint::BigInt;

pub mod registry;
pub mod tag;
pub mod utils;

#[cfg(test)]
mod tag_tests;

// ============================================================================
// Type Expressions
// ============================================================================

/// Scalar widths of the source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarKind {
    Bool,
    String,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    Float32,
    Float64,
    Complex64,
    Complex128,
}

impl ScalarKind {
    /// The width name as spelled in the source language, used for the
    /// non-semantic width comment in output.
    pub fn source_name(self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::String => "string",
            ScalarKind::Int => "int",
            ScalarKind::Int8 => "int8",
            ScalarKind::Int16 => "int16",
            ScalarKind::Int32 => "int32",
            ScalarKind::Int64 => "int64",
            ScalarKind::Uint => "uint",
            ScalarKind::Uint8 => "uint8",
            ScalarKind::Uint16 => "uint16",
            ScalarKind::Uint32 => "uint32",
            ScalarKind::Uint64 => "uint64",
            ScalarKind::Uintptr => "uintptr",
            ScalarKind::Float32 => "float32",
            ScalarKind::Float64 => "float64",
            ScalarKind::Complex64 => "complex64",
            ScalarKind::Complex128 => "complex128",
        }
    }

    /// Whether the scalar maps to the output `number` type.
    pub fn is_numeric(self) -> bool {
        !matches!(
            self,
            ScalarKind::Bool | ScalarKind::String | ScalarKind::Complex64 | ScalarKind::Complex128
        )
    }
}

/// Reference to a named type declared in some unit, with type arguments.
///
/// An empty `unit` path marks a language builtin (`comparable`, `error`),
/// which has no declaring unit and is never routed to a module.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NamedRef {
    pub unit: String,
    pub name: String,
    #[serde(default)]
    pub args: Vec<TypeExpr>,
}

impl NamedRef {
    pub fn new(unit: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn is_builtin(&self) -> bool {
        self.unit.is_empty()
    }
}

/// One field of a composite type, before tag normalization.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(default)]
    pub tag: String,
    pub ty: TypeExpr,
    #[serde(default)]
    pub embedded: bool,
    #[serde(default = "default_true")]
    pub exported: bool,
}

/// A composite (struct) type.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StructType {
    pub fields: Vec<Field>,
}

/// An interface type. Only union-constrained embeds are representable;
/// method sets have no structural mapping and are not modeled.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InterfaceType {
    #[serde(default)]
    pub embeds: Vec<TypeExpr>,
}

/// The closed type-expression tree.
///
/// Adding a kind here is a compile-checked exhaustiveness gap in the
/// mapper, not a runtime lookup failure.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeExpr {
    Scalar(ScalarKind),
    Pointer(Box<TypeExpr>),
    Array { len: u64, elem: Box<TypeExpr> },
    Slice(Box<TypeExpr>),
    Map { key: Box<TypeExpr>, value: Box<TypeExpr> },
    Struct(StructType),
    Alias(NamedRef),
    Named(NamedRef),
    Interface(InterfaceType),
    Union(Vec<TypeExpr>),
    TypeParam(String),
}

impl TypeExpr {
    pub fn pointer(inner: TypeExpr) -> Self {
        TypeExpr::Pointer(Box::new(inner))
    }

    pub fn slice(elem: TypeExpr) -> Self {
        TypeExpr::Slice(Box::new(elem))
    }

    pub fn map(key: TypeExpr, value: TypeExpr) -> Self {
        TypeExpr::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }
}

// ============================================================================
// Literal Values
// ============================================================================

/// A constant's literal value.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Literal {
    Bool(bool),
    Str(String),
    Int(#[serde(with = "bigint_str")] BigInt),
    Rational {
        #[serde(with = "bigint_str")]
        numer: BigInt,
        #[serde(with = "bigint_str")]
        denom: BigInt,
    },
    Float(f64),
    /// Complex values have no output representation; the encoder refuses
    /// them and the symbol is dropped.
    Complex { re: f64, im: f64 },
}

// ============================================================================
// Symbols and Units
// ============================================================================

/// Declaration position, used only as an ordering tiebreak.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct SourcePos {
    pub file: String,
    pub line: u32,
}

/// One generic parameter of a type definition.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TypeParam {
    pub name: String,
    pub constraint: TypeExpr,
}

/// What a symbol declares.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decl {
    Const {
        value: Literal,
        /// The constant's named type, if it has one. Constants sharing a
        /// named type form an enumeration-like group.
        #[serde(default)]
        ty: Option<NamedRef>,
    },
    Type {
        #[serde(default)]
        params: Vec<TypeParam>,
        underlying: TypeExpr,
    },
}

/// A named top-level declaration in a unit.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Symbol {
    pub name: String,
    #[serde(default = "default_true")]
    pub exported: bool,
    #[serde(default)]
    pub pos: SourcePos,
    pub decl: Decl,
}

/// One compilation unit: a path identity, a short declared name, and its
/// symbols in declaration order.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Unit {
    pub path: String,
    pub name: String,
    #[serde(default)]
    pub symbols: Vec<Symbol>,
}

impl Unit {
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            symbols: Vec::new(),
        }
    }

    pub fn symbol(&self, name: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.name == name)
    }
}

fn default_true() -> bool {
    true
}

/// Arbitrary-precision integers serialize as decimal strings so graph
/// files stay hand-editable.
mod bigint_str {
    use std::str::FromStr;

    use num_bigint::BigInt;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_str_radix(10))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
        let s = String::deserialize(deserializer)?;
        BigInt::from_str(&s).map_err(D::Error::custom)
    }
}
