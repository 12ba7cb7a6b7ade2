//! Transpiler engine: resolved type graphs in, TypeScript modules out.
//!
//! The pipeline has two phases:
//! - **Construction** (single-threaded): `transpile::Transpiler` walks the
//!   requested units' top-level symbols in a stable order and populates a
//!   [`ModuleGraph`] — one output module per compilation unit, each with
//!   ordered imports and ordered definitions. Cross-module references are
//!   routed lazily; an in-progress placeholder entry keeps self- and
//!   mutually-referential types from recursing forever.
//! - **Rendering** (parallel): the finished graph serializes each module
//!   independently, fanned out over a bounded worker pool with
//!   first-error-wins semantics.

pub mod config;
pub mod module;
pub mod names;
pub mod transpile;

#[cfg(test)]
pub mod test_utils;

pub use config::Config;
pub use module::{Module, ModuleGraph};
pub use names::NameTable;
pub use transpile::Transpiler;

use typeshift_core::registry::LoadError;

/// Fatal transpilation errors.
///
/// Unsupported constructs and broken cross-unit references are *not*
/// here: they degrade locally (a dropped symbol or a fallback-type
/// definition) so one bad reference cannot block unrelated output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A requested root unit cannot be loaded. Without a valid root
    /// there is nothing meaningful to emit.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Writing one module's output failed; surfaced verbatim.
    #[error("failed to write module `{module}`: {source}")]
    Write {
        module: String,
        #[source]
        source: std::io::Error,
    },

    /// The bounded render pool could not be created.
    #[error("failed to start render pool: {0}")]
    RenderPool(String),
}

/// Result type for transpiler operations.
pub type Result<T> = std::result::Result<T, Error>;
