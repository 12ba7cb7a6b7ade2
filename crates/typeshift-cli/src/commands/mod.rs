pub mod config;
pub mod generate;
pub mod init;
pub mod version;

#[cfg(test)]
mod config_tests;

use std::io;
use std::path::PathBuf;

/// Fatal command errors, printed once at the top level.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write `{path}`: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration in `{path}`: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid type graph in `{path}`: {source}")]
    Graph {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("`{path}` already exists (pass --force to overwrite)")]
    Exists { path: PathBuf },

    #[error(transparent)]
    Transpile(#[from] typeshift_lib::Error),
}
