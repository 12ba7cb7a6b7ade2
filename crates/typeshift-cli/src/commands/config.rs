//! The JSON configuration file read by `generate` and written by `init`.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::CliError;

/// One unit selected for transpilation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UnitSelection {
    /// Unit path exactly as it appears in the graph file.
    pub path: String,
    /// Restrict emission to these top-level names; empty means every
    /// exported symbol.
    #[serde(default)]
    pub names: Vec<String>,
}

/// Everything one `generate` invocation needs.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Type graph file produced by the resolver.
    pub graph: PathBuf,
    /// Directory receiving one `<module>.ts` file per output module.
    pub output_dir: PathBuf,
    #[serde(default)]
    pub include_unexported: bool,
    /// Output type used where no structural mapping applies.
    #[serde(default = "default_fallback")]
    pub fallback_type: String,
    /// Qualified symbol name (or scalar width name) to replacement text.
    #[serde(default)]
    pub type_mappings: IndexMap<String, String>,
    pub primary_unit: UnitSelection,
    #[serde(default)]
    pub secondary_units: Vec<UnitSelection>,
    /// Render worker limit; 0 means one worker per core.
    #[serde(default)]
    pub render_limit: usize,
}

fn default_fallback() -> String {
    "any".to_string()
}

impl FileConfig {
    /// Read and parse a config file; `-` reads standard input.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = read_input(path)?;
        serde_json::from_str(&text).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The engine-level configuration this file describes.
    pub fn engine_config(&self) -> typeshift_lib::Config {
        typeshift_lib::Config::new()
            .fallback(&self.fallback_type)
            .include_unexported(self.include_unexported)
            .overrides(self.type_mappings.clone())
    }

    /// The config written by `typeshift init`.
    pub fn starter() -> Self {
        Self {
            graph: PathBuf::from("graph.json"),
            output_dir: PathBuf::from("types"),
            include_unexported: false,
            fallback_type: default_fallback(),
            type_mappings: IndexMap::new(),
            primary_unit: UnitSelection {
                path: "example.com/app".to_string(),
                names: Vec::new(),
            },
            secondary_units: Vec::new(),
            render_limit: 0,
        }
    }
}

/// Read a whole file, with `-` meaning standard input.
pub fn read_input(path: &Path) -> Result<String, CliError> {
    let read = || {
        if path.as_os_str() == "-" {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        } else {
            fs::read_to_string(path)
        }
    };
    read().map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}
