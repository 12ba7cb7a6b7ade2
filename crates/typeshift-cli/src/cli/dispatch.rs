//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror command `*Args` but are populated from clap;
//! `from_matches()` extractors pull the relevant fields and `Into<*Args>`
//! impls bridge dispatch to the command handlers.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::generate::GenerateArgs;
use crate::commands::init::InitArgs;

pub struct GenerateParams {
    pub config_path: PathBuf,
    pub output_dir: Option<PathBuf>,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            config_path: m
                .get_one::<PathBuf>("config_path")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("typeshift.json")),
            output_dir: m.get_one::<PathBuf>("output_dir").cloned(),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            config_path: p.config_path,
            output_dir: p.output_dir,
        }
    }
}

pub struct InitParams {
    pub config_path: PathBuf,
    pub force: bool,
}

impl InitParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            config_path: m
                .get_one::<PathBuf>("config_path")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("typeshift.json")),
            force: m.get_flag("force"),
        }
    }
}

impl From<InitParams> for InitArgs {
    fn from(p: InitParams) -> Self {
        Self {
            config_path: p.config_path,
            force: p.force,
        }
    }
}
