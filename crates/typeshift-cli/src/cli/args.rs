//! Shared argument builders for CLI commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Configuration file (positional).
pub fn config_path_arg() -> Arg {
    Arg::new("config_path")
        .value_name("CONFIG")
        .default_value("typeshift.json")
        .value_parser(value_parser!(PathBuf))
        .help("Configuration file (\"-\" means standard input/output)")
}

/// Output directory override (-o/--output-dir).
pub fn output_dir_arg() -> Arg {
    Arg::new("output_dir")
        .short('o')
        .long("output-dir")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .help("Write modules here instead of the configured output_dir")
}

/// Overwrite an existing file (-f/--force).
pub fn force_arg() -> Arg {
    Arg::new("force")
        .short('f')
        .long("force")
        .action(ArgAction::SetTrue)
        .help("Overwrite an existing configuration file")
}
