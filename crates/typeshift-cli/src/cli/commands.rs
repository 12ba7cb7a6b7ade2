//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("typeshift")
        .about("Transpile resolved type graphs to TypeScript modules")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(init_command())
        .subcommand(version_command())
}

/// Generate TypeScript modules from a type graph.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Generate TypeScript modules from a type graph")
        .override_usage(
            "\
  typeshift generate [CONFIG]
  typeshift generate [CONFIG] -o <DIR>",
        )
        .after_help(
            r#"EXAMPLES:
  typeshift generate                      # read typeshift.json
  typeshift generate api.json             # alternative config
  typeshift generate - < typeshift.json   # config from stdin
  typeshift generate -o build/types       # override output directory"#,
        )
        .arg(config_path_arg())
        .arg(output_dir_arg())
}

/// Write a starter configuration file.
pub fn init_command() -> Command {
    Command::new("init")
        .about("Write a starter configuration file")
        .override_usage(
            "\
  typeshift init [CONFIG]
  typeshift init [CONFIG] --force",
        )
        .after_help(
            r#"EXAMPLES:
  typeshift init                # create typeshift.json
  typeshift init api.json       # create under another name
  typeshift init -              # print the starter config to stdout"#,
        )
        .arg(config_path_arg())
        .arg(force_arg())
}

/// Print the tool version.
pub fn version_command() -> Command {
    Command::new("version").about("Print the tool version")
}
