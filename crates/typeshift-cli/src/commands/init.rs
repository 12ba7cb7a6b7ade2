use std::fs;
use std::path::PathBuf;

use super::CliError;
use super::config::FileConfig;

pub struct InitArgs {
    pub config_path: PathBuf,
    pub force: bool,
}

pub fn run(args: InitArgs) {
    if let Err(e) = execute(&args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

pub fn execute(args: &InitArgs) -> Result<(), CliError> {
    let mut text = serde_json::to_string_pretty(&FileConfig::starter())
        .map_err(|source| CliError::Config {
            path: args.config_path.clone(),
            source,
        })?;
    text.push('\n');

    if args.config_path.as_os_str() == "-" {
        print!("{}", text);
        return Ok(());
    }
    if args.config_path.exists() && !args.force {
        return Err(CliError::Exists {
            path: args.config_path.clone(),
        });
    }
    fs::write(&args.config_path, text).map_err(|source| CliError::Write {
        path: args.config_path.clone(),
        source,
    })
}
