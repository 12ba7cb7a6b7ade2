mod cli;
mod commands;

use cli::{GenerateParams, InitParams, build_cli};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("generate", m)) => {
            let params = GenerateParams::from_matches(m);
            commands::generate::run(params.into());
        }
        Some(("init", m)) => {
            let params = InitParams::from_matches(m);
            commands::init::run(params.into());
        }
        Some(("version", _)) => commands::version::run(),
        _ => unreachable!("clap should have caught this"),
    }
}
