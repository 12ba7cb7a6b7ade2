use std::fs;
use std::path::PathBuf;

use tracing::info;
use typeshift_core::registry::Registry;
use typeshift_lib::Transpiler;

use super::CliError;
use super::config::{FileConfig, read_input};

pub struct GenerateArgs {
    pub config_path: PathBuf,
    pub output_dir: Option<PathBuf>,
}

pub fn run(args: GenerateArgs) {
    if let Err(e) = execute(&args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

pub fn execute(args: &GenerateArgs) -> Result<(), CliError> {
    let config = FileConfig::load(&args.config_path)?;
    let output_dir = args.output_dir.as_ref().unwrap_or(&config.output_dir);

    let graph_text = read_input(&config.graph)?;
    let registry = Registry::from_json(&graph_text).map_err(|source| CliError::Graph {
        path: config.graph.clone(),
        source,
    })?;

    let mut transpiler = Transpiler::new(
        &registry,
        &config.primary_unit.path,
        config.engine_config(),
    )?;
    transpiler.transpile_unit(&config.primary_unit.path, &config.primary_unit.names)?;
    for unit in &config.secondary_units {
        transpiler.transpile_unit(&unit.path, &unit.names)?;
    }
    let modules = transpiler.finish();

    fs::create_dir_all(output_dir).map_err(|source| CliError::Write {
        path: output_dir.clone(),
        source,
    })?;
    modules.render_all(config.render_limit, |name, data| {
        fs::write(output_dir.join(format!("{name}.ts")), data)
    })?;

    info!(
        modules = modules.len(),
        dir = %output_dir.display(),
        "generated output"
    );
    Ok(())
}
