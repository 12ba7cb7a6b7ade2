//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{generate_command, init_command};

#[test]
fn generate_defaults_to_conventional_config_name() {
    let m = generate_command()
        .try_get_matches_from(["generate"])
        .unwrap();
    let params = GenerateParams::from_matches(&m);
    assert_eq!(params.config_path, PathBuf::from("typeshift.json"));
    assert_eq!(params.output_dir, None);
}

#[test]
fn generate_accepts_explicit_config_path() {
    let m = generate_command()
        .try_get_matches_from(["generate", "api.json"])
        .unwrap();
    let params = GenerateParams::from_matches(&m);
    assert_eq!(params.config_path, PathBuf::from("api.json"));
}

#[test]
fn generate_accepts_output_dir_override() {
    let m = generate_command()
        .try_get_matches_from(["generate", "-o", "build/types"])
        .unwrap();
    let params = GenerateParams::from_matches(&m);
    assert_eq!(params.output_dir, Some(PathBuf::from("build/types")));
}

#[test]
fn generate_rejects_extra_positionals() {
    let result = generate_command().try_get_matches_from(["generate", "a.json", "b.json"]);
    assert!(result.is_err());
}

#[test]
fn init_force_flag_defaults_off() {
    let m = init_command().try_get_matches_from(["init"]).unwrap();
    let params = InitParams::from_matches(&m);
    assert_eq!(params.config_path, PathBuf::from("typeshift.json"));
    assert!(!params.force);
}

#[test]
fn init_accepts_force_flag() {
    let m = init_command()
        .try_get_matches_from(["init", "api.json", "--force"])
        .unwrap();
    let params = InitParams::from_matches(&m);
    assert_eq!(params.config_path, PathBuf::from("api.json"));
    assert!(params.force);
}

#[test]
fn version_subcommand_parses() {
    let m = build_cli()
        .try_get_matches_from(["typeshift", "version"])
        .unwrap();
    assert_eq!(m.subcommand_name(), Some("version"));
}

#[test]
fn top_level_requires_a_subcommand() {
    let result = build_cli().try_get_matches_from(["typeshift"]);
    assert!(result.is_err());
}
