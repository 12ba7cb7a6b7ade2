use std::path::PathBuf;

use super::CliError;
use super::config::FileConfig;

#[test]
fn minimal_config_fills_defaults() {
    let cfg: FileConfig = serde_json::from_str(
        r#"{
            "graph": "graph.json",
            "output_dir": "types",
            "primary_unit": { "path": "example.com/app" }
        }"#,
    )
    .unwrap();

    assert_eq!(cfg.graph, PathBuf::from("graph.json"));
    assert!(!cfg.include_unexported);
    assert_eq!(cfg.fallback_type, "any");
    assert!(cfg.type_mappings.is_empty());
    assert!(cfg.primary_unit.names.is_empty());
    assert!(cfg.secondary_units.is_empty());
    assert_eq!(cfg.render_limit, 0);
}

#[test]
fn full_config_round_trips() {
    let text = r#"{
        "graph": "out/graph.json",
        "output_dir": "web/src/types",
        "include_unexported": true,
        "fallback_type": "unknown",
        "type_mappings": { "time.Time": "string", "int64": "bigint" },
        "primary_unit": { "path": "example.com/app", "names": ["User"] },
        "secondary_units": [{ "path": "example.com/colors" }],
        "render_limit": 4
    }"#;
    let cfg: FileConfig = serde_json::from_str(text).unwrap();

    assert_eq!(cfg.fallback_type, "unknown");
    assert_eq!(cfg.type_mappings.get("int64").unwrap(), "bigint");
    assert_eq!(cfg.primary_unit.names, ["User"]);
    assert_eq!(cfg.secondary_units[0].path, "example.com/colors");
    assert_eq!(cfg.render_limit, 4);

    let again: FileConfig =
        serde_json::from_str(&serde_json::to_string(&cfg).unwrap()).unwrap();
    assert_eq!(again.type_mappings, cfg.type_mappings);
}

#[test]
fn unknown_fields_are_rejected() {
    let result = serde_json::from_str::<FileConfig>(
        r#"{
            "graph": "graph.json",
            "output_dir": "types",
            "primary_unit": { "path": "example.com/app" },
            "outpt_dir": "typo"
        }"#,
    );
    assert!(result.is_err());
}

#[test]
fn starter_config_parses_back() {
    let text = serde_json::to_string_pretty(&FileConfig::starter()).unwrap();
    let cfg: FileConfig = serde_json::from_str(&text).unwrap();
    assert_eq!(cfg.primary_unit.path, "example.com/app");
}

#[test]
fn load_reports_missing_file() {
    let err = FileConfig::load(std::path::Path::new("/no/such/typeshift.json")).unwrap_err();
    assert!(matches!(err, CliError::Read { .. }));
}
