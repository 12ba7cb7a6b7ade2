use typeshift_core::{Literal, TypeExpr};

use crate::test_utils::{
    constant, field, index_def, int, named, private_ty, registry, string, strukt, transpile, ty,
    typed_constant, unit,
};
use crate::{Config, Error, Transpiler};

#[test]
fn self_referential_struct_terminates() {
    let reg = registry(vec![unit(
        "example.com/app",
        "app",
        vec![ty(
            "Pair",
            strukt(vec![
                field("A", int()),
                field("B", TypeExpr::pointer(named("example.com/app", "Pair"))),
            ]),
        )],
    )]);
    let graph = transpile(&reg, "example.com/app", Config::new());

    assert_eq!(graph.index().unwrap().defs.len(), 1);
    assert_eq!(
        index_def(&graph, "Pair"),
        r#"export interface Pair { "A": number /* int */; "B": Pair | null; }"#
    );
}

#[test]
fn mutually_referential_units_import_each_other_once() {
    let reg = registry(vec![
        unit(
            "example.com/app",
            "app",
            vec![ty(
                "A",
                strukt(vec![field(
                    "B",
                    TypeExpr::pointer(named("example.com/other", "B")),
                )]),
            )],
        ),
        unit(
            "example.com/other",
            "other",
            vec![ty(
                "B",
                strukt(vec![field(
                    "A",
                    TypeExpr::pointer(named("example.com/app", "A")),
                )]),
            )],
        ),
    ]);
    let graph = transpile(&reg, "example.com/app", Config::new());

    let index = graph.index().unwrap();
    let other = graph.get("other").unwrap();

    assert_eq!(
        index.defs.get("A").unwrap(),
        r#"export interface A { "B": other.B | null; }"#
    );
    assert_eq!(
        other.defs.get("B").unwrap(),
        r#"export interface B { "A": index.A | null; }"#
    );
    assert_eq!(index.imports.len(), 1);
    assert!(index.imports.contains("other"));
    assert_eq!(other.imports.len(), 1);
    assert!(other.imports.contains("index"));
}

#[test]
fn referencing_a_named_type_pulls_its_constant_group() {
    let reg = registry(vec![
        unit(
            "example.com/app",
            "app",
            vec![ty(
                "Shirt",
                strukt(vec![field("Color", named("example.com/colors", "Color"))]),
            )],
        ),
        unit(
            "example.com/colors",
            "colors",
            vec![
                ty("Color", string()),
                typed_constant(
                    "Red",
                    Literal::Str("red".to_string()),
                    "example.com/colors",
                    "Color",
                ),
                typed_constant(
                    "Green",
                    Literal::Str("green".to_string()),
                    "example.com/colors",
                    "Color",
                ),
                constant("Unrelated", Literal::Bool(true)),
            ],
        ),
    ]);
    let graph = transpile(&reg, "example.com/app", Config::new());

    assert_eq!(
        index_def(&graph, "Shirt"),
        r#"export interface Shirt { "Color": colors.Color; }"#
    );

    let colors = graph.get("colors").unwrap();
    assert!(colors.defs.contains_key("Color"));
    assert_eq!(
        colors.defs.get("Red").unwrap(),
        r#"export const Red: Color = "red""#
    );
    assert!(colors.defs.contains_key("Green"));
    // Only the group travels, not the whole unit.
    assert!(!colors.defs.contains_key("Unrelated"));
}

#[test]
fn definitions_appear_in_first_trigger_order() {
    let reg = registry(vec![unit(
        "example.com/app",
        "app",
        vec![
            ty("Alpha", string()),
            ty(
                "Zeta",
                strukt(vec![field("A", named("example.com/app", "Alpha"))]),
            ),
        ],
    )]);

    let mut t = Transpiler::new(&reg, "example.com/app", Config::new()).unwrap();
    t.transpile_unit("example.com/app", &["Zeta".to_string()])
        .unwrap();
    let graph = t.finish();

    let names: Vec<_> = graph.index().unwrap().defs.keys().cloned().collect();
    assert_eq!(names, ["Zeta", "Alpha"]);
}

#[test]
fn explicit_name_set_overrides_visibility() {
    let reg = registry(vec![unit(
        "example.com/app",
        "app",
        vec![
            private_ty("hidden", string()),
            ty("Visible", int()),
        ],
    )]);

    let mut t = Transpiler::new(&reg, "example.com/app", Config::new()).unwrap();
    t.transpile_unit("example.com/app", &["hidden".to_string()])
        .unwrap();
    let graph = t.finish();

    let index = graph.index().unwrap();
    assert!(index.defs.contains_key("hidden"));
    assert!(!index.defs.contains_key("Visible"));
}

#[test]
fn include_unexported_flag_widens_emission() {
    let symbols = vec![private_ty("hidden", string()), ty("Visible", int())];
    let reg = registry(vec![unit("example.com/app", "app", symbols)]);

    let graph = transpile(&reg, "example.com/app", Config::new());
    assert!(!graph.index().unwrap().defs.contains_key("hidden"));

    let graph = transpile(
        &reg,
        "example.com/app",
        Config::new().include_unexported(true),
    );
    let index = graph.index().unwrap();
    assert!(index.defs.contains_key("hidden"));
    assert!(index.defs.contains_key("Visible"));
}

#[test]
fn unknown_unit_reference_degrades_inline() {
    let reg = registry(vec![unit(
        "example.com/app",
        "app",
        vec![ty(
            "Holder",
            strukt(vec![field("X", named("example.com/nope", "Mystery"))]),
        )],
    )]);
    let graph = transpile(&reg, "example.com/app", Config::new());

    assert_eq!(
        index_def(&graph, "Holder"),
        r#"export interface Holder { "X": any /* Mystery */; }"#
    );
    // No module and no import edge for a unit nobody can name.
    assert_eq!(graph.len(), 1);
}

#[test]
fn failed_unit_reference_degrades_to_fallback_alias() {
    let mut reg = registry(vec![unit(
        "example.com/app",
        "app",
        vec![ty(
            "Holder",
            strukt(vec![field("X", named("example.com/broken", "Mystery"))]),
        )],
    )]);
    reg.insert_failure("example.com/broken", "syntax error");
    let graph = transpile(&reg, "example.com/app", Config::new());

    assert_eq!(
        index_def(&graph, "Holder"),
        r#"export interface Holder { "X": broken.Mystery; }"#
    );
    let broken = graph.get("broken").unwrap();
    assert_eq!(
        broken.defs.get("Mystery").unwrap(),
        "export type Mystery = any"
    );
    assert!(graph.index().unwrap().imports.contains("broken"));
}

#[test]
fn broken_primary_unit_is_fatal() {
    let mut reg = registry(vec![]);
    reg.insert_failure("example.com/app", "does not compile");

    let err = Transpiler::new(&reg, "example.com/app", Config::new()).unwrap_err();
    assert!(matches!(err, Error::Load(_)));
}

#[test]
fn override_replaces_definition_body() {
    let reg = registry(vec![
        unit(
            "example.com/app",
            "app",
            vec![
                ty("Time", strukt(vec![field("Secs", int())])),
                ty(
                    "Event",
                    strukt(vec![field("At", named("example.com/app", "Time"))]),
                ),
            ],
        ),
    ]);
    let config = Config::new().override_type("Time", "string");
    let graph = transpile(&reg, "example.com/app", config);

    assert_eq!(index_def(&graph, "Time"), "export type Time = string");
    assert_eq!(
        index_def(&graph, "Event"),
        r#"export interface Event { "At": Time; }"#
    );
}

#[test]
fn foreign_override_uses_qualified_key() {
    let reg = registry(vec![
        unit(
            "example.com/app",
            "app",
            vec![ty(
                "Event",
                strukt(vec![field("At", named("example.com/when", "Time"))]),
            )],
        ),
        unit(
            "example.com/when",
            "when",
            vec![ty("Time", strukt(vec![field("Secs", int())]))],
        ),
    ]);
    let config = Config::new().override_type("example.com/when.Time", "string");
    let graph = transpile(&reg, "example.com/app", config);

    assert_eq!(
        graph.get("when").unwrap().defs.get("Time").unwrap(),
        "export type Time = string"
    );
}

#[test]
fn repeated_runs_render_identical_bytes() {
    let build = || {
        registry(vec![
            unit(
                "example.com/app",
                "app",
                vec![
                    ty(
                        "A",
                        strukt(vec![field("C", named("example.com/colors", "Color"))]),
                    ),
                    constant("N", Literal::Int(7.into())),
                ],
            ),
            unit(
                "example.com/colors",
                "colors",
                vec![ty("Color", string())],
            ),
        ])
    };

    let render = |reg: &typeshift_core::registry::Registry| {
        let graph = transpile(reg, "example.com/app", Config::new());
        graph
            .iter()
            .map(|(name, module)| (name.to_string(), module.render()))
            .collect::<Vec<_>>()
    };

    let first = build();
    let second = build();
    assert_eq!(render(&first), render(&second));
}
