use super::*;
use crate::script::dsl::ScriptBuilder;
use crate::script::symbols::Material;

#[test]
fn validate_accepts_known_and_default_materials() {
    let script = ScriptBuilder::new()
        .material("shiny", Material::NEUTRAL)
        .unwrap()
        .cuboid([0.0; 3], [1.0; 3], Some("shiny"))
        .sphere([0.0; 3], 1.0, Some(".white"))
        .torus([0.0; 3], 1.0, 3.0, None)
        .build();
    script.validate(".white").unwrap();
}

#[test]
fn validate_rejects_unknown_material() {
    let script = ScriptBuilder::new()
        .cuboid([0.0; 3], [1.0; 3], Some("chrome"))
        .build();
    let err = script.validate(".white").unwrap_err();
    assert!(matches!(err, LoomError::Validation(_)));
    assert!(err.to_string().contains("chrome"));
}

#[test]
fn from_json_str_reads_commands_and_symbols() {
    let script = Script::from_json_str(
        r#"{
            "commands": [{"op": "push"}, {"op": "sphere", "center": [0, 0, 0], "radius": 5}],
            "symbols": {}
        }"#,
    )
    .unwrap();
    assert_eq!(script.commands.len(), 2);
    assert!(script.symbols.is_empty());
}

#[test]
fn from_json_str_defaults_missing_symbols() {
    let script = Script::from_json_str(r#"{"commands": []}"#).unwrap();
    assert!(script.symbols.is_empty());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = Script::from_json_str("{").unwrap_err();
    assert!(matches!(err, LoomError::Serde(_)));
}
