use super::*;

#[test]
fn material_lookup_ignores_knob_symbols() {
    let mut t = SymbolTable::new();
    t.insert("k", Symbol::Knob { value: 1.0 });
    t.insert("shiny", Symbol::Constants(Material::NEUTRAL));
    assert!(t.material("k").is_none());
    assert_eq!(t.material("shiny"), Some(&Material::NEUTRAL));
    assert!(t.material("missing").is_none());
    assert_eq!(t.len(), 2);
}

#[test]
fn default_material_does_not_override_script_definition() {
    let custom = Material {
        red: [1.0, 0.0, 0.0],
        green: [0.0, 0.0, 0.0],
        blue: [0.0, 0.0, 0.0],
    };
    let mut t = SymbolTable::new();
    t.insert(".white", Symbol::Constants(custom));

    let with = t.with_default_material(".white");
    assert_eq!(with.material(".white"), Some(&custom));

    let empty = SymbolTable::new().with_default_material(".white");
    assert_eq!(empty.material(".white"), Some(&Material::NEUTRAL));
}

#[test]
fn reflectance_vectors_follow_channel_layout() {
    let m = Material {
        red: [0.1, 0.4, 0.7],
        green: [0.2, 0.5, 0.8],
        blue: [0.3, 0.6, 0.9],
    };
    assert_eq!(m.ambient(), DVec3::new(0.1, 0.2, 0.3));
    assert_eq!(m.diffuse(), DVec3::new(0.4, 0.5, 0.6));
}

#[test]
fn table_deserializes_from_parser_json() {
    let t: SymbolTable = serde_json::from_str(
        r#"{
            "shiny": {"kind": "constants", "red": [0.3, 0.8, 0.2], "green": [0.3, 0.8, 0.2], "blue": [0.3, 0.8, 0.2]},
            "spin": {"kind": "knob", "value": 0.0}
        }"#,
    )
    .unwrap();
    assert!(t.material("shiny").is_some());
    assert_eq!(t.get("spin"), Some(&Symbol::Knob { value: 0.0 }));
}
