use super::*;

#[test]
fn deserializes_tagged_commands() {
    let cmds: Vec<Command> = serde_json::from_str(
        r#"[
            {"op": "frames", "count": 10},
            {"op": "move", "offset": [1, 2, 3], "knob": "k"},
            {"op": "rotate", "axis": "y", "degrees": 90},
            {"op": "box", "corner": [0, 0, 0], "size": [1, 1, 1], "constants": "shiny"},
            {"op": "vary", "knob": "k", "start_frame": 0, "end_frame": 9, "start_value": 0, "end_value": 1},
            {"op": "save", "path": "out.png"}
        ]"#,
    )
    .unwrap();

    assert_eq!(cmds[0], Command::Frames { count: 10 });
    assert_eq!(cmds[1].knob(), Some("k"));
    assert_eq!(
        cmds[2],
        Command::Rotate {
            axis: Axis::Y,
            degrees: 90.0,
            knob: None
        }
    );
    assert_eq!(cmds[3].material_override(), Some("shiny"));
    assert_eq!(cmds[4].op_name(), "vary");
    assert_eq!(
        cmds[5],
        Command::Save {
            path: PathBuf::from("out.png")
        }
    );
}

#[test]
fn unknown_ops_deserialize_as_unknown() {
    let cmds: Vec<Command> = serde_json::from_str(
        r#"[{"op": "light", "color": [1, 2, 3]}, {"op": "shading"}, {"op": "push"}]"#,
    )
    .unwrap();
    assert_eq!(cmds, vec![Command::Unknown, Command::Unknown, Command::Push]);
}

#[test]
fn knob_and_material_only_on_relevant_ops() {
    let line = Command::Line {
        from: [0.0; 3],
        to: [1.0; 3],
    };
    assert_eq!(line.knob(), None);
    assert_eq!(line.material_override(), None);

    let sphere = Command::Sphere {
        center: [0.0; 3],
        radius: 1.0,
        constants: None,
    };
    assert_eq!(sphere.material_override(), None);
    assert_eq!(sphere.op_name(), "sphere");
}

#[test]
fn serialized_op_tag_matches_op_name() {
    let cmd = Command::Scale {
        factors: [2.0, 2.0, 2.0],
        knob: Some("grow".to_string()),
    };
    let v = serde_json::to_value(&cmd).unwrap();
    assert_eq!(v["op"], cmd.op_name());
    assert_eq!(v["knob"], "grow");
}
