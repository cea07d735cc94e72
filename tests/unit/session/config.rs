use super::*;

#[test]
fn defaults_match_documented_values() {
    let cfg = RunConfig::default();
    assert_eq!(cfg.scene.canvas, Canvas::new(500, 500).unwrap());
    assert_eq!(cfg.scene.default_material, ".white");
    assert_eq!(cfg.scene.tessellation_steps, 100);
    assert_eq!(cfg.output.default_basename, "frame_name");
    assert_eq!(cfg.output.frames_dir, PathBuf::from("anim"));
    assert_eq!(cfg.output.frame_number_offset, 100);
    cfg.validate().unwrap();
}

#[test]
fn partial_json_fills_defaults() {
    let cfg: RunConfig = serde_json::from_str(
        r#"{"scene": {"canvas": {"width": 64, "height": 32}}, "output": {"extension": "bmp"}}"#,
    )
    .unwrap();
    assert_eq!(cfg.scene.canvas.width, 64);
    assert_eq!(cfg.scene.line_color, Rgb8::WHITE);
    assert_eq!(cfg.output.extension, "bmp");
    assert_eq!(cfg.output.default_basename, "frame_name");
}

#[test]
fn validate_rejects_degenerate_values() {
    let mut cfg = RunConfig::default();
    cfg.scene.tessellation_steps = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = RunConfig::default();
    cfg.scene.canvas.width = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = RunConfig::default();
    cfg.output.default_basename.clear();
    assert!(cfg.validate().is_err());
}

#[test]
fn from_json_file_reports_missing_file() {
    let err = RunConfig::from_json_file(Path::new("target/does-not-exist.json")).unwrap_err();
    assert!(matches!(err, LoomError::Other(_)));
}
