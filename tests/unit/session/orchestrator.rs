use super::*;
use crate::{
    foundation::core::{Canvas, DVec3},
    output::sink::{InMemoryAssembler, InMemoryImageSink, RecordingDisplay},
    render::backend::{DrawCall, RecordingBackend},
    script::dsl::ScriptBuilder,
};

#[derive(Default)]
struct Collaborators {
    display: RecordingDisplay,
    images: InMemoryImageSink,
    assembler: InMemoryAssembler,
    backend: RecordingBackend,
}

impl Collaborators {
    fn run(&mut self, script: &Script, cfg: &RunConfig) -> LoomResult<RunReport> {
        let mut outputs = Outputs {
            display: &mut self.display,
            images: &mut self.images,
            assembler: &mut self.assembler,
        };
        run_script(script, cfg, &mut self.backend, &mut outputs)
    }

    fn box_offsets(&self) -> Vec<f64> {
        self.backend
            .calls()
            .iter()
            .filter_map(|c| match c {
                DrawCall::Polygons { mesh, .. } => Some(
                    mesh.triangles()
                        .iter()
                        .flatten()
                        .fold(DVec3::splat(f64::INFINITY), |acc, p| acc.min(*p))
                        .x,
                ),
                DrawCall::Lines { .. } => None,
            })
            .collect()
    }
}

fn small_cfg() -> RunConfig {
    let mut cfg = RunConfig::default();
    cfg.scene.canvas = Canvas::new(16, 16).unwrap();
    cfg.scene.tessellation_steps = 6;
    cfg
}

#[test]
fn two_frame_animation_end_to_end() {
    let script = ScriptBuilder::new()
        .frames(2)
        .basename("x")
        .vary("k", 0, 1, 0.0, 1.0)
        .translate([10.0, 0.0, 0.0], Some("k"))
        .cuboid([0.0, 0.0, 0.0], [1.0, 1.0, 1.0], None)
        .save("still.png")
        .build();
    let cfg = small_cfg();

    let mut c = Collaborators::default();
    let report = c.run(&script, &cfg).unwrap();

    assert_eq!(c.box_offsets(), vec![10.0, 0.0]);
    assert_eq!(report.frames_rendered, 2);
    assert_eq!(
        report.frame_files,
        vec![PathBuf::from("anim/x100.png"), PathBuf::from("anim/x101.png")]
    );

    let saved: Vec<&PathBuf> = c.images.saved().iter().map(|(p, _)| p).collect();
    assert_eq!(
        saved,
        vec![
            &PathBuf::from("still.png"),
            &PathBuf::from("anim/x100.png"),
            &PathBuf::from("still.png"),
            &PathBuf::from("anim/x101.png"),
        ]
    );

    assert_eq!(c.assembler.requests().len(), 1);
    let seq = &c.assembler.requests()[0];
    assert_eq!(seq.basename, "x");
    assert_eq!(seq.first_number, 100);
    assert_eq!(seq.count, 2);
    assert_eq!(report.assembled, Some(PathBuf::from("x")));
    assert!(!report.meta.basename_defaulted);
}

#[test]
fn vary_without_frames_produces_no_output() {
    let script = ScriptBuilder::new()
        .vary("k", 0, 1, 0.0, 1.0)
        .cuboid([0.0; 3], [1.0; 3], None)
        .save("still.png")
        .display()
        .build();

    let mut c = Collaborators::default();
    let err = c.run(&script, &small_cfg()).unwrap_err();
    assert!(matches!(err, LoomError::Animation(_)));
    assert!(c.backend.calls().is_empty());
    assert!(c.images.saved().is_empty());
    assert!(c.display.frames().is_empty());
    assert!(c.assembler.requests().is_empty());
}

#[test]
fn out_of_range_vary_fails_before_rendering() {
    let script = ScriptBuilder::new()
        .frames(3)
        .vary("k", 0, 5, 0.0, 1.0)
        .cuboid([0.0; 3], [1.0; 3], None)
        .build();

    let mut c = Collaborators::default();
    assert!(c.run(&script, &small_cfg()).is_err());
    assert!(c.backend.calls().is_empty());
    assert!(c.images.saved().is_empty());
}

#[test]
fn unknown_material_fails_before_rendering() {
    let script = ScriptBuilder::new()
        .frames(2)
        .cuboid([0.0; 3], [1.0; 3], Some("missing"))
        .build();

    let mut c = Collaborators::default();
    let err = c.run(&script, &small_cfg()).unwrap_err();
    assert!(matches!(err, LoomError::Validation(_)));
    assert!(c.images.saved().is_empty());
}

#[test]
fn still_render_persists_nothing_implicitly() {
    let script = ScriptBuilder::new()
        .cuboid([0.0; 3], [1.0; 3], None)
        .display()
        .build();

    let mut c = Collaborators::default();
    let report = c.run(&script, &small_cfg()).unwrap();
    assert_eq!(report.frames_rendered, 1);
    assert!(report.frame_files.is_empty());
    assert_eq!(report.assembled, None);
    assert!(c.images.saved().is_empty());
    assert!(c.assembler.requests().is_empty());
    assert_eq!(c.display.frames().len(), 1);
}

#[test]
fn missing_basename_uses_configured_default() {
    let script = ScriptBuilder::new().frames(2).build();
    let mut cfg = small_cfg();
    cfg.output.frames_dir = PathBuf::from("out");
    cfg.output.frame_number_offset = 7;

    let mut c = Collaborators::default();
    let report = c.run(&script, &cfg).unwrap();
    assert!(report.meta.basename_defaulted);
    assert_eq!(
        report.frame_files,
        vec![
            PathBuf::from("out/frame_name7.png"),
            PathBuf::from("out/frame_name8.png")
        ]
    );
}

#[test]
fn single_frame_uses_that_frames_knobs() {
    let script = ScriptBuilder::new()
        .frames(3)
        .vary("k", 0, 2, 0.0, 1.0)
        .translate([8.0, 0.0, 0.0], Some("k"))
        .cuboid([0.0; 3], [1.0; 3], None)
        .build();
    let cfg = small_cfg();

    let mut c = Collaborators::default();
    let mut outputs = Outputs {
        display: &mut c.display,
        images: &mut c.images,
        assembler: &mut c.assembler,
    };
    render_single_frame(&script, &cfg, FrameIndex(1), &mut c.backend, &mut outputs).unwrap();
    let err = render_single_frame(&script, &cfg, FrameIndex(3), &mut c.backend, &mut outputs)
        .unwrap_err();
    assert!(matches!(err, LoomError::Validation(_)));

    assert_eq!(c.box_offsets(), vec![4.0]);
    assert!(c.images.saved().is_empty());
}

#[test]
fn plan_exposes_knob_table() {
    let script = ScriptBuilder::new()
        .frames(5)
        .vary("k", 1, 3, 2.0, 4.0)
        .build();
    let plan = AnimationPlan::resolve(&script, &RunConfig::default()).unwrap();
    assert_eq!(plan.meta.frame_count, 5);
    assert_eq!(plan.knobs.frame(FrameIndex(0)).unwrap().get("k"), None);
    assert_eq!(plan.knobs.frame(FrameIndex(2)).unwrap().get("k"), Some(3.0));
    assert_eq!(plan.knobs.frame(FrameIndex(3)).unwrap().get("k"), Some(4.0));
}

#[test]
fn progress_bar_is_fixed_width() {
    assert_eq!(progress_bar(0, 4), format!("[{}]", "-".repeat(50)));
    assert_eq!(progress_bar(4, 4), format!("[{}]", "*".repeat(50)));
    let half = progress_bar(1, 2);
    assert_eq!(half.len(), 52);
    assert_eq!(half.matches('*').count(), 25);
}

#[test]
fn overflowing_frame_numbers_fail_before_rendering() {
    let script = ScriptBuilder::new()
        .frames(3)
        .cuboid([0.0; 3], [1.0; 3], None)
        .build();
    let mut cfg = small_cfg();
    cfg.output.frame_number_offset = u64::MAX - 1;

    let mut c = Collaborators::default();
    let err = c.run(&script, &cfg).unwrap_err();
    assert!(matches!(err, LoomError::Validation(_)));
    assert!(c.backend.calls().is_empty());
    assert!(c.images.saved().is_empty());
}
