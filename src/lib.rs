//! sceneloom interprets scene-command scripts into still images and frame-sequence animations.
//!
//! A [`Script`] is an ordered command list plus a symbol table, produced by an external parser and
//! loaded from JSON. Running it goes through three stages:
//!
//! - [`resolve_meta`] and [`build_knob_table`] compute the frame count, output basename, and
//!   per-frame knob values once, up front.
//! - A [`CommandInterpreter`] replays the whole command list for each frame against a fresh
//!   [`TransformStack`], modulating transforms by that frame's knobs and forwarding geometry to a
//!   [`RenderBackend`].
//! - [`run_script`] drives the frame loop, names and persists frames, and hands the finished
//!   sequence to an [`AnimationAssembler`].
//!
//! Rendering and output collaborators sit behind traits; the crate ships a CPU rasterizer, an
//! `image`-backed file sink, an external-viewer display, and an `ffmpeg` assembler.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod geometry;
pub(crate) mod interpret;
/// Output sinks and the built-in display, image, and assembly implementations.
pub mod output;
pub(crate) mod render;
pub(crate) mod script;
pub(crate) mod session;
pub(crate) mod transform;

pub use crate::foundation::core::{Canvas, DMat4, DVec3, FrameIndex, Rgb8};
pub use crate::foundation::error::{LoomError, LoomResult};

pub use crate::animation::knobs::{
    AnimationMeta, FrameKnobs, KnobTable, build_knob_table, resolve_meta,
};
pub use crate::geometry::mesh::{EdgeList, PolygonMesh};
pub use crate::interpret::interpreter::{
    CommandInterpreter, modulate_component, move_transform, rotate_transform, scale_transform,
};
pub use crate::output::display::ExternalDisplay;
pub use crate::output::ffmpeg::{FfmpegAssembler, FfmpegAssemblerOpts, is_ffmpeg_on_path};
pub use crate::output::image_file::{ImageFileSink, write_image};
pub use crate::output::sink::{
    AnimationAssembler, DisplaySink, FrameSequence, ImageSink, InMemoryAssembler,
    InMemoryImageSink, NullDisplay, Outputs, RecordingDisplay,
};
pub use crate::render::backend::{
    BackendKind, DrawCall, RecordingBackend, RenderBackend, create_backend,
};
pub use crate::render::cpu::CpuBackend;
pub use crate::render::framebuffer::{DepthBuffer, Framebuffer, RenderTarget};
pub use crate::render::lighting::Lighting;
pub use crate::script::Script;
pub use crate::script::command::{Axis, Command, VarySpec};
pub use crate::script::dsl::ScriptBuilder;
pub use crate::script::symbols::{Material, Symbol, SymbolTable};
pub use crate::session::config::{OutputConfig, RunConfig, SceneConfig};
pub use crate::session::orchestrator::{
    AnimationPlan, RunReport, progress_bar, render_single_frame, run_script,
};
pub use crate::transform::affine;
pub use crate::transform::stack::TransformStack;
