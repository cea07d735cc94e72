//! Frame loop: resolves the animation plan once, then reinterprets the script for every frame.

use std::path::PathBuf;

use crate::{
    animation::knobs::{AnimationMeta, FrameKnobs, KnobTable, build_knob_table, resolve_meta},
    foundation::core::FrameIndex,
    foundation::error::{LoomError, LoomResult},
    interpret::interpreter::CommandInterpreter,
    output::sink::{FrameSequence, Outputs},
    render::{backend::RenderBackend, framebuffer::Framebuffer},
    script::{Script, symbols::SymbolTable},
    session::config::{OutputConfig, RunConfig},
};

const PROGRESS_WIDTH: usize = 50;

/// Animation metadata plus the per-frame knob table, resolved before any frame renders.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AnimationPlan {
    /// Basename and frame count.
    pub meta: AnimationMeta,
    /// Knob values per frame.
    pub knobs: KnobTable,
}

impl AnimationPlan {
    /// Validate `script` against `cfg` and resolve its plan.
    pub fn resolve(script: &Script, cfg: &RunConfig) -> LoomResult<Self> {
        cfg.validate()?;
        script.validate(&cfg.scene.default_material)?;
        let meta = resolve_meta(&script.commands, &cfg.output.default_basename)?;
        let plan = Self {
            knobs: build_knob_table(&script.commands, meta.frame_count)?,
            meta,
        };
        if plan.frame_sequence(&cfg.output).last_number().is_none() {
            return Err(LoomError::validation(format!(
                "frame_number_offset {} overflows for {} frames",
                cfg.output.frame_number_offset, plan.meta.frame_count
            )));
        }
        Ok(plan)
    }

    /// Where the frames of this plan are written when it animates.
    pub fn frame_sequence(&self, out: &OutputConfig) -> FrameSequence {
        FrameSequence {
            dir: out.frames_dir.clone(),
            basename: self.meta.basename.clone(),
            extension: out.extension.clone(),
            first_number: out.frame_number_offset,
            count: self.meta.frame_count,
        }
    }
}

/// Summary of a completed run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    /// Resolved animation metadata.
    pub meta: AnimationMeta,
    /// Number of frames interpreted.
    pub frames_rendered: u64,
    /// Per-frame files written by the frame loop (empty for still renders).
    pub frame_files: Vec<PathBuf>,
    /// Artifact returned by the assembler, if assembly ran.
    pub assembled: Option<PathBuf>,
}

/// Run `script` to completion.
///
/// Every validation happens before the first frame: a script that fails here produces no output
/// at all. Multi-frame runs persist each frame through `outputs.images` and finish with a single
/// `outputs.assembler` call.
#[tracing::instrument(skip_all, fields(commands = script.commands.len()))]
pub fn run_script(
    script: &Script,
    cfg: &RunConfig,
    backend: &mut dyn RenderBackend,
    outputs: &mut Outputs<'_>,
) -> LoomResult<RunReport> {
    let plan = AnimationPlan::resolve(script, cfg)?;
    let symbols = script
        .symbols
        .with_default_material(&cfg.scene.default_material);

    for (idx, knobs) in plan.knobs.iter().enumerate() {
        tracing::debug!(frame = idx, knobs = ?knobs, "knob values");
    }

    let sequence = plan.frame_sequence(&cfg.output);
    let animating = plan.meta.is_animation();
    let mut frame_files = Vec::new();

    for (idx, knobs) in plan.knobs.iter().enumerate() {
        let frame = render_frame(
            script,
            &symbols,
            knobs,
            cfg,
            FrameIndex(idx as u64),
            backend,
            outputs,
        )?;

        if animating {
            let path = sequence.path(idx as u64);
            outputs.images.save(&path, &frame)?;
            let done = idx as u64 + 1;
            tracing::info!(
                file = %path.display(),
                "{} {:.0}%",
                progress_bar(done, plan.meta.frame_count),
                percent(done, plan.meta.frame_count)
            );
            frame_files.push(path);
        }
    }

    let assembled = if animating {
        Some(outputs.assembler.assemble(&sequence)?)
    } else {
        None
    };

    Ok(RunReport {
        frames_rendered: plan.knobs.len() as u64,
        meta: plan.meta,
        frame_files,
        assembled,
    })
}

/// Interpret a single frame of `script` and return it without any implicit persistence.
///
/// Embedded `display`/`save` commands still reach `outputs`.
pub fn render_single_frame(
    script: &Script,
    cfg: &RunConfig,
    frame: FrameIndex,
    backend: &mut dyn RenderBackend,
    outputs: &mut Outputs<'_>,
) -> LoomResult<Framebuffer> {
    let plan = AnimationPlan::resolve(script, cfg)?;
    let knobs = plan.knobs.frame(frame).ok_or_else(|| {
        LoomError::validation(format!(
            "frame {} is outside [0, {})",
            frame.0, plan.meta.frame_count
        ))
    })?;
    let symbols = script
        .symbols
        .with_default_material(&cfg.scene.default_material);
    render_frame(script, &symbols, knobs, cfg, frame, backend, outputs)
}

#[tracing::instrument(skip(script, symbols, knobs, cfg, backend, outputs))]
fn render_frame(
    script: &Script,
    symbols: &SymbolTable,
    knobs: &FrameKnobs,
    cfg: &RunConfig,
    frame: FrameIndex,
    backend: &mut dyn RenderBackend,
    outputs: &mut Outputs<'_>,
) -> LoomResult<Framebuffer> {
    CommandInterpreter::new(knobs, symbols, &cfg.scene).run(&script.commands, backend, outputs)
}

fn percent(done: u64, total: u64) -> f64 {
    if total == 0 {
        return 100.0;
    }
    done as f64 * 100.0 / total as f64
}

/// Fixed-width text bar: `[****------]`.
pub fn progress_bar(done: u64, total: u64) -> String {
    let filled = if total == 0 {
        PROGRESS_WIDTH
    } else {
        ((done.min(total) as u128 * PROGRESS_WIDTH as u128) / total as u128) as usize
    };
    format!(
        "[{}{}]",
        "*".repeat(filled),
        "-".repeat(PROGRESS_WIDTH - filled)
    )
}

#[cfg(test)]
#[path = "../../tests/unit/session/orchestrator.rs"]
mod tests;
