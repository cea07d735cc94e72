use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::{
    foundation::error::{LoomError, LoomResult},
    output::{image_file::ensure_parent_dir, sink::AnimationAssembler, sink::FrameSequence},
};

/// Options for [`FfmpegAssembler`].
#[derive(Clone, Debug)]
pub struct FfmpegAssemblerOpts {
    /// Directory the finished animation is written to.
    pub out_dir: PathBuf,
    /// Container/extension of the animation (`gif`, `mp4`, ...).
    pub format: String,
    /// Playback frame rate.
    pub fps: u32,
    /// Overwrite an existing artifact.
    pub overwrite: bool,
}

impl Default for FfmpegAssemblerOpts {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            format: "gif".to_string(),
            fps: 30,
            overwrite: true,
        }
    }
}

/// Assembles a numbered frame sequence into `<out_dir>/<basename>.<format>` with the system
/// `ffmpeg`.
#[derive(Clone, Debug, Default)]
pub struct FfmpegAssembler {
    opts: FfmpegAssemblerOpts,
}

impl FfmpegAssembler {
    /// Create an assembler with `opts`.
    pub fn new(opts: FfmpegAssemblerOpts) -> Self {
        Self { opts }
    }

    /// Path of the artifact produced for `frames`.
    pub fn artifact_path(&self, frames: &FrameSequence) -> PathBuf {
        self.opts
            .out_dir
            .join(format!("{}.{}", frames.basename, self.opts.format))
    }

    /// Full `ffmpeg` argument list for `frames`.
    pub fn ffmpeg_args(&self, frames: &FrameSequence) -> Vec<String> {
        let pattern = frames
            .dir
            .join(format!("{}%d.{}", frames.basename, frames.extension));
        vec![
            if self.opts.overwrite { "-y" } else { "-n" }.to_string(),
            "-loglevel".to_string(),
            "error".to_string(),
            "-framerate".to_string(),
            self.opts.fps.to_string(),
            "-start_number".to_string(),
            frames.first_number.to_string(),
            "-i".to_string(),
            pattern.to_string_lossy().into_owned(),
            "-frames:v".to_string(),
            frames.count.to_string(),
            self.artifact_path(frames).to_string_lossy().into_owned(),
        ]
    }
}

impl AnimationAssembler for FfmpegAssembler {
    #[tracing::instrument(skip(self), fields(basename = %frames.basename))]
    fn assemble(&mut self, frames: &FrameSequence) -> LoomResult<PathBuf> {
        if self.opts.fps == 0 {
            return Err(LoomError::validation("assembly fps must be non-zero"));
        }
        if frames.count == 0 {
            return Err(LoomError::validation("cannot assemble an empty frame sequence"));
        }
        if !is_ffmpeg_on_path() {
            return Err(LoomError::evaluation(
                "ffmpeg is required for animation assembly, but was not found on PATH",
            ));
        }

        let out = self.artifact_path(frames);
        ensure_parent_dir(&out)?;

        let mut child = Command::new("ffmpeg")
            .args(self.ffmpeg_args(frames))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                LoomError::evaluation(format!(
                    "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
                ))
            })?;

        let mut stderr_bytes = Vec::new();
        if let Some(mut stderr) = child.stderr.take() {
            stderr.read_to_end(&mut stderr_bytes).map_err(|e| {
                LoomError::evaluation(format!("ffmpeg stderr read failed: {e}"))
            })?;
        }
        let status = child.wait().map_err(|e| {
            LoomError::evaluation(format!("failed to wait for ffmpeg to finish: {e}"))
        })?;

        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr_bytes);
            return Err(LoomError::evaluation(format!(
                "ffmpeg exited with status {}: {}",
                status,
                stderr.trim()
            )));
        }

        tracing::info!(path = %out.display(), "assembled animation");
        Ok(out)
    }
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/output/ffmpeg.rs"]
mod tests;
