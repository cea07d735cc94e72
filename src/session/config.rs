use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    foundation::core::{Canvas, Rgb8},
    foundation::error::{LoomError, LoomResult},
    render::lighting::Lighting,
};

/// Per-frame scene defaults used by the command interpreter.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Output canvas.
    pub canvas: Canvas,
    /// Color every frame is cleared to.
    pub background: Rgb8,
    /// Flat color for `line` primitives.
    pub line_color: Rgb8,
    /// Light and view setup passed to the polygon renderer.
    pub lighting: Lighting,
    /// Material used when a primitive carries no override.
    pub default_material: String,
    /// Subdivisions per parameter for sphere and torus tessellation.
    pub tessellation_steps: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            background: Rgb8::BLACK,
            line_color: Rgb8::WHITE,
            lighting: Lighting::default(),
            default_material: ".white".to_string(),
            tessellation_steps: 100,
        }
    }
}

/// File naming and assembly settings for multi-frame runs.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Basename used when the script declares `frames` but no `basename`.
    pub default_basename: String,
    /// Directory receiving per-frame images.
    pub frames_dir: PathBuf,
    /// Per-frame image extension.
    pub extension: String,
    /// Added to the frame index in per-frame file names so that names sort in frame order.
    pub frame_number_offset: u64,
    /// Playback rate of the assembled animation.
    pub assembly_fps: u32,
    /// Container/extension of the assembled animation.
    pub assembly_format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_basename: "frame_name".to_string(),
            frames_dir: PathBuf::from("anim"),
            extension: "png".to_string(),
            frame_number_offset: 100,
            assembly_fps: 30,
            assembly_format: "gif".to_string(),
        }
    }
}

/// Complete run configuration.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Scene defaults.
    pub scene: SceneConfig,
    /// Output layout.
    pub output: OutputConfig,
}

impl RunConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> LoomResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_str(&text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check invariants the interpreter and orchestrator rely on.
    pub fn validate(&self) -> LoomResult<()> {
        Canvas::new(self.scene.canvas.width, self.scene.canvas.height)?;
        if self.scene.default_material.is_empty() {
            return Err(LoomError::validation("default_material must be non-empty"));
        }
        if self.scene.tessellation_steps == 0 {
            return Err(LoomError::validation("tessellation_steps must be > 0"));
        }
        if self.output.default_basename.is_empty() {
            return Err(LoomError::validation("default_basename must be non-empty"));
        }
        if self.output.extension.is_empty() {
            return Err(LoomError::validation("output extension must be non-empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/config.rs"]
mod tests;
