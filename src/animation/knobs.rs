//! Knob scheduling: animation metadata and the per-frame knob table.
//!
//! Both passes are pure functions of the command list and run once, before any frame is
//! interpreted. Every validation failure surfaces here so that a bad script never produces
//! partial output.

use std::collections::BTreeMap;

use crate::{
    foundation::core::FrameIndex,
    foundation::error::{LoomError, LoomResult},
    script::command::{Command, VarySpec},
};

/// Animation metadata resolved from `frames` / `basename` / `vary` markers.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct AnimationMeta {
    /// Basename for per-frame output files.
    pub basename: String,
    /// Number of frames to render (`1` means a single still image).
    pub frame_count: u64,
    /// `true` when `frames` was declared without `basename` and the default was used.
    pub basename_defaulted: bool,
}

impl AnimationMeta {
    /// Return `true` when more than one frame is rendered.
    pub fn is_animation(&self) -> bool {
        self.frame_count > 1
    }
}

/// Knob values for a single frame. A knob absent from the map applies no modulation.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct FrameKnobs(BTreeMap<String, f64>);

impl FrameKnobs {
    /// Value of `knob` at this frame, if defined.
    pub fn get(&self, knob: &str) -> Option<f64> {
        self.0.get(knob).copied()
    }

    /// Set `knob` for this frame, replacing any earlier value.
    pub fn set(&mut self, knob: impl Into<String>, value: f64) {
        self.0.insert(knob.into(), value);
    }

    /// Number of knobs defined at this frame.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return `true` when no knob is defined at this frame.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate knobs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Per-frame knob values for a whole run. Immutable once built.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct KnobTable {
    frames: Vec<FrameKnobs>,
}

impl KnobTable {
    /// Number of frames covered by the table.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Return `true` when the table covers no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Knobs for `frame`, or `None` past the end of the table.
    pub fn frame(&self, frame: FrameIndex) -> Option<&FrameKnobs> {
        usize::try_from(frame.0)
            .ok()
            .and_then(|i| self.frames.get(i))
    }

    /// Iterate frames in order.
    pub fn iter(&self) -> impl Iterator<Item = &FrameKnobs> {
        self.frames.iter()
    }
}

/// Resolve the output basename and frame count.
///
/// - `vary` without `frames` is fatal.
/// - `frames` without `basename` falls back to `default_basename` with a warning.
/// - Without `frames`, a single still frame is rendered.
///
/// When a marker repeats, the last occurrence wins.
pub fn resolve_meta(commands: &[Command], default_basename: &str) -> LoomResult<AnimationMeta> {
    let mut frames: Option<u64> = None;
    let mut basename: Option<&str> = None;
    let mut has_vary = false;

    for cmd in commands {
        match cmd {
            Command::Frames { count } => frames = Some(*count),
            Command::Basename { name } => basename = Some(name),
            Command::Vary(_) => has_vary = true,
            _ => {}
        }
    }

    if has_vary && frames.is_none() {
        tracing::error!("vary requires a frame count; declare `frames` before animating knobs");
        return Err(LoomError::animation(
            "vary used without a frames declaration",
        ));
    }

    let Some(frame_count) = frames else {
        return Ok(AnimationMeta {
            basename: basename.unwrap_or(default_basename).to_string(),
            frame_count: 1,
            basename_defaulted: false,
        });
    };

    if frame_count == 0 {
        return Err(LoomError::validation("frames count must be > 0"));
    }

    let (basename, basename_defaulted) = match basename {
        Some(name) => (name.to_string(), false),
        None => {
            tracing::warn!("no basename set, using '{default_basename}' as basename");
            (default_basename.to_string(), true)
        }
    };

    Ok(AnimationMeta {
        basename,
        frame_count,
        basename_defaulted,
    })
}

/// Build the per-frame knob table for `frame_count` frames.
///
/// Every `vary` range is validated before any value is written: ranges must satisfy
/// `0 <= start < end <= frame_count - 1`. Later `vary` commands overwrite earlier ones on the
/// same `(knob, frame)` pair.
pub fn build_knob_table(commands: &[Command], frame_count: u64) -> LoomResult<KnobTable> {
    let varies: Vec<&VarySpec> = commands
        .iter()
        .filter_map(|c| match c {
            Command::Vary(v) => Some(v),
            _ => None,
        })
        .collect();

    for v in &varies {
        validate_vary(v, frame_count)?;
    }

    let len = usize::try_from(frame_count)
        .map_err(|_| LoomError::validation("frame count is too large"))?;
    let mut frames = Vec::new();
    frames
        .try_reserve_exact(len)
        .map_err(|_| LoomError::validation(format!("frame count {frame_count} is too large")))?;
    frames.resize(len, FrameKnobs::default());

    for v in varies {
        // validate_vary guarantees 0 <= start < end < frame_count.
        for f in v.start_frame..=v.end_frame {
            frames[f as usize].set(v.knob.clone(), interpolate(v, f));
        }
    }

    Ok(KnobTable { frames })
}

fn validate_vary(v: &VarySpec, frame_count: u64) -> LoomResult<()> {
    let last = i64::try_from(frame_count).unwrap_or(i64::MAX) - 1;
    if v.start_frame < 0 || v.end_frame < 0 || v.start_frame > last || v.end_frame > last {
        return Err(LoomError::animation(format!(
            "vary '{}' range [{}, {}] is outside frames [0, {last}]",
            v.knob, v.start_frame, v.end_frame
        )));
    }
    if v.end_frame == v.start_frame {
        return Err(LoomError::animation(format!(
            "vary '{}' range must span more than one frame (start == end == {})",
            v.knob, v.start_frame
        )));
    }
    if v.end_frame < v.start_frame {
        return Err(LoomError::animation(format!(
            "vary '{}' range is reversed (start {} > end {})",
            v.knob, v.start_frame, v.end_frame
        )));
    }
    Ok(())
}

/// Linear interpolation at frame `f`; the end frame yields `end_value` exactly.
fn interpolate(v: &VarySpec, f: i64) -> f64 {
    if f == v.end_frame {
        return v.end_value;
    }
    let span = (v.end_frame - v.start_frame) as f64;
    let t = (f - v.start_frame) as f64;
    v.start_value + (v.end_value - v.start_value) * t / span
}

#[cfg(test)]
#[path = "../../tests/unit/animation/knobs.rs"]
mod tests;
