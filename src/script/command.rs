use std::path::PathBuf;

/// Rotation axis for [`Command::Rotate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Rotate about the x axis.
    X,
    /// Rotate about the y axis.
    Y,
    /// Rotate about the z axis.
    Z,
}

/// Knob variation: `knob` interpolates linearly from `start_value` at `start_frame` to
/// `end_value` at `end_frame` (both inclusive).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VarySpec {
    /// Knob being animated.
    pub knob: String,
    /// First frame of the range.
    pub start_frame: i64,
    /// Last frame of the range.
    pub end_frame: i64,
    /// Value at `start_frame`.
    pub start_value: f64,
    /// Value at `end_frame`.
    pub end_value: f64,
}

/// One scene command, as produced by the script parser.
///
/// Commands are immutable and consumed in program order once per frame. Tags the interpreter
/// does not know deserialize to [`Command::Unknown`] and are skipped.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    /// Declare the number of frames in the animation.
    Frames {
        /// Total frame count.
        count: u64,
    },
    /// Declare the basename used for per-frame output files.
    Basename {
        /// Basename without directory or extension.
        name: String,
    },
    /// Declare a knob variation range.
    Vary(VarySpec),
    /// Open a nested transform scope.
    Push,
    /// Close the innermost transform scope.
    Pop,
    /// Translate subsequent geometry.
    Move {
        /// Translation vector.
        offset: [f64; 3],
        /// Optional knob modulating the translation.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        knob: Option<String>,
    },
    /// Scale subsequent geometry.
    Scale {
        /// Per-axis scale factors.
        factors: [f64; 3],
        /// Optional knob modulating the factors.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        knob: Option<String>,
    },
    /// Rotate subsequent geometry about an axis.
    Rotate {
        /// Rotation axis.
        axis: Axis,
        /// Angle in degrees.
        degrees: f64,
        /// Optional knob modulating the angle.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        knob: Option<String>,
    },
    /// Axis-aligned box whose top-left-front corner is `corner`.
    Box {
        /// Top-left-front corner.
        corner: [f64; 3],
        /// Width, height and depth.
        size: [f64; 3],
        /// Optional material override.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        constants: Option<String>,
    },
    /// Sphere.
    Sphere {
        /// Center point.
        center: [f64; 3],
        /// Radius.
        radius: f64,
        /// Optional material override.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        constants: Option<String>,
    },
    /// Torus lying in the xz plane.
    Torus {
        /// Center point.
        center: [f64; 3],
        /// Radius of the tube cross-section.
        tube_radius: f64,
        /// Distance from the center to the middle of the tube.
        ring_radius: f64,
        /// Optional material override.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        constants: Option<String>,
    },
    /// Single line segment.
    Line {
        /// First endpoint.
        from: [f64; 3],
        /// Second endpoint.
        to: [f64; 3],
    },
    /// Show the current framebuffer.
    Display,
    /// Persist the current framebuffer.
    Save {
        /// Target image path.
        path: PathBuf,
    },
    /// Any op this interpreter does not recognise.
    #[serde(other)]
    Unknown,
}

impl Command {
    /// Stable op tag, matching the serialized `op` field.
    pub fn op_name(&self) -> &'static str {
        match self {
            Self::Frames { .. } => "frames",
            Self::Basename { .. } => "basename",
            Self::Vary(_) => "vary",
            Self::Push => "push",
            Self::Pop => "pop",
            Self::Move { .. } => "move",
            Self::Scale { .. } => "scale",
            Self::Rotate { .. } => "rotate",
            Self::Box { .. } => "box",
            Self::Sphere { .. } => "sphere",
            Self::Torus { .. } => "torus",
            Self::Line { .. } => "line",
            Self::Display => "display",
            Self::Save { .. } => "save",
            Self::Unknown => "unknown",
        }
    }

    /// Knob referenced by a transform command, if any.
    pub fn knob(&self) -> Option<&str> {
        match self {
            Self::Move { knob, .. } | Self::Scale { knob, .. } | Self::Rotate { knob, .. } => {
                knob.as_deref()
            }
            _ => None,
        }
    }

    /// Material override carried by a shape command, if any.
    pub fn material_override(&self) -> Option<&str> {
        match self {
            Self::Box { constants, .. }
            | Self::Sphere { constants, .. }
            | Self::Torus { constants, .. } => constants.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/script/command.rs"]
mod tests;
