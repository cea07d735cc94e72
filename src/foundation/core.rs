use crate::foundation::error::{LoomError, LoomResult};

pub use glam::{DMat4, DVec3, DVec4};

/// Absolute 0-based frame index in animation space.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas with non-zero dimensions.
    pub fn new(width: u32, height: u32) -> LoomResult<Self> {
        if width == 0 || height == 0 {
            return Err(LoomError::validation("canvas width/height must be non-zero"));
        }
        Ok(Self { width, height })
    }

    /// Number of pixels covered by the canvas.
    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
        }
    }
}

/// Opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Build a color from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as a floating-point vector in `0..=255`.
    pub fn to_dvec3(self) -> DVec3 {
        DVec3::new(f64::from(self.r), f64::from(self.g), f64::from(self.b))
    }

    /// Round and clamp a floating-point color back into 8-bit channels.
    pub fn from_dvec3_clamped(v: DVec3) -> Self {
        fn channel(c: f64) -> u8 {
            if c.is_nan() {
                return 0;
            }
            c.round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: channel(v.x),
            g: channel(v.y),
            b: channel(v.z),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
