//! Flat ambient + diffuse shading for a single point light.

use crate::{
    foundation::core::{DVec3, Rgb8},
    script::symbols::Material,
};

/// Scene-wide lighting inputs passed to the polygon renderer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Lighting {
    /// Direction towards the viewer; used for back-face culling.
    pub view: DVec3,
    /// Ambient light color.
    pub ambient: Rgb8,
    /// Direction towards the light source.
    pub light_direction: DVec3,
    /// Light source color.
    pub light_color: Rgb8,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            view: DVec3::new(0.0, 0.0, 1.0),
            ambient: Rgb8::new(150, 50, 200),
            light_direction: DVec3::new(0.5, 0.75, 1.0),
            light_color: Rgb8::WHITE,
        }
    }
}

impl Lighting {
    /// Color of a face with (not necessarily unit) normal `normal` under `material`.
    ///
    /// `I = ambient * Ka + light * Kd * max(0, N . L)`, clamped per channel.
    pub fn shade(&self, normal: DVec3, material: &Material) -> Rgb8 {
        let n = normal.normalize_or_zero();
        let l = self.light_direction.normalize_or_zero();
        let ambient = self.ambient.to_dvec3() * material.ambient();
        let diffuse = self.light_color.to_dvec3() * material.diffuse() * n.dot(l).max(0.0);
        Rgb8::from_dvec3_clamped(ambient + diffuse)
    }

    /// Return `true` when a face with `normal` is visible from the view direction.
    pub fn faces_viewer(&self, normal: DVec3) -> bool {
        normal.dot(self.view) > 0.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/lighting.rs"]
mod tests;
