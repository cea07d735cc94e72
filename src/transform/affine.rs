//! 4x4 transform factories over column-vector `DMat4`.

use crate::{
    foundation::core::{DMat4, DVec3},
    script::command::Axis,
};

/// Identity transform.
#[inline]
pub fn identity() -> DMat4 {
    DMat4::IDENTITY
}

/// `a * b`: apply `b` first, then `a`.
#[inline]
pub fn compose(a: DMat4, b: DMat4) -> DMat4 {
    a * b
}

/// Translation by `offset`.
#[inline]
pub fn translate(offset: DVec3) -> DMat4 {
    DMat4::from_translation(offset)
}

/// Per-axis scale by `factors`.
#[inline]
pub fn scale(factors: DVec3) -> DMat4 {
    DMat4::from_scale(factors)
}

/// Counter-clockwise rotation by `theta_rad` about `axis`.
pub fn rotate(axis: Axis, theta_rad: f64) -> DMat4 {
    match axis {
        Axis::X => DMat4::from_rotation_x(theta_rad),
        Axis::Y => DMat4::from_rotation_y(theta_rad),
        Axis::Z => DMat4::from_rotation_z(theta_rad),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/affine.rs"]
mod tests;
