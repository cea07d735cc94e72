//! Local-space geometry for scene primitives.
//!
//! Polygon meshes are triangle lists wound counter-clockwise when viewed from outside, so a
//! renderer can cull back faces from the winding alone. Sphere and torus are tessellated on a
//! `steps x steps` parameter grid.

use std::f64::consts::{PI, TAU};

use crate::foundation::core::{DMat4, DVec3};

/// Triangle soup with outward-facing counter-clockwise winding.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PolygonMesh {
    triangles: Vec<[DVec3; 3]>,
}

impl PolygonMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the triangles.
    pub fn triangles(&self) -> &[[DVec3; 3]] {
        &self.triangles
    }

    /// Number of triangles.
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Return `true` when the mesh has no triangles.
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Drop all triangles, keeping the allocation.
    pub fn clear(&mut self) {
        self.triangles.clear();
    }

    /// Append one triangle as given.
    pub fn push_triangle(&mut self, a: DVec3, b: DVec3, c: DVec3) {
        self.triangles.push([a, b, c]);
    }

    /// Transform every vertex by `m` in place.
    pub fn transform(&mut self, m: &DMat4) {
        for tri in &mut self.triangles {
            for p in tri.iter_mut() {
                *p = m.transform_point3(*p);
            }
        }
    }

    /// Append an axis-aligned box. `corner` is the top-left-front vertex; the box extends
    /// `+x` by `size.x`, `-y` by `size.y` and `-z` by `size.z`.
    pub fn add_box(&mut self, corner: DVec3, size: DVec3) {
        let (x0, y0, z0) = (corner.x, corner.y, corner.z);
        let (x1, y1, z1) = (x0 + size.x, y0 - size.y, z0 - size.z);

        let lbf = DVec3::new(x0, y1, z0);
        let rbf = DVec3::new(x1, y1, z0);
        let rtf = DVec3::new(x1, y0, z0);
        let ltf = DVec3::new(x0, y0, z0);
        let lbb = DVec3::new(x0, y1, z1);
        let rbb = DVec3::new(x1, y1, z1);
        let rtb = DVec3::new(x1, y0, z1);
        let ltb = DVec3::new(x0, y0, z1);

        self.push_quad(lbf, rbf, rtf, ltf); // front
        self.push_quad(rbb, lbb, ltb, rtb); // back
        self.push_quad(rbf, rbb, rtb, rtf); // right
        self.push_quad(lbb, lbf, ltf, ltb); // left
        self.push_quad(ltf, rtf, rtb, ltb); // top
        self.push_quad(lbb, rbb, rbf, lbf); // bottom
    }

    /// Append a sphere tessellated into `steps` slices and `steps` stacks.
    pub fn add_sphere(&mut self, center: DVec3, radius: f64, steps: u32) {
        let steps = steps.max(3);
        let point = |i: u32, j: u32| {
            let phi = TAU * f64::from(i) / f64::from(steps);
            let theta = PI * f64::from(j) / f64::from(steps);
            center
                + radius
                    * DVec3::new(
                        theta.cos(),
                        theta.sin() * phi.cos(),
                        theta.sin() * phi.sin(),
                    )
        };

        for i in 0..steps {
            for j in 0..steps {
                let a = point(i, j);
                let b = point(i, j + 1);
                let c = point(i + 1, j + 1);
                let d = point(i + 1, j);
                self.push_outward(a, b, c, |_| center);
                self.push_outward(a, c, d, |_| center);
            }
        }
    }

    /// Append a torus around the y axis through `center`.
    pub fn add_torus(&mut self, center: DVec3, tube_radius: f64, ring_radius: f64, steps: u32) {
        let steps = steps.max(3);
        let point = |i: u32, j: u32| {
            let phi = TAU * f64::from(i) / f64::from(steps);
            let theta = TAU * f64::from(j) / f64::from(steps);
            let r = tube_radius * theta.cos() + ring_radius;
            center + DVec3::new(phi.cos() * r, tube_radius * theta.sin(), -phi.sin() * r)
        };
        // Nearest point on the tube's core circle.
        let core = |p: DVec3| {
            let radial = DVec3::new(p.x - center.x, 0.0, p.z - center.z);
            center + radial.normalize_or_zero() * ring_radius
        };

        for i in 0..steps {
            for j in 0..steps {
                let a = point(i, j);
                let b = point(i, j + 1);
                let c = point(i + 1, j + 1);
                let d = point(i + 1, j);
                self.push_outward(a, b, c, core);
                self.push_outward(a, c, d, core);
            }
        }
    }

    fn push_quad(&mut self, a: DVec3, b: DVec3, c: DVec3, d: DVec3) {
        self.push_triangle(a, b, c);
        self.push_triangle(a, c, d);
    }

    /// Push `a, b, c` wound so the face normal points away from `inside(centroid)`.
    /// Degenerate triangles (pole slivers) are dropped.
    fn push_outward(&mut self, a: DVec3, b: DVec3, c: DVec3, inside: impl Fn(DVec3) -> DVec3) {
        let n = (b - a).cross(c - a);
        if n.length_squared() <= f64::EPSILON * f64::EPSILON {
            return;
        }
        let centroid = (a + b + c) / 3.0;
        if n.dot(centroid - inside(centroid)) >= 0.0 {
            self.push_triangle(a, b, c);
        } else {
            self.push_triangle(a, c, b);
        }
    }
}

/// Line segments in local or world space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeList {
    segments: Vec<[DVec3; 2]>,
}

impl EdgeList {
    /// Create an empty edge list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the segments.
    pub fn segments(&self) -> &[[DVec3; 2]] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Return `true` when there are no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Drop all segments, keeping the allocation.
    pub fn clear(&mut self) {
        self.segments.clear();
    }

    /// Append a segment from `a` to `b`.
    pub fn add_edge(&mut self, a: DVec3, b: DVec3) {
        self.segments.push([a, b]);
    }

    /// Transform every endpoint by `m` in place.
    pub fn transform(&mut self, m: &DMat4) {
        for seg in &mut self.segments {
            for p in seg.iter_mut() {
                *p = m.transform_point3(*p);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/mesh.rs"]
mod tests;
