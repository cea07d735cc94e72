use crate::{
    foundation::core::{DVec3, Rgb8},
    foundation::error::{LoomError, LoomResult},
    geometry::mesh::{EdgeList, PolygonMesh},
    render::{backend::RenderBackend, framebuffer::RenderTarget, lighting::Lighting},
    script::symbols::SymbolTable,
};

/// Orthographic CPU rasterizer.
///
/// Model `(x, y)` maps to pixel column `x` and row `height - 1 - y`, so `+y` points up on
/// screen and `+z` points at the viewer. Triangles are filled by barycentric coverage at integer
/// sample positions and depth-tested with larger z winning.
#[derive(Clone, Debug)]
pub struct CpuBackend {
    cull_back_faces: bool,
}

impl Default for CpuBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuBackend {
    /// Backend with back-face culling enabled.
    pub fn new() -> Self {
        Self {
            cull_back_faces: true,
        }
    }

    /// Enable or disable back-face culling.
    pub fn with_back_face_culling(mut self, enabled: bool) -> Self {
        self.cull_back_faces = enabled;
        self
    }
}

impl RenderBackend for CpuBackend {
    fn draw_polygons(
        &mut self,
        mesh: &PolygonMesh,
        target: &mut RenderTarget,
        lighting: &Lighting,
        symbols: &SymbolTable,
        material: &str,
    ) -> LoomResult<()> {
        let mat = symbols
            .material(material)
            .ok_or_else(|| LoomError::render(format!("unknown material '{material}'")))?;

        for tri in mesh.triangles() {
            let normal = (tri[1] - tri[0]).cross(tri[2] - tri[0]);
            if self.cull_back_faces && !lighting.faces_viewer(normal) {
                continue;
            }
            let color = lighting.shade(normal, mat);
            fill_triangle(target, tri, color);
        }
        Ok(())
    }

    fn draw_lines(
        &mut self,
        edges: &EdgeList,
        target: &mut RenderTarget,
        color: Rgb8,
    ) -> LoomResult<()> {
        for [a, b] in edges.segments() {
            draw_segment(target, *a, *b, color);
        }
        Ok(())
    }
}

fn edge(a: DVec3, b: DVec3, px: f64, py: f64) -> f64 {
    (b.x - a.x) * (py - a.y) - (b.y - a.y) * (px - a.x)
}

fn fill_triangle(target: &mut RenderTarget, tri: &[DVec3; 3], color: Rgb8) {
    let [a, b, c] = *tri;
    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return;
    }
    let area = edge(a, b, c.x, c.y);
    if area.abs() <= f64::EPSILON {
        return;
    }
    let sign = area.signum();

    let canvas = target.canvas();
    let max_x = f64::from(canvas.width - 1);
    let max_y = f64::from(canvas.height - 1);
    let x0 = a.x.min(b.x).min(c.x).ceil().max(0.0);
    let x1 = a.x.max(b.x).max(c.x).floor().min(max_x);
    let y0 = a.y.min(b.y).min(c.y).ceil().max(0.0);
    let y1 = a.y.max(b.y).max(c.y).floor().min(max_y);
    if x0 > x1 || y0 > y1 {
        return;
    }

    for y in (y0 as u32)..=(y1 as u32) {
        let py = f64::from(y);
        let row = canvas.height - 1 - y;
        for x in (x0 as u32)..=(x1 as u32) {
            let px = f64::from(x);
            let w0 = edge(b, c, px, py) * sign;
            let w1 = edge(c, a, px, py) * sign;
            let w2 = edge(a, b, px, py) * sign;
            if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                continue;
            }
            let z = (w0 * a.z + w1 * b.z + w2 * c.z) / (area * sign);
            target.plot(x, row, z, color);
        }
    }
}

fn draw_segment(target: &mut RenderTarget, a: DVec3, b: DVec3, color: Rgb8) {
    if !(a.is_finite() && b.is_finite()) {
        return;
    }
    let canvas = target.canvas();
    // Pixel centers round to [0, width - 1] x [0, height - 1].
    let bounds = (
        -0.5,
        f64::from(canvas.width) - 0.5,
        -0.5,
        f64::from(canvas.height) - 0.5,
    );
    let Some((a, b)) = clip_segment(a, b, bounds) else {
        return;
    };
    let d = b - a;
    let steps = d.x.abs().max(d.y.abs()).ceil().max(1.0);
    let n = steps as u64;
    for i in 0..=n {
        let p = a + d * (i as f64 / steps);
        let (x, y) = (p.x.round(), p.y.round());
        if x < 0.0 || y < 0.0 || x >= f64::from(canvas.width) || y >= f64::from(canvas.height) {
            continue;
        }
        target.plot(x as u32, canvas.height - 1 - y as u32, p.z, color);
    }
}

/// Liang-Barsky clip of `a..b` against `(x_min, x_max, y_min, y_max)`. Depth is interpolated
/// along with x and y.
fn clip_segment(a: DVec3, b: DVec3, bounds: (f64, f64, f64, f64)) -> Option<(DVec3, DVec3)> {
    let (x_min, x_max, y_min, y_max) = bounds;
    let d = b - a;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [
        (-d.x, a.x - x_min),
        (d.x, x_max - a.x),
        (-d.y, a.y - y_min),
        (d.y, y_max - a.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }
    Some((a + d * t0, a + d * t1))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
