//! Per-frame command interpretation.
//!
//! A [`CommandInterpreter`] lives for exactly one frame: it is created with a fresh transform
//! stack and render target, walks the full command list in program order, and hands back the
//! finished framebuffer. Nothing it owns survives into the next frame.

use crate::{
    animation::knobs::FrameKnobs,
    foundation::core::{DMat4, DVec3},
    foundation::error::LoomResult,
    geometry::mesh::{EdgeList, PolygonMesh},
    output::sink::Outputs,
    render::{
        backend::RenderBackend,
        framebuffer::{Framebuffer, RenderTarget},
    },
    script::{
        command::{Axis, Command},
        symbols::SymbolTable,
    },
    session::config::SceneConfig,
    transform::{affine, stack::TransformStack},
};

/// Scale a move/scale component by a knob: `a - k * a`.
///
/// `k = 0` keeps the literal value and `k = 1` collapses it to zero.
#[inline]
pub fn modulate_component(a: f64, knob_value: f64) -> f64 {
    a - knob_value * a
}

/// Transform for a `move` command, modulated by `knob_value` when present.
pub fn move_transform(offset: [f64; 3], knob_value: Option<f64>) -> DMat4 {
    affine::translate(modulated_vector(offset, knob_value))
}

/// Transform for a `scale` command, modulated by `knob_value` when present.
pub fn scale_transform(factors: [f64; 3], knob_value: Option<f64>) -> DMat4 {
    affine::scale(modulated_vector(factors, knob_value))
}

/// Transform for a `rotate` command. The angle (degrees) is multiplied by `knob_value` when
/// present.
pub fn rotate_transform(axis: Axis, degrees: f64, knob_value: Option<f64>) -> DMat4 {
    let mut theta = degrees.to_radians();
    if let Some(k) = knob_value {
        theta *= k;
    }
    affine::rotate(axis, theta)
}

fn modulated_vector(v: [f64; 3], knob_value: Option<f64>) -> DVec3 {
    let v = DVec3::from_array(v);
    match knob_value {
        Some(k) => DVec3::new(
            modulate_component(v.x, k),
            modulate_component(v.y, k),
            modulate_component(v.z, k),
        ),
        None => v,
    }
}

/// Interprets the command list for a single frame.
///
/// Rendering and output collaborators are passed per call rather than stored, so one set of
/// sinks can serve every frame of a run.
pub struct CommandInterpreter<'a> {
    knobs: &'a FrameKnobs,
    symbols: &'a SymbolTable,
    cfg: &'a SceneConfig,

    stack: TransformStack,
    target: RenderTarget,
    polygons: PolygonMesh,
    edges: EdgeList,
    material: &'a str,
}

impl<'a> CommandInterpreter<'a> {
    /// Fresh per-frame state: identity stack, cleared target, default material.
    pub fn new(knobs: &'a FrameKnobs, symbols: &'a SymbolTable, cfg: &'a SceneConfig) -> Self {
        Self {
            knobs,
            symbols,
            cfg,
            stack: TransformStack::new(),
            target: RenderTarget::new(cfg.canvas, cfg.background),
            polygons: PolygonMesh::new(),
            edges: EdgeList::new(),
            material: &cfg.default_material,
        }
    }

    /// Current transform stack.
    pub fn stack(&self) -> &TransformStack {
        &self.stack
    }

    /// Framebuffer as drawn so far.
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.target.color
    }

    /// Interpret every command in order and return the finished frame.
    pub fn run(
        mut self,
        commands: &'a [Command],
        backend: &mut dyn RenderBackend,
        outputs: &mut Outputs<'_>,
    ) -> LoomResult<Framebuffer> {
        for cmd in commands {
            self.execute(cmd, backend, outputs)?;
        }
        Ok(self.target.color)
    }

    /// Interpret one command against the current frame state.
    pub fn execute(
        &mut self,
        cmd: &'a Command,
        backend: &mut dyn RenderBackend,
        outputs: &mut Outputs<'_>,
    ) -> LoomResult<()> {
        match cmd {
            Command::Box {
                corner,
                size,
                constants,
            } => {
                self.polygons
                    .add_box(DVec3::from_array(*corner), DVec3::from_array(*size));
                self.emit_polygons(constants.as_deref(), backend)
            }
            Command::Sphere {
                center,
                radius,
                constants,
            } => {
                self.polygons.add_sphere(
                    DVec3::from_array(*center),
                    *radius,
                    self.cfg.tessellation_steps,
                );
                self.emit_polygons(constants.as_deref(), backend)
            }
            Command::Torus {
                center,
                tube_radius,
                ring_radius,
                constants,
            } => {
                self.polygons.add_torus(
                    DVec3::from_array(*center),
                    *tube_radius,
                    *ring_radius,
                    self.cfg.tessellation_steps,
                );
                self.emit_polygons(constants.as_deref(), backend)
            }
            Command::Line { from, to } => {
                self.edges
                    .add_edge(DVec3::from_array(*from), DVec3::from_array(*to));
                self.edges.transform(&self.stack.top());
                let res = backend.draw_lines(&self.edges, &mut self.target, self.cfg.line_color);
                self.edges.clear();
                res
            }
            Command::Move { offset, .. } => {
                let k = self.knob_value(cmd);
                self.stack.apply(move_transform(*offset, k));
                Ok(())
            }
            Command::Scale { factors, .. } => {
                let k = self.knob_value(cmd);
                self.stack.apply(scale_transform(*factors, k));
                Ok(())
            }
            Command::Rotate { axis, degrees, .. } => {
                let k = self.knob_value(cmd);
                self.stack.apply(rotate_transform(*axis, *degrees, k));
                Ok(())
            }
            Command::Push => {
                self.stack.push();
                Ok(())
            }
            Command::Pop => self.stack.pop().map(|_| ()),
            Command::Display => outputs.display.show(&self.target.color),
            Command::Save { path } => outputs.images.save(path, &self.target.color),
            Command::Frames { .. } | Command::Basename { .. } | Command::Vary(_) => Ok(()),
            Command::Unknown => {
                tracing::trace!("skipping unrecognised command");
                Ok(())
            }
        }
    }

    /// Value of the knob named by `cmd` at this frame, if both exist.
    fn knob_value(&self, cmd: &Command) -> Option<f64> {
        cmd.knob().and_then(|k| self.knobs.get(k))
    }

    /// Transform the buffered polygons by the CTM, draw them, then reset the buffer and material.
    fn emit_polygons(
        &mut self,
        constants: Option<&'a str>,
        backend: &mut dyn RenderBackend,
    ) -> LoomResult<()> {
        if let Some(m) = constants {
            self.material = m;
        }
        self.polygons.transform(&self.stack.top());
        let res = backend.draw_polygons(
            &self.polygons,
            &mut self.target,
            &self.cfg.lighting,
            self.symbols,
            self.material,
        );
        self.polygons.clear();
        self.material = &self.cfg.default_material;
        res
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interpret/interpreter.rs"]
mod tests;
