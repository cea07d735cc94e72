use crate::{
    foundation::core::Rgb8,
    foundation::error::LoomResult,
    geometry::mesh::{EdgeList, PolygonMesh},
    render::{framebuffer::RenderTarget, lighting::Lighting},
    script::symbols::SymbolTable,
};

/// Rasterizer seam used by the command interpreter.
///
/// Geometry arrives already transformed by the current transformation matrix. Implementations
/// draw into `target` and must not retain references past the call.
pub trait RenderBackend {
    /// Draw filled polygons shaded with the material named `material`.
    fn draw_polygons(
        &mut self,
        mesh: &PolygonMesh,
        target: &mut RenderTarget,
        lighting: &Lighting,
        symbols: &SymbolTable,
        material: &str,
    ) -> LoomResult<()>;

    /// Draw line segments in a flat color.
    fn draw_lines(
        &mut self,
        edges: &EdgeList,
        target: &mut RenderTarget,
        color: Rgb8,
    ) -> LoomResult<()>;
}

/// Available backend kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Orthographic z-buffered CPU rasterizer.
    Cpu,
}

/// Create a rendering backend implementation.
pub fn create_backend(kind: BackendKind) -> Box<dyn RenderBackend> {
    match kind {
        BackendKind::Cpu => Box::new(crate::render::cpu::CpuBackend::new()),
    }
}

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    /// `draw_polygons` with the already-transformed mesh and the active material.
    Polygons {
        /// Mesh as received.
        mesh: PolygonMesh,
        /// Material key as received.
        material: String,
    },
    /// `draw_lines` with the already-transformed edges and the flat color.
    Lines {
        /// Edges as received.
        edges: EdgeList,
        /// Line color as received.
        color: Rgb8,
    },
}

/// Backend that records draw calls instead of rasterizing, for tests and debugging.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    calls: Vec<DrawCall>,
}

impl RecordingBackend {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls recorded so far, in order.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Drop all recorded calls.
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl RenderBackend for RecordingBackend {
    fn draw_polygons(
        &mut self,
        mesh: &PolygonMesh,
        _target: &mut RenderTarget,
        _lighting: &Lighting,
        _symbols: &SymbolTable,
        material: &str,
    ) -> LoomResult<()> {
        self.calls.push(DrawCall::Polygons {
            mesh: mesh.clone(),
            material: material.to_string(),
        });
        Ok(())
    }

    fn draw_lines(
        &mut self,
        edges: &EdgeList,
        _target: &mut RenderTarget,
        color: Rgb8,
    ) -> LoomResult<()> {
        self.calls.push(DrawCall::Lines {
            edges: edges.clone(),
            color,
        });
        Ok(())
    }
}
