use crate::foundation::core::{Canvas, Rgb8};

/// A rendered frame as tightly packed, row-major RGB8 pixels. Row 0 is the top of the image.
#[derive(Clone, Debug, PartialEq)]
pub struct Framebuffer {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGB8 bytes.
    pub data: Vec<u8>,
}

impl Framebuffer {
    /// Frame filled with `color`.
    pub fn filled(canvas: Canvas, color: Rgb8) -> Self {
        let mut data = Vec::with_capacity(canvas.pixel_count() * 3);
        for _ in 0..canvas.pixel_count() {
            data.extend_from_slice(&[color.r, color.g, color.b]);
        }
        Self {
            width: canvas.width,
            height: canvas.height,
            data,
        }
    }

    /// Color at `(col, row)`, or `None` outside the frame.
    pub fn pixel(&self, col: u32, row: u32) -> Option<Rgb8> {
        let i = self.offset(col, row)?;
        Some(Rgb8::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Overwrite the pixel at `(col, row)`. Out-of-frame writes are ignored.
    pub fn set_pixel(&mut self, col: u32, row: u32, color: Rgb8) {
        if let Some(i) = self.offset(col, row) {
            self.data[i..i + 3].copy_from_slice(&[color.r, color.g, color.b]);
        }
    }

    /// Count pixels that differ from `color`.
    pub fn count_not(&self, color: Rgb8) -> usize {
        self.data
            .chunks_exact(3)
            .filter(|px| *px != [color.r, color.g, color.b])
            .count()
    }

    /// Encode as binary PPM (`P6`).
    pub fn to_ppm(&self) -> Vec<u8> {
        let mut out = format!("P6\n{} {}\n255\n", self.width, self.height).into_bytes();
        out.extend_from_slice(&self.data);
        out
    }

    fn offset(&self, col: u32, row: u32) -> Option<usize> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some((row as usize * self.width as usize + col as usize) * 3)
    }
}

/// Per-pixel depth; larger values are closer to the viewer.
#[derive(Clone, Debug)]
pub struct DepthBuffer {
    width: u32,
    height: u32,
    depth: Vec<f64>,
}

impl DepthBuffer {
    /// Depth buffer cleared to negative infinity.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            depth: vec![f64::NEG_INFINITY; canvas.pixel_count()],
        }
    }

    /// Stored depth at `(col, row)`.
    pub fn get(&self, col: u32, row: u32) -> Option<f64> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.depth[row as usize * self.width as usize + col as usize])
    }

    /// Store `z` if it is closer than the current value. Returns whether the test passed.
    pub fn test_and_set(&mut self, col: u32, row: u32, z: f64) -> bool {
        if col >= self.width || row >= self.height {
            return false;
        }
        let slot = &mut self.depth[row as usize * self.width as usize + col as usize];
        if z > *slot {
            *slot = z;
            return true;
        }
        false
    }
}

/// Color plus depth target shared by every primitive of one frame.
#[derive(Clone, Debug)]
pub struct RenderTarget {
    /// Color buffer.
    pub color: Framebuffer,
    /// Depth buffer.
    pub depth: DepthBuffer,
}

impl RenderTarget {
    /// Fresh target cleared to `background`.
    pub fn new(canvas: Canvas, background: Rgb8) -> Self {
        Self {
            color: Framebuffer::filled(canvas, background),
            depth: DepthBuffer::new(canvas),
        }
    }

    /// Canvas covered by this target.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.color.width,
            height: self.color.height,
        }
    }

    /// Depth-tested write of one pixel.
    pub fn plot(&mut self, col: u32, row: u32, z: f64, color: Rgb8) {
        if self.depth.test_and_set(col, row, z) {
            self.color.set_pixel(col, row, color);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/framebuffer.rs"]
mod tests;
