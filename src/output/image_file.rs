use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::error::{LoomError, LoomResult},
    output::sink::ImageSink,
    render::framebuffer::Framebuffer,
};

/// Writes frames to disk, inferring the image format from the path extension.
#[derive(Debug, Default)]
pub struct ImageFileSink;

impl ImageFileSink {
    /// Create a new sink.
    pub fn new() -> Self {
        Self
    }
}

impl ImageSink for ImageFileSink {
    fn save(&mut self, path: &Path, frame: &Framebuffer) -> LoomResult<()> {
        write_image(path, frame)
    }
}

/// Write `frame` to `path` in the format implied by its extension.
pub fn write_image(path: &Path, frame: &Framebuffer) -> LoomResult<()> {
    let format = image::ImageFormat::from_path(path).map_err(|e| {
        LoomError::validation(format!(
            "cannot infer image format for '{}': {e}",
            path.display()
        ))
    })?;
    if frame.data.len() != frame.width as usize * frame.height as usize * 3 {
        return Err(LoomError::validation(
            "frame.data size mismatch with width*height*3",
        ));
    }

    ensure_parent_dir(path)?;
    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgb8,
        format,
    )
    .with_context(|| format!("write image '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), "saved frame");
    Ok(())
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> LoomResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/output/image_file.rs"]
mod tests;
