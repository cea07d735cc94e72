use std::path::{Path, PathBuf};

use crate::{foundation::error::LoomResult, render::framebuffer::Framebuffer};

/// Receives frames for interactive viewing (`display` commands).
pub trait DisplaySink {
    /// Show `frame`. Blocks until the sink is done with it.
    fn show(&mut self, frame: &Framebuffer) -> LoomResult<()>;
}

/// Persists frames as image files (`save` commands and per-frame animation output).
pub trait ImageSink {
    /// Write `frame` to `path`.
    fn save(&mut self, path: &Path, frame: &Framebuffer) -> LoomResult<()>;
}

/// A numbered frame sequence on disk: `<dir>/<basename><first_number + i>.<extension>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameSequence {
    /// Directory holding the frames.
    pub dir: PathBuf,
    /// Shared file basename.
    pub basename: String,
    /// File extension without the dot.
    pub extension: String,
    /// Number carried by the first frame's file name.
    pub first_number: u64,
    /// Number of frames.
    pub count: u64,
}

impl FrameSequence {
    /// File name (no directory) of frame `index`.
    pub fn file_name(&self, index: u64) -> String {
        format!(
            "{}{}.{}",
            self.basename,
            self.first_number + index,
            self.extension
        )
    }

    /// Number carried by the last frame, or `None` if it does not fit in `u64`.
    pub fn last_number(&self) -> Option<u64> {
        self.first_number.checked_add(self.count.saturating_sub(1))
    }

    /// Full path of frame `index`.
    pub fn path(&self, index: u64) -> PathBuf {
        self.dir.join(self.file_name(index))
    }
}

/// Turns a finished frame sequence into a single animation artifact.
pub trait AnimationAssembler {
    /// Assemble `frames`, returning the path of the produced artifact.
    fn assemble(&mut self, frames: &FrameSequence) -> LoomResult<PathBuf>;
}

/// Bundle of output collaborators handed to the interpreter and orchestrator.
pub struct Outputs<'a> {
    /// Target for `display` commands.
    pub display: &'a mut dyn DisplaySink,
    /// Target for `save` commands and per-frame animation files.
    pub images: &'a mut dyn ImageSink,
    /// Final animation assembly.
    pub assembler: &'a mut dyn AnimationAssembler,
}

/// Display sink that discards every frame.
#[derive(Debug, Default)]
pub struct NullDisplay;

impl DisplaySink for NullDisplay {
    fn show(&mut self, _frame: &Framebuffer) -> LoomResult<()> {
        Ok(())
    }
}

/// Display sink that keeps a copy of every shown frame, for tests and debugging.
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    frames: Vec<Framebuffer>,
}

impl RecordingDisplay {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames shown so far, in order.
    pub fn frames(&self) -> &[Framebuffer] {
        &self.frames
    }
}

impl DisplaySink for RecordingDisplay {
    fn show(&mut self, frame: &Framebuffer) -> LoomResult<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

/// Image sink that keeps `(path, frame)` pairs in memory instead of writing files.
#[derive(Debug, Default)]
pub struct InMemoryImageSink {
    saved: Vec<(PathBuf, Framebuffer)>,
}

impl InMemoryImageSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Saved frames in call order.
    pub fn saved(&self) -> &[(PathBuf, Framebuffer)] {
        &self.saved
    }
}

impl ImageSink for InMemoryImageSink {
    fn save(&mut self, path: &Path, frame: &Framebuffer) -> LoomResult<()> {
        self.saved.push((path.to_path_buf(), frame.clone()));
        Ok(())
    }
}

/// Assembler that records requested sequences without producing anything.
#[derive(Debug, Default)]
pub struct InMemoryAssembler {
    requests: Vec<FrameSequence>,
}

impl InMemoryAssembler {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequences passed to `assemble`, in order.
    pub fn requests(&self) -> &[FrameSequence] {
        &self.requests
    }
}

impl AnimationAssembler for InMemoryAssembler {
    fn assemble(&mut self, frames: &FrameSequence) -> LoomResult<PathBuf> {
        self.requests.push(frames.clone());
        Ok(PathBuf::from(&frames.basename))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/output/sink.rs"]
mod tests;
