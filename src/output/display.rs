use std::io::Write as _;
use std::process::{Command, Stdio};

use crate::{
    foundation::error::{LoomError, LoomResult},
    output::sink::DisplaySink,
    render::framebuffer::Framebuffer,
};

/// Display sink that pipes each frame as binary PPM into an external viewer.
///
/// The viewer is spawned per frame and waited on, so `show` blocks until the window is closed.
#[derive(Clone, Debug)]
pub struct ExternalDisplay {
    program: String,
    args: Vec<String>,
}

impl Default for ExternalDisplay {
    fn default() -> Self {
        Self::new("display")
    }
}

impl ExternalDisplay {
    /// Use `program` (looked up on `PATH`) as the viewer.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Extra arguments passed before the frame is streamed.
    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }
}

impl DisplaySink for ExternalDisplay {
    fn show(&mut self, frame: &Framebuffer) -> LoomResult<()> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                LoomError::evaluation(format!(
                    "failed to spawn display program '{}' (is it installed and on PATH?): {e}",
                    self.program
                ))
            })?;

        {
            let mut stdin = child.stdin.take().ok_or_else(|| {
                LoomError::evaluation("failed to open display stdin (unexpected)")
            })?;
            stdin.write_all(&frame.to_ppm()).map_err(|e| {
                LoomError::evaluation(format!("failed to stream frame to display: {e}"))
            })?;
        }

        let status = child
            .wait()
            .map_err(|e| LoomError::evaluation(format!("failed to wait for display: {e}")))?;
        if !status.success() {
            return Err(LoomError::evaluation(format!(
                "display program '{}' exited with status {status}",
                self.program
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/output/display.rs"]
mod tests;
