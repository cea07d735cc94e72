//! Output collaborators: interactive display, image persistence, animation assembly.
//!
//! The interpreter and orchestrator only talk to the traits in [`sink`]; the other modules are
//! the built-in implementations.

/// External-viewer display sink.
pub mod display;
/// `ffmpeg`-based animation assembly.
pub mod ffmpeg;
/// Image-file persistence via the `image` crate.
pub mod image_file;
/// Sink traits and in-memory implementations.
pub mod sink;
