pub(crate) mod backend;
pub(crate) mod cpu;
pub(crate) mod framebuffer;
pub(crate) mod lighting;
