//! Matrix factories and the hierarchical transform stack.

pub mod affine;
pub(crate) mod stack;
