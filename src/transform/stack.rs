use crate::{
    foundation::core::DMat4,
    foundation::error::{LoomError, LoomResult},
    transform::affine,
};

/// Stack of cumulative transforms. Never empty: the seed entry cannot be popped.
///
/// The top is the current transformation matrix (CTM) applied to geometry declared next.
#[derive(Clone, Debug)]
pub struct TransformStack {
    entries: Vec<DMat4>,
}

impl Default for TransformStack {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformStack {
    /// Stack seeded with a single identity matrix.
    pub fn new() -> Self {
        Self {
            entries: vec![affine::identity()],
        }
    }

    /// Current transformation matrix.
    pub fn top(&self) -> DMat4 {
        // `entries` is never empty; see `pop`.
        self.entries[self.entries.len() - 1]
    }

    /// Number of entries, including the seed.
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Duplicate the top and make the copy the new top.
    pub fn push(&mut self) {
        let top = self.top();
        self.entries.push(top);
    }

    /// Remove the top. Fails if only the seed entry remains.
    pub fn pop(&mut self) -> LoomResult<DMat4> {
        if self.entries.len() == 1 {
            return Err(LoomError::evaluation(
                "pop without matching push (transform stack underflow)",
            ));
        }
        self.entries
            .pop()
            .ok_or_else(|| LoomError::evaluation("transform stack is empty (unexpected)"))
    }

    /// Replace the top with `top * m`. This mutates the current scope rather than opening a
    /// new one.
    pub fn apply(&mut self, m: DMat4) {
        let last = self.entries.len() - 1;
        self.entries[last] = affine::compose(self.entries[last], m);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transform/stack.rs"]
mod tests;
