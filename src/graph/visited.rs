//! Traversal-local visited sets.
//!
//! Visited state lives here, not on the vertices: every traversal allocates
//! its own word-packed bitmap keyed by arena index, so repeated or concurrent
//! read-only traversals over the same graph never share state and never need
//! a reset step.

/// A dense, word-packed visited set sized to an arena.
pub(crate) struct VisitedSet {
    words: Vec<u64>,
}

impl VisitedSet {
    /// Creates a set able to track indices in `0..bits`.
    pub(crate) fn new(bits: usize) -> Self {
        Self {
            words: vec![0u64; bits.div_ceil(64)],
        }
    }

    /// Marks `index` visited. Returns `true` iff this call observed it
    /// as not-yet-visited.
    #[inline]
    pub(crate) fn try_visit(&mut self, index: usize) -> bool {
        let word = index / 64;
        let mask = 1u64 << (index % 64);
        let fresh = self.words[word] & mask == 0;
        self.words[word] |= mask;
        fresh
    }

}
