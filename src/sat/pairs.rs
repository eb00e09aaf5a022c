use std::collections::HashSet;

/// Unordered pairs of clause positions that have already been resolved.
#[derive(Debug, Clone, Default)]
pub struct ResolvedPairs {
    tried: HashSet<(usize, usize)>,
}

impl ResolvedPairs {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(i: usize, j: usize) -> (usize, usize) {
        if i <= j {
            (i, j)
        } else {
            (j, i)
        }
    }

    /// Marks the pair, returning false if it was already marked.
    pub fn mark(&mut self, i: usize, j: usize) -> bool {
        self.tried.insert(Self::key(i, j))
    }
}
