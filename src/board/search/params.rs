/// Depth used when nothing else is configured, in plies.
pub const DEFAULT_DEPTH: u32 = 5;

/// Whether sibling moves may be cut off once they can no longer matter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Pruning {
    #[default]
    AlphaBeta,
    /// Visit every node. Slow; used as a reference for the pruned search.
    None,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u32,
    pub pruning: Pruning,
    /// Shuffle the root moves so equal options do not always resolve the
    /// same way.
    pub shuffle_root: bool,
    /// Seed for the root shuffle; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            pruning: Pruning::AlphaBeta,
            shuffle_root: true,
            seed: None,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    #[must_use]
    pub fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }

    #[must_use]
    pub fn with_shuffle(mut self, shuffle_root: bool) -> Self {
        self.shuffle_root = shuffle_root;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
