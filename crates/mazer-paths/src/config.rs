use crate::heuristic::Heuristic;

/// Options for a maze search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub heuristic: Heuristic,
    /// Give up after this many node expansions. `None` searches until the
    /// frontier is exhausted.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Config using `heuristic` and no expansion cap.
    pub fn new(heuristic: Heuristic) -> Self {
        Self {
            heuristic,
            max_expansions: None,
        }
    }

    /// Set the expansion cap (builder).
    pub fn with_max_expansions(mut self, cap: usize) -> Self {
        self.max_expansions = Some(cap);
        self
    }
}
