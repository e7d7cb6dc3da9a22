use mazerun_core::Facing;

/// How the state space is explored.
///
/// Both strategies return the same [`Outcome`](crate::Outcome); they differ
/// in memory use and in how much work is repeated on ties.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Strategy {
    /// Cost-ordered priority queue with per-state predecessor sets. Optimal
    /// cells are reconstructed by walking predecessors back from the goals.
    #[default]
    Dijkstra,
    /// FIFO frontier carrying each item's path, drained completely. States
    /// are re-expanded on every equal-cost arrival.
    Exhaustive,
}

/// Parameters for one [`search`](crate::search) call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Orientation of the walker on the start cell. East by default.
    pub start_facing: Facing,
    pub strategy: Strategy,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting orientation (builder).
    #[inline]
    pub const fn with_start_facing(mut self, facing: Facing) -> Self {
        self.start_facing = facing;
        self
    }

    /// Set the exploration strategy (builder).
    #[inline]
    pub const fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}
