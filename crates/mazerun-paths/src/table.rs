use mazerun_core::{Facing, Range};

use crate::state::{Cost, State};

/// Sentinel meaning "not reached" in a [`CostTable`].
pub const UNREACHED: Cost = Cost::MAX;

// ---------------------------------------------------------------------------
// State indexing
// ---------------------------------------------------------------------------

/// Maps states on a fixed range to dense indices: four slots per cell, one
/// per facing.
#[derive(Copy, Clone, Debug)]
pub(crate) struct StateIndex {
    rng: Range,
}

impl StateIndex {
    pub(crate) fn new(rng: Range) -> Self {
        Self { rng }
    }

    /// Number of distinct states.
    #[inline]
    pub(crate) fn len(self) -> usize {
        self.rng.len() * 4
    }

    /// Flat index of `s`, or `None` if its cell is out of range.
    #[inline]
    pub(crate) fn idx(self, s: State) -> Option<usize> {
        self.rng.index(s.cell).map(|i| i * 4 + s.facing.index())
    }

    /// Convert a flat index back to a state.
    #[inline]
    pub(crate) fn state(self, idx: usize) -> State {
        State::new(self.rng.cell(idx / 4), Facing::from_index(idx % 4))
    }
}

// ---------------------------------------------------------------------------
// CostTable
// ---------------------------------------------------------------------------

/// Result of offering a cost to a [`CostTable`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Relax {
    /// First arrival, or strictly cheaper than the recorded cost.
    Improved,
    /// Same cost as recorded.
    Tied,
    /// Strictly more expensive; the table is unchanged.
    Worse,
}

/// Best known cost per state.
///
/// A recorded cost never increases: [`relax`](Self::relax) only writes when
/// the offered cost is lower than or equal to what is stored.
#[derive(Clone, Debug)]
pub struct CostTable {
    costs: Vec<Cost>,
}

impl CostTable {
    /// A table of `len` unreached states.
    pub fn new(len: usize) -> Self {
        Self {
            costs: vec![UNREACHED; len],
        }
    }

    /// Recorded cost of state `idx`, [`UNREACHED`] if none.
    #[inline]
    pub fn get(&self, idx: usize) -> Cost {
        self.costs[idx]
    }

    /// Offer `cost` for state `idx`.
    #[inline]
    pub fn relax(&mut self, idx: usize, cost: Cost) -> Relax {
        let slot = &mut self.costs[idx];
        if cost < *slot {
            *slot = cost;
            Relax::Improved
        } else if cost == *slot {
            Relax::Tied
        } else {
            Relax::Worse
        }
    }
}

// ---------------------------------------------------------------------------
// Priority-queue entry
// ---------------------------------------------------------------------------

/// Reference into a state table, ordered by cost for use in `BinaryHeap`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) cost: Cost,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the cheapest first; ties
        // break on index to keep pop order deterministic.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
