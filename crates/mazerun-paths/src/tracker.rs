//! Tie-aware accumulation of goal arrivals.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use mazerun_core::Cell;

use crate::state::Cost;

/// Final answer of a search: the lowest cost to any goal and every cell that
/// lies on at least one path achieving it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    lowest: Option<Cost>,
    tiles: BTreeSet<Cell>,
}

impl Outcome {
    /// The result of a search that never reached a goal.
    pub fn unreachable() -> Self {
        Self::default()
    }

    /// Lowest total cost, `None` when no goal is reachable.
    #[inline]
    pub fn lowest(&self) -> Option<Cost> {
        self.lowest
    }

    /// Whether any goal was reached.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.lowest.is_some()
    }

    /// Cells on any lowest-cost path, row-major.
    #[inline]
    pub fn tiles(&self) -> &BTreeSet<Cell> {
        &self.tiles
    }

    /// Number of cells on any lowest-cost path.
    #[inline]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn into_tiles(self) -> BTreeSet<Cell> {
        self.tiles
    }
}

/// Collects goal arrivals and keeps the union of the cheapest ones.
///
/// The tracker is the only writer of the result set. Arrivals may come in
/// any order: a cheaper arrival discards everything gathered so far.
#[derive(Debug, Default)]
pub struct PathTracker {
    lowest: Option<Cost>,
    tiles: BTreeSet<Cell>,
    observed: usize,
}

impl PathTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one goal arrival of total `cost` along `cells`.
    pub fn observe<I>(&mut self, cost: Cost, cells: I)
    where
        I: IntoIterator<Item = Cell>,
    {
        self.observed += 1;
        let ord = match self.lowest {
            None => Ordering::Less,
            Some(lowest) => cost.cmp(&lowest),
        };
        match ord {
            Ordering::Less => {
                log::trace!("new lowest cost {cost}");
                self.lowest = Some(cost);
                self.tiles.clear();
                self.tiles.extend(cells);
            }
            Ordering::Equal => self.tiles.extend(cells),
            Ordering::Greater => {}
        }
    }

    /// Lowest cost seen so far.
    #[inline]
    pub fn lowest(&self) -> Option<Cost> {
        self.lowest
    }

    /// Number of arrivals observed, including discarded ones.
    #[inline]
    pub fn observed(&self) -> usize {
        self.observed
    }

    /// Consume the tracker and return the accumulated answer.
    pub fn finalize(self) -> Outcome {
        match self.lowest {
            Some(_) => Outcome {
                lowest: self.lowest,
                tiles: self.tiles,
            },
            None => Outcome::unreachable(),
        }
    }
}
