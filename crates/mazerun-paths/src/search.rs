use mazerun_core::{Grid, GridError};

use crate::config::{SearchConfig, Strategy};
use crate::error::SearchError;
use crate::state::State;
use crate::tracker::{Outcome, PathTracker};
use crate::{dijkstra, exhaustive};

/// Find the lowest cost from the start cell to any goal cell, and every cell
/// lying on at least one path of that cost.
///
/// The walker starts on the grid's single `S` cell facing
/// `config.start_facing`. A step forward costs
/// [`STEP_COST`](crate::STEP_COST) and a quarter turn in place costs
/// [`TURN_COST`](crate::TURN_COST). Paths end on the first goal cell they
/// enter.
///
/// An unreachable goal yields [`Outcome::unreachable`]; only an invalid
/// marker layout (no start, several starts, no goal) is an error. Every call
/// allocates its own tables, so concurrent calls on a shared grid are
/// independent.
pub fn search(grid: &Grid, config: &SearchConfig) -> Result<Outcome, SearchError> {
    let start = grid.find_start()?;
    if grid.goals().next().is_none() {
        return Err(GridError::MissingGoal.into());
    }
    let origin = State::new(start, config.start_facing);

    log::debug!(
        "searching {}x{} maze from {} facing {} ({:?})",
        grid.height(),
        grid.width(),
        start,
        config.start_facing,
        config.strategy
    );

    let mut tracker = PathTracker::new();
    let expanded = match config.strategy {
        Strategy::Dijkstra => dijkstra::run(grid, origin, &mut tracker),
        Strategy::Exhaustive => exhaustive::run(grid, origin, &mut tracker),
    };
    let arrivals = tracker.observed();
    let outcome = tracker.finalize();

    log::debug!(
        "expanded {expanded} states, {arrivals} goal arrivals, lowest {:?}, {} tiles",
        outcome.lowest(),
        outcome.tile_count()
    );
    Ok(outcome)
}
