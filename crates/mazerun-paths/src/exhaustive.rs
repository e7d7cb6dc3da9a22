use std::collections::VecDeque;
use std::rc::Rc;

use mazerun_core::{Cell, Grid, Terrain};

use crate::state::{Cost, State, Transition};
use crate::table::{CostTable, Relax, StateIndex};
use crate::tracker::PathTracker;

/// One link of a path, newest cell first. Branches share their common
/// prefix.
struct Trail {
    cell: Cell,
    prev: Option<Rc<Trail>>,
}

impl Trail {
    fn extend(prev: &Rc<Trail>, cell: Cell) -> Rc<Trail> {
        Rc::new(Trail {
            cell,
            prev: Some(Rc::clone(prev)),
        })
    }

    /// Cells from this link back to the start.
    fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        std::iter::successors(Some(self), |t| t.prev.as_deref()).map(|t| t.cell)
    }
}

impl Drop for Trail {
    // Unlink iteratively; long trails would otherwise recurse once per cell.
    fn drop(&mut self) {
        let mut prev = self.prev.take();
        while let Some(rc) = prev {
            match Rc::try_unwrap(rc) {
                Ok(mut t) => prev = t.prev.take(),
                Err(_) => break,
            }
        }
    }
}

struct Item {
    state: State,
    cost: Cost,
    trail: Rc<Trail>,
}

/// FIFO relaxation from `origin`, drained completely. Every goal arrival is
/// reported to `tracker` with the path that produced it. Returns the number
/// of items expanded.
///
/// Arrivals at equal cost are queued again so that every tied path reaches
/// the goal; strictly worse arrivals are dropped.
pub(crate) fn run(grid: &Grid, origin: State, tracker: &mut PathTracker) -> usize {
    let index = StateIndex::new(grid.bounds());
    let Some(oi) = index.idx(origin) else {
        return 0;
    };

    let mut costs = CostTable::new(index.len());
    let mut queue: VecDeque<Item> = VecDeque::new();
    let mut expanded = 0;

    costs.relax(oi, 0);
    queue.push_back(Item {
        state: origin,
        cost: 0,
        trail: Rc::new(Trail {
            cell: origin.cell,
            prev: None,
        }),
    });

    while let Some(item) = queue.pop_front() {
        // A cheaper arrival was queued after this one.
        if let Some(ci) = index.idx(item.state) {
            if item.cost > costs.get(ci) {
                continue;
            }
        }
        expanded += 1;

        for t in Transition::ALL {
            let next = t.apply(item.state);
            let Some(terrain) = grid.get(next.cell) else {
                continue;
            };
            if !terrain.is_passable() {
                continue;
            }
            let cost = item.cost + t.cost();

            if terrain == Terrain::Goal {
                let trail = Trail::extend(&item.trail, next.cell);
                log::trace!("goal arrival at {} facing {}, cost {cost}", next.cell, next.facing);
                tracker.observe(cost, trail.cells());
                continue;
            }

            let Some(ni) = index.idx(next) else {
                continue;
            };
            if costs.relax(ni, cost) == Relax::Worse {
                continue;
            }
            queue.push_back(Item {
                state: next,
                cost,
                trail: Trail::extend(&item.trail, next.cell),
            });
        }
    }

    expanded
}
