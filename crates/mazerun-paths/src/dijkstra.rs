use std::collections::BinaryHeap;

use mazerun_core::{Cell, Facing, Grid, Terrain};

use crate::state::{State, Transition};
use crate::table::{CostTable, NodeRef, Relax, StateIndex, UNREACHED};
use crate::tracker::PathTracker;

/// Cost-ordered search from `origin`, reporting every reached goal state to
/// `tracker`. Returns the number of states expanded.
///
/// Each state keeps a mask of the inbound transitions that achieve its best
/// cost. Goal states are recorded but never expanded. Once the cheapest
/// queued state costs at least as much as the best goal, no cheaper or tied
/// arrival is possible and the queue is abandoned.
pub(crate) fn run(grid: &Grid, origin: State, tracker: &mut PathTracker) -> usize {
    let index = StateIndex::new(grid.bounds());
    let Some(oi) = index.idx(origin) else {
        return 0;
    };

    let mut costs = CostTable::new(index.len());
    let mut preds = vec![0u8; index.len()];
    let mut best_goal = UNREACHED;
    let mut expanded = 0;

    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    costs.relax(oi, 0);
    open.push(NodeRef { idx: oi, cost: 0 });

    while let Some(current) = open.pop() {
        // Skip stale entries.
        if current.cost > costs.get(current.idx) {
            continue;
        }
        if current.cost >= best_goal {
            break;
        }
        expanded += 1;
        let cs = index.state(current.idx);

        for t in Transition::ALL {
            let next = t.apply(cs);
            let Some(terrain) = grid.get(next.cell) else {
                continue;
            };
            if !terrain.is_passable() {
                continue;
            }
            let Some(ni) = index.idx(next) else {
                continue;
            };
            let cost = current.cost + t.cost();
            match costs.relax(ni, cost) {
                Relax::Worse => {}
                Relax::Tied => preds[ni] |= t.bit(),
                Relax::Improved => {
                    preds[ni] = t.bit();
                    if terrain == Terrain::Goal {
                        best_goal = best_goal.min(cost);
                    } else {
                        open.push(NodeRef { idx: ni, cost });
                    }
                }
            }
        }
    }

    for goal in grid.goals() {
        for facing in Facing::ALL {
            let Some(gi) = index.idx(State::new(goal, facing)) else {
                continue;
            };
            let cost = costs.get(gi);
            if cost == UNREACHED {
                continue;
            }
            log::trace!("goal arrival at {goal} facing {facing}, cost {cost}");
            tracker.observe(cost, trace_back(index, &preds, gi));
        }
    }

    expanded
}

/// Cells of every state from which `from` is reachable along recorded
/// predecessor transitions, `from` included.
fn trace_back(index: StateIndex, preds: &[u8], from: usize) -> Vec<Cell> {
    let mut seen = vec![false; index.len()];
    let mut stack = vec![from];
    let mut cells = Vec::new();
    seen[from] = true;

    while let Some(i) = stack.pop() {
        let s = index.state(i);
        cells.push(s.cell);
        for t in Transition::ALL {
            if preds[i] & t.bit() == 0 {
                continue;
            }
            let Some(pi) = index.idx(t.undo(s)) else {
                continue;
            };
            if !seen[pi] {
                seen[pi] = true;
                stack.push(pi);
            }
        }
    }

    cells
}
