//! Turn-weighted search over facing-aware maze grids.
//!
//! A walker stands on a [`Cell`](mazerun_core::Cell) facing one of the four
//! cardinal directions. Stepping forward costs [`STEP_COST`]; a quarter turn
//! in place costs [`TURN_COST`]. [`search`] finds the lowest total cost from
//! the start cell to any goal cell together with **every** cell that lies on
//! some path of that cost, not just one of them.
//!
//! Two exploration strategies are available through [`SearchConfig`]:
//!
//! | Strategy | Frontier | Tie recovery |
//! |---|---|---|
//! | [`Strategy::Dijkstra`] | cost-ordered heap | predecessor sets, walked back from the goals |
//! | [`Strategy::Exhaustive`] | FIFO, drained completely | full paths carried on every item |
//!
//! Goal arrivals from either strategy are merged by a [`PathTracker`].

mod config;
mod dijkstra;
mod error;
mod exhaustive;
mod search;
mod state;
mod table;
mod tracker;

pub use config::{SearchConfig, Strategy};
pub use error::SearchError;
pub use search::search;
pub use state::{Cost, STEP_COST, State, TURN_COST, Transition, transition_cost};
pub use table::{CostTable, Relax, UNREACHED};
pub use tracker::{Outcome, PathTracker};
