//! Search states and the transitions between them.

use mazerun_core::{Cell, Facing};

/// Accumulated path cost.
pub type Cost = u64;

/// Cost of stepping one cell forward.
pub const STEP_COST: Cost = 1;

/// Cost of a quarter turn in place.
pub const TURN_COST: Cost = 1000;

/// A walker's position and orientation. Distinct facings on the same cell
/// are distinct states.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct State {
    pub cell: Cell,
    pub facing: Facing,
}

impl State {
    #[inline]
    pub const fn new(cell: Cell, facing: Facing) -> Self {
        Self { cell, facing }
    }

    /// One cell ahead, same facing. Passability is not checked.
    #[inline]
    pub const fn forward(self) -> Self {
        Self::new(self.cell.step(self.facing), self.facing)
    }

    /// The two quarter turns in place: left then right.
    #[inline]
    pub const fn turns(self) -> [Self; 2] {
        [
            Self::new(self.cell, self.facing.left()),
            Self::new(self.cell, self.facing.right()),
        ]
    }
}

/// One edge of the state graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    Forward,
    TurnLeft,
    TurnRight,
}

impl Transition {
    /// Every transition, in expansion order.
    pub const ALL: [Transition; 3] = [
        Transition::Forward,
        Transition::TurnLeft,
        Transition::TurnRight,
    ];

    #[inline]
    pub const fn cost(self) -> Cost {
        match self {
            Transition::Forward => STEP_COST,
            Transition::TurnLeft | Transition::TurnRight => TURN_COST,
        }
    }

    /// The state reached by taking this transition from `s`.
    #[inline]
    pub const fn apply(self, s: State) -> State {
        match self {
            Transition::Forward => s.forward(),
            Transition::TurnLeft => State::new(s.cell, s.facing.left()),
            Transition::TurnRight => State::new(s.cell, s.facing.right()),
        }
    }

    /// The state from which this transition leads to `s`.
    #[inline]
    pub const fn undo(self, s: State) -> State {
        match self {
            Transition::Forward => State::new(s.cell.step(s.facing.reverse()), s.facing),
            Transition::TurnLeft => State::new(s.cell, s.facing.right()),
            Transition::TurnRight => State::new(s.cell, s.facing.left()),
        }
    }

    /// Single-bit mask used in predecessor sets.
    #[inline]
    pub(crate) const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Cost of moving from `from` to `to` in one transition, or `None` if no
/// single transition connects them.
pub fn transition_cost(from: State, to: State) -> Option<Cost> {
    Transition::ALL
        .into_iter()
        .find(|t| t.apply(from) == to)
        .map(Transition::cost)
}
