use crate::geom::{Cell, Range};

/// Errors raised while building or querying a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The input contained no rows.
    #[error("maze is empty")]
    Empty,
    /// A line's width differs from the first line's.
    #[error("maze line {line} has width {found}, expected {expected}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the maze alphabet was found.
    #[error("maze contains invalid rune \u{201c}{ch}\u{201d} at {cell}")]
    InvalidChar { ch: char, cell: Cell },
    /// A lookup fell outside the grid.
    #[error("{cell} is outside the maze bounds {bounds}")]
    OutOfBounds { cell: Cell, bounds: Range },
    /// No start marker.
    #[error("maze has no start cell")]
    MissingStart,
    /// More than one start marker.
    #[error("maze has {count} start cells, expected exactly one")]
    MultipleStarts { count: usize },
    /// No goal marker.
    #[error("maze has no goal cell")]
    MissingGoal,
}

impl GridError {
    /// Whether this error describes an invalid marker layout rather than
    /// malformed text or a bad lookup.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingStart | Self::MultipleStarts { .. } | Self::MissingGoal
        )
    }
}
