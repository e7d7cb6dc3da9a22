use mazerun_core::GridError;

/// Errors returned by [`search`](crate::search).
///
/// An unreachable goal is not an error; see
/// [`Outcome::unreachable`](crate::Outcome::unreachable).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The grid's markers do not describe a searchable maze.
    #[error("invalid maze configuration")]
    Grid(#[from] GridError),
}
