//! Error types for map construction, scenario parsing and exploration.

use thiserror::Error;

use crate::environment::{Movement, Pos};

/// Errors raised while building a [`GridMap`](crate::environment::GridMap)
/// from raw cells.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("grid of {rows}x{cols} needs {expected} cells, got {found}")]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        found: usize,
    },

    #[error("grid of {rows}x{cols} has more cells than can be addressed")]
    TooLarge { rows: usize, cols: usize },
}

/// Errors raised while reading a textual scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("scenario is empty, expected a `rows cols` header")]
    MissingHeader,

    #[error("invalid header {line:?}, expected `rows cols`")]
    InvalidHeader { line: String },

    #[error("scenario ended before row {row}")]
    MissingRow { row: usize },

    #[error("row {row} has {found} map cells, expected {expected}")]
    ShortRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Map(#[from] MapError),
}

/// Errors raised by the agent and the exploration loop.
#[derive(Debug, Error)]
pub enum ExploreError {
    #[error("start position {position} is out of bounds or on an obstacle")]
    InvalidStartPosition { position: Pos },

    #[error("cannot move {movement} from {from} to {to}: destination is not a legal move")]
    IllegalMoveApplication {
        movement: Movement,
        from: Pos,
        to: Pos,
    },

    #[error("failed to report step: {0}")]
    Report(#[from] std::io::Error),

    #[error("failed to write trace: {0}")]
    Trace(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ExploreError>;
