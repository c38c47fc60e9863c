//! Error types for board construction and search.

use thiserror::Error;

/// Errors raised while building a [`Board`](crate::Board) from input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// No tokens at all
    #[error("Empty board input")]
    Empty,

    /// A token that is not a non-negative integer
    #[error("Invalid token {token:?} at position {position}")]
    InvalidToken { token: String, position: usize },

    /// Wrong number of tiles for the declared dimension
    #[error("Expected {expected} tiles for dimension {dimension}, found {found}")]
    TileCount {
        dimension: usize,
        expected: usize,
        found: usize,
    },

    /// Rows of unequal length, or a row count different from the row length
    #[error("Board is not square: row {row} has {len} tiles, expected {dimension}")]
    NotSquare { row: usize, len: usize, dimension: usize },

    /// Dimension below 2 has no valid twin
    #[error("Board dimension {dimension} is too small (must be at least 2)")]
    TooSmall { dimension: usize },

    /// Tiles are not a permutation of 0..N²-1
    #[error("Tiles are not a permutation of 0..{max}: offending value {value}")]
    NotPermutation { value: u32, max: u32 },

    /// Malformed JSON board
    #[error("Invalid JSON board: {message}")]
    Json { message: String },
}

/// Errors raised by the search itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Extraction from a frontier with no nodes left
    #[error("Extract from empty frontier")]
    EmptyFrontier,

    /// Configured expansion bound reached before a verdict
    #[error("Expansion limit of {limit} reached before a verdict")]
    ExpansionLimit { limit: usize },
}

/// Result type alias for board construction
pub type BoardResult<T> = Result<T, BoardError>;

/// Result type alias for search operations
pub type SolverResult<T> = Result<T, SolverError>;
