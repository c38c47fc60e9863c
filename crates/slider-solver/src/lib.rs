//! Sliding-tile puzzle solver.
//!
//! This crate decides whether an N×N sliding-tile board can be solved and,
//! if so, finds a shortest sequence of boards leading to the goal. The
//! search runs A* on the board and on its twin side by side; the first of
//! the two to reach the goal settles solvability.

pub mod board;
pub mod error;
pub mod frontier;
pub mod node;
pub mod parse;
pub mod solver;

// Re-export main types
pub use board::{Board, Direction, Heuristic, BLANK};
pub use error::{BoardError, BoardResult, SolverError, SolverResult};
pub use frontier::PriorityFrontier;
pub use node::{NodeArena, NodeId, SearchNode};
pub use parse::{parse_any, parse_board, parse_json_board, BoardConfig};
pub use solver::{Solver, SolverConfig, SolverStats, Verdict};
