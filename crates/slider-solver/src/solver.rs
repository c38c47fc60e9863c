//! Dual-track A* search over sliding-tile boards.
//!
//! The original board and its twin are searched in lockstep, one expansion
//! each per round. A board and its twin never share solvability (a parity
//! property of the sliding-tile puzzle, assumed here rather than computed),
//! so exactly one track can reach the goal and whichever does first decides
//! the verdict.

use std::collections::HashSet;
use std::time::Instant;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::board::{Board, Heuristic};
use crate::error::{SolverError, SolverResult};
use crate::frontier::PriorityFrontier;
use crate::node::{NodeArena, NodeId, SearchNode};

/// Configuration for the solver
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolverConfig {
    /// Frontier ordering
    pub heuristic: Heuristic,
    /// Skip boards already expanded on the same track
    pub closed_set: bool,
    /// Maximum expansions over both tracks before giving up
    pub max_expansions: Option<usize>,
}

/// Outcome of the search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// The original track reached the goal
    Solvable,
    /// The twin track reached the goal
    Unsolvable,
}

/// Counters collected during the search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolverStats {
    /// Nodes expanded on both tracks
    pub expanded: usize,
    /// Nodes inserted into both frontiers, roots included
    pub enqueued: u64,
    pub time_elapsed_ms: u64,
}

enum Step {
    Goal(NodeId),
    Expanded,
}

/// One search: a frontier, the arena of nodes taken out of it, and the
/// optional set of boards already expanded.
struct Track {
    frontier: PriorityFrontier,
    arena: NodeArena,
    closed: Option<HashSet<Board>>,
}

impl Track {
    fn new(root: Board, config: &SolverConfig) -> Self {
        let mut frontier = PriorityFrontier::new(config.heuristic);
        frontier.insert(SearchNode::root(root));
        Self {
            frontier,
            arena: NodeArena::new(),
            closed: config.closed_set.then(HashSet::new),
        }
    }

    fn next_node(&mut self) -> SolverResult<SearchNode> {
        loop {
            let node = self.frontier.extract_min()?;
            match &self.closed {
                Some(closed) if closed.contains(&node.board) => continue,
                _ => return Ok(node),
            }
        }
    }

    fn step(&mut self, expanded: &mut usize, limit: Option<usize>) -> SolverResult<Step> {
        let node = self.next_node()?;
        let id = self.arena.push(node);
        let board = &self.arena.get(id).board;
        if board.is_goal() {
            return Ok(Step::Goal(id));
        }

        if let Some(limit) = limit {
            if *expanded >= limit {
                return Err(SolverError::ExpansionLimit { limit });
            }
        }
        *expanded += 1;
        trace!(
            "Expanding node {} (moves {}, key {})",
            id.index(),
            board.moves(),
            self.frontier.heuristic().score(board)
        );

        // Only one neighbor can match the parent layout
        let parent = self.arena.parent_board(id);
        for neighbor in board.neighbors() {
            if parent == Some(&neighbor) {
                continue;
            }
            self.frontier.insert(SearchNode::child(neighbor, id));
        }

        if let Some(closed) = self.closed.as_mut() {
            closed.insert(board.clone());
        }
        Ok(Step::Expanded)
    }
}

/// Result of solving one board.
///
/// The search runs to completion inside [`Solver::new`] /
/// [`Solver::with_config`]; the queries only read the recorded outcome.
pub struct Solver {
    verdict: Verdict,
    /// Nodes of the original track; holds the whole solution chain
    arena: NodeArena,
    goal: Option<NodeId>,
    stats: SolverStats,
}

impl Solver {
    /// Solve with the default configuration.
    pub fn new(initial: Board) -> SolverResult<Self> {
        Self::with_config(initial, &SolverConfig::default())
    }

    /// Solve `initial`, alternating one step on the original track and one
    /// on the twin track until either pops a goal board.
    ///
    /// # Errors
    ///
    /// [`SolverError::ExpansionLimit`] when `config.max_expansions` is hit
    /// before a verdict.
    pub fn with_config(initial: Board, config: &SolverConfig) -> SolverResult<Self> {
        let start_time = Instant::now();
        debug!(
            "Solving {}x{} board with {:?} heuristic (closed set: {})",
            initial.dimension(),
            initial.dimension(),
            config.heuristic,
            config.closed_set
        );

        let twin_root = initial.twin();
        let mut original = Track::new(initial, config);
        let mut twin = Track::new(twin_root, config);
        let mut expanded = 0;

        let (verdict, goal) = loop {
            if let Step::Goal(id) = original.step(&mut expanded, config.max_expansions)? {
                break (Verdict::Solvable, Some(id));
            }
            if let Step::Goal(_) = twin.step(&mut expanded, config.max_expansions)? {
                break (Verdict::Unsolvable, None);
            }
        };

        let stats = SolverStats {
            expanded,
            enqueued: original.frontier.inserted() + twin.frontier.inserted(),
            time_elapsed_ms: start_time.elapsed().as_millis() as u64,
        };
        debug!(
            "Verdict {:?} after {} expansions, {} enqueued, {} ms",
            verdict, stats.expanded, stats.enqueued, stats.time_elapsed_ms
        );

        Ok(Self {
            verdict,
            arena: original.arena,
            goal,
            stats,
        })
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn is_solvable(&self) -> bool {
        self.verdict == Verdict::Solvable
    }

    /// Edges from the initial board to the goal, `None` if unsolvable
    pub fn moves(&self) -> Option<usize> {
        self.goal.map(|id| self.arena.depth(id))
    }

    /// Boards from the initial board to the goal, `None` if unsolvable
    pub fn solution(&self) -> Option<Vec<Board>> {
        self.goal.map(|id| self.arena.path_to(id))
    }

    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }
}
