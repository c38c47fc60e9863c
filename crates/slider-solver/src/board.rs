//! Sliding-tile board representation and heuristic scores.
//!
//! A [`Board`] is an immutable N×N snapshot plus the number of moves taken
//! to reach it. Both scores fold that move count in, so ordering boards by
//! [`Board::manhattan`] is the A* evaluation `g + h`.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{BoardError, BoardResult};

/// Label of the blank cell
pub const BLANK: u32 = 0;

/// Direction the blank travels when producing a neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Up,
    Left,
    Right,
}

impl Direction {
    /// Neighbor generation order
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Left,
        Direction::Right,
    ];

    /// (row, col) delta applied to the blank
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Score used to order the search frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Heuristic {
    #[default]
    Manhattan,
    Hamming,
}

impl Heuristic {
    /// Priority of a board, path cost included
    pub fn score(self, board: &Board) -> u32 {
        match self {
            Heuristic::Manhattan => board.manhattan(),
            Heuristic::Hamming => board.hamming(),
        }
    }
}

/// An N×N sliding-tile configuration tagged with its move count.
///
/// Equality and hashing only look at the layout: two boards reached by
/// different paths compare equal.
#[derive(Debug, Clone)]
pub struct Board {
    dimension: usize,
    /// Row-major labels, a permutation of 0..N²
    tiles: Vec<u32>,
    moves: u32,
}

impl Board {
    /// Build a board from rows of labels (moves = 0).
    ///
    /// # Errors
    ///
    /// Returns an error when the grid is not square, smaller than 2×2, or
    /// not a permutation of `0..N²`.
    pub fn new(rows: Vec<Vec<u32>>) -> BoardResult<Self> {
        let dimension = rows.len();
        if dimension == 0 {
            return Err(BoardError::Empty);
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != dimension {
                return Err(BoardError::NotSquare {
                    row,
                    len: cells.len(),
                    dimension,
                });
            }
        }
        Self::from_tiles(dimension, rows.into_iter().flatten().collect())
    }

    /// Build a board from a flat row-major tile vector (moves = 0).
    pub fn from_tiles(dimension: usize, tiles: Vec<u32>) -> BoardResult<Self> {
        if dimension < 2 {
            return Err(BoardError::TooSmall { dimension });
        }
        let expected = dimension.checked_mul(dimension).unwrap_or(usize::MAX);
        if tiles.len() != expected {
            return Err(BoardError::TileCount {
                dimension,
                expected,
                found: tiles.len(),
            });
        }

        let max = (expected - 1) as u32;
        let mut seen = vec![false; expected];
        for &value in &tiles {
            match seen.get_mut(value as usize) {
                Some(slot) if !*slot => *slot = true,
                _ => return Err(BoardError::NotPermutation { value, max }),
            }
        }

        Ok(Self {
            dimension,
            tiles,
            moves: 0,
        })
    }

    /// The solved board of the given dimension.
    pub fn goal(dimension: usize) -> BoardResult<Self> {
        let cells = dimension.saturating_mul(dimension).min(u32::MAX as usize);
        let tiles = (1..cells as u32).chain(std::iter::once(BLANK)).collect();
        Self::from_tiles(dimension, tiles)
    }

    /// Side length N
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Moves taken from the originating root
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn tile(&self, row: usize, col: usize) -> u32 {
        self.tiles[row * self.dimension + col]
    }

    /// Copy of the grid as rows
    pub fn rows(&self) -> Vec<Vec<u32>> {
        self.tiles
            .chunks(self.dimension)
            .map(<[u32]>::to_vec)
            .collect()
    }

    /// (row, col) of the blank
    pub fn blank(&self) -> (usize, usize) {
        let index = self
            .tiles
            .iter()
            .position(|&value| value == BLANK)
            .unwrap_or(self.tiles.len() - 1);
        (index / self.dimension, index % self.dimension)
    }

    /// Label expected at a cell in the solved board
    fn goal_value(&self, index: usize) -> u32 {
        if index == self.tiles.len() - 1 {
            BLANK
        } else {
            index as u32 + 1
        }
    }

    /// Moves plus the number of non-blank tiles out of place.
    pub fn hamming(&self) -> u32 {
        let misplaced = self
            .tiles
            .iter()
            .enumerate()
            .filter(|&(index, &value)| value != BLANK && value != self.goal_value(index))
            .count() as u32;
        self.moves + misplaced
    }

    /// Moves plus the summed row and column distance of every non-blank
    /// tile to its goal cell.
    pub fn manhattan(&self) -> u32 {
        let n = self.dimension;
        let distance: usize = self
            .tiles
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != BLANK)
            .map(|(index, &value)| {
                let target = value as usize - 1;
                (index / n).abs_diff(target / n) + (index % n).abs_diff(target % n)
            })
            .sum();
        self.moves + distance as u32
    }

    pub fn is_goal(&self) -> bool {
        self.tiles
            .iter()
            .enumerate()
            .all(|(index, &value)| value == self.goal_value(index))
    }

    /// Copy with two non-blank tiles of one row exchanged.
    ///
    /// Uses row 0 unless the blank sits in one of its first two cells, then
    /// row 1; always swaps columns 0 and 1. A board and its twin never
    /// share solvability.
    pub fn twin(&self) -> Board {
        let n = self.dimension;
        let row = if self.tiles[0] == BLANK || self.tiles[1] == BLANK {
            1
        } else {
            0
        };
        self.swapped(row * n, row * n + 1, self.moves)
    }

    /// Boards one blank slide away, in [`Direction::ALL`] order.
    pub fn neighbors(&self) -> SmallVec<[Board; 4]> {
        let n = self.dimension as isize;
        let (row, col) = self.blank();
        let blank = row * self.dimension + col;

        Direction::ALL
            .iter()
            .filter_map(|direction| {
                let (dr, dc) = direction.delta();
                let r = row as isize + dr;
                let c = col as isize + dc;
                if r < 0 || r >= n || c < 0 || c >= n {
                    return None;
                }
                let target = (r * n + c) as usize;
                Some(self.swapped(blank, target, self.moves + 1))
            })
            .collect()
    }

    fn swapped(&self, a: usize, b: usize, moves: u32) -> Board {
        let mut tiles = self.tiles.clone();
        tiles.swap(a, b);
        Board {
            dimension: self.dimension,
            tiles,
            moves,
        }
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension && self.tiles == other.tiles
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dimension.hash(state);
        self.tiles.hash(state);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.tiles.len() - 1).to_string().len();
        writeln!(f, "{}", self.dimension)?;
        for row in self.tiles.chunks(self.dimension) {
            for &value in row {
                write!(f, " {:>width$}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&[u32]]) -> Board {
        Board::new(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    fn samples() -> Vec<Board> {
        vec![
            board(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 0]]),
            board(&[&[0, 1, 3], &[4, 2, 5], &[7, 8, 6]]),
            board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]),
            board(&[&[2, 1, 3], &[4, 5, 6], &[7, 8, 0]]),
            board(&[&[1, 2], &[0, 3]]),
            board(&[&[5, 1, 8, 0], &[2, 6, 4, 3], &[9, 10, 7, 11], &[13, 14, 15, 12]]),
        ]
    }

    #[test]
    fn test_rejects_invalid_grids() {
        assert_eq!(
            Board::new(vec![vec![1, 2], vec![3]]),
            Err(BoardError::NotSquare {
                row: 1,
                len: 1,
                dimension: 2
            })
        );
        assert_eq!(
            Board::new(vec![vec![0]]),
            Err(BoardError::TooSmall { dimension: 1 })
        );
        assert_eq!(
            Board::new(vec![vec![1, 1], vec![2, 0]]),
            Err(BoardError::NotPermutation { value: 1, max: 3 })
        );
        assert_eq!(
            Board::new(vec![vec![1, 4], vec![2, 0]]),
            Err(BoardError::NotPermutation { value: 4, max: 3 })
        );
        assert_eq!(Board::new(vec![]), Err(BoardError::Empty));
    }

    #[test]
    fn test_huge_dimension_reports_tile_count() {
        assert_eq!(
            Board::from_tiles(usize::MAX, vec![1, 2, 3, 0]),
            Err(BoardError::TileCount {
                dimension: usize::MAX,
                expected: usize::MAX,
                found: 4
            })
        );
        assert_eq!(
            Board::from_tiles(1 << 40, vec![]),
            Err(BoardError::TileCount {
                dimension: 1 << 40,
                expected: usize::MAX,
                found: 0
            })
        );
    }

    #[test]
    fn test_goal_board() {
        let goal = Board::goal(3).unwrap();
        assert!(goal.is_goal());
        assert_eq!(goal, board(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 0]]));
        assert_eq!(goal.blank(), (2, 2));
        assert_eq!(goal.tile(2, 1), 8);
        assert_eq!(goal.tile(2, 2), BLANK);
        assert_eq!(goal.hamming(), 0);
        assert_eq!(goal.manhattan(), 0);
    }

    #[test]
    fn test_scores() {
        let b = board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]);
        assert_eq!(b.hamming(), 5);
        assert_eq!(b.manhattan(), 10);

        let shifted = board(&[&[0, 1, 3], &[4, 2, 5], &[7, 8, 6]]);
        assert_eq!(shifted.hamming(), 4);
        assert_eq!(shifted.manhattan(), 4);
    }

    #[test]
    fn test_scores_include_moves() {
        let b = board(&[&[1, 2, 3], &[4, 5, 6], &[7, 0, 8]]);
        for neighbor in b.neighbors() {
            assert_eq!(neighbor.moves(), 1);
            let base = Board::from_tiles(3, neighbor.rows().concat()).unwrap();
            assert_eq!(neighbor.manhattan(), base.manhattan() + 1);
            assert_eq!(neighbor.hamming(), base.hamming() + 1);
        }
    }

    #[test]
    fn test_manhattan_dominates_hamming() {
        for b in samples() {
            assert!(b.manhattan() >= b.hamming(), "{b}");
            for neighbor in b.neighbors() {
                assert!(neighbor.manhattan() >= neighbor.hamming());
            }
        }
    }

    #[test]
    fn test_is_goal_matches_scores() {
        for b in samples() {
            let zero_cost = b.hamming() == b.moves() && b.manhattan() == b.moves();
            assert_eq!(b.is_goal(), zero_cost);
            for neighbor in b.neighbors() {
                let zero_cost = neighbor.hamming() == neighbor.moves()
                    && neighbor.manhattan() == neighbor.moves();
                assert_eq!(neighbor.is_goal(), zero_cost);
            }
        }
    }

    #[test]
    fn test_twin_swaps_first_row() {
        let b = board(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 0]]);
        assert_eq!(b.twin(), board(&[&[2, 1, 3], &[4, 5, 6], &[7, 8, 0]]));
        assert!(!b.twin().is_goal());
    }

    #[test]
    fn test_twin_uses_second_row_when_blank_in_first() {
        let b = board(&[&[0, 1, 3], &[4, 2, 5], &[7, 8, 6]]);
        assert_eq!(b.twin(), board(&[&[0, 1, 3], &[2, 4, 5], &[7, 8, 6]]));

        let b = board(&[&[1, 0], &[2, 3]]);
        assert_eq!(b.twin(), board(&[&[1, 0], &[3, 2]]));
    }

    #[test]
    fn test_twin_preserves_moves_and_is_involution() {
        for b in samples() {
            for neighbor in b.neighbors() {
                let twin = neighbor.twin();
                assert_eq!(twin.moves(), neighbor.moves());
                assert_ne!(twin, neighbor);
                assert_eq!(twin.twin(), neighbor);
            }
        }
    }

    #[test]
    fn test_equality_ignores_moves() {
        let b = board(&[&[1, 2, 3], &[4, 5, 6], &[7, 0, 8]]);
        let back = b
            .neighbors()
            .into_iter()
            .flat_map(|n| n.neighbors())
            .find(|n| *n == b)
            .unwrap();
        assert_eq!(back.moves(), 2);
        assert_eq!(back, b);
        assert_eq!(b, back);

        let copy = b.clone();
        assert_eq!(b, b);
        assert_eq!(back, copy);
        assert_eq!(b, copy);

        assert_ne!(b, Board::goal(3).unwrap());
        assert_ne!(Board::goal(2).unwrap(), Board::goal(3).unwrap());
    }

    #[test]
    fn test_neighbor_order() {
        let b = board(&[&[1, 2, 3], &[4, 0, 5], &[6, 7, 8]]);
        let neighbors = b.neighbors();
        assert_eq!(neighbors.len(), 4);
        assert_eq!(neighbors[0], board(&[&[1, 2, 3], &[4, 7, 5], &[6, 0, 8]]));
        assert_eq!(neighbors[1], board(&[&[1, 0, 3], &[4, 2, 5], &[6, 7, 8]]));
        assert_eq!(neighbors[2], board(&[&[1, 2, 3], &[0, 4, 5], &[6, 7, 8]]));
        assert_eq!(neighbors[3], board(&[&[1, 2, 3], &[4, 5, 0], &[6, 7, 8]]));
    }

    #[test]
    fn test_corner_has_two_neighbors() {
        let goal = Board::goal(4).unwrap();
        let neighbors = goal.neighbors();
        assert_eq!(neighbors.len(), 2);
        assert_eq!(neighbors[0].blank(), (2, 3));
        assert_eq!(neighbors[1].blank(), (3, 2));
    }

    #[test]
    fn test_neighbors_round_trip() {
        for b in samples() {
            for neighbor in b.neighbors() {
                let matches = neighbor.neighbors().iter().filter(|n| **n == b).count();
                assert_eq!(matches, 1);
            }
        }
    }

    #[test]
    fn test_display() {
        let b = board(&[&[1, 2], &[3, 0]]);
        assert_eq!(b.to_string(), "2\n 1 2\n 3 0\n");

        let wide = Board::goal(4).unwrap();
        assert!(wide.to_string().starts_with("4\n  1  2  3  4\n"));
    }

    #[test]
    fn test_heuristic_score() {
        let b = board(&[&[8, 1, 3], &[4, 0, 2], &[7, 6, 5]]);
        assert_eq!(Heuristic::default(), Heuristic::Manhattan);
        assert_eq!(Heuristic::Manhattan.score(&b), 10);
        assert_eq!(Heuristic::Hamming.score(&b), 5);
    }
}
