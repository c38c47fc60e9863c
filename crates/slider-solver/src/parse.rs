//! Board input formats.
//!
//! Text: an integer N followed by N² tiles in row-major order, separated by
//! any whitespace. JSON: `{"tiles": [[1, 2], [3, 0]]}`.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::{BoardError, BoardResult};

/// JSON form of a board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    pub tiles: Vec<Vec<u32>>,
}

impl TryFrom<BoardConfig> for Board {
    type Error = BoardError;

    fn try_from(config: BoardConfig) -> BoardResult<Board> {
        Board::new(config.tiles)
    }
}

impl From<&Board> for BoardConfig {
    fn from(board: &Board) -> Self {
        Self {
            tiles: board.rows(),
        }
    }
}

/// Parse the text format.
///
/// # Errors
///
/// Fails on empty input, non-integer tokens, and any
/// [`Board::from_tiles`] error (wrong tile count included).
pub fn parse_board(text: &str) -> BoardResult<Board> {
    let mut numbers = text.split_whitespace().enumerate().map(|(position, token)| {
        token.parse::<u32>().map_err(|_| BoardError::InvalidToken {
            token: token.to_string(),
            position,
        })
    });

    let dimension = numbers.next().ok_or(BoardError::Empty)?? as usize;
    let tiles = numbers.collect::<BoardResult<Vec<u32>>>()?;
    Board::from_tiles(dimension, tiles)
}

/// Parse the JSON format.
pub fn parse_json_board(text: &str) -> BoardResult<Board> {
    let config: BoardConfig = serde_json::from_str(text).map_err(|e| BoardError::Json {
        message: e.to_string(),
    })?;
    Board::try_from(config)
}

/// Parse either format, picking JSON when the input starts with `{`.
pub fn parse_any(text: &str) -> BoardResult<Board> {
    if text.trim_start().starts_with('{') {
        parse_json_board(text)
    } else {
        parse_board(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text() {
        let board = parse_board("3\n 0  1  3\n 4  2  5\n 7  8  6\n").unwrap();
        assert_eq!(board.dimension(), 3);
        assert_eq!(board.moves(), 0);
        assert_eq!(board.rows(), vec![vec![0, 1, 3], vec![4, 2, 5], vec![7, 8, 6]]);
    }

    #[test]
    fn test_display_parses_back() {
        let board = parse_board("4 1 2 3 4 5 6 0 8 9 10 7 11 13 14 15 12").unwrap();
        assert_eq!(parse_board(&board.to_string()).unwrap(), board);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_board("  \n"), Err(BoardError::Empty));
        assert_eq!(
            parse_board("2 1 x 3 0"),
            Err(BoardError::InvalidToken {
                token: "x".to_string(),
                position: 2
            })
        );
        assert_eq!(
            parse_board("2 1 2 3"),
            Err(BoardError::TileCount {
                dimension: 2,
                expected: 4,
                found: 3
            })
        );
        assert_eq!(
            parse_board("2 1 2 3 0 5"),
            Err(BoardError::TileCount {
                dimension: 2,
                expected: 4,
                found: 5
            })
        );
        assert_eq!(
            parse_board("2 1 2 3 3"),
            Err(BoardError::NotPermutation { value: 3, max: 3 })
        );
        assert_eq!(parse_board("1 0"), Err(BoardError::TooSmall { dimension: 1 }));
        assert!(matches!(
            parse_board("-2 1 2 3 0"),
            Err(BoardError::InvalidToken { position: 0, .. })
        ));
    }

    #[test]
    fn test_parse_json() {
        let board = parse_json_board(r#"{"tiles": [[1, 2], [0, 3]]}"#).unwrap();
        assert_eq!(board.rows(), vec![vec![1, 2], vec![0, 3]]);
        assert_eq!(
            serde_json::to_string(&BoardConfig::from(&board)).unwrap(),
            r#"{"tiles":[[1,2],[0,3]]}"#
        );

        assert!(matches!(
            parse_json_board(r#"{"tiles": [[1, 2]]}"#),
            Err(BoardError::NotSquare { .. })
        ));
        assert!(matches!(
            parse_json_board("{tiles"),
            Err(BoardError::Json { .. })
        ));
    }

    #[test]
    fn test_parse_any() {
        let text = parse_any("2\n1 2\n0 3\n").unwrap();
        let json = parse_any(r#"  {"tiles": [[1, 2], [0, 3]]}"#).unwrap();
        assert_eq!(text, json);
    }
}
