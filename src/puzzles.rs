use crate::board::{Board, BoardError};
use crate::goal::PieceAt;
use crate::piece::Piece;
use crate::structs::Cell;
use once_cell::sync::Lazy;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("unknown puzzle {0:?}")]
    UnknownPuzzle(String),

    #[error("puzzle {puzzle} has no goal piece {piece}")]
    MissingGoalPiece { puzzle: &'static str, piece: &'static str },

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// (id, width, height, x, y)
type PieceSpec = (&'static str, u8, u8, i32, i32);

#[derive(Debug, Clone)]
pub struct Puzzle {
    pub name: &'static str,
    pub description: &'static str,
    pub width: u8,
    pub height: u8,
    pub pieces: &'static [PieceSpec],
    pub goal_piece: &'static str,
    pub goal_cell: Cell,
}

impl Puzzle {
    pub fn start_board(&self) -> Result<Board, PuzzleError> {
        let pieces = self
            .pieces
            .iter()
            .map(|&(id, w, h, x, y)| Piece::new(id, w, h, x, y));
        let board = Board::new(self.width, self.height, pieces)?;
        if board.piece(&self.goal_piece.into()).is_none() {
            return Err(PuzzleError::MissingGoalPiece {
                puzzle: self.name,
                piece: self.goal_piece,
            });
        }
        Ok(board)
    }

    pub fn goal(&self) -> PieceAt {
        PieceAt::new(self.goal_piece, self.goal_cell)
    }
}

//    0123
//    ____
// 0 |abbc|
// 1 |abbc|
// 2 |deef|
// 3 |dghf|
// 4 |i  j|
//    ~~~~
const SQUARE_ROOT: &[PieceSpec] = &[
    ("a", 1, 2, 0, 0),
    ("b", 2, 2, 1, 0),
    ("c", 1, 2, 3, 0),
    ("d", 1, 2, 0, 2),
    ("e", 2, 1, 1, 2),
    ("f", 1, 2, 3, 2),
    ("g", 1, 1, 1, 3),
    ("h", 1, 1, 2, 3),
    ("i", 1, 1, 0, 4),
    ("j", 1, 1, 3, 4),
];

//    012
//    ___
// 0 |bbx|
// 1 |bby|
// 2 |z  |
//    ~~~
const WARMUP: &[PieceSpec] = &[
    ("b", 2, 2, 0, 0),
    ("x", 1, 1, 2, 0),
    ("y", 1, 1, 2, 1),
    ("z", 1, 1, 0, 2),
];

const CORRIDOR: &[PieceSpec] = &[("b", 1, 1, 0, 0)];

pub static PUZZLES: Lazy<Vec<Puzzle>> = Lazy::new(|| {
    vec![
        Puzzle {
            name: "square-root",
            description: "Square Root: bring the 2x2 block to the bottom middle",
            width: 4,
            height: 5,
            pieces: SQUARE_ROOT,
            goal_piece: "b",
            goal_cell: Cell::new(1, 3),
        },
        Puzzle {
            name: "warmup",
            description: "3x3 warmup: bring the 2x2 block to the lower right",
            width: 3,
            height: 3,
            pieces: WARMUP,
            goal_piece: "b",
            goal_cell: Cell::new(1, 1),
        },
        Puzzle {
            name: "corridor",
            description: "3x1 corridor: slide the single block to the far end",
            width: 3,
            height: 1,
            pieces: CORRIDOR,
            goal_piece: "b",
            goal_cell: Cell::new(2, 0),
        },
    ]
});

pub fn find_puzzle(name: &str) -> Result<&'static Puzzle, PuzzleError> {
    PUZZLES
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| PuzzleError::UnknownPuzzle(name.to_string()))
}
