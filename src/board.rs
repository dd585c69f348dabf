use crate::fingerprint::Fingerprint;
use crate::piece::Piece;
use crate::structs::{Cell, Direction, Move, PieceId};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board must be at least 1x1, got {width}x{height}")]
    EmptyBoard { width: u8, height: u8 },

    #[error("piece {0} must be at least 1x1")]
    EmptyPiece(PieceId),

    #[error("piece {0} appears more than once")]
    DuplicatePiece(PieceId),

    #[error("piece {0} lies outside the board")]
    OutOfBounds(PieceId),

    #[error("pieces {first} and {second} overlap")]
    Overlap { first: PieceId, second: PieceId },

    #[error("no piece {0} on the board")]
    UnknownPiece(PieceId),

    #[error("move {0} is blocked")]
    Blocked(Move),
}

/// An immutable arrangement of pieces plus the moves that produced it.
///
/// Pieces are keyed by identity in a `BTreeMap`, so every iteration over them
/// (move generation included) runs in identity order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    pieces: BTreeMap<PieceId, Piece>,
    moves: Vec<Move>,
}

impl Board {
    /// Builds a starting board with an empty history.
    ///
    /// Every piece must be non-empty, uniquely labelled, inside the grid and
    /// clear of every other piece.
    pub fn new(
        width: u8,
        height: u8,
        pieces: impl IntoIterator<Item = Piece>,
    ) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::EmptyBoard { width, height });
        }

        let mut map: BTreeMap<PieceId, Piece> = BTreeMap::new();
        for piece in pieces {
            if piece.width == 0 || piece.height == 0 {
                return Err(BoardError::EmptyPiece(piece.id));
            }
            if !in_bounds(width, height, &piece) {
                return Err(BoardError::OutOfBounds(piece.id));
            }
            if map.contains_key(&piece.id) {
                return Err(BoardError::DuplicatePiece(piece.id));
            }
            if let Some(other) = map.values().find(|other| other.overlaps(&piece)) {
                return Err(BoardError::Overlap {
                    first: other.id.clone(),
                    second: piece.id,
                });
            }
            map.insert(piece.id.clone(), piece);
        }

        Ok(Self {
            width,
            height,
            pieces: map,
            moves: Vec::new(),
        })
    }

    #[inline]
    pub fn width(&self) -> u8 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Pieces in identity order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.values()
    }

    pub fn piece(&self, id: &PieceId) -> Option<&Piece> {
        self.pieces.get(id)
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Moves applied since the starting board, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Number of moves taken to reach this board.
    pub fn depth(&self) -> usize {
        self.moves.len()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && cell.x < i32::from(self.width)
            && cell.y < i32::from(self.height)
    }

    /// Is the given cell on the board and not covered by any piece.
    pub fn is_open(&self, cell: Cell) -> bool {
        self.contains(cell) && !self.pieces.values().any(|p| p.covers(cell))
    }

    pub fn can_move(&self, piece: &Piece, direction: Direction) -> bool {
        piece
            .target_cells(direction)
            .into_iter()
            .all(|cell| self.is_open(cell))
    }

    /// All legal one-cell slides, ordered by piece identity then direction.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for piece in self.pieces.values() {
            for direction in Direction::ALL {
                if self.can_move(piece, direction) {
                    moves.push(Move {
                        piece: piece.id.clone(),
                        direction,
                    });
                }
            }
        }
        moves
    }

    /// Returns a new board with `mv` applied, or why it cannot be.
    pub fn try_apply(&self, mv: &Move) -> Result<Board, BoardError> {
        let piece = self
            .pieces
            .get(&mv.piece)
            .ok_or_else(|| BoardError::UnknownPiece(mv.piece.clone()))?;
        if !self.can_move(piece, mv.direction) {
            return Err(BoardError::Blocked(mv.clone()));
        }

        let mut pieces = self.pieces.clone();
        pieces.insert(mv.piece.clone(), piece.moved_by(mv.direction));

        let mut moves = Vec::with_capacity(self.moves.len() + 1);
        moves.extend_from_slice(&self.moves);
        moves.push(mv.clone());

        Ok(Board {
            width: self.width,
            height: self.height,
            pieces,
            moves,
        })
    }

    /// Applies a move taken from [`Board::legal_moves`].
    ///
    /// # Panics
    ///
    /// Panics if the move is not legal on this board.
    pub fn apply(&self, mv: &Move) -> Board {
        match self.try_apply(mv) {
            Ok(board) => board,
            Err(e) => panic!("illegal move applied: {e}"),
        }
    }

    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of(self.pieces.values())
    }

    /// Same piece positions, ignoring history.
    pub fn same_layout(&self, other: &Board) -> bool {
        self.width == other.width && self.height == other.height && self.pieces == other.pieces
    }
}

fn in_bounds(width: u8, height: u8, piece: &Piece) -> bool {
    piece.x >= 0
        && piece.y >= 0
        && piece.x + i32::from(piece.width) <= i32::from(width)
        && piece.y + i32::from(piece.height) <= i32::from(height)
}
