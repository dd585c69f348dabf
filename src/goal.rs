use crate::board::Board;
use crate::structs::{Cell, PieceId};

/// Decides whether a board is a winning configuration.
pub trait Goal {
    fn is_goal(&self, board: &Board) -> bool;
}

impl<F> Goal for F
where
    F: Fn(&Board) -> bool,
{
    #[inline]
    fn is_goal(&self, board: &Board) -> bool {
        self(board)
    }
}

/// Won when the named piece has its upper-left cell at `cell`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceAt {
    pub piece: PieceId,
    pub cell: Cell,
}

impl PieceAt {
    pub fn new(piece: impl Into<PieceId>, cell: Cell) -> Self {
        Self {
            piece: piece.into(),
            cell,
        }
    }
}

impl Goal for PieceAt {
    fn is_goal(&self, board: &Board) -> bool {
        board
            .piece(&self.piece)
            .is_some_and(|p| p.origin() == self.cell)
    }
}
