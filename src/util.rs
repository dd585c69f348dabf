use crate::board::{Board, BoardError};
use crate::structs::Move;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("move {step} ({mv}) cannot be replayed: {source}")]
pub struct ReplayError {
    pub step: usize, // 1-based
    pub mv: Move,
    pub source: BoardError,
}

/// Applies `moves` in order from `start`, returning every board along the way
/// (the start board first).
pub fn replay(start: &Board, moves: &[Move]) -> Result<Vec<Board>, ReplayError> {
    let mut boards = Vec::with_capacity(moves.len() + 1);
    boards.push(start.clone());
    for (i, mv) in moves.iter().enumerate() {
        let last = &boards[boards.len() - 1];
        let next = last.try_apply(mv).map_err(|source| ReplayError {
            step: i + 1,
            mv: mv.clone(),
            source,
        })?;
        boards.push(next);
    }
    Ok(boards)
}

/// Grid of piece glyphs, one string per row, spaces for open cells.
pub fn grid_rows(board: &Board) -> Vec<String> {
    let width = board.width() as usize;
    let height = board.height() as usize;
    let mut grid = vec![vec![' '; width]; height];
    for piece in board.pieces() {
        let glyph = piece.id.glyph();
        for cell in piece.cells() {
            if let Some(slot) = grid
                .get_mut(cell.y as usize)
                .and_then(|row| row.get_mut(cell.x as usize))
            {
                *slot = glyph;
            }
        }
    }
    grid.into_iter().map(|row| row.into_iter().collect()).collect()
}

/// Draws the board inside a frame:
///
/// ```text
///  ____
/// |abbc|
/// |abbc|
/// |deef|
/// |dghf|
/// |i  j|
///  ~~~~
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.width() as usize;
        writeln!(f, " {}", "_".repeat(width))?;
        for row in grid_rows(self) {
            writeln!(f, "|{row}|")?;
        }
        writeln!(f, " {}", "~".repeat(width))
    }
}

/// Numbered move list, one move per line.
pub fn format_moves(moves: &[Move]) -> String {
    let mut out = String::new();
    for (i, mv) in moves.iter().enumerate() {
        out.push_str(&format!("{:>3}: {mv}\n", i + 1));
    }
    out
}
