use crate::structs::{Cell, Direction, PieceId};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub id: PieceId,
    pub width: u8,  // size in cells
    pub height: u8, // size in cells
    pub x: i32,     // upper-left cell
    pub y: i32,
}

impl Piece {
    pub fn new(id: impl Into<PieceId>, width: u8, height: u8, x: i32, y: i32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
            x,
            y,
        }
    }

    #[inline]
    pub fn origin(&self) -> Cell {
        Cell::new(self.x, self.y)
    }

    #[inline]
    fn right(&self) -> i32 {
        self.x + i32::from(self.width)
    }

    #[inline]
    fn bottom(&self) -> i32 {
        self.y + i32::from(self.height)
    }

    /// Cells this piece would newly enter if slid one step in `direction`.
    pub fn target_cells(&self, direction: Direction) -> Vec<Cell> {
        match direction {
            Direction::Up => (self.x..self.right()).map(|x| Cell::new(x, self.y - 1)).collect(),
            Direction::Down => (self.x..self.right()).map(|x| Cell::new(x, self.bottom())).collect(),
            Direction::Left => (self.y..self.bottom()).map(|y| Cell::new(self.x - 1, y)).collect(),
            Direction::Right => (self.y..self.bottom()).map(|y| Cell::new(self.right(), y)).collect(),
        }
    }

    #[inline]
    pub fn covers(&self, cell: Cell) -> bool {
        cell.x >= self.x && cell.y >= self.y && cell.x < self.right() && cell.y < self.bottom()
    }

    pub fn overlaps(&self, other: &Piece) -> bool {
        self.x < other.right() && other.x < self.right() && self.y < other.bottom() && other.y < self.bottom()
    }

    /// All cells of the rectangle, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (self.y..self.bottom()).flat_map(move |y| (self.x..self.right()).map(move |x| Cell::new(x, y)))
    }

    pub fn moved_by(&self, direction: Direction) -> Piece {
        let (dx, dy) = direction.delta();
        Piece {
            id: self.id.clone(),
            width: self.width,
            height: self.height,
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}
