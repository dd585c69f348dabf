//! Identity-independent board keys.
//!
//! Two boards whose pieces have the same shapes at the same positions share a
//! fingerprint, whichever labels those pieces carry. Same-shaped pieces are
//! interchangeable for solvability and for solution length, so the search
//! treats such boards as one configuration.

use crate::piece::Piece;

/// Shape and position of one piece, labels dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Footprint {
    pub width: u8,
    pub height: u8,
    pub x: i32,
    pub y: i32,
}

impl From<&Piece> for Footprint {
    fn from(p: &Piece) -> Self {
        Footprint {
            width: p.width,
            height: p.height,
            x: p.x,
            y: p.y,
        }
    }
}

/// Sorted multiset of footprints.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fingerprint(Box<[Footprint]>);

impl Fingerprint {
    pub fn of<'a>(pieces: impl IntoIterator<Item = &'a Piece>) -> Self {
        let mut footprints: Vec<Footprint> = pieces.into_iter().map(Footprint::from).collect();
        footprints.sort_unstable();
        Fingerprint(footprints.into_boxed_slice())
    }

    pub fn footprints(&self) -> &[Footprint] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_of_pieces_does_not_matter() {
        let a = Piece::new("a", 1, 2, 0, 0);
        let b = Piece::new("b", 2, 2, 1, 0);
        assert_eq!(Fingerprint::of([&a, &b]), Fingerprint::of([&b, &a]));
    }

    #[test]
    fn labels_do_not_matter() {
        let g = Piece::new("g", 1, 1, 1, 3);
        let h = Piece::new("h", 1, 1, 2, 3);
        let g_swapped = Piece::new("g", 1, 1, 2, 3);
        let h_swapped = Piece::new("h", 1, 1, 1, 3);
        assert_eq!(
            Fingerprint::of([&g, &h]),
            Fingerprint::of([&g_swapped, &h_swapped])
        );
    }

    #[test]
    fn shape_matters_at_same_position() {
        let tall = Piece::new("a", 1, 2, 0, 0);
        let wide = Piece::new("a", 2, 1, 0, 0);
        assert_ne!(Fingerprint::of([&tall]), Fingerprint::of([&wide]));
    }

    #[test]
    fn footprints_are_sorted() {
        let p = Piece::new("p", 1, 1, 3, 4);
        let q = Piece::new("q", 1, 1, 0, 4);
        let fp = Fingerprint::of([&p, &q]);
        assert_eq!(fp.footprints()[0].x, 0);
        assert_eq!(fp.footprints()[1].x, 3);
    }
}
