//! Piece placement.
//!
//! The board is a sparse square-to-piece mapping stored as one bitboard per
//! (color, piece kind) pair plus per-color occupancy caches. Every mutation
//! goes through `put`/`remove`, which keep the caches consistent and enforce
//! at most one piece per square.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square, SquareSet};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Board {
    // [color][piece_kind]
    pieces: [[u64; 6]; 2],
    occupancy_by_color: [u64; 2],
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        let mask = square.bit();
        let color = if self.occupancy_by_color[Color::White.index()] & mask != 0 {
            Color::White
        } else if self.occupancy_by_color[Color::Black.index()] & mask != 0 {
            Color::Black
        } else {
            return None;
        };

        PieceKind::ALL
            .into_iter()
            .find(|kind| self.pieces[color.index()][kind.index()] & mask != 0)
            .map(|kind| Piece::new(kind, color))
    }

    /// Place `piece` on `square`, returning whatever stood there before.
    pub fn put(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        let previous = self.remove(square);
        let mask = square.bit();
        self.pieces[piece.color.index()][piece.kind.index()] |= mask;
        self.occupancy_by_color[piece.color.index()] |= mask;
        previous
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        let piece = self.piece_at(square)?;
        let mask = square.bit();
        self.pieces[piece.color.index()][piece.kind.index()] &= !mask;
        self.occupancy_by_color[piece.color.index()] &= !mask;
        Some(piece)
    }

    #[inline]
    pub fn is_empty_square(&self, square: Square) -> bool {
        self.occupancy() & square.bit() == 0
    }

    #[inline]
    pub fn occupancy(&self) -> u64 {
        self.occupancy_by_color[0] | self.occupancy_by_color[1]
    }

    #[inline]
    pub fn occupancy_of(&self, color: Color) -> u64 {
        self.occupancy_by_color[color.index()]
    }

    #[inline]
    pub fn pieces_of(&self, color: Color, kind: PieceKind) -> SquareSet {
        SquareSet::from_bits(self.pieces[color.index()][kind.index()])
    }

    #[inline]
    pub fn squares_of(&self, color: Color) -> SquareSet {
        SquareSet::from_bits(self.occupancy_of(color))
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color, PieceKind::King).iter().next()
    }

    #[inline]
    pub fn piece_count(&self) -> usize {
        self.occupancy().count_ones() as usize
    }

    /// All pieces in ascending square order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        SquareSet::from_bits(self.occupancy())
            .iter()
            .filter_map(move |square| self.piece_at(square).map(|piece| (square, piece)))
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    fn sq(text: &str) -> Square {
        Square::from_algebraic(text).expect("test square should parse")
    }

    #[test]
    fn put_replaces_and_reports_previous_piece() {
        let mut board = Board::empty();
        let knight = Piece::new(PieceKind::Knight, Color::White);
        let bishop = Piece::new(PieceKind::Bishop, Color::Black);

        assert_eq!(board.put(sq("c3"), knight), None);
        assert_eq!(board.put(sq("c3"), bishop), Some(knight));
        assert_eq!(board.piece_at(sq("c3")), Some(bishop));
        assert_eq!(board.piece_count(), 1);
        assert_eq!(board.occupancy_of(Color::White), 0);
    }

    #[test]
    fn remove_clears_occupancy() {
        let mut board = Board::empty();
        let king = Piece::new(PieceKind::King, Color::Black);
        board.put(sq("e8"), king);

        assert_eq!(board.king_square(Color::Black), Some(sq("e8")));
        assert_eq!(board.remove(sq("e8")), Some(king));
        assert!(board.is_empty_square(sq("e8")));
        assert_eq!(board.king_square(Color::Black), None);
        assert_eq!(board.remove(sq("e8")), None);
    }
}
