use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
pub fn queen_attacks(square: Square, occupancy: u64) -> u64 {
    bishop_attacks(square, occupancy) | rook_attacks(square, occupancy)
}

#[cfg(test)]
mod tests {
    use super::queen_attacks;
    use crate::game_state::chess_types::Square;

    fn sq(text: &str) -> Square {
        Square::from_algebraic(text).expect("test square should parse")
    }

    #[test]
    fn open_board_queen_on_d4_sees_twenty_seven_squares() {
        assert_eq!(queen_attacks(sq("d4"), 0).count_ones(), 27);
    }

    #[test]
    fn queen_attacks_stop_at_blockers() {
        let blockers = sq("d6").bit() | sq("g4").bit();
        let attacks = queen_attacks(sq("d4"), blockers);

        assert_ne!(attacks & sq("d6").bit(), 0);
        assert_ne!(attacks & sq("g4").bit(), 0);
        assert_eq!(attacks & sq("d7").bit(), 0);
        assert_eq!(attacks & sq("h4").bit(), 0);
    }
}
