//! Pawn attack geometry: the two forward diagonals, never the advance squares.

use crate::game_state::chess_types::{Color, Square};
use crate::moves::knight_moves::bit_if_on_board;

pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(1);
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(-1);

#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square.index()],
        Color::Black => BLACK_PAWN_ATTACKS[square.index()],
    }
}

const fn generate_pawn_attacks(direction: i8) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i8;
        let rank = (sq / 8) as i8;
        table[sq] = bit_if_on_board(file - 1, rank + direction)
            | bit_if_on_board(file + 1, rank + direction);
        sq += 1;
    }

    table
}
