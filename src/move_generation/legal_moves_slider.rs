//! Pseudo-legal bishop, rook and queen targets.
//!
//! Each ray stops at the first occupied square, which is kept only when it
//! holds an enemy piece.

use crate::game_state::chess_types::{Color, PieceKind, Square, SquareSet};
use crate::game_state::game_state::GameState;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

pub fn generate_slider_targets(
    game_state: &GameState,
    from: Square,
    kind: PieceKind,
    color: Color,
    out: &mut Vec<Square>,
) {
    let occupancy = game_state.board.occupancy();
    let rays = match kind {
        PieceKind::Bishop => bishop_attacks(from, occupancy),
        PieceKind::Rook => rook_attacks(from, occupancy),
        PieceKind::Queen => queen_attacks(from, occupancy),
        _ => 0,
    };
    let own = game_state.board.occupancy_of(color);
    out.extend(SquareSet::from_bits(rays & !own));
}
