//! Pseudo-legal king targets, including castling.

use crate::game_state::chess_types::{CastleSide, Color, Square, SquareSet};
use crate::game_state::game_state::GameState;
use crate::move_generation::attack_map::is_square_attacked;
use crate::moves::king_moves::king_attacks;

pub fn generate_king_targets(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<Square>,
) {
    let own = game_state.board.occupancy_of(color);
    out.extend(SquareSet::from_bits(king_attacks(from) & !own));

    for side in [CastleSide::Kingside, CastleSide::Queenside] {
        if let Some(to) = castling_target(game_state, from, color, side) {
            out.push(to);
        }
    }
}

/// King destination for castling on `side`, if every castling condition holds:
/// the right is still held, the king stands on its home square, the squares
/// between king and rook are empty, the king is not in check, and neither the
/// crossed square nor the destination is attacked.
fn castling_target(
    game_state: &GameState,
    king_from: Square,
    color: Color,
    side: CastleSide,
) -> Option<Square> {
    if !game_state.castling_rights.has(color, side) {
        return None;
    }

    let rank = color.home_rank();
    if king_from != Square::at(4, rank) {
        return None;
    }

    let board = &game_state.board;
    let (first, last) = match side {
        CastleSide::Kingside => (5, 6),
        CastleSide::Queenside => (1, 3),
    };
    if (first..=last).any(|file| !board.is_empty_square(Square::at(file, rank))) {
        return None;
    }

    let enemy = color.opposite();
    let crossed = Square::at(side.rook_castled_file(), rank);
    let destination = Square::at(side.king_castled_file(), rank);
    if is_square_attacked(game_state, king_from, enemy)
        || is_square_attacked(game_state, crossed, enemy)
        || is_square_attacked(game_state, destination, enemy)
    {
        return None;
    }

    Some(destination)
}
