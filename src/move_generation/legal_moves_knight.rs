use crate::game_state::chess_types::{Color, Square, SquareSet};
use crate::game_state::game_state::GameState;
use crate::moves::knight_moves::knight_attacks;

pub fn generate_knight_targets(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<Square>,
) {
    let own = game_state.board.occupancy_of(color);
    out.extend(SquareSet::from_bits(knight_attacks(from) & !own));
}
