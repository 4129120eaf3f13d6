//! Pseudo-legal pawn targets: advances, captures and en passant.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::GameState;

pub fn generate_pawn_targets(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<Square>,
) {
    let board = &game_state.board;
    let direction = color.pawn_direction();

    if let Some(one_step) = from.offset(0, direction) {
        if board.is_empty_square(one_step) {
            out.push(one_step);

            if from.rank() == color.pawn_start_rank() {
                if let Some(two_step) = one_step.offset(0, direction) {
                    if board.is_empty_square(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for file_delta in [-1i8, 1] {
        let Some(to) = from.offset(file_delta, direction) else {
            continue;
        };
        let enemy_here = board
            .piece_at(to)
            .is_some_and(|target| target.color != color);
        if enemy_here || game_state.en_passant_target == Some(to) {
            out.push(to);
        }
    }
}
