//! Terminal-state classification.

use crate::game_state::chess_rules::{FIFTY_MOVE_DRAW_CLOCK, INSUFFICIENT_MATERIAL_MAX_PIECES};
use crate::game_state::chess_types::{GameStatus, PieceKind};
use crate::game_state::game_state::GameState;
use crate::move_generation::check_detector::is_in_check;
use crate::move_generation::legal_move_generator::has_legal_move;

/// Status of the position for the side to move.
///
/// Checkmate and stalemate take precedence over the draw rules. The material
/// rule is deliberately coarse: three or fewer pieces, all kings, knights or
/// bishops.
pub fn classify(game_state: &GameState) -> GameStatus {
    if !has_legal_move(game_state) {
        return if is_in_check(game_state, game_state.current_turn) {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        };
    }

    if game_state.half_move_clock >= FIFTY_MOVE_DRAW_CLOCK || is_insufficient_material(game_state)
    {
        return GameStatus::Draw;
    }

    GameStatus::Active
}

pub fn is_insufficient_material(game_state: &GameState) -> bool {
    let board = &game_state.board;
    board.piece_count() <= INSUFFICIENT_MATERIAL_MAX_PIECES
        && board.iter().all(|(_, piece)| {
            matches!(
                piece.kind,
                PieceKind::King | PieceKind::Knight | PieceKind::Bishop
            )
        })
}

#[cfg(test)]
mod tests {
    use super::{classify, is_insufficient_material};
    use crate::game_state::chess_types::GameStatus;
    use crate::game_state::game_state::GameState;

    fn fen(text: &str) -> GameState {
        GameState::from_fen(text).expect("FEN should parse")
    }

    #[test]
    fn start_position_is_active() {
        assert_eq!(classify(&GameState::new_game()), GameStatus::Active);
    }

    #[test]
    fn back_rank_mate_is_checkmate() {
        let game = fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        assert_eq!(classify(&game), GameStatus::Checkmate);
    }

    #[test]
    fn cornered_king_without_moves_is_stalemate() {
        let game = fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert_eq!(classify(&game), GameStatus::Stalemate);
        assert!(game.game_status.is_terminal());
    }

    #[test]
    fn fifty_quiet_moves_draw() {
        let game = fen("4k3/8/8/8/8/8/4P3/R3K3 w - - 50 80");
        assert_eq!(classify(&game), GameStatus::Draw);

        let one_short = fen("4k3/8/8/8/8/8/4P3/R3K3 w - - 49 80");
        assert_eq!(classify(&one_short), GameStatus::Active);
    }

    #[test]
    fn minor_piece_endings_are_insufficient() {
        assert!(is_insufficient_material(&fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1")));
        assert!(is_insufficient_material(&fen("4k3/8/8/8/8/8/8/2B1K3 w - - 0 1")));
        assert_eq!(
            classify(&fen("4k3/8/8/8/8/8/8/1N2K3 b - - 0 1")),
            GameStatus::Draw
        );
    }

    #[test]
    fn pawns_rooks_or_a_fourth_piece_keep_the_game_going() {
        assert!(!is_insufficient_material(&fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1")));
        assert!(!is_insufficient_material(&fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1")));
        assert!(!is_insufficient_material(&fen("4k1n1/8/8/8/8/8/8/1N2K3 w - - 0 1")));
    }
}
