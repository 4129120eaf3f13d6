//! Static position evaluation.
//!
//! Search stays independent of the heuristic by scoring leaves through the
//! `BoardScorer` trait. Scores are centipawns and always from white's point
//! of view: positive favours white, negative favours black.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

/// Score of a checkmate, signed against the mated side.
pub const MATE_SCORE: i32 = 100_000;

pub trait BoardScorer: Send + Sync {
    fn score(&self, game_state: &GameState) -> i32;
}

/// Material, captured-piece compensation, centre occupation and a check
/// penalty, replaced outright by the terminal value once the game is over.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScorer;

impl StandardScorer {
    pub const CENTRE_PAWN_BONUS: i32 = 30;
    pub const CENTRE_PIECE_BONUS: i32 = 10;
    pub const CHECK_PENALTY: i32 = 50;

    /// d4, e4, d5, e5.
    const CENTRE: u64 = (1 << 27) | (1 << 28) | (1 << 35) | (1 << 36);

    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 10_000,
        }
    }

    #[inline]
    const fn signed(color: Color, value: i32) -> i32 {
        match color {
            Color::White => value,
            Color::Black => -value,
        }
    }

    fn material(game_state: &GameState) -> i32 {
        let board_material: i32 = game_state
            .board
            .iter()
            .map(|(_, piece)| Self::signed(piece.color, Self::piece_value(piece.kind)))
            .sum();

        let captured = &game_state.captured_pieces;
        let lost_by_white: i32 = captured.white.iter().map(|p| Self::piece_value(p.kind)).sum();
        let lost_by_black: i32 = captured.black.iter().map(|p| Self::piece_value(p.kind)).sum();

        board_material - lost_by_white + lost_by_black
    }

    fn centre_control(game_state: &GameState) -> i32 {
        game_state
            .board
            .iter()
            .filter(|(square, _)| Self::CENTRE & square.bit() != 0)
            .map(|(_, piece)| {
                let bonus = if piece.kind == PieceKind::Pawn {
                    Self::CENTRE_PAWN_BONUS
                } else {
                    Self::CENTRE_PIECE_BONUS
                };
                Self::signed(piece.color, bonus)
            })
            .sum()
    }
}

impl BoardScorer for StandardScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        match game_state.game_status {
            GameStatus::Checkmate => return Self::signed(game_state.current_turn, -MATE_SCORE),
            GameStatus::Stalemate | GameStatus::Draw => return 0,
            GameStatus::Active => {}
        }

        let mut score = Self::material(game_state) + Self::centre_control(game_state);
        if game_state.is_in_check {
            score -= Self::signed(game_state.current_turn, Self::CHECK_PENALTY);
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardScorer, StandardScorer, MATE_SCORE};
    use crate::game_state::chess_types::{GameStatus, Square};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::move_executor::apply_move;

    fn fen(text: &str) -> GameState {
        GameState::from_fen(text).expect("FEN should parse")
    }

    fn play(game: &GameState, moves: &[&str]) -> GameState {
        moves.iter().fold(game.clone(), |state, text| {
            let (from, to) = text.split_at(2);
            let from: Square = from.parse().expect("from square");
            let to: Square = to.parse().expect("to square");
            apply_move(&state, from, to, None).expect("scripted move should be legal")
        })
    }

    #[test]
    fn start_position_is_balanced() {
        assert_eq!(StandardScorer.score(&GameState::new_game()), 0);
    }

    #[test]
    fn centre_pawn_earns_its_bonus() {
        let game = play(&GameState::new_game(), &["e2e4"]);
        assert_eq!(StandardScorer.score(&game), 30);

        let replied = play(&game, &["d7d5"]);
        assert_eq!(StandardScorer.score(&replied), 0);
    }

    #[test]
    fn centre_piece_earns_the_smaller_bonus() {
        let game = fen("4k3/8/8/8/4N3/8/P7/4K3 b - - 0 1");
        assert_eq!(game.game_status, GameStatus::Active);
        assert_eq!(StandardScorer.score(&game), 300 + 100 + 10);
    }

    #[test]
    fn extra_material_favours_its_owner() {
        let white_up = fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
        assert_eq!(StandardScorer.score(&white_up), 500);

        let black_up = fen("q3k3/8/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(StandardScorer.score(&black_up), -900);
    }

    #[test]
    fn captures_count_against_the_side_that_lost_them() {
        let game = play(&GameState::new_game(), &["e2e4", "d7d5", "e4d5"]);
        assert_eq!(game.captured_pieces.black.len(), 1);
        // Pawn up on the board, the captured pawn again, and a pawn on d5.
        assert_eq!(StandardScorer.score(&game), 100 + 100 + 30);
    }

    #[test]
    fn side_in_check_is_penalised() {
        let black_checked = fen("4k3/8/8/8/8/8/8/4RK2 b - - 0 1");
        assert!(black_checked.is_in_check);
        assert_eq!(StandardScorer.score(&black_checked), 500 + 50);

        let white_checked = fen("4rk2/8/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(StandardScorer.score(&white_checked), -500 - 50);
    }

    #[test]
    fn terminal_states_override_the_heuristic() {
        let white_mated = play(&GameState::new_game(), &["f2f3", "e7e5", "g2g4", "d8h4"]);
        assert_eq!(StandardScorer.score(&white_mated), -MATE_SCORE);

        let black_mated = fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
        assert_eq!(StandardScorer.score(&black_mated), MATE_SCORE);

        let stalemate = fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert_eq!(StandardScorer.score(&stalemate), 0);
    }
}
