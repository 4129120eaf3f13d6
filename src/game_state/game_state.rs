//! Immutable game-state value.
//!
//! `GameState` describes one position together with the bookkeeping a game
//! accumulates (captures, history, clocks). States are never edited in place
//! by the engine: each applied move derives a new value through the move
//! executor, which keeps search recursion free of undo logic and lets a
//! caller hand a state to another thread.

use crate::errors::ChessResult;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::BACK_RANK;
use crate::game_state::chess_types::*;
use crate::move_generation::check_detector::is_in_check;
use crate::move_generation::game_status::classify;
use crate::moves::move_descriptions::Move;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Captured pieces, keyed by the color of the piece that was taken.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CapturedPieces {
    pub white: Vec<Piece>,
    pub black: Vec<Piece>,
}

impl CapturedPieces {
    #[inline]
    pub fn for_color(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub(crate) fn record(&mut self, piece: Piece) {
        match piece.color {
            Color::White => self.white.push(piece),
            Color::Black => self.black.push(piece),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: Board,
    pub current_turn: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,
    pub half_move_clock: u32,
    pub full_move_number: u32,
    pub captured_pieces: CapturedPieces,
    pub move_history: Vec<Move>,
    pub game_status: GameStatus,
    /// Whether `current_turn`'s king is attacked. Informational only.
    pub is_in_check: bool,
}

impl GameState {
    /// Standard initial position: white to move, full castling rights, empty history.
    pub fn new_game() -> Self {
        let mut board = Board::empty();
        for (file, kind) in BACK_RANK.into_iter().enumerate() {
            let file = file as u8;
            board.put(Square::at(file, 0), Piece::new(kind, Color::White));
            board.put(Square::at(file, 1), Piece::new(PieceKind::Pawn, Color::White));
            board.put(Square::at(file, 6), Piece::new(PieceKind::Pawn, Color::Black));
            board.put(Square::at(file, 7), Piece::new(kind, Color::Black));
        }

        Self {
            board,
            current_turn: Color::White,
            castling_rights: CastlingRights::ALL,
            en_passant_target: None,
            half_move_clock: 0,
            full_move_number: 1,
            captured_pieces: CapturedPieces::default(),
            move_history: Vec::new(),
            game_status: GameStatus::Active,
            is_in_check: false,
        }
    }

    /// Set up an arbitrary position. Check and status are derived from it.
    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_status.is_terminal()
    }

    /// Recompute `is_in_check` and `game_status` from the position.
    pub(crate) fn with_derived_status(mut self) -> Self {
        self.is_in_check = is_in_check(&self, self.current_turn);
        self.game_status = classify(&self);
        self
    }

    /// Copy of the position fields only, with empty captures and history.
    pub(crate) fn detached_position(&self) -> Self {
        Self {
            board: self.board.clone(),
            current_turn: self.current_turn,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
            half_move_clock: self.half_move_clock,
            full_move_number: self.full_move_number,
            captured_pieces: CapturedPieces::default(),
            move_history: Vec::new(),
            game_status: self.game_status,
            is_in_check: self.is_in_check,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{CastlingRights, Color, GameStatus, PieceKind};

    #[test]
    fn new_game_matches_the_standard_setup() {
        let game = GameState::new_game();
        assert_eq!(game.to_fen(), STARTING_POSITION_FEN);
        assert_eq!(game.board.piece_count(), 32);
        assert_eq!(game.current_turn, Color::White);
        assert_eq!(game.castling_rights, CastlingRights::ALL);
        assert_eq!(game.game_status, GameStatus::Active);
        assert!(game.move_history.is_empty());
        assert!(!game.is_game_over());
    }

    #[test]
    fn new_game_equals_parsed_start_position() {
        let parsed = GameState::from_fen(STARTING_POSITION_FEN).expect("start FEN should parse");
        assert_eq!(parsed, GameState::new_game());
    }

    #[test]
    fn each_side_has_one_king() {
        let game = GameState::new_game();
        for color in Color::BOTH {
            assert_eq!(game.board.pieces_of(color, PieceKind::King).len(), 1);
        }
    }

    #[test]
    fn game_state_can_cross_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GameState>();
    }
}
