//! Crate root module declarations for the minimax chess engine.
//!
//! Exposes the rules engine (game state, move geometry, legal move
//! generation and application), the static evaluator and minimax search, the
//! engine front-ends, and utility helpers so binaries, benches, and callers
//! can import stable module paths. The caller-facing operations are
//! re-exported at the crate root.

pub mod chess_api;
pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod attack_map;
    pub mod check_detector;
    pub mod game_status;
    pub mod legal_move_generator;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_slider;
    pub mod move_executor;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod engines {
    pub mod difficulty;
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod self_play;
}

pub use chess_api::{apply_move, choose_move, classify, legal_moves, new_game};
pub use errors::{ChessError, ChessResult, InvalidMoveReason};
pub use game_state::chess_types::{Color, GameStatus, Piece, PieceKind, Square};
pub use game_state::game_state::GameState;
pub use moves::move_descriptions::{Move, MoveRequest};
