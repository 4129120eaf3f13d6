//! Errors used throughout the rules engine.
//!
//! `ChessError` is the single error type returned by move application,
//! coordinate parsing, position setup, and search. Every variant is a local
//! validation outcome: the input `GameState` is never modified, so callers can
//! re-prompt or retry with the same state.

use thiserror::Error;

use crate::game_state::chess_types::Square;

/// Why a requested move was rejected by the move executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    /// The origin square holds no piece.
    EmptySquare,
    /// The piece on the origin square belongs to the side not to move.
    WrongColor,
    /// The destination is not in the legal-move set of the origin square.
    IllegalDestination,
    /// A pawn may only promote to a knight, bishop, rook or queen.
    IllegalPromotion,
}

impl std::fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            InvalidMoveReason::EmptySquare => "no piece on origin square",
            InvalidMoveReason::WrongColor => "piece belongs to the side not to move",
            InvalidMoveReason::IllegalDestination => "destination is not a legal move",
            InvalidMoveReason::IllegalPromotion => "pawns cannot promote to that piece",
        };
        f.write_str(text)
    }
}

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// Move request rejected; the state is unchanged.
    #[error("invalid move {from}{to}: {reason}")]
    InvalidMove {
        from: Square,
        to: Square,
        reason: InvalidMoveReason,
    },

    /// Malformed square coordinate.
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    /// Search was asked to move in a position that is already decided.
    #[error("no legal move available")]
    NoLegalMove,

    /// Position setup string could not be interpreted.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// Difficulty levels run from 1 to 5.
    #[error("invalid difficulty level {0} (expected 1-5)")]
    InvalidDifficulty(u8),
}

pub type ChessResult<T> = Result<T, ChessError>;
