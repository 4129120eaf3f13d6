//! Caller-facing operations.
//!
//! Thin free functions over the rules engine and the search, matching the
//! operations a presentation layer needs: start a game, list destinations for
//! a square, play a move, let the engine reply, and classify a position.

use tracing::debug;

use crate::errors::ChessResult;
use crate::game_state::chess_types::{Color, GameStatus, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::{game_status, legal_move_generator, move_executor};
use crate::search::board_scoring::StandardScorer;
use crate::search::minimax::{search_best_move, SearchConfig};

/// Fresh game in the standard starting position.
///
/// The human's color only decides who moves the pieces; white always moves
/// first, so the starting state is the same either way.
pub fn new_game(human_color: Color) -> GameState {
    debug!(%human_color, "new game");
    GameState::new_game()
}

/// Legal destinations for the piece on `square`, empty when it is not the
/// side to move's piece.
pub fn legal_moves(game_state: &GameState, square: Square) -> Vec<Square> {
    legal_move_generator::legal_moves(game_state, square)
}

pub fn apply_move(
    game_state: &GameState,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> ChessResult<GameState> {
    move_executor::apply_move(game_state, from, to, promotion)
}

/// Let the engine move for the side to move, searching `depth` plies.
pub fn choose_move(game_state: &GameState, depth: u8) -> ChessResult<GameState> {
    let result = search_best_move(game_state, &StandardScorer, SearchConfig::with_depth(depth))?;
    let request = result.best_move;
    move_executor::apply_move(game_state, request.from, request.to, request.promotion)
}

pub fn classify(game_state: &GameState) -> GameStatus {
    game_status::classify(game_state)
}
