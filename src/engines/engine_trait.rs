//! Engine abstraction used by the public API and the self-play harness.
//!
//! Different move-selection strategies sit behind one trait so a caller can
//! pit them against each other or swap them at runtime.

use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::MoveRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOutput {
    pub best_move: MoveRequest,
    /// White-relative score in centipawns, if the engine evaluates positions.
    pub score: Option<i32>,
    pub nodes: u64,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Called before a fresh game starts.
    fn new_game(&mut self) {}

    /// Pick a move for the side to move. Fails with `ChessError::NoLegalMove`
    /// when the game is over.
    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput>;
}
