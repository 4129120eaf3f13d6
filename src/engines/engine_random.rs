//! Seeded random-move engine.
//!
//! Picks uniformly among legal moves. Useful as a weak sparring partner and
//! for driving games into varied positions in tests.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::GameStatus;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::all_legal_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput> {
        if game_state.game_status != GameStatus::Active {
            return Err(ChessError::NoLegalMove);
        }

        let legal_moves = all_legal_moves(game_state);
        let picked = legal_moves
            .as_slice()
            .choose(&mut self.rng)
            .ok_or(ChessError::NoLegalMove)?;

        Ok(EngineOutput {
            best_move: *picked,
            score: None,
            nodes: legal_moves.len() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_generator::all_legal_moves;

    #[test]
    fn picks_legal_moves_reproducibly() {
        let game = GameState::new_game();
        let legal = all_legal_moves(&game);

        let mut first = RandomEngine::new(7);
        let mut second = RandomEngine::new(7);
        for _ in 0..10 {
            let a = first.choose_move(&game).expect("random engine should move");
            let b = second.choose_move(&game).expect("random engine should move");
            assert_eq!(a, b);
            assert!(legal.contains(&a.best_move));
            assert_eq!(a.score, None);
        }
    }
}
