use crate::engines::difficulty::Difficulty;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{BoardScorer, StandardScorer};
use crate::search::minimax::{search_best_move, SearchConfig};

pub struct MinimaxEngine<S: BoardScorer = StandardScorer> {
    config: SearchConfig,
    scorer: S,
}

impl MinimaxEngine<StandardScorer> {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_scorer(config, StandardScorer)
    }

    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::new(SearchConfig::with_depth(difficulty.search_depth()))
    }
}

impl Default for MinimaxEngine<StandardScorer> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<S: BoardScorer> MinimaxEngine<S> {
    pub fn with_scorer(config: SearchConfig, scorer: S) -> Self {
        Self { config, scorer }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }
}

impl<S: BoardScorer> Engine for MinimaxEngine<S> {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<EngineOutput> {
        let result = search_best_move(game_state, &self.scorer, self.config)?;
        Ok(EngineOutput {
            best_move: result.best_move,
            score: Some(result.best_score),
            nodes: result.nodes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::MinimaxEngine;
    use crate::engines::difficulty::Difficulty;
    use crate::engines::engine_trait::Engine;
    use crate::errors::ChessError;
    use crate::game_state::game_state::GameState;

    #[test]
    fn difficulty_sets_search_depth() {
        let engine = MinimaxEngine::from_difficulty(Difficulty::Advanced);
        assert_eq!(engine.config().max_depth, 4);
        assert_eq!(engine.config().node_budget, None);
    }

    #[test]
    fn beginner_engine_captures_free_material() {
        let game =
            GameState::from_fen("4k3/8/8/8/3n4/8/8/3QK3 w - - 0 1").expect("FEN should parse");
        let mut engine = MinimaxEngine::from_difficulty(Difficulty::Beginner);
        let output = engine.choose_move(&game).expect("engine should move");
        assert_eq!(output.best_move.to_string(), "d1d4");
        assert!(output.score.is_some_and(|score| score > 0));
        assert!(output.nodes > 0);
    }

    #[test]
    fn finished_game_yields_no_move() {
        let game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        let mut engine = MinimaxEngine::default();
        assert_eq!(engine.choose_move(&game), Err(ChessError::NoLegalMove));
    }
}
