//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! White maximises and black minimises the white-relative score produced by a
//! `BoardScorer`. Children are visited in generation order and the first move
//! reaching the best score is kept, so results are fully deterministic.

use tracing::debug;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, GameStatus};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::move_generation::move_executor::derive_successor;
use crate::moves::move_descriptions::MoveRequest;
use crate::search::board_scoring::BoardScorer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Search depth in plies. Zero is treated as one.
    pub max_depth: u8,
    /// Stop after visiting this many nodes and keep the best completed move.
    pub node_budget: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            node_budget: None,
        }
    }
}

impl SearchConfig {
    pub const fn with_depth(max_depth: u8) -> Self {
        Self {
            max_depth,
            node_budget: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: MoveRequest,
    pub best_score: i32,
    pub depth: u8,
    pub nodes: u64,
    /// The node budget ran out before every root move was searched.
    pub budget_exhausted: bool,
}

/// Pick the best move for the side to move.
///
/// Fails with `ChessError::NoLegalMove` when the game is already over or the
/// side to move has no move. Running out of node budget is not an error: the
/// best fully searched root move is returned, or the first legal move if none
/// finished.
pub fn search_best_move<S: BoardScorer>(
    game_state: &GameState,
    scorer: &S,
    config: SearchConfig,
) -> ChessResult<SearchResult> {
    if game_state.game_status != GameStatus::Active {
        return Err(ChessError::NoLegalMove);
    }

    let root_moves = all_legal_moves(game_state);
    let Some(&first_move) = root_moves.first() else {
        return Err(ChessError::NoLegalMove);
    };

    let depth = config.max_depth.max(1);
    let maximizing = game_state.current_turn == Color::White;
    let mut search = Search {
        scorer,
        nodes: 0,
        node_budget: config.node_budget,
        exhausted: false,
    };

    let mut alpha = i32::MIN;
    let mut beta = i32::MAX;
    let mut best: Option<(MoveRequest, i32)> = None;

    for request in root_moves {
        let child = derive_successor(game_state, request)?;
        let Some(score) = search.minimax(&child, depth - 1, alpha, beta, !maximizing)? else {
            break;
        };

        let improves = match best {
            None => true,
            Some((_, best_score)) if maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if improves {
            best = Some((request, score));
        }
        if maximizing {
            alpha = alpha.max(score);
        } else {
            beta = beta.min(score);
        }
    }

    let (best_move, best_score) = match best {
        Some(found) => found,
        None => (first_move, scorer.score(game_state)),
    };

    debug!(
        depth,
        nodes = search.nodes,
        best_move = %best_move,
        best_score,
        budget_exhausted = search.exhausted,
        "search finished"
    );

    Ok(SearchResult {
        best_move,
        best_score,
        depth,
        nodes: search.nodes,
        budget_exhausted: search.exhausted,
    })
}

struct Search<'a, S: BoardScorer> {
    scorer: &'a S,
    nodes: u64,
    node_budget: Option<u64>,
    exhausted: bool,
}

impl<S: BoardScorer> Search<'_, S> {
    /// Score of `game_state` searched `depth` plies deep, or `None` once the
    /// node budget is spent.
    fn minimax(
        &mut self,
        game_state: &GameState,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> ChessResult<Option<i32>> {
        if self.node_budget.is_some_and(|budget| self.nodes >= budget) {
            self.exhausted = true;
            return Ok(None);
        }
        self.nodes += 1;

        if depth == 0 || game_state.game_status != GameStatus::Active {
            return Ok(Some(self.scorer.score(game_state)));
        }

        let moves = all_legal_moves(game_state);
        if moves.is_empty() {
            return Ok(Some(self.scorer.score(game_state)));
        }

        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        for request in moves {
            let child = derive_successor(game_state, request)?;
            let Some(score) = self.minimax(&child, depth - 1, alpha, beta, !maximizing)? else {
                return Ok(None);
            };

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }

        Ok(Some(best))
    }
}

#[cfg(test)]
mod tests {
    use super::{search_best_move, SearchConfig};
    use crate::errors::ChessError;
    use crate::game_state::chess_types::{Color, GameStatus, Square};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_generator::all_legal_moves;
    use crate::move_generation::move_executor::{apply_move, derive_successor};
    use crate::search::board_scoring::{BoardScorer, StandardScorer, MATE_SCORE};

    fn fen(text: &str) -> GameState {
        GameState::from_fen(text).expect("FEN should parse")
    }

    fn sq(text: &str) -> Square {
        Square::from_algebraic(text).expect("test square should parse")
    }

    fn play(game: &GameState, moves: &[&str]) -> GameState {
        moves.iter().fold(game.clone(), |state, text| {
            let (from, to) = text.split_at(2);
            apply_move(&state, sq(from), sq(to), None).expect("scripted move should be legal")
        })
    }

    /// Plain minimax without pruning, as a reference value.
    fn exhaustive(game_state: &GameState, depth: u8) -> i32 {
        if depth == 0 || game_state.game_status != GameStatus::Active {
            return StandardScorer.score(game_state);
        }
        let scores = all_legal_moves(game_state).into_iter().map(|request| {
            let child = derive_successor(game_state, request).expect("generated move applies");
            exhaustive(&child, depth - 1)
        });
        if game_state.current_turn == Color::White {
            scores.max().unwrap_or_else(|| StandardScorer.score(game_state))
        } else {
            scores.min().unwrap_or_else(|| StandardScorer.score(game_state))
        }
    }

    #[test]
    fn pruned_search_matches_exhaustive_minimax() {
        let positions = [
            (GameState::new_game(), 3),
            (
                fen("r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3"),
                2,
            ),
            (
                fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"),
                2,
            ),
            (fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"), 3),
        ];

        for (game, depth) in positions {
            let result = search_best_move(&game, &StandardScorer, SearchConfig::with_depth(depth))
                .expect("search should find a move");
            let reference = exhaustive(&game, depth);
            assert_eq!(result.best_score, reference, "root score for {}", game.to_fen());

            let chosen = derive_successor(&game, result.best_move).expect("chosen move applies");
            assert_eq!(
                exhaustive(&chosen, depth - 1),
                reference,
                "chosen move {} for {}",
                result.best_move,
                game.to_fen()
            );
            assert!(!result.budget_exhausted);
        }
    }

    #[test]
    fn finds_mate_in_one_for_either_side() {
        let white = fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
        let result = search_best_move(&white, &StandardScorer, SearchConfig::with_depth(2))
            .expect("search should find a move");
        assert_eq!(result.best_move.to_string(), "a1a8");
        assert_eq!(result.best_score, MATE_SCORE);

        let black = play(&GameState::new_game(), &["f2f3", "e7e5", "g2g4"]);
        let result = search_best_move(&black, &StandardScorer, SearchConfig::with_depth(1))
            .expect("search should find a move");
        assert_eq!(result.best_move.to_string(), "d8h4");
        assert_eq!(result.best_score, -MATE_SCORE);
    }

    #[test]
    fn takes_a_hanging_queen() {
        let game = fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1");
        let result = search_best_move(&game, &StandardScorer, SearchConfig::with_depth(1))
            .expect("search should find a move");
        assert_eq!(result.best_move.to_string(), "d1d5");
    }

    #[test]
    fn search_is_deterministic() {
        let game = GameState::new_game();
        let config = SearchConfig::with_depth(2);
        let first = search_best_move(&game, &StandardScorer, config).expect("search");
        let second = search_best_move(&game, &StandardScorer, config).expect("search");
        assert_eq!(first, second);
    }

    #[test]
    fn zero_depth_searches_one_ply() {
        let game = GameState::new_game();
        let zero = search_best_move(&game, &StandardScorer, SearchConfig::with_depth(0))
            .expect("search");
        assert_eq!(zero.depth, 1);
        assert_eq!(zero.nodes, 20);
    }

    #[test]
    fn terminal_positions_have_no_move_to_choose() {
        let mated = play(&GameState::new_game(), &["f2f3", "e7e5", "g2g4", "d8h4"]);
        assert_eq!(
            search_best_move(&mated, &StandardScorer, SearchConfig::default()),
            Err(ChessError::NoLegalMove)
        );

        let stalemate = fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert_eq!(
            search_best_move(&stalemate, &StandardScorer, SearchConfig::default()),
            Err(ChessError::NoLegalMove)
        );
    }

    #[test]
    fn exhausted_budget_falls_back_to_first_legal_move() {
        let game = GameState::new_game();
        let config = SearchConfig {
            max_depth: 3,
            node_budget: Some(0),
        };
        let result = search_best_move(&game, &StandardScorer, config).expect("search");
        assert!(result.budget_exhausted);
        assert_eq!(result.best_move, all_legal_moves(&game)[0]);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn exhausted_budget_keeps_best_completed_root_move() {
        let game = fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1");
        let config = SearchConfig {
            max_depth: 1,
            node_budget: Some(64),
        };
        let result = search_best_move(&game, &StandardScorer, config).expect("search");
        assert_eq!(result.best_move.to_string(), "d1d5");

        let tight = SearchConfig {
            max_depth: 1,
            node_budget: Some(1),
        };
        let result = search_best_move(&game, &StandardScorer, tight).expect("search");
        assert!(result.budget_exhausted);
        assert_eq!(result.nodes, 1);
        assert_eq!(result.best_move, all_legal_moves(&game)[0]);
    }
}
