//! Head-to-head engine games for local testing.
//!
//! Two `Engine` implementations play each other from the starting position
//! after a seeded random opening prefix, so a given seed always replays the
//! same game.

use std::time::Instant;

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::engines::engine_trait::Engine;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{Color, GameStatus};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::move_generation::move_executor::apply_move;
use crate::moves::move_descriptions::MoveRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelfPlayOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    /// Fifty-move rule or insufficient material.
    DrawByRule,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelfPlayConfig {
    /// Engine plies to play after the opening before calling the game drawn.
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_min_plies: 2,
            opening_max_plies: 6,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SelfPlayResult {
    pub outcome: SelfPlayOutcome,
    pub final_state: GameState,
    pub opening_moves: Vec<String>,
    pub played_moves: Vec<String>,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

/// Play one seeded game. `white` moves the white pieces.
pub fn play_self_play_game(
    white: &mut dyn Engine,
    black: &mut dyn Engine,
    seed: u64,
    config: SelfPlayConfig,
) -> ChessResult<SelfPlayResult> {
    white.new_game();
    black.new_game();

    let (mut state, opening_moves) = apply_seeded_random_opening(
        &GameState::new_game(),
        seed,
        config.opening_min_plies,
        config.opening_max_plies,
    )?;
    debug!(seed, opening = ?opening_moves, "opening applied");

    let mut played_moves = Vec::<String>::new();
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    for _ in 0..config.max_plies {
        if state.is_game_over() {
            break;
        }

        let mover = state.current_turn;
        let started = Instant::now();
        let output = match mover {
            Color::White => white.choose_move(&state)?,
            Color::Black => black.choose_move(&state)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();
        match mover {
            Color::White => white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns),
            Color::Black => black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns),
        }

        state = play_request(&state, output.best_move)?;
        played_moves.push(output.best_move.to_string());
    }

    let outcome = outcome_of(&state);
    info!(
        seed,
        ?outcome,
        plies = played_moves.len(),
        final_fen = %state.to_fen(),
        "self-play game finished"
    );

    Ok(SelfPlayResult {
        outcome,
        final_state: state,
        opening_moves,
        played_moves,
        white_total_time_ns,
        black_total_time_ns,
    })
}

fn outcome_of(state: &GameState) -> SelfPlayOutcome {
    match state.game_status {
        GameStatus::Checkmate => match state.current_turn {
            Color::White => SelfPlayOutcome::BlackWinCheckmate,
            Color::Black => SelfPlayOutcome::WhiteWinCheckmate,
        },
        GameStatus::Stalemate => SelfPlayOutcome::DrawStalemate,
        GameStatus::Draw => SelfPlayOutcome::DrawByRule,
        GameStatus::Active => SelfPlayOutcome::DrawMaxPlies,
    }
}

fn apply_seeded_random_opening(
    initial: &GameState,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> ChessResult<(GameState, Vec<String>)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = initial.clone();
    let mut opening_moves = Vec::<String>::new();

    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    for _ in 0..target_plies {
        if state.is_game_over() {
            break;
        }
        let legal_moves = all_legal_moves(&state);
        let chosen = *legal_moves
            .as_slice()
            .choose(&mut rng)
            .ok_or(ChessError::NoLegalMove)?;

        state = play_request(&state, chosen)?;
        opening_moves.push(chosen.to_string());
    }

    Ok((state, opening_moves))
}

#[inline]
fn play_request(state: &GameState, request: MoveRequest) -> ChessResult<GameState> {
    apply_move(state, request.from, request.to, request.promotion)
}
