//! Standalone engine-vs-engine runner.
//!
//! Run with:
//! `cargo run --release --bin self_play`
//! `RUST_LOG=debug cargo run --release --bin self_play -- --white 3 --black random --games 4`
//!
//! `--white` / `--black` take a difficulty level (1-5) or `random`.

use minimax_chess::engines::difficulty::Difficulty;
use minimax_chess::engines::engine_minimax::MinimaxEngine;
use minimax_chess::engines::engine_random::RandomEngine;
use minimax_chess::engines::engine_trait::Engine;
use minimax_chess::utils::self_play::{play_self_play_game, SelfPlayConfig};

struct Options {
    white: String,
    black: String,
    seed: u64,
    games: u16,
}

fn parse_options() -> Result<Options, String> {
    let mut options = Options {
        white: "2".to_owned(),
        black: "random".to_owned(),
        seed: 1234,
        games: 1,
    };

    let mut args = std::env::args().skip(1);
    while let Some(flag) = args.next() {
        let value = args
            .next()
            .ok_or_else(|| format!("missing value for {flag}"))?;
        match flag.as_str() {
            "--white" => options.white = value,
            "--black" => options.black = value,
            "--seed" => options.seed = value.parse().map_err(|_| format!("bad seed '{value}'"))?,
            "--games" => {
                options.games = value.parse().map_err(|_| format!("bad game count '{value}'"))?
            }
            _ => return Err(format!("unknown option {flag}")),
        }
    }

    Ok(options)
}

fn build_engine(choice: &str, seed: u64) -> Result<Box<dyn Engine>, String> {
    if choice == "random" {
        return Ok(Box::new(RandomEngine::new(seed)));
    }
    let level: u8 = choice
        .parse()
        .map_err(|_| format!("engine must be 1-5 or 'random', got '{choice}'"))?;
    let difficulty = Difficulty::try_from(level).map_err(|e| e.to_string())?;
    Ok(Box::new(MinimaxEngine::from_difficulty(difficulty)))
}

fn main() -> Result<(), String> {
    tracing_subscriber::fmt::init();

    let options = parse_options()?;
    let config = SelfPlayConfig::default();

    for game in 0..options.games {
        let seed = options.seed.wrapping_add(u64::from(game));
        let mut white = build_engine(&options.white, seed)?;
        let mut black = build_engine(&options.black, seed ^ 0xA5A5_5A5A_0123_4567)?;

        let result = play_self_play_game(white.as_mut(), black.as_mut(), seed, config)
            .map_err(|e| e.to_string())?;

        println!(
            "game {}/{} seed={} white={} black={} outcome={:?} plies={} \
             white_ms={:.1} black_ms={:.1}",
            game + 1,
            options.games,
            seed,
            white.name(),
            black.name(),
            result.outcome,
            result.opening_moves.len() + result.played_moves.len(),
            result.white_total_time_ns as f64 / 1_000_000.0,
            result.black_total_time_ns as f64 / 1_000_000.0,
        );
        println!("  moves: {} {}", result.opening_moves.join(" "), result.played_moves.join(" "));
        println!("  final: {}", result.final_state.to_fen());
    }

    Ok(())
}
