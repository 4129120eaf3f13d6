//! Leaf-node counting over the legal move tree.
//!
//! Used to check move generation against published reference counts. Each
//! leaf also tallies the kind of move that reached it.

use crate::errors::ChessResult;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::{GameStatus, PieceKind};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::move_generation::move_executor::derive_successor;
use crate::moves::move_descriptions::MoveRequest;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Published node counts for a position, indexed by depth minus one.
#[derive(Debug, Clone, Copy)]
pub struct PerftReference {
    pub name: &'static str,
    pub fen: &'static str,
    pub nodes: &'static [u64],
}

pub const PERFT_REFERENCES: &[PerftReference] = &[
    PerftReference {
        name: "start",
        fen: STARTING_POSITION_FEN,
        nodes: &[20, 400, 8902, 197_281],
    },
    PerftReference {
        name: "kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        nodes: &[48, 2039, 97_862],
    },
    PerftReference {
        name: "rook_endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        nodes: &[14, 191, 2812, 43_238],
    },
    PerftReference {
        name: "promotions",
        fen: "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
        nodes: &[6, 264, 9467],
    },
    PerftReference {
        name: "discovered_promotion",
        fen: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        nodes: &[44, 1486, 62_379],
    },
];

impl PerftReference {
    /// `(depth, expected nodes)` pairs up to and including `max_depth`.
    pub fn depths(&self, max_depth: u8) -> impl Iterator<Item = (u8, u64)> + '_ {
        (1..=max_depth).zip(self.nodes.iter().copied())
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for request in all_legal_moves(game_state) {
        let next = derive_successor(game_state, request)?;
        if depth == 1 {
            total.merge(leaf_counts(game_state, request, &next));
        } else {
            total.merge(perft(&next, depth - 1)?);
        }
    }

    Ok(total)
}

/// Node count per root move, in generation order.
pub fn perft_divide(game_state: &GameState, depth: u8) -> ChessResult<Vec<(MoveRequest, u64)>> {
    let depth = depth.max(1);
    all_legal_moves(game_state)
        .into_iter()
        .map(|request| {
            let next = derive_successor(game_state, request)?;
            Ok((request, perft(&next, depth - 1)?.nodes))
        })
        .collect()
}

fn leaf_counts(parent: &GameState, request: MoveRequest, next: &GameState) -> PerftCounts {
    let mut counts = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };
    let Some(last) = next.move_history.last() else {
        return counts;
    };

    if last.captured.is_some() {
        counts.captures += 1;
        if last.piece == PieceKind::Pawn && parent.board.is_empty_square(request.to) {
            counts.en_passant += 1;
        }
    }
    if last.piece == PieceKind::King && request.from.file().abs_diff(request.to.file()) == 2 {
        counts.castles += 1;
    }
    if last.promotion.is_some() {
        counts.promotions += 1;
    }
    if last.check {
        counts.checks += 1;
    }
    if next.game_status == GameStatus::Checkmate {
        counts.checkmates += 1;
    }

    counts
}
