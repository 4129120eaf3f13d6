//! Legal move generation.
//!
//! Candidates come from the per-piece pseudo-legal generators and are kept
//! only if playing them leaves the mover's own king unattacked. Order is
//! deterministic: origin squares ascend from a1 to h8 and each piece lists its
//! targets in the order its generator produces them. Table and slider targets
//! come out in ascending square order rather than direction order; equal-score
//! search ties resolve against that order.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::check_detector::is_in_check;
use crate::move_generation::legal_moves_king::generate_king_targets;
use crate::move_generation::legal_moves_knight::generate_knight_targets;
use crate::move_generation::legal_moves_pawn::generate_pawn_targets;
use crate::move_generation::legal_moves_slider::generate_slider_targets;
use crate::move_generation::move_executor::trial_position;
use crate::moves::move_descriptions::MoveRequest;

/// Legal destinations for the piece on `square`.
///
/// Empty when the square is empty or holds a piece of the side not to move.
pub fn legal_moves(game_state: &GameState, square: Square) -> Vec<Square> {
    let Some(piece) = game_state.board.piece_at(square) else {
        return Vec::new();
    };
    if piece.color != game_state.current_turn {
        return Vec::new();
    }

    let mut targets = pseudo_legal_targets(game_state, square, piece);
    targets.retain(|&to| keeps_king_safe(game_state, piece, square, to));
    targets
}

/// Every legal move for the side to move.
///
/// A pawn reaching its last rank yields four requests, one per promotion
/// piece in queen, rook, bishop, knight order.
pub fn all_legal_moves(game_state: &GameState) -> Vec<MoveRequest> {
    let mover = game_state.current_turn;
    let mut moves = Vec::with_capacity(48);

    for from in game_state.board.squares_of(mover) {
        let Some(piece) = game_state.board.piece_at(from) else {
            continue;
        };
        for to in legal_moves(game_state, from) {
            if is_promotion(piece, to) {
                moves.extend(
                    PieceKind::PROMOTIONS
                        .iter()
                        .map(|&kind| MoveRequest::with_promotion(from, to, kind)),
                );
            } else {
                moves.push(MoveRequest::new(from, to));
            }
        }
    }

    moves
}

/// Whether the side to move has at least one legal move. Stops at the first.
pub fn has_legal_move(game_state: &GameState) -> bool {
    let mover = game_state.current_turn;
    game_state.board.squares_of(mover).iter().any(|from| {
        let Some(piece) = game_state.board.piece_at(from) else {
            return false;
        };
        pseudo_legal_targets(game_state, from, piece)
            .into_iter()
            .any(|to| keeps_king_safe(game_state, piece, from, to))
    })
}

#[inline]
pub fn is_promotion(piece: Piece, to: Square) -> bool {
    piece.kind == PieceKind::Pawn && to.rank() == piece.color.promotion_rank()
}

fn pseudo_legal_targets(game_state: &GameState, from: Square, piece: Piece) -> Vec<Square> {
    let mut targets = Vec::with_capacity(28);
    let color: Color = piece.color;
    match piece.kind {
        PieceKind::Pawn => generate_pawn_targets(game_state, from, color, &mut targets),
        PieceKind::Knight => generate_knight_targets(game_state, from, color, &mut targets),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            generate_slider_targets(game_state, from, piece.kind, color, &mut targets)
        }
        PieceKind::King => generate_king_targets(game_state, from, color, &mut targets),
    }
    targets
}

fn keeps_king_safe(game_state: &GameState, piece: Piece, from: Square, to: Square) -> bool {
    let probe = trial_position(game_state, piece, from, to);
    !is_in_check(&probe, piece.color)
}
