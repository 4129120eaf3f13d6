//! Move application.
//!
//! Every function here takes a `&GameState` and returns a fresh value; the
//! input is never modified. `apply_move` is the validated entry point used by
//! callers. The search derives successors through `derive_successor`, which
//! skips re-validation of moves that came out of the generator, and the
//! generator's self-check filter uses `trial_position`, which performs the
//! board bookkeeping without history, captures or status derivation.

use tracing::trace;

use crate::errors::{ChessError, ChessResult, InvalidMoveReason};
use crate::game_state::chess_types::{CastleSide, Color, GameStatus, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::check_detector::is_in_check;
use crate::move_generation::game_status::classify;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::move_descriptions::{Move, MoveRequest};

/// Apply `from -> to` for the side to move.
///
/// `promotion` picks the piece a pawn becomes on its last rank (queen when
/// `None`) and is ignored for every other move. Fails with
/// `ChessError::InvalidMove` if `from` is empty, holds the wrong color, `to`
/// is not a legal destination, or the promotion piece is a pawn or king.
pub fn apply_move(
    game_state: &GameState,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> ChessResult<GameState> {
    let piece = game_state
        .board
        .piece_at(from)
        .ok_or_else(|| reject(from, to, InvalidMoveReason::EmptySquare))?;

    if piece.color != game_state.current_turn {
        return Err(reject(from, to, InvalidMoveReason::WrongColor));
    }
    if promotion.is_some_and(|kind| !kind.is_promotion_target()) {
        return Err(reject(from, to, InvalidMoveReason::IllegalPromotion));
    }
    if !legal_moves(game_state, from).contains(&to) {
        return Err(reject(from, to, InvalidMoveReason::IllegalDestination));
    }

    Ok(successor(game_state, piece, from, to, promotion))
}

/// Apply a request that is already known to be legal, deriving check, status
/// and history exactly as `apply_move` does.
pub(crate) fn derive_successor(
    game_state: &GameState,
    request: MoveRequest,
) -> ChessResult<GameState> {
    let piece = game_state.board.piece_at(request.from).ok_or(ChessError::InvalidMove {
        from: request.from,
        to: request.to,
        reason: InvalidMoveReason::EmptySquare,
    })?;
    Ok(successor(
        game_state,
        piece,
        request.from,
        request.to,
        request.promotion,
    ))
}

/// Board-level result of moving `piece` from `from` to `to`, used to test a
/// candidate for self-check. History, captures and status are left empty.
pub(crate) fn trial_position(
    game_state: &GameState,
    piece: Piece,
    from: Square,
    to: Square,
) -> GameState {
    let mut probe = game_state.detached_position();
    execute(&mut probe, piece, from, to, None);
    probe
}

fn successor(
    game_state: &GameState,
    piece: Piece,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> GameState {
    let mut next = game_state.clone();
    let executed = execute(&mut next, piece, from, to, promotion);

    next.is_in_check = is_in_check(&next, next.current_turn);
    next.game_status = classify(&next);
    next.move_history.push(Move {
        from,
        to,
        piece: piece.kind,
        promotion: executed.promoted_to,
        captured: executed.captured,
        check: next.is_in_check,
        checkmate: next.game_status == GameStatus::Checkmate,
    });

    next
}

struct Executed {
    captured: Option<PieceKind>,
    promoted_to: Option<PieceKind>,
}

fn execute(
    state: &mut GameState,
    piece: Piece,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> Executed {
    let mover = piece.color;
    let is_pawn = piece.kind == PieceKind::Pawn;

    let mut captured = state.board.remove(to);
    if let Some(victim) = captured {
        state.captured_pieces.record(victim);
        if let Some((color, side)) = corner_right(to) {
            state.castling_rights.revoke(color, side);
        }
    }

    if is_pawn && state.en_passant_target == Some(to) {
        let behind = Square::at(to.file(), from.rank());
        if let Some(victim) = state.board.piece_at(behind) {
            if victim.kind == PieceKind::Pawn && victim.color != mover {
                state.board.remove(behind);
                state.captured_pieces.record(victim);
                captured = Some(victim);
            }
        }
    }

    state.board.remove(from);
    let promoted_to = if is_pawn && to.rank() == mover.promotion_rank() {
        Some(promotion.unwrap_or(PieceKind::Queen))
    } else {
        None
    };
    state
        .board
        .put(to, Piece::new(promoted_to.unwrap_or(piece.kind), mover));

    match piece.kind {
        PieceKind::King => {
            if from.file().abs_diff(to.file()) == 2 {
                let side = if to.file() > from.file() {
                    CastleSide::Kingside
                } else {
                    CastleSide::Queenside
                };
                let rank = mover.home_rank();
                let rook_from = Square::at(side.rook_home_file(), rank);
                let rook_to = Square::at(side.rook_castled_file(), rank);
                if let Some(rook) = state.board.remove(rook_from) {
                    state.board.put(rook_to, rook);
                }
            }
            state.castling_rights.revoke_all(mover);
        }
        PieceKind::Rook => {
            if let Some((color, side)) = corner_right(from) {
                if color == mover {
                    state.castling_rights.revoke(color, side);
                }
            }
        }
        _ => {}
    }

    state.en_passant_target = if is_pawn && from.rank().abs_diff(to.rank()) == 2 {
        Some(Square::at(from.file(), (from.rank() + to.rank()) / 2))
    } else {
        None
    };

    if is_pawn || captured.is_some() {
        state.half_move_clock = 0;
    } else {
        state.half_move_clock = state.half_move_clock.saturating_add(1);
    }
    if mover == Color::Black {
        state.full_move_number = state.full_move_number.saturating_add(1);
    }
    state.current_turn = mover.opposite();

    Executed {
        captured: captured.map(|victim| victim.kind),
        promoted_to,
    }
}

/// Castling right tied to a rook's home corner.
fn corner_right(square: Square) -> Option<(Color, CastleSide)> {
    let color = match square.rank() {
        0 => Color::White,
        7 => Color::Black,
        _ => return None,
    };
    match square.file() {
        0 => Some((color, CastleSide::Queenside)),
        7 => Some((color, CastleSide::Kingside)),
        _ => None,
    }
}

fn reject(from: Square, to: Square, reason: InvalidMoveReason) -> ChessError {
    trace!(%from, %to, %reason, "rejected move request");
    ChessError::InvalidMove { from, to, reason }
}
