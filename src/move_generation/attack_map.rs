//! Raw attack geometry.
//!
//! Nothing in this module looks at whose turn it is or whether a move would
//! expose a king. It is the non-recursive layer that check detection and
//! castling legality are built on, so it must never call into legal move
//! generation.

use crate::game_state::chess_types::{Color, PieceKind, Square, SquareSet};
use crate::game_state::game_state::GameState;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Squares attacked by the piece standing on `square` (empty set if none).
pub fn attacks(game_state: &GameState, square: Square) -> SquareSet {
    let Some(piece) = game_state.board.piece_at(square) else {
        return SquareSet::EMPTY;
    };
    let occupancy = game_state.board.occupancy();

    let bits = match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, square),
        PieceKind::Knight => knight_attacks(square),
        PieceKind::Bishop => bishop_attacks(square, occupancy),
        PieceKind::Rook => rook_attacks(square, occupancy),
        PieceKind::Queen => queen_attacks(square, occupancy),
        PieceKind::King => king_attacks(square),
    };
    SquareSet::from_bits(bits)
}

/// True iff some piece of `by_color` has `square` in its attack set.
///
/// Looks outward from the target square instead of iterating the attackers;
/// the answer is the same because every attack pattern is symmetric apart
/// from pawns, which are looked up with the opposite color.
pub fn is_square_attacked(game_state: &GameState, square: Square, by_color: Color) -> bool {
    let board = &game_state.board;
    let occupancy = board.occupancy();
    let pieces = |kind: PieceKind| board.pieces_of(by_color, kind).bits();

    if pawn_attacks(by_color.opposite(), square) & pieces(PieceKind::Pawn) != 0 {
        return true;
    }
    if knight_attacks(square) & pieces(PieceKind::Knight) != 0 {
        return true;
    }
    if king_attacks(square) & pieces(PieceKind::King) != 0 {
        return true;
    }

    let diagonal = pieces(PieceKind::Bishop) | pieces(PieceKind::Queen);
    if bishop_attacks(square, occupancy) & diagonal != 0 {
        return true;
    }

    let straight = pieces(PieceKind::Rook) | pieces(PieceKind::Queen);
    rook_attacks(square, occupancy) & straight != 0
}

#[cfg(test)]
mod tests {
    use super::{attacks, is_square_attacked};
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::game_state::GameState;

    fn sq(text: &str) -> Square {
        Square::from_algebraic(text).expect("test square should parse")
    }

    #[test]
    fn pawn_attack_set_ignores_occupancy_and_advances() {
        let game = GameState::new_game();
        let set = attacks(&game, sq("e2"));
        assert_eq!(set.len(), 2);
        assert!(set.contains(sq("d3")));
        assert!(set.contains(sq("f3")));
        assert!(!set.contains(sq("e3")));
    }

    #[test]
    fn slider_attack_set_includes_friendly_blocker() {
        let game = GameState::new_game();
        let set = attacks(&game, sq("a1"));
        assert_eq!(set.len(), 2);
        assert!(set.contains(sq("a2")));
        assert!(set.contains(sq("b1")));
    }

    #[test]
    fn empty_square_attacks_nothing() {
        let game = GameState::new_game();
        assert!(attacks(&game, sq("e4")).is_empty());
    }

    #[test]
    fn square_attack_query_matches_attack_sets() {
        let kiwipete = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let game = GameState::from_fen(kiwipete).expect("FEN should parse");

        for color in Color::BOTH {
            for index in 0..64u8 {
                let target = Square::new(index % 8, index / 8).expect("index on board");
                let expected = game
                    .board
                    .squares_of(color)
                    .iter()
                    .any(|from| attacks(&game, from).contains(target));
                assert_eq!(
                    is_square_attacked(&game, target, color),
                    expected,
                    "{color} attack on {target}"
                );
            }
        }
    }
}
