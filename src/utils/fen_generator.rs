use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

pub fn generate_fen(game_state: &GameState) -> String {
    let side_to_move = match game_state.current_turn {
        Color::White => "w",
        Color::Black => "b",
    };
    let en_passant = game_state
        .en_passant_target
        .map_or_else(|| "-".to_owned(), |square| square.to_string());

    format!(
        "{} {} {} {} {} {}",
        generate_board_field(game_state),
        side_to_move,
        generate_castling_field(game_state.castling_rights),
        en_passant,
        game_state.half_move_clock,
        game_state.full_move_number
    )
}

fn generate_board_field(game_state: &GameState) -> String {
    let mut out = String::with_capacity(72);

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match game_state.board.piece_at(Square::at(file, rank)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_to_fen_char(piece));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn piece_to_fen_char(piece: Piece) -> char {
    match piece.color {
        Color::White => piece.kind.letter().to_ascii_uppercase(),
        Color::Black => piece.kind.letter(),
    }
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();
    for (color, side, ch) in [
        (Color::White, CastleSide::Kingside, 'K'),
        (Color::White, CastleSide::Queenside, 'Q'),
        (Color::Black, CastleSide::Kingside, 'k'),
        (Color::Black, CastleSide::Queenside, 'q'),
    ] {
        if rights.has(color, side) {
            out.push(ch);
        }
    }

    if out.is_empty() {
        out.push('-');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::move_executor::apply_move;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn round_trip_custom_position_fen() {
        let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6";
        let parsed = parse_fen(fen).expect("custom FEN should parse");
        assert_eq!(generate_fen(&parsed), fen);

        let reparsed = parse_fen(&generate_fen(&parsed)).expect("generated FEN should parse");
        assert_eq!(reparsed, parsed);
    }

    #[test]
    fn reflects_moves_applied_to_the_start_position() {
        let game = GameState::new_game();
        assert_eq!(generate_fen(&game), STARTING_POSITION_FEN);

        let e2 = "e2".parse().expect("e2");
        let e4 = "e4".parse().expect("e4");
        let next = apply_move(&game, e2, e4, None).expect("e2e4 is legal");
        assert_eq!(
            generate_fen(&next),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
    }

    #[test]
    fn empty_rights_render_as_dash() {
        let fen = "4k3/8/8/8/8/8/8/4K3 w - - 12 40";
        let game = parse_fen(fen).expect("FEN should parse");
        assert_eq!(generate_fen(&game), fen);
    }
}
