//! FEN-to-GameState parser.
//!
//! Used to set up arbitrary positions. The parsed state has empty history and
//! captures; check and status are derived from the placement.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::{CapturedPieces, GameState};

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().unwrap_or("0");
    let fullmove_part = parts.next().unwrap_or("1");

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let board = parse_board(board_part)?;
    for color in Color::BOTH {
        if board.pieces_of(color, PieceKind::King).len() != 1 {
            return Err(invalid(format!("{color} must have exactly one king")));
        }
    }

    let game_state = GameState {
        board,
        current_turn: parse_side_to_move(side_part)?,
        castling_rights: parse_castling_rights(castling_part)?,
        en_passant_target: parse_en_passant_square(en_passant_part)?,
        half_move_clock: halfmove_part
            .parse::<u32>()
            .map_err(|_| invalid(format!("halfmove clock '{halfmove_part}'")))?,
        full_move_number: fullmove_part
            .parse::<u32>()
            .map_err(|_| invalid(format!("fullmove number '{fullmove_part}'")))?,
        captured_pieces: CapturedPieces::default(),
        move_history: Vec::new(),
        game_status: GameStatus::Active,
        is_in_check: false,
    };

    Ok(game_state.with_derived_status())
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("empty-square count '{ch}'")));
                }
                file = file.saturating_add(empty_count as u8);
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(format!("piece character '{ch}'")))?;
            if file >= 8 {
                return Err(invalid(format!("rank {} has too many files", rank + 1)));
            }

            board.put(Square::new(file, rank)?, piece);
            file += 1;
        }

        if file != 8 {
            return Err(invalid(format!("rank {} does not sum to 8 files", rank + 1)));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(format!("side to move '{side_part}'"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(CastlingRights::NONE);
    }

    let (mut wk, mut wq, mut bk, mut bq) = (false, false, false, false);
    for ch in castling_part.chars() {
        match ch {
            'K' => wk = true,
            'Q' => wq = true,
            'k' => bk = true,
            'q' => bq = true,
            _ => return Err(invalid(format!("castling rights character '{ch}'"))),
        }
    }

    Ok(CastlingRights::from_flags(wk, wq, bk, bq))
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = Square::from_algebraic(en_passant_part)
        .map_err(|_| invalid(format!("en-passant square '{en_passant_part}'")))?;
    if square.rank() != 2 && square.rank() != 5 {
        return Err(invalid(format!("en-passant square '{en_passant_part}'")));
    }
    Ok(Some(square))
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    PieceKind::from_letter(ch).map(|kind| Piece::new(kind, color))
}

fn invalid(detail: impl Into<String>) -> ChessError {
    ChessError::InvalidFen(detail.into())
}
