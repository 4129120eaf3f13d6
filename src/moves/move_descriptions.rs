//! Move requests and move-history records.
//!
//! A `MoveRequest` is what a caller (or the search) asks the executor to play.
//! A `Move` is what the executor appends to `GameState::move_history` once the
//! request has been applied, annotated with the derived capture/check/mate
//! facts.

use std::fmt;
use std::str::FromStr;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveRequest {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl MoveRequest {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, promotion: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }

    /// Parse coordinate notation such as `e2e4` or `e7e8q`.
    pub fn from_long_algebraic(text: &str) -> ChessResult<Self> {
        let text = text.trim();
        if !(4..=5).contains(&text.len()) || !text.is_ascii() {
            return Err(ChessError::InvalidSquare(text.to_owned()));
        }

        let from = Square::from_algebraic(&text[0..2])?;
        let to = Square::from_algebraic(&text[2..4])?;
        let promotion = match text[4..].chars().next() {
            None => None,
            Some(letter) => Some(
                PieceKind::from_letter(letter)
                    .ok_or_else(|| ChessError::InvalidSquare(text.to_owned()))?,
            ),
        };

        Ok(Self {
            from,
            to,
            promotion,
        })
    }
}

impl fmt::Display for MoveRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.letter())?;
        }
        Ok(())
    }
}

impl FromStr for MoveRequest {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_long_algebraic(s)
    }
}

/// One entry of a game's move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Kind of the piece that moved (a pawn for promotions).
    pub piece: PieceKind,
    /// Piece the pawn became, only set on promotions.
    pub promotion: Option<PieceKind>,
    /// Kind of the captured piece, including en-passant captures.
    pub captured: Option<PieceKind>,
    /// The move left the opponent in check.
    pub check: bool,
    /// The move left the opponent checkmated.
    pub checkmate: bool,
}

impl Move {
    #[inline]
    pub const fn request(&self) -> MoveRequest {
        MoveRequest {
            from: self.from,
            to: self.to,
            promotion: self.promotion,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.request())?;
        if self.checkmate {
            f.write_str("#")
        } else if self.check {
            f.write_str("+")
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MoveRequest;
    use crate::game_state::chess_types::PieceKind;

    #[test]
    fn parses_plain_and_promotion_moves() {
        let plain: MoveRequest = "e2e4".parse().expect("e2e4 should parse");
        assert_eq!(plain.from.to_string(), "e2");
        assert_eq!(plain.to.to_string(), "e4");
        assert_eq!(plain.promotion, None);

        let promo = MoveRequest::from_long_algebraic("a7a8n").expect("a7a8n should parse");
        assert_eq!(promo.promotion, Some(PieceKind::Knight));
        assert_eq!(promo.to_string(), "a7a8n");
    }

    #[test]
    fn rejects_garbage() {
        assert!("e2".parse::<MoveRequest>().is_err());
        assert!("e2e9".parse::<MoveRequest>().is_err());
        assert!("e7e8x".parse::<MoveRequest>().is_err());
    }
}
