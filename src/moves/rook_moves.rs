//! Rook ray geometry.

use crate::game_state::chess_types::Square;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Rook attacks from `square`: each ray includes empty squares and the first
/// occupied square (friend or foe), then stops.
#[inline]
pub fn rook_attacks(square: Square, occupancy: u64) -> u64 {
    ROOK_DIRECTIONS
        .iter()
        .fold(0u64, |acc, &(df, dr)| acc | trace_ray(square, df, dr, occupancy))
}

pub(crate) fn trace_ray(square: Square, file_step: i8, rank_step: i8, occupancy: u64) -> u64 {
    let mut attacks = 0u64;
    let mut cursor = square.offset(file_step, rank_step);

    while let Some(target) = cursor {
        attacks |= target.bit();
        if occupancy & target.bit() != 0 {
            break;
        }
        cursor = target.offset(file_step, rank_step);
    }

    attacks
}
