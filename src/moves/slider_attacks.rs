//! Ray-walking attacks for bishops, rooks, and queens.
//!
//! A ray includes the first occupied square it meets (a potential capture)
//! and stops there. Filtering out friendly blockers is the caller's job.

use crate::game_state::chess_types::Square;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

#[inline]
pub fn rook_attacks(square: Square, occupancy: u64) -> u64 {
    ROOK_DIRECTIONS
        .iter()
        .fold(0u64, |acc, &(d_row, d_col)| acc | trace_ray(square, d_row, d_col, occupancy))
}

#[inline]
pub fn bishop_attacks(square: Square, occupancy: u64) -> u64 {
    BISHOP_DIRECTIONS
        .iter()
        .fold(0u64, |acc, &(d_row, d_col)| acc | trace_ray(square, d_row, d_col, occupancy))
}

#[inline]
pub fn queen_attacks(square: Square, occupancy: u64) -> u64 {
    rook_attacks(square, occupancy) | bishop_attacks(square, occupancy)
}

fn trace_ray(square: Square, d_row: i8, d_col: i8, occupancy: u64) -> u64 {
    let mut attacks = 0u64;
    let mut cursor = square.offset(d_row, d_col);

    while let Some(target) = cursor {
        attacks |= target.bit();
        if occupancy & target.bit() != 0 {
            break;
        }
        cursor = target.offset(d_row, d_col);
    }

    attacks
}

#[cfg(test)]
mod tests {
    use super::{bishop_attacks, queen_attacks, rook_attacks};
    use crate::game_state::chess_types::Square;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn open_board_ray_counts() {
        assert_eq!(rook_attacks(sq("d4"), 0).count_ones(), 14);
        assert_eq!(bishop_attacks(sq("d4"), 0).count_ones(), 13);
        assert_eq!(queen_attacks(sq("d4"), 0).count_ones(), 27);
    }

    #[test]
    fn blocker_is_included_and_stops_the_ray() {
        let attacks = rook_attacks(sq("a1"), sq("a4").bit());
        assert_ne!(attacks & sq("a4").bit(), 0);
        assert_eq!(attacks & sq("a5").bit(), 0);
        assert_ne!(attacks & sq("h1").bit(), 0);

        let diag = bishop_attacks(sq("c1"), sq("e3").bit());
        assert_ne!(diag & sq("e3").bit(), 0);
        assert_eq!(diag & sq("f4").bit(), 0);
    }
}
