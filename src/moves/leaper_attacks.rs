//! Precomputed attack sets for the fixed-offset pieces.
//!
//! Knight, king, and pawn-capture targets depend only on the origin square,
//! so they are tabulated once at compile time. Off-board targets never make
//! it into a table; friendly-occupied targets are masked out by callers.

use crate::game_state::chess_types::{Color, Square};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

const KNIGHT_ATTACKS: [u64; 64] = offset_table(&KNIGHT_OFFSETS);
const KING_ATTACKS: [u64; 64] = offset_table(&KING_OFFSETS);
// [color][square]: squares a pawn of that color captures onto.
const PAWN_ATTACKS: [[u64; 64]; 2] = [
    offset_table(&[(1, -1), (1, 1)]),
    offset_table(&[(-1, -1), (-1, 1)]),
];

#[inline]
pub const fn knight_attacks(square: Square) -> u64 {
    KNIGHT_ATTACKS[square.index()]
}

#[inline]
pub const fn king_attacks(square: Square) -> u64 {
    KING_ATTACKS[square.index()]
}

#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> u64 {
    PAWN_ATTACKS[color.index()][square.index()]
}

const fn offset_table(offsets: &[(i8, i8)]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i8;
        let col = (sq % 8) as i8;
        let mut i = 0usize;
        while i < offsets.len() {
            let r = row + offsets[i].0;
            let c = col + offsets[i].1;
            if r >= 0 && r < 8 && c >= 0 && c < 8 {
                table[sq] |= 1u64 << (r as usize * 8 + c as usize);
            }
            i += 1;
        }
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{king_attacks, knight_attacks, pawn_attacks};
    use crate::game_state::chess_types::{Color, Square};
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn knight_on_d4_reaches_eight_squares_and_corner_two() {
        assert_eq!(knight_attacks(sq("d4")).count_ones(), 8);
        assert_eq!(knight_attacks(sq("a1")), sq("b3").bit() | sq("c2").bit());
    }

    #[test]
    fn king_in_corner_has_three_targets() {
        assert_eq!(king_attacks(sq("a1")).count_ones(), 3);
        assert_eq!(king_attacks(sq("e4")).count_ones(), 8);
    }

    #[test]
    fn pawn_captures_point_forward_for_each_color() {
        assert_eq!(
            pawn_attacks(Color::White, sq("e2")),
            sq("d3").bit() | sq("f3").bit()
        );
        assert_eq!(
            pawn_attacks(Color::Black, sq("e7")),
            sq("d6").bit() | sq("f6").bit()
        );
        assert_eq!(pawn_attacks(Color::White, sq("a4")), sq("b5").bit());
        assert_eq!(pawn_attacks(Color::White, sq("h8")), 0);
    }
}
