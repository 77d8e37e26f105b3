//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search stays modular by delegating static position scoring to this trait,
//! so heuristics can be swapped without touching search code.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::leaper_attacks::{king_attacks, knight_attacks, pawn_attacks};
use crate::moves::slider_attacks::{bishop_attacks, queen_attacks, rook_attacks};

/// Score of a side that has just been mated at the root. Mate found `ply`
/// plies deep scores `MATE_SCORE - ply`, which keeps shorter mates ahead.
pub const MATE_SCORE: i32 = 30000;

/// Anything at or beyond this magnitude is a forced mate, not material.
pub const MATE_THRESHOLD: i32 = MATE_SCORE - 1000;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side to move.
    fn score(&self, game_state: &GameState) -> i32;
}

#[inline]
fn from_side_to_move(game_state: &GameState, white_minus_black: i32) -> i32 {
    match game_state.side_to_move() {
        Color::White => white_minus_black,
        Color::Black => -white_minus_black,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    /// Centipawn value. The king carries none: both sides always have one.
    #[inline]
    pub const fn piece_value(kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 0,
        }
    }

    fn material_balance_white_minus_black(board: &Board) -> i32 {
        PieceKind::ALL
            .iter()
            .map(|&kind| {
                let white = board.pieces(Color::White, kind).count_ones() as i32;
                let black = board.pieces(Color::Black, kind).count_ones() as i32;
                (white - black) * Self::piece_value(kind)
            })
            .sum()
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        from_side_to_move(
            game_state,
            Self::material_balance_white_minus_black(game_state.board()),
        )
    }
}

/// Material plus piece-square placement and pseudo mobility.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScorer;

impl StandardScorer {
    const MOBILITY_WEIGHT: i32 = 2;

    fn positional_term(board: &Board) -> i32 {
        board
            .iter_pieces()
            .map(|(square, piece)| {
                let sign = if piece.color == Color::White { 1 } else { -1 };
                sign * piece_square_bonus(piece, square)
            })
            .sum()
    }

    fn mobility_term(board: &Board) -> i32 {
        let white = mobility_for_color(board, Color::White);
        let black = mobility_for_color(board, Color::Black);
        (white - black) * Self::MOBILITY_WEIGHT
    }

    fn white_minus_black(board: &Board) -> i32 {
        MaterialScorer::material_balance_white_minus_black(board)
            + Self::positional_term(board)
            + Self::mobility_term(board)
    }
}

impl BoardScorer for StandardScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        from_side_to_move(game_state, Self::white_minus_black(game_state.board()))
    }
}

/// [`StandardScorer`] blended with king activity and passed-pawn terms
/// that grow as non-pawn material comes off the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct EndgameTaperedScorer;

impl BoardScorer for EndgameTaperedScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        let board = game_state.board();
        let base = StandardScorer::white_minus_black(board);
        let endgame = king_activity_white_minus_black(board) + passed_pawns_white_minus_black(board);
        let tapered = endgame * (24 - game_phase(board)) / 24;
        from_side_to_move(game_state, base + tapered)
    }
}

fn mobility_for_color(board: &Board, color: Color) -> i32 {
    let occupied = board.occupied();
    let free = !board.occupancy(color);

    PieceKind::ALL
        .iter()
        .flat_map(|&kind| squares_of(board.pieces(color, kind)).map(move |sq| (kind, sq)))
        .map(|(kind, sq)| {
            let reach = match kind {
                PieceKind::Pawn => pawn_attacks(color, sq),
                PieceKind::Knight => knight_attacks(sq),
                PieceKind::Bishop => bishop_attacks(sq, occupied),
                PieceKind::Rook => rook_attacks(sq, occupied),
                PieceKind::Queen => queen_attacks(sq, occupied),
                PieceKind::King => king_attacks(sq),
            };
            (reach & free).count_ones() as i32
        })
        .sum()
}

/// Placement bonus, with ranks counted from the piece owner's side.
fn piece_square_bonus(piece: Piece, square: Square) -> i32 {
    let file = square.col() as i32;
    let rank = relative_rank(piece.color, square);
    let dist_center = (file - 3).abs() + (rank - 3).abs();
    let center_bonus = 4 - dist_center;

    match piece.kind {
        PieceKind::Pawn => rank * 8 - (file - 3).abs() * 2,
        PieceKind::Knight => center_bonus * 6,
        PieceKind::Bishop => center_bonus * 4 + rank,
        PieceKind::Rook => rank * 2,
        PieceKind::Queen => center_bonus * 2,
        PieceKind::King => {
            // Sheltered on the back ranks, away from the centre files.
            if rank <= 1 {
                8 - (file - 4).abs() * 2
            } else {
                -center_bonus * 4
            }
        }
    }
}

#[inline]
fn relative_rank(color: Color, square: Square) -> i32 {
    match color {
        Color::White => square.row() as i32,
        Color::Black => 7 - square.row() as i32,
    }
}

/// 24 with all minor and major pieces on the board, 0 with none.
fn game_phase(board: &Board) -> i32 {
    let weight = |kind| match kind {
        PieceKind::Queen => 4,
        PieceKind::Rook => 2,
        PieceKind::Bishop | PieceKind::Knight => 1,
        PieceKind::Pawn | PieceKind::King => 0,
    };
    let phase: i32 = [Color::White, Color::Black]
        .iter()
        .flat_map(|&color| PieceKind::ALL.iter().map(move |&kind| (color, kind)))
        .map(|(color, kind)| board.pieces(color, kind).count_ones() as i32 * weight(kind))
        .sum();
    phase.clamp(0, 24)
}

fn king_activity_white_minus_black(board: &Board) -> i32 {
    let (Some(white), Some(black)) = (
        board.king_square(Color::White),
        board.king_square(Color::Black),
    ) else {
        return 0;
    };
    let centrality = |sq: Square| 7 - ((sq.col() as i32 - 3).abs() + (sq.row() as i32 - 3).abs());
    (centrality(white) - centrality(black)) * 6
}

fn passed_pawns_white_minus_black(board: &Board) -> i32 {
    let side_total = |color: Color| -> i32 {
        let enemy_pawns = board.pieces(color.opposite(), PieceKind::Pawn);
        squares_of(board.pieces(color, PieceKind::Pawn))
            .filter(|&sq| is_passed_pawn(color, sq, enemy_pawns))
            .map(|sq| (relative_rank(color, sq) + 1) * 12)
            .sum()
    };
    side_total(Color::White) - side_total(Color::Black)
}

/// No enemy pawn ahead on the same or an adjacent file.
fn is_passed_pawn(color: Color, square: Square, enemy_pawns: u64) -> bool {
    let own_rank = relative_rank(color, square);
    !squares_of(enemy_pawns).any(|enemy| {
        square.col().abs_diff(enemy.col()) <= 1 && relative_rank(color, enemy) > own_rank
    })
}
