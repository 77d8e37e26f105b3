//! Incremental game state.
//!
//! `GameState` owns the board, turn, castling rights, en-passant target,
//! clocks, executed-move history, and the undo stack used by make/undo. All
//! mutation goes through `make_move` / `undo_move` (and the crate-private
//! unchecked variants used by move generation and search).

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::move_generation::game_status::{classify, GameStatus};
use crate::move_generation::legal_move_apply::{make_move_unchecked, undo_move_unchecked};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,

    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,

    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,

    // Executed moves, oldest first, plus the parallel undo records.
    pub(crate) move_log: Vec<Move>,
    pub(crate) undo_stack: Vec<UndoState>,

    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::empty(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::NONE,
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            move_log: Vec::new(),
            undo_stack: Vec::new(),
            checkmate: false,
            stalemate: false,
        }
    }
}

impl GameState {
    #[inline]
    pub(crate) fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting position.
    pub fn new_game() -> Self {
        match parse_fen(STARTING_POSITION_FEN) {
            Ok(state) => state,
            Err(err) => unreachable!("starting FEN failed to parse: {err}"),
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.move_log.last().copied()
    }

    /// Number of executed moves that can still be undone.
    #[inline]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    #[inline]
    pub fn in_check(&self) -> bool {
        is_king_in_check(self, self.side_to_move)
    }

    #[inline]
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(self)
    }

    /// Execute `mv` if it is in the current legal-move set.
    ///
    /// Rejected moves leave the state untouched. Terminal flags are not
    /// recomputed; call [`GameState::refresh_status`] afterwards.
    pub fn make_move(&mut self, mv: Move) -> ChessResult<()> {
        let legal = legal_moves(self);
        self.make_listed_move(mv, &legal)
    }

    /// [`GameState::make_move`] against a legal-move set the caller already
    /// generated for this exact position.
    pub(crate) fn make_listed_move(&mut self, mv: Move, legal_moves: &[Move]) -> ChessResult<()> {
        if !legal_moves.contains(&mv) {
            return Err(ChessError::IllegalMove(mv));
        }
        make_move_unchecked(self, mv);
        Ok(())
    }

    /// Revert the most recent move.
    pub fn undo_move(&mut self) -> ChessResult<Move> {
        undo_move_unchecked(self).ok_or(ChessError::EmptyUndoStack)
    }

    /// Run the terminal detector and store its verdict in the flags.
    pub fn refresh_status(&mut self) -> GameStatus {
        let legal = legal_moves(self);
        self.refresh_status_with(&legal)
    }

    pub(crate) fn refresh_status_with(&mut self, legal_moves: &[Move]) -> GameStatus {
        let status = classify(self, legal_moves);
        self.checkmate = status == GameStatus::Checkmate;
        self.stalemate = status == GameStatus::Stalemate;
        status
    }
}
