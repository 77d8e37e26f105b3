//! Errors used throughout the chess engine.
//!
//! `ChessError` is the single error type returned by game logic, parsing
//! utilities, configuration, and the search front door. Rule violations never
//! reach `GameState`: they are reported here and the state is left as it was.
//!
//! Recoverable, user-facing variants: `IllegalMove`, `EmptyUndoStack`,
//! `NoPieceOnSquare`, `InvalidAlgebraic`, `InvalidFen`, `InvalidConfig`.
//! `SearchUnavailable` means a worker could not be started or vanished; the
//! caller treats it as "no move" and may retry with a fresh snapshot.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Move, Square};

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The move is not in the current legal-move set.
    IllegalMove(Move),

    /// Undo was requested with no executed moves left.
    EmptyUndoStack,

    /// A move was requested from an empty square.
    NoPieceOnSquare(Square),

    /// A square or move string could not be parsed.
    ///
    /// Payload: the offending text plus a short reason.
    InvalidAlgebraic(String),

    /// A FEN string had malformed structure or impossible content.
    InvalidFen(String),

    /// A position breaks a board invariant (for example a missing king).
    InvalidGameState(String),

    /// A command-line or session setting could not be interpreted.
    InvalidConfig(String),

    /// The search worker could not be started or disappeared before
    /// reporting a result.
    SearchUnavailable(String),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::IllegalMove(mv) => write!(f, "illegal move: {mv}"),
            ChessError::EmptyUndoStack => write!(f, "no move to undo"),
            ChessError::NoPieceOnSquare(sq) => write!(f, "no piece on {sq}"),
            ChessError::InvalidAlgebraic(msg) => write!(f, "invalid algebraic notation: {msg}"),
            ChessError::InvalidFen(msg) => write!(f, "invalid FEN: {msg}"),
            ChessError::InvalidGameState(msg) => write!(f, "invalid game state: {msg}"),
            ChessError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            ChessError::SearchUnavailable(msg) => write!(f, "search unavailable: {msg}"),
        }
    }
}

impl Error for ChessError {}
