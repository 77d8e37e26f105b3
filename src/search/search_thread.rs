//! Off-thread search with a non-blocking, poll-per-tick result.
//!
//! `start_search` moves an owned snapshot, its legal moves, and an engine
//! into a named worker thread. The worker sends exactly one message on an
//! mpsc channel; [`SearchHandle::poll`] checks it with `try_recv` and never
//! blocks. Whatever goes wrong on the worker side (engine error, panic, a
//! move outside the snapshot's legal set) surfaces as "no move".

use std::sync::mpsc::{self, Receiver, RecvError, TryRecvError};
use std::thread;

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;

const WORKER_THREAD_NAME: &str = "knightfall-search";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPoll {
    Pending,
    /// The search is over. `None` covers both "no legal move" and any
    /// failure of the worker.
    Ready(Option<Move>),
}

type WorkerMessage = ChessResult<EngineOutput>;

pub struct SearchHandle {
    receiver: Receiver<WorkerMessage>,
    legal_moves: Vec<Move>,
    outcome: Option<Option<Move>>,
    info_lines: Vec<String>,
}

pub fn start_search(
    snapshot: GameState,
    legal_moves: Vec<Move>,
    mut engine: Box<dyn Engine>,
    params: GoParams,
) -> ChessResult<SearchHandle> {
    let (sender, receiver) = mpsc::channel::<WorkerMessage>();
    let worker_moves = legal_moves.clone();

    thread::Builder::new()
        .name(WORKER_THREAD_NAME.to_owned())
        .spawn(move || {
            let output = engine.choose_move(&snapshot, &worker_moves, &params);
            // An abandoned handle has dropped the receiver; nothing to do then.
            let _ = sender.send(output);
        })
        .map_err(|err| ChessError::SearchUnavailable(err.to_string()))?;

    Ok(SearchHandle {
        receiver,
        legal_moves,
        outcome: None,
        info_lines: Vec::new(),
    })
}

impl SearchHandle {
    /// Non-blocking check for the result. Once ready, every later call
    /// returns the same outcome.
    pub fn poll(&mut self) -> SearchPoll {
        if let Some(outcome) = self.outcome {
            return SearchPoll::Ready(outcome);
        }
        match self.receiver.try_recv() {
            Ok(message) => SearchPoll::Ready(self.resolve(Some(message))),
            Err(TryRecvError::Empty) => SearchPoll::Pending,
            Err(TryRecvError::Disconnected) => SearchPoll::Ready(self.resolve(None)),
        }
    }

    /// Block until the worker reports. For benches and tools without a
    /// frame loop to poll from.
    pub fn wait(&mut self) -> Option<Move> {
        if let Some(outcome) = self.outcome {
            return outcome;
        }
        match self.receiver.recv() {
            Ok(message) => self.resolve(Some(message)),
            Err(RecvError) => self.resolve(None),
        }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Diagnostics gathered so far (engine info lines plus any rejection
    /// notes).
    #[inline]
    pub fn info_lines(&self) -> &[String] {
        &self.info_lines
    }

    pub fn take_info_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.info_lines)
    }

    /// Detach from the worker. It runs to completion and its send fails.
    pub fn abandon(self) {}

    /// `None` means the worker hung up without sending.
    fn resolve(&mut self, message: Option<WorkerMessage>) -> Option<Move> {
        let outcome = match message {
            Some(Ok(output)) => {
                self.info_lines.extend(output.info_lines);
                match output.best_move {
                    Some(mv) if !self.legal_moves.contains(&mv) => {
                        self.info_lines
                            .push(format!("info string rejected non-legal search result {mv}"));
                        None
                    }
                    other => other,
                }
            }
            Some(Err(err)) => {
                self.info_lines
                    .push(format!("info string search failed: {err}"));
                None
            }
            None => {
                self.info_lines
                    .push("info string search worker stopped without a result".to_owned());
                None
            }
        };
        self.outcome = Some(outcome);
        outcome
    }
}
