//! Game session settings and their command-line form.

use crate::chess_errors::{ChessError, ChessResult};
use crate::engines::engine_ladder::{MAX_SKILL_LEVEL, MIN_SKILL_LEVEL};
use crate::engines::engine_trait::GoParams;
use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    PlayerVsPlayer,
    PlayerVsEngine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub mode: GameMode,
    /// The human's side in [`GameMode::PlayerVsEngine`]; ignored otherwise.
    pub human_color: Color,
    pub skill_level: u8,
    pub movetime_ms: Option<u64>,
    pub seed: Option<u64>,
    pub verbose: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::PlayerVsEngine,
            human_color: Color::White,
            skill_level: 5,
            movetime_ms: Some(2_000),
            seed: None,
            verbose: false,
        }
    }
}

pub const USAGE: &str = "usage: knightfall [--mode pvp|pve] [--color white|black] \
[--skill 1-10] [--movetime-ms N] [--seed N] [--verbose]";

impl SessionConfig {
    /// Parse flags (without the program name). Unknown flags are errors.
    pub fn from_args<I>(args: I) -> ChessResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(flag) = args.next() {
            match flag.as_str() {
                "--verbose" | "-v" => config.verbose = true,
                "--mode" => {
                    config.mode = match next_value(&mut args, &flag)?.as_str() {
                        "pvp" => GameMode::PlayerVsPlayer,
                        "pve" => GameMode::PlayerVsEngine,
                        other => return Err(config_error(&format!("unknown mode {other:?}"))),
                    }
                }
                "--color" => {
                    config.human_color = match next_value(&mut args, &flag)?.as_str() {
                        "white" | "w" => Color::White,
                        "black" | "b" => Color::Black,
                        other => return Err(config_error(&format!("unknown color {other:?}"))),
                    }
                }
                "--skill" => {
                    let skill: u8 = parse_number(&next_value(&mut args, &flag)?, &flag)?;
                    if !(MIN_SKILL_LEVEL..=MAX_SKILL_LEVEL).contains(&skill) {
                        return Err(config_error(&format!(
                            "--skill must be {MIN_SKILL_LEVEL}-{MAX_SKILL_LEVEL}, got {skill}"
                        )));
                    }
                    config.skill_level = skill;
                }
                "--movetime-ms" => {
                    let ms: u64 = parse_number(&next_value(&mut args, &flag)?, &flag)?;
                    config.movetime_ms = (ms > 0).then_some(ms);
                }
                "--seed" => {
                    config.seed = Some(parse_number(&next_value(&mut args, &flag)?, &flag)?);
                }
                other => return Err(config_error(&format!("unknown argument {other:?}"))),
            }
        }

        Ok(config)
    }

    /// Limits handed to the engine for each search.
    pub fn go_params(&self) -> GoParams {
        GoParams {
            depth: None,
            movetime_ms: self.movetime_ms,
            nodes: None,
            seed: self.seed,
        }
    }

    /// Whether `color` is moved by a human under this configuration.
    pub fn is_human(&self, color: Color) -> bool {
        match self.mode {
            GameMode::PlayerVsPlayer => true,
            GameMode::PlayerVsEngine => color == self.human_color,
        }
    }
}

fn config_error(reason: &str) -> ChessError {
    ChessError::InvalidConfig(reason.to_owned())
}

fn next_value(args: &mut impl Iterator<Item = String>, flag: &str) -> ChessResult<String> {
    args.next()
        .ok_or_else(|| config_error(&format!("{flag} needs a value")))
}

fn parse_number<T: std::str::FromStr>(text: &str, flag: &str) -> ChessResult<T> {
    text.parse::<T>()
        .map_err(|_| config_error(&format!("{flag} expects a number, got {text:?}")))
}
