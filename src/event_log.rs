//! Event log - line-delimited JSON record of a session
//!
//! Every record has: type, seq (sequence number within the log), ts (timestamp in ms).
//! A log opened without a path is disabled and accepts records silently.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::core::{legal_directions, GameState, MoveOutcome, TileRng};
use crate::types::BOARD_SIZE;

/// Payload of one log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogEvent {
    Start {
        episode_id: u32,
        seed: u32,
        board: [[u8; BOARD_SIZE]; BOARD_SIZE],
    },
    Move {
        episode_id: u32,
        move_index: u32,
        direction: &'static str,
        score_delta: u32,
        score: u32,
        spawned: bool,
        legal: Vec<&'static str>,
        game_over: bool,
        board: [[u8; BOARD_SIZE]; BOARD_SIZE],
    },
    Restart {
        episode_id: u32,
        board: [[u8; BOARD_SIZE]; BOARD_SIZE],
    },
    Quit {
        episode_id: u32,
        score: u32,
        moves: u32,
    },
}

impl LogEvent {
    pub fn start<R: TileRng>(game: &GameState<R>, seed: u32) -> Self {
        LogEvent::Start {
            episode_id: game.episode_id(),
            seed,
            board: game.board().to_exponents(),
        }
    }

    /// Describe an accepted move. `game` is the state after the move.
    pub fn moved<R: TileRng>(game: &GameState<R>, outcome: &MoveOutcome) -> Self {
        LogEvent::Move {
            episode_id: game.episode_id(),
            move_index: game.moves(),
            direction: outcome.direction.as_str(),
            score_delta: outcome.score_delta,
            score: game.score(),
            spawned: outcome.spawned,
            legal: legal_directions(game.board())
                .iter()
                .map(|d| d.as_str())
                .collect(),
            game_over: game.game_over(),
            board: game.board().to_exponents(),
        }
    }

    pub fn restart<R: TileRng>(game: &GameState<R>) -> Self {
        LogEvent::Restart {
            episode_id: game.episode_id(),
            board: game.board().to_exponents(),
        }
    }

    pub fn quit<R: TileRng>(game: &GameState<R>) -> Self {
        LogEvent::Quit {
            episode_id: game.episode_id(),
            score: game.score(),
            moves: game.moves(),
        }
    }
}

#[derive(Serialize)]
struct Record<'a> {
    seq: u64,
    ts: u64,
    #[serde(flatten)]
    event: &'a LogEvent,
}

pub struct EventLog<W: Write = BufWriter<File>> {
    out: Option<W>,
    seq: u64,
    buf: Vec<u8>,
}

impl EventLog {
    /// Open `path` for appending, or return a disabled log for `None`.
    pub fn open(path: Option<&str>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::disabled());
        };
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| anyhow!("tui-2048: cannot open log {}: {}", path, e))?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }

    pub fn disabled() -> Self {
        Self {
            out: None,
            seq: 0,
            buf: Vec::new(),
        }
    }
}

impl<W: Write> EventLog<W> {
    pub fn from_writer(out: W) -> Self {
        Self {
            out: Some(out),
            seq: 0,
            buf: Vec::with_capacity(512),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    /// Stop writing. Later records are dropped.
    pub fn disable(&mut self) {
        self.out = None;
    }

    /// Number of records written so far.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Append one record and flush it.
    pub fn record(&mut self, event: &LogEvent) -> Result<()> {
        let Some(out) = self.out.as_mut() else {
            return Ok(());
        };

        self.buf.clear();
        let record = Record {
            seq: self.seq + 1,
            ts: now_ms(),
            event,
        };
        serde_json::to_writer(&mut self.buf, &record)?;
        self.buf.push(b'\n');

        out.write_all(&self.buf)?;
        out.flush()?;
        self.seq += 1;
        Ok(())
    }

    pub fn into_inner(self) -> Option<W> {
        self.out
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
