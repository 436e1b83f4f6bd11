//! Game state module - one 2048 session
//!
//! Ties together the board, the score and the random source, and owns turn
//! sequencing: gate a move on legality, slide, add the score, spawn a tile,
//! then re-check whether any move is left.

use crate::board::Board;
use crate::legality::{any_move_possible, is_legal};
use crate::moves::apply_move;
use crate::rng::{SimpleRng, TileRng};
use crate::snapshot::GameSnapshot;
use crate::spawner::spawn_tile;
use crate::types::{Direction, GameAction, STARTING_TILES};

/// Session status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Waiting for a move or a restart
    Ready,
    /// No direction is legal; only restart is accepted
    Over,
}

/// What a single accepted move did. Returned by [`GameState::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub direction: Direction,
    pub score_delta: u32,
    pub spawned: bool,
    pub status: GameStatus,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R: TileRng = SimpleRng> {
    board: Board,
    score: u32,
    status: GameStatus,
    rng: R,
    /// Increments on every restart.
    episode_id: u32,
    /// Accepted moves since the last restart.
    moves: u32,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: TileRng> GameState<R> {
    /// Create a new game drawing spawns from `rng`.
    pub fn with_rng(rng: R) -> Self {
        let mut state = Self {
            board: Board::new(),
            score: 0,
            status: GameStatus::Ready,
            rng,
            episode_id: 0,
            moves: 0,
        };
        state.deal();
        state
    }

    /// Start a session from a prepared board (score 0). Status is derived
    /// from the board, so a lost board starts as [`GameStatus::Over`].
    pub fn from_board(board: Board, rng: R) -> Self {
        let mut state = Self {
            board,
            score: 0,
            status: GameStatus::Ready,
            rng,
            episode_id: 0,
            moves: 0,
        };
        state.refresh_status();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Apply an action. Returns true if the board changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.play(direction).is_some(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Play one move.
    ///
    /// Returns `None` (and changes nothing) when the session is over or the
    /// direction is blocked.
    pub fn play(&mut self, direction: Direction) -> Option<MoveOutcome> {
        if self.status == GameStatus::Over || !is_legal(&self.board, direction) {
            return None;
        }

        let score_delta = apply_move(&mut self.board, direction);
        self.score = self.score.saturating_add(score_delta);
        self.moves += 1;

        let spawned = spawn_tile(&mut self.board, &mut self.rng);
        self.refresh_status();

        Some(MoveOutcome {
            direction,
            score_delta,
            spawned,
            status: self.status,
        })
    }

    /// Reset score and deal a fresh board. Accepted in any status.
    pub fn restart(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.deal();
    }

    fn deal(&mut self) {
        self.board.clear();
        self.score = 0;
        self.moves = 0;
        for _ in 0..STARTING_TILES {
            spawn_tile(&mut self.board, &mut self.rng);
        }
        self.refresh_status();
    }

    fn refresh_status(&mut self) {
        self.status = if any_move_possible(&self.board) {
            GameStatus::Ready
        } else {
            GameStatus::Over
        };
    }

    /// Write the current state into an existing snapshot (no allocation).
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = self.board.to_exponents();
        out.score = self.score;
        out.game_over = self.game_over();
        out.episode_id = self.episode_id;
        out.moves = self.moves;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}
