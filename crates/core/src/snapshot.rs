use crate::types::BOARD_SIZE;

/// Everything a renderer or logger needs after a command has been processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Tile exponents, row-major (0 = empty)
    pub board: [[u8; BOARD_SIZE]; BOARD_SIZE],
    pub score: u32,
    pub game_over: bool,
    pub episode_id: u32,
    /// Accepted moves in the current episode
    pub moves: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Largest tile face value on the board (0 if empty)
    pub fn max_value(&self) -> u32 {
        self.board
            .iter()
            .flatten()
            .map(|&e| if e == 0 { 0 } else { 1u32 << e })
            .max()
            .unwrap_or(0)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_SIZE]; BOARD_SIZE],
            score: 0,
            game_over: false,
            episode_id: 0,
            moves: 0,
        }
    }
}
