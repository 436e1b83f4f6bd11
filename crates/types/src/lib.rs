//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (board engine, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The playfield is a fixed 4x4 grid stored row-major:
//!
//! - **Side**: 4 cells (`BOARD_SIZE`)
//! - **Cells**: 16 (`CELL_COUNT`), index = `row * 4 + col`
//!
//! # Tiles
//!
//! A tile stores an exponent, not a face value. Exponent `0` is an empty
//! cell; exponent `e > 0` is displayed as `2^e`. The largest representable
//! exponent is [`MAX_EXPONENT`] (65536).
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Input poll interval |
//! | `KEY_RELEASE_TIMEOUT_MS` | 150 | Idle time after which a held key counts as released |
//! | `FOUR_TILE_ODDS` | 10 | One spawn in this many is a 4 |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, Tile, BOARD_SIZE};
//!
//! let tile = Tile::new(3).unwrap();
//! assert_eq!(tile.value(), 8);
//! assert!(Tile::new(17).is_none());
//!
//! assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
//! assert_eq!(
//!     GameAction::from_str("up"),
//!     Some(GameAction::Move(Direction::Up))
//! );
//! assert_eq!(BOARD_SIZE, 4);
//! ```

/// Board side length in cells (4)
pub const BOARD_SIZE: usize = 4;

/// Total number of cells on the board (16)
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Largest tile exponent (2^16 = 65536)
pub const MAX_EXPONENT: u8 = 16;

/// Input poll interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// A held key is treated as released after this long without a key event.
pub const KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// One spawned tile in `FOUR_TILE_ODDS` is a 4, the rest are 2s.
pub const FOUR_TILE_ODDS: u32 = 10;

/// Number of tiles placed on a fresh board.
pub const STARTING_TILES: usize = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_constants() {
        assert_eq!(BOARD_SIZE, 4);
        assert_eq!(CELL_COUNT, 16);
        assert_eq!(MAX_EXPONENT, 16);
        assert_eq!(STARTING_TILES, 2);
        assert_eq!(FOUR_TILE_ODDS, 10);
    }

    #[test]
    fn tile_values() {
        assert!(Tile::EMPTY.is_empty());
        assert_eq!(Tile::EMPTY.value(), 0);
        assert_eq!(Tile::new(1).unwrap().value(), 2);
        assert_eq!(Tile::new(11).unwrap().value(), 2048);
        assert_eq!(Tile::new(MAX_EXPONENT).unwrap().value(), 65536);
        assert_eq!(Tile::new(MAX_EXPONENT + 1), None);
    }

    #[test]
    fn tile_promotion_stops_at_ceiling() {
        let t = Tile::new(4).unwrap();
        assert_eq!(t.promoted(), Tile::new(5));
        assert_eq!(Tile::new(MAX_EXPONENT).unwrap().promoted(), None);
        assert!(!Tile::new(MAX_EXPONENT).unwrap().can_merge());
        assert!(!Tile::EMPTY.can_merge());
    }

    #[test]
    fn direction_orientation() {
        assert!(Direction::Left.reads_rows());
        assert!(Direction::Right.reads_rows());
        assert!(!Direction::Up.reads_rows());
        assert!(!Direction::Down.reads_rows());

        assert!(Direction::Up.reads_forward());
        assert!(Direction::Left.reads_forward());
        assert!(!Direction::Down.reads_forward());
        assert!(!Direction::Right.reads_forward());
    }

    #[test]
    fn direction_round_trips_through_str() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_str(d.as_str()), Some(d));
        }
        assert_eq!(Direction::from_str("sideways"), None);
    }
}

/// One cell of the board, stored as a power-of-two exponent.
///
/// - `Tile::EMPTY` (exponent 0): no tile
/// - exponent `e` in `1..=16`: a tile showing `2^e`
///
/// Tiles have no identity. Merging two equal tiles yields one tile with the
/// next exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tile(u8);

impl Tile {
    /// The empty cell
    pub const EMPTY: Tile = Tile(0);

    /// Create a tile from an exponent.
    ///
    /// Returns `None` for exponents above [`MAX_EXPONENT`].
    pub const fn new(exponent: u8) -> Option<Self> {
        if exponent > MAX_EXPONENT {
            None
        } else {
            Some(Tile(exponent))
        }
    }

    pub const fn exponent(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Displayed face value (`2^e`), or 0 for an empty cell.
    pub const fn value(self) -> u32 {
        if self.0 == 0 {
            0
        } else {
            1u32 << self.0
        }
    }

    /// Whether two equal tiles of this kind may combine.
    ///
    /// Empty cells never merge, and neither do tiles at the exponent ceiling.
    pub const fn can_merge(self) -> bool {
        self.0 != 0 && self.0 < MAX_EXPONENT
    }

    /// The tile produced by merging two copies of `self`.
    pub const fn promoted(self) -> Option<Self> {
        if self.can_merge() {
            Some(Tile(self.0 + 1))
        } else {
            None
        }
    }
}

/// Slide directions
///
/// The direction decides which board lines are read and in which order:
/// - **Left/Right** read rows, **Up/Down** read columns
/// - **Up/Left** read ascending indices, **Down/Right** descending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// All directions, in the order the loss check visits them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    /// True when the direction slides along rows.
    pub fn reads_rows(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// True when each line is read from index 0 upward.
    pub fn reads_forward(&self) -> bool {
        matches!(self, Direction::Up | Direction::Left)
    }

    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "left" => Some(Direction::Left),
            "down" => Some(Direction::Down),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Right => "right",
        }
    }
}

/// Game actions that can be applied to a session
///
/// Quitting is not an action: the runner handles it before anything reaches
/// the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide every tile in the given direction
    Move(Direction),
    /// Throw away the current board and score and deal a new game
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("Down"), Some(GameAction::Move(Direction::Down)));
    /// assert_eq!(GameAction::from_str("undo"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("restart") {
            return Some(GameAction::Restart);
        }
        Direction::from_str(s).map(GameAction::Move)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(d) => d.as_str(),
            GameAction::Restart => "restart",
        }
    }
}
