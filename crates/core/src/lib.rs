//! Core game logic module - pure, deterministic, and testable
//!
//! This crate is the 2048 board engine: the grid, the slide/merge rules, the
//! legality check, tile spawning and the session state machine.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is a plain function over a `Copy` board
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Allocation-free**: Boards, lines and cell lists live on the stack
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 tile grid and the direction-to-line mapping
//! - [`line`]: compaction and merging of a single line
//! - [`moves`]: applying a slide to the whole board
//! - [`legality`]: whether a slide would change anything
//! - [`spawner`]: placing a random 2 or 4
//! - [`rng`]: the injectable random source
//! - [`game_state`]: turn sequencing, score and the Ready/Over status
//! - [`snapshot`]: flat copy of the state for renderers and loggers
//!
//! # Game Rules
//!
//! - **Slides**: all tiles travel toward the chosen edge, closing gaps
//! - **Merges**: two equal neighbours combine once per move; the new tile's
//!   face value is added to the score
//! - **Spawns**: after every accepted move one tile appears on a random empty
//!   cell, a 2 with probability 0.9 and a 4 otherwise
//! - **Loss**: the game is over when no direction changes the board. Reaching
//!   2048 is not special.
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::{Direction, GameAction};
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.board().count_tiles(), 2);
//!
//! for d in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
//!     game.apply_action(GameAction::Move(d));
//! }
//!
//! game.apply_action(GameAction::Restart);
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod game_state;
pub mod legality;
pub mod line;
pub mod moves;
pub mod rng;
pub mod snapshot;
pub mod spawner;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Line};
pub use game_state::{GameState, GameStatus, MoveOutcome};
pub use legality::{any_move_possible, is_legal, legal_directions};
pub use line::{compact, line_is_movable, slide_line, LineOutcome};
pub use moves::apply_move;
pub use rng::{SimpleRng, TileRng};
pub use snapshot::GameSnapshot;
pub use spawner::spawn_tile;
