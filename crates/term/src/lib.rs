//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that can be flushed to a terminal
//! backend, instead of drawing straight to the screen.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep layout and colour policy pure, so they can be unit-tested
//! - Only write the cells that changed between frames

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Ink};
pub use game_view::{Anchor, GameView, Viewport};
pub use palette::ColorClass;
pub use renderer::{
    changed_runs, encode_diff_into, encode_full_into, for_each_changed_run, Run, TerminalRenderer,
};
