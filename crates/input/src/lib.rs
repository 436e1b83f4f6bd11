//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and provides a
//! debouncing input handler so a held key slides the board only once
//! (including on terminals without key-release events).

pub mod handler;
pub mod map;

pub use tui_2048_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, map_key_code, should_quit};
