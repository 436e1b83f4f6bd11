//! Debouncing input handler for terminal environments.
//!
//! A held key must not slide the board once per frame. A press is dropped
//! when it repeats the previous key code, until that key is released, a
//! different key is pressed, or the input has been idle for the release
//! timeout. The timeout covers terminals that never report key releases.

use crossterm::event::KeyCode;

use crate::map::map_key_code;
use crate::types::{GameAction, KEY_RELEASE_TIMEOUT_MS};

/// Tracks the last key seen so held keys fire once.
#[derive(Debug, Clone)]
pub struct InputHandler {
    last_key: Option<KeyCode>,
    idle_ms: u32,
    key_release_timeout_ms: u32,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            last_key: None,
            idle_ms: 0,
            key_release_timeout_ms: KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Feed a key press. Returns the action to apply, if any.
    ///
    /// Unmapped keys still count as "the last key", so pressing something
    /// else in between re-arms a held direction.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        let code = normalize(code);
        let repeated = self.last_key == Some(code);
        self.last_key = Some(code);
        self.idle_ms = 0;

        if repeated {
            return None;
        }
        map_key_code(code)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if self.last_key == Some(normalize(code)) {
            self.last_key = None;
            self.idle_ms = 0;
        }
    }

    /// Advance the idle clock by `elapsed_ms` without any key event.
    pub fn update(&mut self, elapsed_ms: u32) {
        if self.last_key.is_none() {
            return;
        }
        self.idle_ms = self.idle_ms.saturating_add(elapsed_ms);
        if self.idle_ms >= self.key_release_timeout_ms {
            self.last_key = None;
            self.idle_ms = 0;
        }
    }

    /// Forget the held key (e.g. after restarting).
    pub fn reset(&mut self) {
        self.last_key = None;
        self.idle_ms = 0;
    }
}

fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    const LEFT: Option<GameAction> = Some(GameAction::Move(Direction::Left));

    #[test]
    fn first_press_fires() {
        let mut h = InputHandler::new();
        assert_eq!(h.handle_key_press(KeyCode::Left), LEFT);
    }

    #[test]
    fn held_key_fires_once() {
        let mut h = InputHandler::new();
        assert_eq!(h.handle_key_press(KeyCode::Left), LEFT);
        for _ in 0..20 {
            h.update(5);
            assert_eq!(h.handle_key_press(KeyCode::Left), None);
        }
    }

    #[test]
    fn case_does_not_defeat_debounce() {
        let mut h = InputHandler::new();
        assert_eq!(h.handle_key_press(KeyCode::Char('a')), LEFT);
        assert_eq!(h.handle_key_press(KeyCode::Char('A')), None);
    }

    #[test]
    fn release_rearms_key() {
        let mut h = InputHandler::new();
        assert_eq!(h.handle_key_press(KeyCode::Left), LEFT);
        h.handle_key_release(KeyCode::Left);
        assert_eq!(h.handle_key_press(KeyCode::Left), LEFT);
    }

    #[test]
    fn other_key_rearms_key() {
        let mut h = InputHandler::new();
        assert_eq!(h.handle_key_press(KeyCode::Left), LEFT);
        assert_eq!(
            h.handle_key_press(KeyCode::Up),
            Some(GameAction::Move(Direction::Up))
        );
        assert_eq!(h.handle_key_press(KeyCode::Left), LEFT);
    }

    #[test]
    fn idle_timeout_rearms_key() {
        let mut h = InputHandler::new().with_key_release_timeout_ms(100);
        assert_eq!(h.handle_key_press(KeyCode::Left), LEFT);
        h.update(60);
        assert_eq!(h.handle_key_press(KeyCode::Left), None);
        h.update(60);
        assert_eq!(h.handle_key_press(KeyCode::Left), None);
        h.update(100);
        assert_eq!(h.handle_key_press(KeyCode::Left), LEFT);
    }

    #[test]
    fn release_of_other_key_is_ignored() {
        let mut h = InputHandler::new();
        assert_eq!(h.handle_key_press(KeyCode::Left), LEFT);
        h.handle_key_release(KeyCode::Right);
        assert_eq!(h.handle_key_press(KeyCode::Left), None);
    }

    #[test]
    fn reset_forgets_held_key() {
        let mut h = InputHandler::new();
        assert_eq!(h.handle_key_press(KeyCode::Char('r')), Some(GameAction::Restart));
        h.reset();
        assert_eq!(h.handle_key_press(KeyCode::Char('r')), Some(GameAction::Restart));
    }
}
