//! Terminal 2048 runner (default binary).
//!
//! Uses crossterm for input and the framebuffer-based renderer from
//! `tui_2048::term`. Configuration comes from `TUI_2048_*` environment
//! variables and command-line flags (see `tui_2048::config`).

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_2048::config::GameConfig;
use tui_2048::core::{GameSnapshot, GameState};
use tui_2048::event_log::{EventLog, LogEvent};
use tui_2048::input::{should_quit, InputHandler};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::GameAction;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = GameConfig::load(&args)?;
    let mut log = EventLog::open(config.log_path.as_deref())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &mut log);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig, log: &mut EventLog) -> Result<()> {
    let seed = config.resolve_seed();
    let mut game = GameState::new(seed);
    record(log, &LogEvent::start(&game, seed));

    let view = GameView::default();
    let mut input_handler = InputHandler::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    let poll_timeout = Duration::from_millis(config.poll_ms as u64);
    let mut last_poll = Instant::now();
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            game.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        let got_event = event::poll(poll_timeout)?;
        let now = Instant::now();
        let elapsed_ms = now.duration_since(last_poll).as_millis().min(u32::MAX as u128) as u32;
        last_poll = now;

        if !got_event {
            input_handler.update(elapsed_ms);
            continue;
        }

        match event::read()? {
            Event::Key(key) => match key.kind {
                KeyEventKind::Press => {
                    if should_quit(key) {
                        record(log, &LogEvent::quit(&game));
                        return Ok(());
                    }
                    if let Some(action) = input_handler.handle_key_press(key.code) {
                        dirty |= apply(&mut game, action, log);
                    }
                }
                KeyEventKind::Repeat => {
                    // Held keys must be released before they count again.
                }
                KeyEventKind::Release => {
                    input_handler.handle_key_release(key.code);
                }
            },
            Event::Resize(_, _) => {
                term.invalidate();
                dirty = true;
            }
            _ => {}
        }
    }
}

/// Apply one action and log it. Returns true if the screen needs a redraw.
fn apply(game: &mut GameState, action: GameAction, log: &mut EventLog) -> bool {
    match action {
        GameAction::Move(direction) => match game.play(direction) {
            Some(outcome) => {
                record(log, &LogEvent::moved(game, &outcome));
                true
            }
            None => false,
        },
        GameAction::Restart => {
            game.restart();
            record(log, &LogEvent::restart(game));
            true
        }
    }
}

fn record(log: &mut EventLog, event: &LogEvent) {
    // The screen is in raw mode, so a failing log is switched off rather than reported.
    if log.record(event).is_err() {
        log.disable();
    }
}
