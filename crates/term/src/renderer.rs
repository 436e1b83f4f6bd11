//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize or [`TerminalRenderer::invalidate`])
//! is a full redraw; after that only runs of changed cells are written.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Ink};

/// A horizontal run of changed cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub x: u16,
    pub y: u16,
    pub len: u16,
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Switch to raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Restore the terminal. Safe to call after a failed `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. on resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a frame, writing only what changed since the previous one.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        match &self.last {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(prev, fb, &mut self.buf)?;
            }
            _ => encode_full_into(fb, &mut self.buf)?,
        }
        self.flush_buf()?;

        match &mut self.last {
            Some(prev) => prev.copy_from(fb),
            None => self.last = Some(fb.clone()),
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut current: Option<CellStyle> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the changed runs between two same-sized frames into `out`.
///
/// Writes nothing when the frames are identical. Does not allocate beyond
/// growing `out`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current: Option<CellStyle> = None;
    let mut any = false;

    for_each_changed_run(prev, next, |run| {
        any = true;
        out.queue(cursor::MoveTo(run.x, run.y))?;
        for x in run.x..run.x + run.len {
            let cell = next.get(x, run.y).unwrap_or_default();
            if current != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    })?;

    if any {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

/// Call `f` for every run of cells that differ between `prev` and `next`,
/// row by row, left to right.
///
/// Frames of different sizes are treated as entirely changed.
pub fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(Run) -> Result<()>,
) -> Result<()> {
    let w = next.width();
    let h = next.height();

    if prev.width() != w || prev.height() != h {
        for y in 0..h {
            f(Run { x: 0, y, len: w })?;
        }
        return Ok(());
    }

    for y in 0..h {
        let mut start: Option<u16> = None;
        for x in 0..w {
            let differs = prev.get(x, y) != next.get(x, y);
            match (differs, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    f(Run { x: s, y, len: x - s })?;
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            f(Run { x: s, y, len: w - s })?;
        }
    }
    Ok(())
}

/// Collected form of [`for_each_changed_run`], for tests and debugging.
pub fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<Run> {
    let mut runs = Vec::new();
    let _ = for_each_changed_run(prev, next, |run| {
        runs.push(run);
        Ok(())
    });
    runs
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(ink_to_color(style.ink)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn ink_to_color(ink: Ink) -> Color {
    match ink {
        Ink::Default => Color::White,
        Ink::Red => Color::Red,
        Ink::Yellow => Color::Yellow,
        Ink::Muted => Color::DarkGrey,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    #[test]
    fn ink_maps_to_named_colors() {
        assert_eq!(ink_to_color(Ink::Default), Color::White);
        assert_eq!(ink_to_color(Ink::Red), Color::Red);
        assert_eq!(ink_to_color(Ink::Yellow), Color::Yellow);
    }

    #[test]
    fn identical_frames_have_no_runs() {
        let a = FrameBuffer::new(6, 3);
        let b = a.clone();
        assert!(changed_runs(&a, &b).is_empty());

        let mut out = Vec::new();
        encode_diff_into(&a, &b, &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn adjacent_changes_coalesce() {
        let style = CellStyle::default();
        let a = FrameBuffer::new(5, 1);
        let mut b = FrameBuffer::new(5, 1);
        for x in 1..=3 {
            b.set(x, 0, Cell { ch: 'X', style });
        }
        assert_eq!(changed_runs(&a, &b), vec![Run { x: 1, y: 0, len: 3 }]);
    }

    #[test]
    fn run_reaching_right_edge_is_closed() {
        let a = FrameBuffer::new(4, 2);
        let mut b = FrameBuffer::new(4, 2);
        b.put_char(2, 1, 'a', CellStyle::default());
        b.put_char(3, 1, 'b', CellStyle::default());
        b.put_char(0, 0, 'c', CellStyle::default());
        assert_eq!(
            changed_runs(&a, &b),
            vec![Run { x: 0, y: 0, len: 1 }, Run { x: 2, y: 1, len: 2 }]
        );
    }

    #[test]
    fn style_only_change_counts() {
        let a = FrameBuffer::new(3, 1);
        let mut b = FrameBuffer::new(3, 1);
        b.put_char(1, 0, ' ', CellStyle::new(Ink::Red));
        assert_eq!(changed_runs(&a, &b), vec![Run { x: 1, y: 0, len: 1 }]);
    }

    #[test]
    fn resized_frame_is_fully_dirty() {
        let a = FrameBuffer::new(3, 1);
        let b = FrameBuffer::new(4, 2);
        assert_eq!(
            changed_runs(&a, &b),
            vec![Run { x: 0, y: 0, len: 4 }, Run { x: 0, y: 1, len: 4 }]
        );
    }

    #[test]
    fn run_callback_error_stops_the_walk() {
        let a = FrameBuffer::new(3, 3);
        let mut b = FrameBuffer::new(3, 3);
        for y in 0..3 {
            b.put_char(0, y, '#', CellStyle::default());
        }

        let mut seen = 0;
        let res = for_each_changed_run(&a, &b, |_| {
            seen += 1;
            anyhow::bail!("stop")
        });
        assert!(res.is_err());
        assert_eq!(seen, 1);
    }

    #[test]
    fn diff_encode_touches_only_changed_cells() {
        let a = FrameBuffer::new(10, 1);
        let mut b = a.clone();
        b.put_char(7, 0, 'Z', CellStyle::default());

        let mut out = Vec::new();
        encode_diff_into(&a, &b, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('Z'));
        assert_eq!(text.matches(' ').count(), 0);
    }

    #[test]
    fn full_encode_produces_bytes() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_str(0, 0, "2048", CellStyle::new(Ink::Yellow));
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("204"));
    }
}
