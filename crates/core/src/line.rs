//! Line module - slide and merge a single row or column
//!
//! Everything here works on a [`Line`] that has already been read in slide
//! order, so none of it knows about directions. The board-level operations
//! in [`crate::moves`] and [`crate::legality`] do the extraction.

use crate::board::Line;
use crate::types::{Tile, BOARD_SIZE};

/// Result of sliding one line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineOutcome {
    pub line: Line,
    /// Sum of the face values of every tile created by a merge
    pub score: u32,
}

/// Stable compaction: non-empty tiles keep their order and move to the front.
///
/// ```
/// use tui_2048_core::line::compact;
/// use tui_2048_types::Tile;
///
/// let t = |e| Tile::new(e).unwrap();
/// let line = [Tile::EMPTY, t(3), Tile::EMPTY, t(1)];
/// assert_eq!(compact(line), [t(3), t(1), Tile::EMPTY, Tile::EMPTY]);
/// ```
pub fn compact(line: Line) -> Line {
    let mut out = [Tile::EMPTY; BOARD_SIZE];
    let mut write = 0usize;
    for tile in line {
        if !tile.is_empty() {
            out[write] = tile;
            write += 1;
        }
    }
    out
}

/// Compact then merge a line toward index 0.
///
/// Single pass from index 1: when a tile equals its left neighbour, the left
/// neighbour is promoted, the rest of the line shifts one step left and the
/// last slot empties. The index still advances after a merge, so the promoted
/// tile is never compared again and each tile merges at most once.
///
/// ```
/// use tui_2048_core::line::slide_line;
/// use tui_2048_types::Tile;
///
/// let t = |e| Tile::new(e).unwrap();
/// let out = slide_line([t(1), t(1), t(1), t(1)]);
/// assert_eq!(out.line, [t(2), t(2), Tile::EMPTY, Tile::EMPTY]);
/// assert_eq!(out.score, 8);
/// ```
pub fn slide_line(line: Line) -> LineOutcome {
    let mut line = compact(line);
    let mut score = 0u32;

    for i in 1..BOARD_SIZE {
        let tile = line[i];
        if tile != line[i - 1] {
            continue;
        }
        let Some(merged) = tile.promoted() else {
            continue;
        };

        line[i - 1] = merged;
        score += merged.value();

        line.copy_within(i + 1.., i);
        line[BOARD_SIZE - 1] = Tile::EMPTY;
    }

    LineOutcome { line, score }
}

/// Whether sliding this line toward index 0 would change it.
///
/// Scans once: any tile after a gap can slide, and while no gap has been seen
/// the non-empty tiles are contiguous, so the previous tile is the true
/// neighbour for the merge test.
pub fn line_is_movable(line: &Line) -> bool {
    let mut gap_seen = false;
    let mut last: Option<Tile> = None;

    for &tile in line {
        if tile.is_empty() {
            gap_seen = true;
            continue;
        }
        if gap_seen {
            return true;
        }
        if last == Some(tile) && tile.can_merge() {
            return true;
        }
        last = Some(tile);
    }

    false
}
