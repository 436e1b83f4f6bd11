//! Move module - apply a slide to the whole board

use crate::board::Board;
use crate::line::slide_line;
use crate::types::{Direction, BOARD_SIZE};

/// Slide every line of `board` toward `direction`, returning the score earned.
///
/// Each line is read in slide order, transformed by [`slide_line`], and
/// written back to the cells it came from. On a move that
/// [`is_legal`](crate::legality::is_legal) rejects the board is left as it was
/// and the score is 0; callers are expected to check legality first.
///
/// ```
/// use tui_2048_core::{apply_move, Board};
/// use tui_2048_types::Direction;
///
/// let mut board = Board::from_exponents([
///     [1, 1, 0, 0],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
///     [0, 0, 0, 2],
/// ])
/// .unwrap();
/// let score = apply_move(&mut board, Direction::Right);
/// assert_eq!(score, 4);
/// assert_eq!(board.to_exponents()[0], [0, 0, 0, 2]);
/// ```
pub fn apply_move(board: &mut Board, direction: Direction) -> u32 {
    let mut score = 0u32;
    for line in 0..BOARD_SIZE {
        let outcome = slide_line(board.read_line(direction, line));
        board.write_line(direction, line, outcome.line);
        score += outcome.score;
    }
    score
}
