//! Legality module - decide whether a slide would change the board
//!
//! These checks never mutate the board. They read lines through
//! [`Board::read_line`], the same extraction [`apply_move`](crate::moves::apply_move)
//! uses, so "legal" always means "the move engine would change something".

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::line::line_is_movable;
use crate::types::{Direction, BOARD_SIZE};

/// True if sliding `board` toward `direction` moves or merges at least one tile.
pub fn is_legal(board: &Board, direction: Direction) -> bool {
    (0..BOARD_SIZE).any(|line| line_is_movable(&board.read_line(direction, line)))
}

/// True if at least one direction is legal. False means the game is lost.
pub fn any_move_possible(board: &Board) -> bool {
    Direction::ALL.iter().any(|&d| is_legal(board, d))
}

/// Legal directions in [`Direction::ALL`] order.
pub fn legal_directions(board: &Board) -> ArrayVec<Direction, 4> {
    Direction::ALL
        .iter()
        .copied()
        .filter(|&d| is_legal(board, d))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::apply_move;
    use crate::rng::{SimpleRng, TileRng};
    use crate::types::{Tile, CELL_COUNT};

    fn board(rows: [[u8; 4]; 4]) -> Board {
        Board::from_exponents(rows).unwrap()
    }

    #[test]
    fn checkerboard_is_lost() {
        let b = board([[1, 2, 1, 2], [2, 1, 2, 1], [1, 2, 1, 2], [2, 1, 2, 1]]);
        for d in Direction::ALL {
            assert!(!is_legal(&b, d), "{:?} should be blocked", d);
        }
        assert!(!any_move_possible(&b));
        assert!(legal_directions(&b).is_empty());
    }

    #[test]
    fn empty_board_has_no_legal_move() {
        let b = Board::new();
        assert!(!any_move_possible(&b));
    }

    #[test]
    fn single_corner_tile() {
        let b = board([[1, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert!(!is_legal(&b, Direction::Up));
        assert!(!is_legal(&b, Direction::Left));
        assert!(is_legal(&b, Direction::Down));
        assert!(is_legal(&b, Direction::Right));
        assert_eq!(
            legal_directions(&b).as_slice(),
            &[Direction::Down, Direction::Right]
        );
    }

    #[test]
    fn full_board_with_vertical_pair() {
        let b = board([[1, 2, 1, 2], [1, 3, 2, 1], [3, 2, 1, 2], [2, 1, 2, 1]]);
        assert!(is_legal(&b, Direction::Up));
        assert!(is_legal(&b, Direction::Down));
        assert!(!is_legal(&b, Direction::Left));
        assert!(!is_legal(&b, Direction::Right));
        assert!(any_move_possible(&b));
    }

    #[test]
    fn check_does_not_mutate() {
        let b = board([[0, 1, 0, 1], [0; 4], [2, 2, 0, 0], [0; 4]]);
        let copy = b;
        for d in Direction::ALL {
            let _ = is_legal(&b, d);
        }
        assert_eq!(b, copy);
    }

    /// Fill a board from an rng with small exponents and some gaps.
    fn random_board(rng: &mut SimpleRng) -> Board {
        let mut b = Board::new();
        for i in 0..CELL_COUNT {
            let e = rng.next_range(5) as u8;
            b.set_flat(i, Tile::new(e).unwrap());
        }
        b
    }

    #[test]
    fn legality_agrees_with_move_engine() {
        let mut rng = SimpleRng::new(2048);
        for _ in 0..2000 {
            let b = random_board(&mut rng);
            for d in Direction::ALL {
                let mut moved = b;
                let score = apply_move(&mut moved, d);
                if is_legal(&b, d) {
                    assert_ne!(moved, b, "legal {:?} left board unchanged: {:?}", d, b);
                } else {
                    assert_eq!(moved, b, "illegal {:?} changed board: {:?}", d, b);
                    assert_eq!(score, 0);
                }
            }
        }
    }
}
