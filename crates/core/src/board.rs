//! Board module - manages the game grid
//!
//! The board is a 4x4 grid where each cell holds a [`Tile`] exponent.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col), both 0..4, row 0 at the top, col 0 on the left.
//!
//! Every slide reads the board as four *lines*. A line is a row (Left/Right)
//! or a column (Up/Down), listed in the order tiles travel through it: the
//! first entry is the edge tiles slide toward. [`Board::line_indices`] is the
//! single place that mapping lives, so the move engine and the legality check
//! always agree on orientation.

use arrayvec::ArrayVec;

use crate::types::{Direction, Tile, BOARD_SIZE, CELL_COUNT};

/// One row or column, in slide order.
pub type Line = [Tile; BOARD_SIZE];

/// The game board - 4 columns x 4 rows using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Flat array of tiles, row-major order (row * 4 + col)
    cells: [Tile; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Tile::EMPTY; CELL_COUNT],
        }
    }

    /// Build a board from raw exponents (0 = empty).
    ///
    /// Returns `None` if any exponent is out of range.
    ///
    /// ```
    /// use tui_2048_core::Board;
    ///
    /// let board = Board::from_exponents([
    ///     [1, 0, 0, 0],
    ///     [0, 0, 0, 0],
    ///     [0, 0, 3, 0],
    ///     [0, 0, 0, 0],
    /// ])
    /// .unwrap();
    /// assert_eq!(board.get(2, 2).unwrap().value(), 8);
    /// assert!(Board::from_exponents([[17; 4]; 4]).is_none());
    /// ```
    pub fn from_exponents(rows: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Option<Self> {
        let mut board = Self::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, &e) in row.iter().enumerate() {
                board.cells[Self::index(r, c)] = Tile::new(e)?;
            }
        }
        Some(board)
    }

    /// Raw exponents, row-major (the shape renderers consume).
    pub fn to_exponents(&self) -> [[u8; BOARD_SIZE]; BOARD_SIZE] {
        let mut out = [[0u8; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, e) in row.iter_mut().enumerate() {
                *e = self.cells[Self::index(r, c)].exponent();
            }
        }
        out
    }

    #[inline(always)]
    fn index(row: usize, col: usize) -> usize {
        row * BOARD_SIZE + col
    }

    /// Get tile at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return None;
        }
        Some(self.cells[Self::index(row, col)])
    }

    /// Set tile at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: usize, col: usize, tile: Tile) -> bool {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return false;
        }
        self.cells[Self::index(row, col)] = tile;
        true
    }

    /// Get tile by flat row-major index.
    pub fn get_flat(&self, idx: usize) -> Option<Tile> {
        self.cells.get(idx).copied()
    }

    /// Set tile by flat row-major index.
    pub fn set_flat(&mut self, idx: usize, tile: Tile) -> bool {
        match self.cells.get_mut(idx) {
            Some(cell) => {
                *cell = tile;
                true
            }
            None => false,
        }
    }

    pub fn cells(&self) -> &[Tile; CELL_COUNT] {
        &self.cells
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells = [Tile::EMPTY; CELL_COUNT];
    }

    /// Flat indices of empty cells, in row-major order.
    pub fn empty_cells(&self) -> ArrayVec<usize, CELL_COUNT> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|t| t.is_empty()).count()
    }

    pub fn count_tiles(&self) -> usize {
        CELL_COUNT - self.count_empty()
    }

    /// Sum of the face values of every tile.
    pub fn total_value(&self) -> u32 {
        self.cells.iter().map(|t| t.value()).sum()
    }

    /// Largest tile on the board (empty if the board is empty).
    pub fn max_tile(&self) -> Tile {
        self.cells
            .iter()
            .copied()
            .max_by_key(|t| t.exponent())
            .unwrap_or(Tile::EMPTY)
    }

    /// Flat indices of line `line` (0..4) for `direction`, in slide order.
    ///
    /// Left/Right take row `line`, Up/Down take column `line`. Up/Left list
    /// the cells from index 0 upward; Down/Right from index 3 downward.
    ///
    /// ```
    /// use tui_2048_core::Board;
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Board::line_indices(Direction::Left, 1), [4, 5, 6, 7]);
    /// assert_eq!(Board::line_indices(Direction::Right, 1), [7, 6, 5, 4]);
    /// assert_eq!(Board::line_indices(Direction::Up, 2), [2, 6, 10, 14]);
    /// assert_eq!(Board::line_indices(Direction::Down, 2), [14, 10, 6, 2]);
    /// ```
    pub fn line_indices(direction: Direction, line: usize) -> [usize; BOARD_SIZE] {
        debug_assert!(line < BOARD_SIZE);
        let mut out = [0usize; BOARD_SIZE];
        for (step, slot) in out.iter_mut().enumerate() {
            let pos = if direction.reads_forward() {
                step
            } else {
                BOARD_SIZE - 1 - step
            };
            *slot = if direction.reads_rows() {
                Self::index(line, pos)
            } else {
                Self::index(pos, line)
            };
        }
        out
    }

    /// Extract a line in slide order.
    pub fn read_line(&self, direction: Direction, line: usize) -> Line {
        Self::line_indices(direction, line).map(|i| self.cells[i])
    }

    /// Write a line back to the positions [`Board::read_line`] took it from.
    pub fn write_line(&mut self, direction: Direction, line: usize, tiles: Line) {
        for (idx, tile) in Self::line_indices(direction, line).into_iter().zip(tiles) {
            self.cells[idx] = tile;
        }
    }
}
