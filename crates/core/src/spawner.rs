//! Spawner module - drop a new tile onto a random empty cell

use crate::board::Board;
use crate::rng::TileRng;
use crate::types::{Tile, FOUR_TILE_ODDS};

/// The common spawn (a 2)
const SPAWN_LOW: Tile = match Tile::new(1) {
    Some(t) => t,
    None => panic!("exponent 1 is a valid tile"),
};
/// The rare spawn (a 4)
const SPAWN_HIGH: Tile = match Tile::new(2) {
    Some(t) => t,
    None => panic!("exponent 2 is a valid tile"),
};

/// Place one new tile on a uniformly chosen empty cell.
///
/// The tile is a 2 nine times in ten and a 4 otherwise. The value is rolled
/// before the position. Returns `false` and leaves the board untouched when
/// there is no empty cell.
///
/// ```
/// use tui_2048_core::{spawn_tile, Board, SimpleRng};
///
/// let mut board = Board::new();
/// let mut rng = SimpleRng::new(42);
/// assert!(spawn_tile(&mut board, &mut rng));
/// assert_eq!(board.count_tiles(), 1);
/// ```
pub fn spawn_tile<R: TileRng + ?Sized>(board: &mut Board, rng: &mut R) -> bool {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return false;
    }

    let tile = if rng.next_range(FOUR_TILE_ODDS) == 0 {
        SPAWN_HIGH
    } else {
        SPAWN_LOW
    };
    let slot = rng.next_range(empty.len() as u32) as usize;

    board.set_flat(empty[slot], tile)
}
