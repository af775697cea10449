//! Random fleet placement.
//!
//! Each ship is dropped at a uniformly drawn anchor and orientation; draws
//! that leave the grid or cover a non-water cell are thrown away and redrawn.
//! Ships may touch each other edge to edge.

use log::{debug, trace};
use rand::Rng;

use crate::board::{Board, CellState};
use crate::common::BoardError;
use crate::config::{BOARD_SIZE, NUM_SHIPS, SHIPS};
use crate::ship::Orientation;

/// Checks whether a ship of `size` anchored at (row, col) fits on water only.
pub fn can_place_ship(
    board: &Board,
    row: usize,
    col: usize,
    size: usize,
    orientation: Orientation,
) -> Result<bool, BoardError> {
    let (end, fixed) = match orientation {
        Orientation::Horizontal => (col + size, row),
        Orientation::Vertical => (row + size, col),
    };
    if end > BOARD_SIZE || fixed >= BOARD_SIZE {
        return Ok(false);
    }
    for i in 0..size {
        let (r, c) = match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        };
        if board.cell_at(r, c)? != CellState::Water {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Draw anchors until ship `ship_index` fits, returning the feasible draw.
///
/// Row is drawn first, then column, then orientation. The loop has no upper
/// bound; with at most nine occupied cells on a 10×10 grid it ends quickly.
pub fn random_placement<R: Rng>(
    board: &Board,
    rng: &mut R,
    ship_index: usize,
) -> Result<(usize, usize, Orientation), BoardError> {
    if ship_index >= NUM_SHIPS {
        return Err(BoardError::InvalidIndex);
    }
    let size = SHIPS[ship_index].length();
    let mut attempts = 0u32;
    loop {
        attempts += 1;
        let row = rng.random_range(0..BOARD_SIZE);
        let col = rng.random_range(0..BOARD_SIZE);
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        if can_place_ship(board, row, col, size, orientation)? {
            trace!(
                "{} fits at ({}, {}) {:?} after {} draws",
                SHIPS[ship_index].name(),
                row,
                col,
                orientation,
                attempts
            );
            return Ok((row, col, orientation));
        }
    }
}

/// Place the whole fleet, in order, onto an empty board.
pub fn place_fleet<R: Rng>(board: &mut Board, rng: &mut R) -> Result<(), BoardError> {
    if !board.is_empty() {
        return Err(BoardError::BoardNotEmpty);
    }
    for i in 0..NUM_SHIPS {
        let (row, col, orientation) = random_placement(board, rng, i)?;
        let ship = board.place(i, row, col, orientation)?;
        debug!("placed {:?}", ship);
    }
    Ok(())
}
