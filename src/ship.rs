//! Ship definitions and their footprint on the grid.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::BoardError;
use crate::config::BOARD_SIZE;

type BB = BitBoard<u128, BOARD_SIZE>;

/// Axis a ship extends along from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Anchor is the leftmost cell; the ship grows to the right.
    Horizontal,
    /// Anchor is the topmost cell; the ship grows downwards.
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship anchored on the board.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    orientation: Orientation,
    row: usize,
    col: usize,
}

impl Ship {
    /// Anchor a ship at (`row`, `col`). Fails with `ShipOutOfBounds` when any
    /// segment would fall outside the grid.
    pub fn new(
        ship_type: ShipType,
        orientation: Orientation,
        row: usize,
        col: usize,
    ) -> Result<Self, BoardError> {
        let len = ship_type.length();
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(BoardError::ShipOutOfBounds);
        }
        let end = match orientation {
            Orientation::Horizontal => col + len,
            Orientation::Vertical => row + len,
        };
        if end > BOARD_SIZE {
            return Err(BoardError::ShipOutOfBounds);
        }
        Ok(Ship {
            ship_type,
            orientation,
            row,
            col,
        })
    }

    /// Cells covered by the ship, starting at the anchor.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (row, col, orientation) = (self.row, self.col, self.orientation);
        (0..self.ship_type.length()).map(move |i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells().any(|cell| cell == (row, col))
    }

    /// Occupancy mask of the ship.
    pub fn mask(&self) -> Result<BB, BoardError> {
        Ok(BB::from_cells(self.cells())?)
    }

    pub fn length(&self) -> usize {
        self.ship_type.length()
    }

    /// Anchor of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", length: {}, origin: ({}, {}), orientation: {:?} }}",
            self.ship_type.name(),
            self.ship_type.length(),
            self.row,
            self.col,
            self.orientation,
        )
    }
}
