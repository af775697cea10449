//! Common types for Battleship: coordinates, shot outcomes and board errors.

use core::fmt;

use crate::bitboard::BitBoardError;
use crate::config::BOARD_SIZE;

/// A cell on the 10×10 grid. Both components are always in `[0, BOARD_SIZE)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    /// Bounds-checked constructor.
    pub fn new(row: usize, col: usize) -> Result<Self, BoardError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(BoardError::OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }
}

/// Letter for the column, digit for the row: `(row=7, col=1)` prints as `B7`.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.col as u8) as char, self.row)
    }
}

/// Result of firing at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// The cell held an unhit ship segment.
    Hit,
    /// The cell was open water.
    Miss,
    /// The cell had been fired at before; nothing changed.
    AlreadyShot,
}

/// Errors returned by board, tracking and controller operations.
///
/// Everything here is an invariant violation from the game's point of view;
/// a repeated shot is reported as [`ShotOutcome::AlreadyShot`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Cell mutated from a state that does not allow it.
    IllegalTransition {
        row: usize,
        col: usize,
        action: &'static str,
    },
    /// Ship index outside the configured fleet.
    InvalidIndex,
    /// Ship with this index is already on the board.
    ShipAlreadyPlaced,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship would extend past the edge of the grid.
    ShipOutOfBounds,
    /// Board has ships before random placement, or shots before a new game.
    BoardNotEmpty,
    /// Controller was handed a board without its full fleet.
    IncompleteFleet,
    /// Shot fired after the game ended.
    GameOver,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { row, col } => BoardError::OutOfBounds { row, col },
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "Coordinate (row={}, col={}) is out of bounds", row, col)
            }
            BoardError::IllegalTransition { row, col, action } => write!(
                f,
                "Illegal transition: cannot {} at (row={}, col={})",
                action, row, col
            ),
            BoardError::InvalidIndex => write!(f, "Ship index is out of range"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::BoardNotEmpty => write!(f, "Board already has ships or shots on it"),
            BoardError::IncompleteFleet => write!(f, "Board does not carry the full fleet"),
            BoardError::GameOver => write!(f, "The game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
