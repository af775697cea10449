//! The shooter's record of what it has learned about the opponent's board.

use crate::bitboard::BitBoard;
use crate::common::{BoardError, ShotOutcome};
use crate::config::BOARD_SIZE;

type BB = BitBoard<u128, BOARD_SIZE>;

/// A cell as seen by the opposing shooter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackCell {
    Unknown,
    Hit,
    Miss,
}

/// Hits and misses recorded against one opponent board. Unshot ship cells
/// are indistinguishable from water here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackingView {
    hits: BB,
    misses: BB,
}

impl TrackingView {
    /// All cells unknown.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Result<TrackCell, BoardError> {
        let cell = if self.hits.get(row, col)? {
            TrackCell::Hit
        } else if self.misses.get(row, col)? {
            TrackCell::Miss
        } else {
            TrackCell::Unknown
        };
        Ok(cell)
    }

    pub fn is_unknown(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.cell_at(row, col)? == TrackCell::Unknown)
    }

    /// Record the outcome of a shot at an unknown cell.
    ///
    /// Only `Hit` and `Miss` can be recorded, and each cell only once;
    /// callers filter `AlreadyShot` before getting here.
    pub fn record(
        &mut self,
        row: usize,
        col: usize,
        outcome: ShotOutcome,
    ) -> Result<(), BoardError> {
        let illegal = BoardError::IllegalTransition {
            row,
            col,
            action: "record shot",
        };
        if !self.is_unknown(row, col)? {
            return Err(illegal);
        }
        match outcome {
            ShotOutcome::Hit => self.hits.set(row, col)?,
            ShotOutcome::Miss => self.misses.set(row, col)?,
            ShotOutcome::AlreadyShot => return Err(illegal),
        }
        Ok(())
    }

    pub fn hit_count(&self) -> usize {
        self.hits.count_ones()
    }

    /// Number of cells that are no longer unknown.
    pub fn shots_taken(&self) -> usize {
        (self.hits | self.misses).count_ones()
    }

    /// Cells not fired at yet, in row-major order.
    pub fn unknown_cells(&self) -> impl Iterator<Item = (usize, usize)> {
        (!(self.hits | self.misses)).cells()
    }

    pub fn hits(&self) -> BB {
        self.hits
    }

    pub fn misses(&self) -> BB {
        self.misses
    }
}
