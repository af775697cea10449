//! Ground-truth board for one player: ship cells, hits and misses.

use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, ShotOutcome};
use crate::config::{BOARD_SIZE, NUM_SHIPS, SHIPS};
use crate::ship::{Orientation, Ship};

type BB = BitBoard<u128, BOARD_SIZE>;

/// State of a single cell on a [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Water,
    Ship,
    Hit,
    Miss,
}

impl CellState {
    /// `Hit` and `Miss` never change again.
    pub fn is_shot(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss)
    }
}

/// One player's board.
///
/// Cells are kept as three disjoint masks: `ship_map` holds every cell that
/// carries a ship segment (hit or not), `hits` is a subset of it and `misses`
/// never intersects it.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    ships: [Option<Ship>; NUM_SHIPS],
    ship_map: BB,
    hits: BB,
    misses: BB,
}

impl Board {
    /// All-water board with no ships placed.
    pub fn new() -> Self {
        Board {
            ships: [None; NUM_SHIPS],
            ship_map: BB::new(),
            hits: BB::new(),
            misses: BB::new(),
        }
    }

    /// Current state of (row, col).
    pub fn cell_at(&self, row: usize, col: usize) -> Result<CellState, BoardError> {
        let state = if self.hits.get(row, col)? {
            CellState::Hit
        } else if self.misses.get(row, col)? {
            CellState::Miss
        } else if self.ship_map.get(row, col)? {
            CellState::Ship
        } else {
            CellState::Water
        };
        Ok(state)
    }

    /// Turn a water cell into a ship segment. Refused once the whole fleet is
    /// on the board.
    pub fn mark_ship(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        if self.cell_at(row, col)? != CellState::Water || self.is_fully_placed() {
            return Err(BoardError::IllegalTransition {
                row,
                col,
                action: "mark ship",
            });
        }
        self.ship_map.set(row, col)?;
        Ok(())
    }

    /// Fire at (row, col). Repeated shots report `AlreadyShot` and change nothing.
    pub fn apply_shot(&mut self, row: usize, col: usize) -> Result<ShotOutcome, BoardError> {
        let outcome = match self.cell_at(row, col)? {
            CellState::Ship => {
                self.hits.set(row, col)?;
                ShotOutcome::Hit
            }
            CellState::Water => {
                self.misses.set(row, col)?;
                ShotOutcome::Miss
            }
            CellState::Hit | CellState::Miss => ShotOutcome::AlreadyShot,
        };
        Ok(outcome)
    }

    /// Ship segments not yet hit.
    pub fn remaining_ship_cells(&self) -> usize {
        self.ship_map.count_ones() - self.hits.count_ones()
    }

    /// Returns `true` once every ship segment has been hit.
    pub fn all_sunk(&self) -> bool {
        self.remaining_ship_cells() == 0
    }

    pub fn hit_count(&self) -> usize {
        self.hits.count_ones()
    }

    /// Place ship `ship_index` of the fleet anchored at (row, col).
    pub fn place(
        &mut self,
        ship_index: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<Ship, BoardError> {
        if ship_index >= NUM_SHIPS {
            return Err(BoardError::InvalidIndex);
        }
        if self.ships[ship_index].is_some() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let ship = Ship::new(SHIPS[ship_index], orientation, row, col)?;
        if !self.can_place(&ship)? {
            return Err(BoardError::ShipOverlaps);
        }
        for (r, c) in ship.cells() {
            self.mark_ship(r, c)?;
        }
        self.ships[ship_index] = Some(ship);
        Ok(ship)
    }

    /// Every cell under `ship` is still water.
    pub fn can_place(&self, ship: &Ship) -> Result<bool, BoardError> {
        let occupied = self.ship_map | self.hits | self.misses;
        Ok((occupied & ship.mask()?).is_empty())
    }

    /// No ships and no shots.
    pub fn is_empty(&self) -> bool {
        (self.ship_map | self.hits | self.misses).is_empty()
    }

    /// Returns `true` when every ship of the fleet is on the board.
    pub fn is_fully_placed(&self) -> bool {
        self.ships.iter().all(Option::is_some)
    }

    /// Ships placed so far, in fleet order.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().flatten()
    }

    /// Mask of every ship segment, hit or not.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    pub fn hits(&self) -> BB {
        self.hits
    }

    pub fn misses(&self) -> BB {
        self.misses
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  hits: {:?},\n  misses: {:?},\n  ships: {:?}\n}}",
            self.ship_map, self.hits, self.misses, self.ships
        )
    }
}
