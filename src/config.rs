use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 4;

/// The fleet, in placement order.
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("Destroyer", 2),
    ShipType::new("Cruiser", 3),
    ShipType::new("Battleship", 4),
    ShipType::new("Carrier", 5),
];

/// Total number of ship segments on a fully placed board.
pub const TOTAL_SHIP_CELLS: usize = 2 + 3 + 4 + 5;
