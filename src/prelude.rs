//! Commonly used types for ease of import.

pub use crate::{
    place_fleet, Board, CellState, Coordinate, CoordinateSource, GameController, GameObserver,
    GameStatus, PlayerId, ShotOutcome, TrackingView, TurnState,
};

#[cfg(feature = "std")]
pub use crate::{parse_coord, render_tracking_view, CliConsole};
