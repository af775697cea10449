#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod placement;
mod player;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
mod ship;
pub mod shot;
mod tracking;

pub use bitboard::{BitBoard, BitBoardError, SetCells};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use placement::*;
pub use player::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use ship::*;
pub use tracking::*;
