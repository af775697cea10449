//! Players and the collaborators the controller talks to.

use core::fmt;

use crate::board::Board;
use crate::common::{Coordinate, ShotOutcome};
use crate::tracking::TrackingView;

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    PlayerA,
    PlayerB,
}

impl PlayerId {
    /// The opposing seat.
    pub fn other(self) -> Self {
        match self {
            PlayerId::PlayerA => PlayerId::PlayerB,
            PlayerId::PlayerB => PlayerId::PlayerA,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            PlayerId::PlayerA => 0,
            PlayerId::PlayerB => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::PlayerA => write!(f, "Player 1"),
            PlayerId::PlayerB => write!(f, "Player 2"),
        }
    }
}

/// Supplies the next target for the acting player.
///
/// Implementations own parsing and must only return coordinates that are
/// still unknown in `view`; malformed input never reaches the controller.
pub trait CoordinateSource {
    fn next_coordinate(
        &mut self,
        player: PlayerId,
        view: &TrackingView,
    ) -> anyhow::Result<Coordinate>;
}

/// Receives everything the controller wants shown to the players.
pub trait GameObserver {
    fn announce_turn(&mut self, player: PlayerId) -> anyhow::Result<()>;

    /// Show `player` what it knows about the opponent's board.
    fn present_tracking_view(&mut self, player: PlayerId, view: &TrackingView)
        -> anyhow::Result<()>;

    fn announce_outcome(
        &mut self,
        player: PlayerId,
        target: Coordinate,
        outcome: ShotOutcome,
    ) -> anyhow::Result<()>;

    fn announce_winner(&mut self, winner: PlayerId) -> anyhow::Result<()>;

    fn announce_game_over(&mut self) -> anyhow::Result<()>;

    /// Called once the game has ended with both boards fully visible.
    fn reveal_boards(&mut self, _board_a: &Board, _board_b: &Board) -> anyhow::Result<()> {
        Ok(())
    }
}
