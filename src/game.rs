//! Turn-by-turn game controller for two players sharing one terminal.

use log::{debug, info, warn};
use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, Coordinate, ShotOutcome};
use crate::config::TOTAL_SHIP_CELLS;
use crate::placement::place_fleet;
use crate::player::{CoordinateSource, GameObserver, PlayerId};
use crate::shot;
use crate::tracking::TrackingView;

/// Where the controller is within a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Nothing has happened yet in `player`'s turn.
    AwaitTurn(PlayerId),
    /// `player` has been shown its view and owes a coordinate.
    AwaitShot(PlayerId),
    /// A shot by `player` is being applied.
    Resolve(PlayerId),
    /// Terminal: `player` sank the whole opposing fleet.
    End(PlayerId),
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Over { winner: PlayerId },
}

/// Owns both boards and both tracking views and alternates turns.
///
/// `views[i]` is what player `i` knows about the board of the other player.
#[derive(Debug, Clone)]
pub struct GameController {
    boards: [Board; 2],
    views: [TrackingView; 2],
    state: TurnState,
    shots_fired: usize,
}

impl GameController {
    /// Start a game with both fleets placed at random; player A's board is
    /// filled first.
    pub fn new<R: Rng>(rng: &mut R) -> Result<Self, BoardError> {
        let mut board_a = Board::new();
        let mut board_b = Board::new();
        place_fleet(&mut board_a, rng)?;
        place_fleet(&mut board_b, rng)?;
        Self::from_boards(board_a, board_b)
    }

    /// Start a game from boards that carry exactly their full fleet and have
    /// not been fired at.
    pub fn from_boards(board_a: Board, board_b: Board) -> Result<Self, BoardError> {
        for board in [&board_a, &board_b] {
            if !board.is_fully_placed() || board.ship_map().count_ones() != TOTAL_SHIP_CELLS {
                return Err(BoardError::IncompleteFleet);
            }
            if !board.hits().is_empty() || !board.misses().is_empty() {
                return Err(BoardError::BoardNotEmpty);
            }
        }
        Ok(Self {
            boards: [board_a, board_b],
            views: [TrackingView::new(), TrackingView::new()],
            state: TurnState::AwaitTurn(PlayerId::PlayerA),
            shots_fired: 0,
        })
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// The player whose turn it is, or the winner once the game has ended.
    pub fn current_player(&self) -> PlayerId {
        match self.state {
            TurnState::AwaitTurn(p)
            | TurnState::AwaitShot(p)
            | TurnState::Resolve(p)
            | TurnState::End(p) => p,
        }
    }

    /// `player`'s own board.
    pub fn board(&self, player: PlayerId) -> &Board {
        &self.boards[player.index()]
    }

    /// What `player` knows about the opponent's board.
    pub fn view(&self, player: PlayerId) -> &TrackingView {
        &self.views[player.index()]
    }

    /// Shots that consumed a turn so far.
    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }

    pub fn is_game_over(&self) -> bool {
        self.winner().is_some()
    }

    /// The player whose opponent has no ship cells left.
    pub fn winner(&self) -> Option<PlayerId> {
        if self.board(PlayerId::PlayerB).all_sunk() {
            Some(PlayerId::PlayerA)
        } else if self.board(PlayerId::PlayerA).all_sunk() {
            Some(PlayerId::PlayerB)
        } else {
            None
        }
    }

    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(winner) => GameStatus::Over { winner },
            None => GameStatus::InProgress,
        }
    }

    /// Fire the acting player's shot at `target` on the opponent's board.
    ///
    /// `AlreadyShot` consumes no turn. Any other outcome either ends the game
    /// or passes the turn to the opponent.
    pub fn fire(&mut self, target: Coordinate) -> Result<ShotOutcome, BoardError> {
        let player = match self.state {
            TurnState::End(_) => return Err(BoardError::GameOver),
            TurnState::AwaitTurn(p) | TurnState::AwaitShot(p) | TurnState::Resolve(p) => p,
        };
        let opponent = player.other();
        self.state = TurnState::Resolve(player);

        let outcome = match shot::resolve(
            &mut self.views[player.index()],
            &mut self.boards[opponent.index()],
            target,
        ) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.state = TurnState::AwaitShot(player);
                return Err(e);
            }
        };
        debug!("{} fired at {}: {:?}", player, target, outcome);

        self.state = match outcome {
            ShotOutcome::AlreadyShot => TurnState::AwaitShot(player),
            ShotOutcome::Hit | ShotOutcome::Miss => {
                self.shots_fired += 1;
                if self.boards[opponent.index()].all_sunk() {
                    info!("{} wins after {} shots", player, self.shots_fired);
                    TurnState::End(player)
                } else {
                    TurnState::AwaitTurn(opponent)
                }
            }
        };
        Ok(outcome)
    }

    /// Play one full turn through `io`. Returns the winner if the game ended.
    pub fn play_turn<C>(&mut self, io: &mut C) -> anyhow::Result<Option<PlayerId>>
    where
        C: CoordinateSource + GameObserver,
    {
        let player = match self.state {
            TurnState::End(winner) => return Ok(Some(winner)),
            TurnState::AwaitTurn(p) | TurnState::AwaitShot(p) | TurnState::Resolve(p) => p,
        };
        io.announce_turn(player)?;
        io.present_tracking_view(player, self.view(player))?;
        self.state = TurnState::AwaitShot(player);

        loop {
            let target = io.next_coordinate(player, self.view(player))?;
            let outcome = self.fire(target).map_err(|e| anyhow::anyhow!(e))?;
            io.announce_outcome(player, target, outcome)?;
            if outcome != ShotOutcome::AlreadyShot {
                break;
            }
            warn!("{} repeated a shot at {}", player, target);
        }

        match self.state {
            TurnState::End(winner) => {
                io.announce_winner(winner)?;
                Ok(Some(winner))
            }
            _ => Ok(None),
        }
    }

    /// Alternate turns until one fleet is sunk, then reveal both boards.
    pub fn run<C>(&mut self, io: &mut C) -> anyhow::Result<PlayerId>
    where
        C: CoordinateSource + GameObserver,
    {
        let winner = loop {
            if let Some(winner) = self.play_turn(io)? {
                break winner;
            }
        };
        io.reveal_boards(self.board(PlayerId::PlayerA), self.board(PlayerId::PlayerB))?;
        io.announce_game_over()?;
        Ok(winner)
    }
}
