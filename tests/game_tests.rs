use std::collections::VecDeque;

use battleship::{
    Board, BoardError, Coordinate, CoordinateSource, GameController, GameObserver, GameStatus,
    Orientation, PlayerId, ShotOutcome, TrackingView, TurnState, SHIPS, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Fleet stacked in rows 0..4, anchored in column A.
fn stacked_board() -> Board {
    let mut board = Board::new();
    for i in 0..SHIPS.len() {
        board.place(i, i, 0, Orientation::Horizontal).unwrap();
    }
    board
}

fn at(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col).unwrap()
}

fn fleet_cells() -> Vec<Coordinate> {
    stacked_board()
        .ship_map()
        .cells()
        .map(|(r, c)| at(r, c))
        .collect()
}

/// Cells in rows 5..9, far from the stacked fleet.
fn open_water() -> Vec<Coordinate> {
    (50..100).map(|i| at(i / 10, i % 10)).collect()
}

#[derive(Default)]
struct Scripted {
    targets: VecDeque<Coordinate>,
    events: Vec<String>,
}

impl CoordinateSource for Scripted {
    fn next_coordinate(
        &mut self,
        _player: PlayerId,
        _view: &TrackingView,
    ) -> anyhow::Result<Coordinate> {
        self.targets
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))
    }
}

impl GameObserver for Scripted {
    fn announce_turn(&mut self, player: PlayerId) -> anyhow::Result<()> {
        self.events.push(format!("turn {}", player));
        Ok(())
    }

    fn present_tracking_view(
        &mut self,
        _player: PlayerId,
        view: &TrackingView,
    ) -> anyhow::Result<()> {
        self.events.push(format!("view {}", view.shots_taken()));
        Ok(())
    }

    fn announce_outcome(
        &mut self,
        player: PlayerId,
        target: Coordinate,
        outcome: ShotOutcome,
    ) -> anyhow::Result<()> {
        self.events
            .push(format!("{} {} {:?}", player, target, outcome));
        Ok(())
    }

    fn announce_winner(&mut self, winner: PlayerId) -> anyhow::Result<()> {
        self.events.push(format!("winner {}", winner));
        Ok(())
    }

    fn announce_game_over(&mut self) -> anyhow::Result<()> {
        self.events.push("game over".to_string());
        Ok(())
    }
}

#[test]
fn starts_with_player_a() {
    let mut rng = SmallRng::seed_from_u64(1);
    let game = GameController::new(&mut rng).unwrap();
    assert_eq!(game.state(), TurnState::AwaitTurn(PlayerId::PlayerA));
    assert_eq!(game.status(), GameStatus::InProgress);
    for player in [PlayerId::PlayerA, PlayerId::PlayerB] {
        assert_eq!(game.board(player).remaining_ship_cells(), TOTAL_SHIP_CELLS);
        assert_eq!(game.view(player).shots_taken(), 0);
    }
}

#[test]
fn rejects_boards_without_full_fleet() {
    let mut partial = Board::new();
    partial.place(0, 0, 0, Orientation::Vertical).unwrap();
    assert_eq!(
        GameController::from_boards(stacked_board(), partial).unwrap_err(),
        BoardError::IncompleteFleet
    );
}

#[test]
fn rejects_boards_with_stray_ship_cells() {
    let mut padded = Board::new();
    padded.mark_ship(9, 9).unwrap();
    for i in 0..SHIPS.len() {
        padded.place(i, i, 0, Orientation::Horizontal).unwrap();
    }
    assert!(padded.is_fully_placed());
    assert_eq!(
        GameController::from_boards(padded, stacked_board()).unwrap_err(),
        BoardError::IncompleteFleet
    );
}

#[test]
fn rejects_boards_that_were_fired_at() {
    let mut shot_at = stacked_board();
    shot_at.apply_shot(9, 9).unwrap();
    assert_eq!(
        GameController::from_boards(stacked_board(), shot_at).unwrap_err(),
        BoardError::BoardNotEmpty
    );
}

#[test]
fn turns_alternate_and_views_are_paired() {
    let mut game = GameController::from_boards(stacked_board(), stacked_board()).unwrap();

    assert_eq!(game.fire(at(0, 0)).unwrap(), ShotOutcome::Hit);
    assert_eq!(game.state(), TurnState::AwaitTurn(PlayerId::PlayerB));
    assert_eq!(game.board(PlayerId::PlayerB).remaining_ship_cells(), 13);
    assert_eq!(game.view(PlayerId::PlayerA).hit_count(), 1);

    assert_eq!(game.fire(at(9, 9)).unwrap(), ShotOutcome::Miss);
    assert_eq!(game.state(), TurnState::AwaitTurn(PlayerId::PlayerA));
    assert!(game.board(PlayerId::PlayerA).misses().get(9, 9).unwrap());
    assert!(!game.view(PlayerId::PlayerB).is_unknown(9, 9).unwrap());
    assert_eq!(game.shots_fired(), 2);
}

#[test]
fn already_shot_keeps_the_turn() {
    let mut game = GameController::from_boards(stacked_board(), stacked_board()).unwrap();
    game.fire(at(3, 2)).unwrap();
    game.fire(at(5, 5)).unwrap();
    assert_eq!(game.fire(at(3, 2)).unwrap(), ShotOutcome::AlreadyShot);
    assert_eq!(game.state(), TurnState::AwaitShot(PlayerId::PlayerA));
    assert_eq!(game.shots_fired(), 2);
    assert_eq!(game.fire(at(3, 3)).unwrap(), ShotOutcome::Hit);
    assert_eq!(game.current_player(), PlayerId::PlayerB);
}

#[test]
fn sinking_every_cell_ends_the_game() {
    let mut game = GameController::from_boards(stacked_board(), stacked_board()).unwrap();
    let hits = fleet_cells();
    let mut misses = open_water().into_iter();
    for (i, target) in hits.iter().enumerate() {
        assert!(!game.is_game_over());
        assert_eq!(game.fire(*target).unwrap(), ShotOutcome::Hit);
        if i + 1 < hits.len() {
            game.fire(misses.next().unwrap()).unwrap();
        }
    }
    assert!(game.is_game_over());
    assert_eq!(game.winner(), Some(PlayerId::PlayerA));
    assert_eq!(game.state(), TurnState::End(PlayerId::PlayerA));
    assert_eq!(
        game.status(),
        GameStatus::Over {
            winner: PlayerId::PlayerA
        }
    );
    assert_eq!(game.board(PlayerId::PlayerB).hit_count(), TOTAL_SHIP_CELLS);
    assert_eq!(game.fire(at(9, 9)).unwrap_err(), BoardError::GameOver);
}

#[test]
fn player_b_can_win() {
    let mut game = GameController::from_boards(stacked_board(), stacked_board()).unwrap();
    let mut script = Scripted::default();
    for (miss, hit) in open_water().into_iter().zip(fleet_cells()) {
        script.targets.push_back(miss);
        script.targets.push_back(hit);
    }
    let winner = game.run(&mut script).unwrap();
    assert_eq!(winner, PlayerId::PlayerB);
    assert_eq!(script.events.last().unwrap(), "game over");
    assert!(script.events.contains(&"winner Player 2".to_string()));
    assert_eq!(game.board(PlayerId::PlayerA).remaining_ship_cells(), 0);
    assert_eq!(game.board(PlayerId::PlayerB).remaining_ship_cells(), TOTAL_SHIP_CELLS);
}

#[test]
fn play_turn_retries_after_repeat() {
    let mut game = GameController::from_boards(stacked_board(), stacked_board()).unwrap();
    let mut script = Scripted::default();
    script.targets.extend([at(0, 0), at(9, 9), at(0, 0), at(0, 1)]);

    assert_eq!(game.play_turn(&mut script).unwrap(), None);
    assert_eq!(game.play_turn(&mut script).unwrap(), None);
    assert_eq!(game.play_turn(&mut script).unwrap(), None);

    assert_eq!(
        script.events,
        vec![
            "turn Player 1",
            "view 0",
            "Player 1 A0 Hit",
            "turn Player 2",
            "view 0",
            "Player 2 J9 Miss",
            "turn Player 1",
            "view 1",
            "Player 1 A0 AlreadyShot",
            "Player 1 B0 Hit",
        ]
    );
    assert_eq!(game.current_player(), PlayerId::PlayerB);
}

#[test]
fn exhausted_input_surfaces_as_error() {
    let mut game = GameController::from_boards(stacked_board(), stacked_board()).unwrap();
    let mut script = Scripted::default();
    assert!(game.play_turn(&mut script).is_err());
    assert_eq!(game.state(), TurnState::AwaitShot(PlayerId::PlayerA));
}
