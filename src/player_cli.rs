#![cfg(feature = "std")]

//! Terminal front end: reads targets from a line-based input and prints
//! boards and announcements.

use std::fmt::Write as _;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use anyhow::bail;
use log::debug;

use crate::board::{Board, CellState};
use crate::common::{Coordinate, ShotOutcome};
use crate::config::BOARD_SIZE;
use crate::player::{CoordinateSource, GameObserver, PlayerId};
use crate::tracking::{TrackCell, TrackingView};

/// Parse a target such as `B7`: column letter A-J, then row 0-9.
///
/// Case-insensitive; surrounding whitespace is ignored.
pub fn parse_coord(input: &str) -> Result<Coordinate, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars
        .next()
        .ok_or("No column letter")?
        .to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8 - b'A') as usize;
    if col >= BOARD_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str = chars.as_str();
    if row_str.is_empty() {
        return Err("Too short - need a column letter and a row digit (e.g., B7)".to_string());
    }
    let mut digits = row_str.chars();
    let row = match (digits.next(), digits.next()) {
        (Some(d), None) if d.is_ascii_digit() => (d as u8 - b'0') as usize,
        _ => return Err(format!("Invalid row '{}' - must be a single digit 0-9", row_str)),
    };
    Coordinate::new(row, col).map_err(|e| e.to_string())
}

fn cell_glyph(state: CellState, reveal: bool) -> char {
    match state {
        CellState::Hit => 'X',
        CellState::Miss => '0',
        CellState::Ship if reveal => 'S',
        CellState::Ship | CellState::Water => '~',
    }
}

fn track_glyph(cell: TrackCell) -> char {
    match cell {
        TrackCell::Unknown => '~',
        TrackCell::Hit => 'X',
        TrackCell::Miss => '0',
    }
}

/// Lay out a 10×10 grid with a column header A..J and a row index 0..9.
fn render_grid<F>(mut glyph: F) -> String
where
    F: FnMut(usize, usize) -> char,
{
    let mut out = String::from("  ");
    for c in 0..BOARD_SIZE {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    out.push('\n');
    for r in 0..BOARD_SIZE {
        let _ = write!(out, "{}  ", r);
        for c in 0..BOARD_SIZE {
            let _ = write!(out, "{} ", glyph(r, c));
        }
        out.push('\n');
    }
    out
}

/// Render what a shooter knows: `~` unknown, `X` hit, `0` miss.
pub fn render_tracking_view(view: &TrackingView) -> String {
    render_grid(|r, c| {
        view.cell_at(r, c)
            .map(track_glyph)
            .unwrap_or('?')
    })
}

/// Render a player's own board; `reveal` shows unhit ships as `S`.
pub fn render_board(board: &Board, reveal: bool) -> String {
    render_grid(|r, c| {
        board
            .cell_at(r, c)
            .map(|state| cell_glyph(state, reveal))
            .unwrap_or('?')
    })
}

/// Hot-seat console: both players share one input and one output.
pub struct CliConsole<R, W> {
    input: R,
    output: W,
}

impl CliConsole<StdinLock<'static>, Stdout> {
    /// Console over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console and hand back its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Next line of input, or `None` once the input is closed.
    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> CoordinateSource for CliConsole<R, W> {
    fn next_coordinate(
        &mut self,
        player: PlayerId,
        view: &TrackingView,
    ) -> anyhow::Result<Coordinate> {
        loop {
            write!(self.output, "Enter a position (e.g., B7): ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                bail!("input closed during {}'s turn", player);
            };
            let target = match parse_coord(&line) {
                Ok(target) => target,
                Err(e) => {
                    debug!("rejected input {:?}: {}", line.trim(), e);
                    writeln!(self.output, "✗ {}", e)?;
                    writeln!(
                        self.output,
                        "   Please enter a valid input (column A-J, row 0-9)"
                    )?;
                    continue;
                }
            };
            if !view.is_unknown(target.row(), target.col())? {
                writeln!(
                    self.output,
                    "✗ You already attacked {}, choose another spot",
                    target
                )?;
                continue;
            }
            return Ok(target);
        }
    }
}

impl<R: BufRead, W: Write> GameObserver for CliConsole<R, W> {
    fn announce_turn(&mut self, player: PlayerId) -> anyhow::Result<()> {
        writeln!(self.output, "\n{}'s turn:", player)?;
        Ok(())
    }

    fn present_tracking_view(
        &mut self,
        _player: PlayerId,
        view: &TrackingView,
    ) -> anyhow::Result<()> {
        write!(self.output, "{}", render_tracking_view(view))?;
        Ok(())
    }

    fn announce_outcome(
        &mut self,
        _player: PlayerId,
        target: Coordinate,
        outcome: ShotOutcome,
    ) -> anyhow::Result<()> {
        match outcome {
            ShotOutcome::Hit => writeln!(self.output, "🔥 Hit at {}!", target)?,
            ShotOutcome::Miss => writeln!(self.output, "💧 Missed at {}.", target)?,
            ShotOutcome::AlreadyShot => writeln!(
                self.output,
                "✗ {} was already attacked, choose another spot",
                target
            )?,
        }
        Ok(())
    }

    fn announce_winner(&mut self, winner: PlayerId) -> anyhow::Result<()> {
        writeln!(self.output, "\n{} wins!", winner)?;
        Ok(())
    }

    fn announce_game_over(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "Game Over!")?;
        self.output.flush()?;
        Ok(())
    }

    fn reveal_boards(&mut self, board_a: &Board, board_b: &Board) -> anyhow::Result<()> {
        for (player, board) in [(PlayerId::PlayerA, board_a), (PlayerId::PlayerB, board_b)] {
            writeln!(self.output, "\n{}'s board:", player)?;
            write!(self.output, "{}", render_board(board, true))?;
        }
        Ok(())
    }
}
