//! Shot resolution: one shot updates the defender's board and the attacker's
//! tracking view together.

use log::trace;

use crate::board::Board;
use crate::common::{BoardError, Coordinate, ShotOutcome};
use crate::tracking::TrackingView;

/// Fire at `target` on `defender`, recording the result in `attacker_view`.
///
/// The view is checked before the board is touched so that either both
/// change or neither does. `AlreadyShot` leaves both untouched.
pub fn resolve(
    attacker_view: &mut TrackingView,
    defender: &mut Board,
    target: Coordinate,
) -> Result<ShotOutcome, BoardError> {
    let (row, col) = (target.row(), target.col());
    if defender.cell_at(row, col)?.is_shot() {
        trace!("{} already shot", target);
        return Ok(ShotOutcome::AlreadyShot);
    }
    if !attacker_view.is_unknown(row, col)? {
        return Err(BoardError::IllegalTransition {
            row,
            col,
            action: "record shot",
        });
    }
    let outcome = defender.apply_shot(row, col)?;
    attacker_view.record(row, col, outcome)?;
    trace!("{} -> {:?}", target, outcome);
    Ok(outcome)
}
