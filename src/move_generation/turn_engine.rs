//! One atomic turn: validate and apply a move, then fire the mover's laser.
//!
//! A game is either ongoing (`winner` unset) or decided. The only transition
//! is a king hit; a decided game ignores every further turn.

use tracing::trace;

use crate::game_state::game_state::GameState;
use crate::game_state::laser_types::{Coord, Move, Piece, PieceKind, Player};
use crate::move_generation::laser_simulator::fire_laser;
use crate::move_generation::move_validator::try_move;

/// Result of `perform_turn`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Whether the move was legal and the laser fired.
    pub moved: bool,
    /// Piece removed by the shot, or the king that was hit.
    pub captured: Option<Piece>,
}

/// Play `mv` on `coord` for `actor` (defaulting to the side to move) and fire.
///
/// Illegal moves and moves on a decided game leave `state` untouched.
pub fn perform_turn(
    state: &mut GameState,
    coord: Coord,
    mv: Move,
    actor: Option<Player>,
) -> TurnOutcome {
    if state.winner.is_some() {
        return TurnOutcome::default();
    }

    let actor = actor.unwrap_or(state.turn);
    if !try_move(state, coord, mv, actor) {
        trace!(?actor, %coord, %mv, "rejected move");
        return TurnOutcome::default();
    }

    let shot = fire_laser(state, actor, true);
    let captured = shot.captured();
    if let Some(king) = captured.filter(|p| p.kind == PieceKind::King) {
        debug_assert_eq!(state.winner, Some(king.owner.opponent()));
    }

    trace!(?actor, %coord, %mv, ?captured, "turn performed");
    TurnOutcome {
        moved: true,
        captured,
    }
}
