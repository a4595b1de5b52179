//! Beam tracing through the board.
//!
//! `trace_laser` is the single ray-cast routine and only ever reads a `&Board`.
//! `fire_laser` commits a trace to a `GameState` (capture, winner, turn flip)
//! when asked to; `preview_laser` is the read-only view used by the evaluator
//! and move filters.

use tracing::debug;

use crate::game_state::game_state::{Board, GameState};
use crate::game_state::laser_rules::{
    defender_blocks, deflector_reflection, laser_direction, laser_home, switch_reflection,
};
use crate::game_state::laser_types::{Cell, Coord, Piece, PieceKind, Player, COLUMNS, ROWS};

/// Upper bound on beam length; every (square, direction) pair at most once.
const MAX_BEAM_STEPS: usize = ROWS * COLUMNS * 4;

/// How a beam came to rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeamStop {
    /// Travelled off the edge of the board.
    LeftBoard,
    /// Hit a defender's shield at this square; nothing is lost.
    Blocked(Coord),
    /// Hit `piece` at `at`: a deflector's back, a defender's open side or a king.
    Struck { at: Coord, piece: Piece },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaserTrace {
    /// Squares visited in order, starting at the laser's home square.
    pub path: Vec<Coord>,
    pub stop: BeamStop,
}

impl LaserTrace {
    /// Last square the beam touched.
    #[inline]
    pub fn end(&self) -> Coord {
        *self
            .path
            .last()
            .unwrap_or_else(|| unreachable!("a beam always starts on its laser square"))
    }

    /// The piece the beam struck (or would strike, for a preview).
    #[inline]
    pub fn captured(&self) -> Option<Piece> {
        match self.stop {
            BeamStop::Struck { piece, .. } => Some(piece),
            _ => None,
        }
    }
}

/// Ray-cast `player`'s beam over `board` without modifying anything.
///
/// Panics if `player`'s laser is not on its home square.
pub fn trace_laser(board: &Board, player: Player) -> LaserTrace {
    let mut coord = laser_home(player);
    let laser = match board.piece_at(coord) {
        Some(piece) if piece.kind == PieceKind::Laser && piece.owner == player => piece,
        other => panic!("{player:?} laser missing from {coord}, found {other:?}"),
    };
    let mut direction = laser_direction(player, laser.orientation);
    let mut path = Vec::with_capacity(ROWS + COLUMNS);

    while coord.in_bounds() {
        path.push(coord);
        assert!(path.len() <= MAX_BEAM_STEPS, "beam failed to terminate");

        if let Cell::Occupied(piece) = board.get(coord) {
            match piece.kind {
                PieceKind::Laser => {}
                PieceKind::Deflector => match deflector_reflection(piece.orientation, direction) {
                    Some(reflected) => direction = reflected,
                    None => {
                        return LaserTrace {
                            path,
                            stop: BeamStop::Struck { at: coord, piece },
                        }
                    }
                },
                PieceKind::Switch => direction = switch_reflection(piece.orientation, direction),
                PieceKind::Defender => {
                    let stop = if defender_blocks(piece.orientation, direction) {
                        BeamStop::Blocked(coord)
                    } else {
                        BeamStop::Struck { at: coord, piece }
                    };
                    return LaserTrace { path, stop };
                }
                PieceKind::King => {
                    return LaserTrace {
                        path,
                        stop: BeamStop::Struck { at: coord, piece },
                    }
                }
            }
        }

        coord = coord.step(direction);
    }

    LaserTrace {
        path,
        stop: BeamStop::LeftBoard,
    }
}

/// Fire `player`'s laser.
///
/// With `capture` set, a struck piece is removed (a struck king instead
/// decides the game) and the turn passes to the opponent. Without it, or once
/// the game is already decided, the state is left exactly as it was.
pub fn fire_laser(state: &mut GameState, player: Player, capture: bool) -> LaserTrace {
    let trace = trace_laser(&state.board, player);
    if !capture || state.winner.is_some() {
        return trace;
    }

    if let BeamStop::Struck { at, piece } = trace.stop {
        if piece.kind == PieceKind::King {
            let winner = piece.owner.opponent();
            debug!(?player, %at, ?winner, "laser struck king");
            state.winner = Some(winner);
        } else {
            debug!(?player, %at, ?piece, "laser captured piece");
            state.board.clear(at);
        }
    }

    state.turn = player.opponent();
    trace
}

/// Read-only beam trace for heuristics and rendering.
#[inline]
pub fn preview_laser(state: &GameState, player: Player) -> LaserTrace {
    trace_laser(&state.board, player)
}
