//! Legality rules for relocating and rotating a piece.
//!
//! `validate_move` is a pure check that describes what a legal move would do;
//! `try_move` applies that description to a game. A rejected move never
//! touches the board.

use crate::game_state::game_state::{Board, GameState};
use crate::game_state::laser_rules::is_no_entry_square;
use crate::game_state::laser_types::{Coord, Move, Piece, PieceKind, Player};

/// Board change produced by a legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveEffect {
    /// Replace the piece on `at` with its rotated self.
    Rotate { at: Coord, piece: Piece },
    /// Move a piece onto an empty square.
    Relocate { from: Coord, to: Coord },
    /// Switch trading places with a deflector or defender.
    Swap { from: Coord, to: Coord },
}

/// Check `mv` for the piece on `coord` as played by `actor`.
///
/// Panics if `coord` is off the board.
pub fn validate_move(board: &Board, coord: Coord, mv: Move, actor: Player) -> Option<MoveEffect> {
    let piece = board.piece_at(coord)?;
    if piece.owner != actor {
        return None;
    }

    let direction = match mv {
        Move::Rotate(rotation) => {
            return Some(MoveEffect::Rotate {
                at: coord,
                piece: piece.rotated(rotation),
            })
        }
        Move::Relocate(direction) => direction,
    };

    if piece.kind == PieceKind::Laser {
        return None;
    }

    let target = coord.step(direction);
    if !target.in_bounds() || is_no_entry_square(actor, target) {
        return None;
    }

    match board.piece_at(target) {
        None => Some(MoveEffect::Relocate {
            from: coord,
            to: target,
        }),
        Some(occupant)
            if piece.kind == PieceKind::Switch
                && matches!(occupant.kind, PieceKind::Deflector | PieceKind::Defender) =>
        {
            Some(MoveEffect::Swap {
                from: coord,
                to: target,
            })
        }
        Some(_) => None,
    }
}

pub fn apply_effect(board: &mut Board, effect: MoveEffect) {
    match effect {
        MoveEffect::Rotate { at, piece } => board.set(at, piece.into()),
        MoveEffect::Relocate { from, to } | MoveEffect::Swap { from, to } => board.swap(from, to),
    }
}

/// Validate and, when legal, apply `mv`. Returns whether the move was made.
pub fn try_move(state: &mut GameState, coord: Coord, mv: Move, actor: Player) -> bool {
    match validate_move(&state.board, coord, mv, actor) {
        Some(effect) => {
            apply_effect(&mut state.board, effect);
            true
        }
        None => false,
    }
}
