//! Errors used throughout the laser engine.
//!
//! Layout errors are raised once, when a game is built from an external
//! configuration. Engine errors come from the AI surface. Illegal moves are
//! never errors: validators and the turn engine report them as plain
//! `bool`/`Option` results so search can probe candidates cheaply.

use thiserror::Error;

use crate::game_state::laser_types::{Coord, Move, PieceKind, Player};

pub type LayoutResult<T> = Result<T, LayoutError>;
pub type EngineResult<T> = Result<T, EngineError>;

/// Reasons an initial layout is rejected by `GameState::new_game`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The supplied grid is not 8 rows of 10 cells.
    #[error("layout must be 8x10, got {rows} rows with {columns} columns in the first malformed row")]
    Shape { rows: usize, columns: usize },

    /// A laser is missing from (or misoriented on) its fixed home square.
    #[error("{player:?} laser must sit on its home square {coord}")]
    MissingLaser { player: Player, coord: Coord },

    /// A laser appears somewhere other than its owner's home square.
    #[error("laser found away from its home square at {coord}")]
    StrayLaser { coord: Coord },

    /// A player does not have exactly one king.
    #[error("{player:?} must have exactly one king, found {count}")]
    KingCount { player: Player, count: usize },

    /// A piece carries an orientation its kind does not have.
    #[error("{kind:?} at {coord} has invalid orientation {orientation}")]
    InvalidOrientation {
        coord: Coord,
        kind: PieceKind,
        orientation: u8,
    },
}

/// Failures reported by `Engine` implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("no legal moves are available")]
    NoLegalMoves,

    #[error("engine produced an illegal move {mv} at {coord}")]
    IllegalMove { coord: Coord, mv: Move },

    #[error("invalid value '{value}' for option '{name}'")]
    InvalidOption { name: String, value: String },
}
