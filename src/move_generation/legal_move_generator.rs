//! Legal move enumeration.
//!
//! Walks every square the player owns (row-major) and every move shape, keeping
//! the candidates the validator accepts. Optional filters split the legal set
//! by whether a move changes what either laser currently hits. Nothing here
//! mutates the game passed in.

use crate::game_state::game_state::GameState;
use crate::game_state::laser_types::{Coord, Move, Player};
use crate::move_generation::laser_simulator::trace_laser;
use crate::move_generation::move_validator::{apply_effect, validate_move};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeneratedMove {
    pub coord: Coord,
    pub mv: Move,
}

/// Which subset of legal moves a search should consider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MoveFilter {
    #[default]
    AllLegal,
    /// Only moves that alter either player's beam path or struck piece.
    LaserChanging,
    /// Only moves that leave both beams exactly as they are.
    Quiet,
}

pub fn generate_moves(state: &GameState, player: Player, filter: MoveFilter) -> Vec<GeneratedMove> {
    match filter {
        MoveFilter::AllLegal => generate_legal_moves(state, player),
        MoveFilter::LaserChanging => partition_by_laser_change(state, player).0,
        MoveFilter::Quiet => partition_by_laser_change(state, player).1,
    }
}

pub fn generate_legal_moves(state: &GameState, player: Player) -> Vec<GeneratedMove> {
    let board = state.board();
    let mut legal = Vec::with_capacity(64);
    for coord in board.occupied_by(player) {
        for mv in Move::ALL {
            if validate_move(board, coord, mv, player).is_some() {
                legal.push(GeneratedMove { coord, mv });
            }
        }
    }
    legal
}

/// Legal moves after which either beam takes a different path or strikes a
/// different piece. Empty once the game is decided.
pub fn generate_laser_changing_moves(state: &GameState, player: Player) -> Vec<GeneratedMove> {
    partition_by_laser_change(state, player).0
}

/// Legal moves that leave both beams untouched.
pub fn generate_quiet_moves(state: &GameState, player: Player) -> Vec<GeneratedMove> {
    partition_by_laser_change(state, player).1
}

fn partition_by_laser_change(
    state: &GameState,
    player: Player,
) -> (Vec<GeneratedMove>, Vec<GeneratedMove>) {
    let legal = generate_legal_moves(state, player);
    if state.is_terminal() {
        return (Vec::new(), legal);
    }

    let board = state.board();
    let baseline = Player::ALL.map(|p| trace_laser(board, p));

    legal.into_iter().partition(|candidate| {
        let Some(effect) = validate_move(board, candidate.coord, candidate.mv, player) else {
            return false;
        };
        let mut probe = board.clone();
        apply_effect(&mut probe, effect);
        Player::ALL
            .iter()
            .any(|p| trace_laser(&probe, *p) != baseline[p.index()])
    })
}
