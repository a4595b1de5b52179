//! Perft: walk the turn tree to a fixed depth, counting leaves, captures and king hits.

use crate::game_state::game_state::GameState;
use crate::game_state::laser_types::PieceKind;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::move_generation::turn_engine::perform_turn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub king_hits: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.king_hits += rhs.king_hits;
    }
}

/// Count the turn sequences of length `depth` from `game_state`, with the
/// captures and king hits made on the final turn. Decided games are leaves.
pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 || game_state.is_terminal() {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mover = game_state.turn();
    let mut total = PerftCounts::default();

    for candidate in generate_legal_moves(game_state, mover) {
        let mut child = game_state.clone();
        let outcome = perform_turn(&mut child, candidate.coord, candidate.mv, Some(mover));

        if depth == 1 {
            total.nodes += 1;
            match outcome.captured {
                Some(piece) if piece.kind == PieceKind::King => total.king_hits += 1,
                Some(_) => total.captures += 1,
                None => {}
            }
            continue;
        }

        total.merge(perft(&child, depth - 1));
    }

    total
}
