//! Pluggable position evaluation.
//!
//! Search stays independent of the heuristic by delegating leaf scoring to
//! `BoardScorer`. Scores are First-positive: higher is better for First no
//! matter which perspective is asked for. The perspective only changes which
//! king-danger adjustments apply.

use std::collections::HashSet;

use crate::game_state::game_state::GameState;
use crate::game_state::laser_types::{Coord, Player};
use crate::move_generation::laser_simulator::preview_laser;

/// Score of a decided game, signed by the winner.
pub const WIN_SCORE: f64 = f64::INFINITY;

pub trait BoardScorer: Send + Sync {
    fn score(&self, game_state: &GameState, perspective: Player) -> f64;
}

/// Tunable weights for `LaserHeuristicScorer`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalWeights {
    /// Value of one piece of material.
    pub piece_value: f64,
    /// Bonus or penalty for a beam resting on a king.
    pub king_value: f64,
    /// Fraction of a piece's value granted to things that are only threatened.
    pub future_sight: f64,
}

impl EvalWeights {
    /// Scale everything from a new piece value, keeping king = 15 pieces.
    pub fn with_piece_value(piece_value: f64) -> Self {
        Self {
            piece_value,
            king_value: 15.0 * piece_value,
            ..Self::default()
        }
    }
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            piece_value: 5.0,
            king_value: 75.0,
            future_sight: 0.6,
        }
    }
}

/// Material difference only.
#[derive(Debug, Clone, Copy)]
pub struct MaterialScorer {
    pub piece_value: f64,
}

impl Default for MaterialScorer {
    fn default() -> Self {
        Self {
            piece_value: EvalWeights::default().piece_value,
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState, _perspective: Player) -> f64 {
        if let Some(winner) = game_state.winner() {
            return winner.sign() * WIN_SCORE;
        }
        self.piece_value * material_balance_first_minus_second(game_state)
    }
}

/// Material, beam engagement and king danger, measured from both lasers'
/// current (uncommitted) paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct LaserHeuristicScorer {
    pub weights: EvalWeights,
}

impl LaserHeuristicScorer {
    pub const fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }
}

impl BoardScorer for LaserHeuristicScorer {
    fn score(&self, game_state: &GameState, perspective: Player) -> f64 {
        if let Some(winner) = game_state.winner() {
            return winner.sign() * WIN_SCORE;
        }
        let w = &self.weights;
        let board = game_state.board();

        let mut score = w.piece_value * material_balance_first_minus_second(game_state);

        let first_trace = preview_laser(game_state, Player::First);
        let second_trace = preview_laser(game_state, Player::Second);

        let lit: HashSet<Coord> = first_trace
            .path
            .iter()
            .chain(second_trace.path.iter())
            .copied()
            .collect();
        let engaged: f64 = lit
            .iter()
            .filter_map(|c| board.get(*c).owner())
            .map(Player::sign)
            .sum();
        score += w.piece_value * w.future_sight * engaged;

        let (Some(first_king), Some(second_king)) = (
            board.find_king(Player::First),
            board.find_king(Player::Second),
        ) else {
            return score;
        };
        let first_end = first_trace.end();
        let second_end = second_trace.end();

        let (own_king, enemy_king, enemy_end) = match perspective {
            Player::First => (first_king, second_king, first_end),
            Player::Second => (second_king, first_king, second_end),
        };

        if own_king == first_end || own_king == second_end {
            // A beam rests on our king right now.
            score -= perspective.sign() * w.king_value;
        } else if enemy_king == enemy_end {
            score += perspective.sign() * w.king_value * w.future_sight;
        } else {
            score += beam_king_pull(first_end, first_king, second_king)
                + beam_king_pull(second_end, first_king, second_king);
        }

        score
    }
}

fn material_balance_first_minus_second(game_state: &GameState) -> f64 {
    let board = game_state.board();
    board.count_pieces(Player::First) as f64 - board.count_pieces(Player::Second) as f64
}

/// `1 / (d² + 1)`: 1 on the square itself, falling off with distance.
#[inline]
fn reciprocal_distance(a: Coord, b: Coord) -> f64 {
    1.0 / f64::from(a.distance_squared(b) + 1)
}

/// How much closer a beam ends to Second's king than to First's.
#[inline]
fn beam_king_pull(beam_end: Coord, first_king: Coord, second_king: Coord) -> f64 {
    reciprocal_distance(beam_end, second_king) - reciprocal_distance(beam_end, first_king)
}
