//! Fixed-depth minimax with alpha-beta pruning.
//!
//! Every branch owns a clone of the game, so the caller's state is never
//! touched. Scores are First-positive: nodes where First moves maximize and
//! nodes where Second moves minimize. Leaves are always scored from the
//! root player's perspective. There is no move ordering or transposition
//! table; the first of several equally good moves is the one reported.

use tracing::debug;

use crate::game_state::game_state::GameState;
use crate::game_state::laser_types::Player;
use crate::move_generation::legal_move_generator::{generate_moves, GeneratedMove, MoveFilter};
use crate::move_generation::turn_engine::perform_turn;
use crate::search::board_scoring::{BoardScorer, LaserHeuristicScorer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    pub move_filter: MoveFilter,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            move_filter: MoveFilter::AllLegal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub value: f64,
    /// `None` when the root is a leaf: depth 0, a decided game or no moves.
    pub best: Option<GeneratedMove>,
    pub nodes: u64,
}

/// Search with the default heuristic and filter.
pub fn search(game_state: &GameState, depth: u8, player: Player) -> SearchResult {
    search_with(
        game_state,
        player,
        &LaserHeuristicScorer::default(),
        SearchConfig {
            depth,
            ..SearchConfig::default()
        },
    )
}

pub fn search_with<S: BoardScorer + ?Sized>(
    game_state: &GameState,
    player: Player,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let mut ctx = SearchContext {
        scorer,
        root_player: player,
        move_filter: config.move_filter,
        nodes: 0,
    };
    let (value, best) = ctx.alpha_beta(
        game_state,
        config.depth,
        player,
        f64::NEG_INFINITY,
        f64::INFINITY,
    );

    debug!(
        depth = config.depth,
        ?player,
        nodes = ctx.nodes,
        value,
        best = ?best,
        "search complete"
    );

    SearchResult {
        value,
        best,
        nodes: ctx.nodes,
    }
}

struct SearchContext<'a, S: ?Sized> {
    scorer: &'a S,
    root_player: Player,
    move_filter: MoveFilter,
    nodes: u64,
}

impl<S: BoardScorer + ?Sized> SearchContext<'_, S> {
    fn alpha_beta(
        &mut self,
        game_state: &GameState,
        depth: u8,
        to_move: Player,
        mut alpha: f64,
        mut beta: f64,
    ) -> (f64, Option<GeneratedMove>) {
        self.nodes += 1;

        if depth == 0 || game_state.is_terminal() {
            return (self.scorer.score(game_state, self.root_player), None);
        }

        let moves = generate_moves(game_state, to_move, self.move_filter);
        if moves.is_empty() {
            return (self.scorer.score(game_state, self.root_player), None);
        }

        let maximizing = to_move == Player::First;
        let mut best: Option<(f64, GeneratedMove)> = None;

        for candidate in moves {
            let mut child = game_state.clone();
            perform_turn(&mut child, candidate.coord, candidate.mv, Some(to_move));

            let (value, _) =
                self.alpha_beta(&child, depth - 1, to_move.opponent(), alpha, beta);

            let improves = match best {
                None => true,
                Some((best_value, _)) if maximizing => value > best_value,
                Some((best_value, _)) => value < best_value,
            };
            if improves {
                best = Some((value, candidate));
            }

            if maximizing {
                alpha = alpha.max(value);
            } else {
                beta = beta.min(value);
            }
            if beta <= alpha {
                break;
            }
        }

        match best {
            Some((value, mv)) => (value, Some(mv)),
            None => (self.scorer.score(game_state, self.root_player), None),
        }
    }
}
