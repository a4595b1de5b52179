//! Alpha-beta engine over the laser heuristic.
//!
//! Options: `Depth` (1..=8), `MoveFilter` (`all`, `laser`, `quiet`) and
//! `PieceValue` (rescales every evaluation weight from the piece value).

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::{EngineError, EngineResult};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::MoveFilter;
use crate::search::board_scoring::{EvalWeights, LaserHeuristicScorer};
use crate::search::minimax::{search_with, SearchConfig};

const MAX_DEPTH: u8 = 8;

pub struct MinimaxEngine {
    config: SearchConfig,
    scorer: LaserHeuristicScorer,
}

impl MinimaxEngine {
    pub fn new(depth: u8) -> Self {
        Self {
            config: SearchConfig {
                depth,
                ..SearchConfig::default()
            },
            scorer: LaserHeuristicScorer::default(),
        }
    }

    pub fn with_config(config: SearchConfig, weights: EvalWeights) -> Self {
        Self {
            config,
            scorer: LaserHeuristicScorer::new(weights),
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn weights(&self) -> EvalWeights {
        self.scorer.weights
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default().depth)
    }
}

fn parse_move_filter(value: &str) -> Option<MoveFilter> {
    match value.trim().to_ascii_lowercase().as_str() {
        "all" | "alllegal" => Some(MoveFilter::AllLegal),
        "laser" | "laserchanging" => Some(MoveFilter::LaserChanging),
        "quiet" => Some(MoveFilter::Quiet),
        _ => None,
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Laser Minimax"
    }

    fn set_option(&mut self, name: &str, value: &str) -> EngineResult<()> {
        let invalid = || EngineError::InvalidOption {
            name: name.to_owned(),
            value: value.to_owned(),
        };

        match name.to_ascii_lowercase().as_str() {
            "depth" => {
                let depth: u8 = value.trim().parse().map_err(|_| invalid())?;
                if !(1..=MAX_DEPTH).contains(&depth) {
                    return Err(invalid());
                }
                self.config.depth = depth;
            }
            "movefilter" => {
                self.config.move_filter = parse_move_filter(value).ok_or_else(invalid)?;
            }
            "piecevalue" => {
                let piece_value: f64 = value.trim().parse().map_err(|_| invalid())?;
                if !piece_value.is_finite() || piece_value <= 0.0 {
                    return Err(invalid());
                }
                self.scorer.weights = EvalWeights::with_piece_value(piece_value);
            }
            _ => return Err(invalid()),
        }
        Ok(())
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> EngineResult<EngineOutput> {
        let config = SearchConfig {
            depth: params.depth.unwrap_or(self.config.depth),
            ..self.config
        };
        let result = search_with(game_state, game_state.turn(), &self.scorer, config);

        let mut out = EngineOutput {
            best_move: result.best,
            score: Some(result.value),
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "info depth {} score {} nodes {}",
            config.depth, result.value, result.nodes
        ));
        out.info_lines.push(format!(
            "info string minimax_engine move_filter {:?}",
            config.move_filter
        ));
        Ok(out)
    }
}
