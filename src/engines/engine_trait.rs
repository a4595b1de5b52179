//! Engine abstraction used by front-ends and the match harness.
//!
//! Every AI opponent sits behind one trait so callers can pick a strategy at
//! runtime and drive both sides of a game the same way.

use crate::errors::{EngineError, EngineResult};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::GeneratedMove;

#[derive(Debug, Clone, Copy, Default)]
pub struct GoParams {
    /// Overrides the engine's configured search depth for one call.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<GeneratedMove>,
    /// First-positive evaluation behind `best_move`, when the engine has one.
    pub score: Option<f64>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, name: &str, value: &str) -> EngineResult<()> {
        Err(EngineError::InvalidOption {
            name: name.to_owned(),
            value: value.to_owned(),
        })
    }

    /// Pick a move for the side to move in `game_state`. `best_move` is
    /// `None` only when that side has nothing to play.
    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> EngineResult<EngineOutput>;
}
