//! Uniform random-move engine.
//!
//! Used as a sparring partner in engine matches and for diagnostics.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::{EngineError, EngineResult};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_legal_moves;

pub struct RandomEngine {
    seed: Option<u64>,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            seed: None,
            rng: StdRng::seed_from_u64(rand::random()),
        }
    }

    /// Deterministic engine; `new_game` rewinds it to the same sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Laser Random"
    }

    fn new_game(&mut self) {
        if let Some(seed) = self.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
    }

    fn set_option(&mut self, name: &str, value: &str) -> EngineResult<()> {
        let invalid = || EngineError::InvalidOption {
            name: name.to_owned(),
            value: value.to_owned(),
        };
        if !name.eq_ignore_ascii_case("Seed") {
            return Err(invalid());
        }
        let seed: u64 = value.trim().parse().map_err(|_| invalid())?;
        *self = Self::with_seed(seed);
        Ok(())
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> EngineResult<EngineOutput> {
        let legal_moves = generate_legal_moves(game_state, game_state.turn());

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));
        if let Some(depth) = params.depth {
            out.info_lines
                .push(format!("info string random_engine requested_depth {depth}"));
        }

        out.best_move = legal_moves.as_slice().choose(&mut self.rng).copied();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::tests::game_with_corner_kings;

    #[test]
    fn random_engine_picks_a_legal_move() {
        let game = game_with_corner_kings();
        let legal = generate_legal_moves(&game, game.turn());
        let mut engine = RandomEngine::new();
        for _ in 0..20 {
            let out = engine
                .choose_move(&game, &GoParams::default())
                .expect("random engine never fails");
            let picked = out.best_move.expect("moves are available");
            assert!(legal.contains(&picked));
        }
    }

    #[test]
    fn seeded_engine_repeats_after_new_game() {
        let game = game_with_corner_kings();
        let mut engine = RandomEngine::with_seed(7);
        let first: Vec<_> = (0..8)
            .map(|_| engine.choose_move(&game, &GoParams::default()).unwrap().best_move)
            .collect();
        engine.new_game();
        let second: Vec<_> = (0..8)
            .map(|_| engine.choose_move(&game, &GoParams::default()).unwrap().best_move)
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn seed_option_must_be_numeric() {
        let mut engine = RandomEngine::new();
        assert!(engine.set_option("Seed", "42").is_ok());
        assert!(matches!(
            engine.set_option("Seed", "forty-two"),
            Err(EngineError::InvalidOption { .. })
        ));
        assert!(engine.set_option("Depth", "3").is_err());
    }
}
