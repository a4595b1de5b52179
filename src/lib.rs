//! Crate root module declarations for the laser chess engine.
//!
//! Exposes the board model, the rules that move pieces and fire lasers, the
//! evaluator and search, the engine surface and a few utilities, so
//! front-ends, tests and benches can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod game_state;
    pub mod laser_rules;
    pub mod laser_types;
}

pub mod move_generation {
    pub mod laser_simulator;
    pub mod legal_move_generator;
    pub mod move_validator;
    pub mod perft;
    pub mod turn_engine;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod engine_match_harness;
    pub mod render_game_state;
}
