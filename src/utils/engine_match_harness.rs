//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other from a caller-supplied
//! layout, with an optional seeded random opening prefix and a ply cap.

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Instant;
use tracing::{debug, info};

use crate::engines::engine_trait::{Engine, GoParams};
use crate::errors::{EngineError, EngineResult};
use crate::game_state::game_state::GameState;
use crate::game_state::laser_types::Player;
use crate::move_generation::legal_move_generator::{generate_legal_moves, GeneratedMove};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    FirstWin,
    SecondWin,
    DrawMaxPlies,
}

impl MatchOutcome {
    fn from_winner(winner: Option<Player>) -> Self {
        match winner {
            Some(Player::First) => Self::FirstWin,
            Some(Player::Second) => Self::SecondWin,
            None => Self::DrawMaxPlies,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, side: Player },
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_min_plies: 0,
            opening_max_plies: 4,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub opening_moves: Vec<GeneratedMove>,
    pub played_moves: Vec<GeneratedMove>,
    pub first_move_count: u32,
    pub second_move_count: u32,
    pub first_total_time_ns: u128,
    pub second_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub overall_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3} overall_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
            self.overall_avg_move_time_ms
        )
    }
}

/// Play one seeded match from `start_state`.
///
/// `engine_first` moves for First, `engine_second` for Second. The side to
/// move in `start_state` (after any random opening) moves first.
pub fn play_engine_match(
    start_state: GameState,
    engine_first: &mut dyn Engine,
    engine_second: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> EngineResult<MatchResult> {
    engine_first.new_game();
    engine_second.new_game();

    let (mut state, opening_moves) = apply_seeded_random_opening(
        start_state,
        seed,
        config.opening_min_plies,
        config.opening_max_plies,
    );

    let mut played_moves = Vec::new();
    let mut first_move_count = 0u32;
    let mut second_move_count = 0u32;
    let mut first_total_time_ns = 0u128;
    let mut second_total_time_ns = 0u128;

    for _ in 0..config.max_plies {
        if state.is_terminal() {
            break;
        }

        let mover = state.turn();
        let started = Instant::now();
        let out = match mover {
            Player::First => engine_first.choose_move(&state, &config.go_params)?,
            Player::Second => engine_second.choose_move(&state, &config.go_params)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Player::First => {
                first_move_count = first_move_count.saturating_add(1);
                first_total_time_ns = first_total_time_ns.saturating_add(elapsed_ns);
            }
            Player::Second => {
                second_move_count = second_move_count.saturating_add(1);
                second_total_time_ns = second_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = out.best_move.ok_or(EngineError::NoLegalMoves)?;
        let outcome = state.perform_turn(chosen.coord, chosen.mv, Some(mover));
        if !outcome.moved {
            return Err(EngineError::IllegalMove {
                coord: chosen.coord,
                mv: chosen.mv,
            });
        }
        played_moves.push(chosen);
    }

    let outcome = MatchOutcome::from_winner(state.winner());
    info!(
        ?outcome,
        seed,
        plies = played_moves.len(),
        first = engine_first.name(),
        second = engine_second.name(),
        "match finished"
    );

    Ok(MatchResult {
        outcome,
        final_state: state,
        opening_moves,
        played_moves,
        first_move_count,
        second_move_count,
        first_total_time_ns,
        second_total_time_ns,
    })
}

/// Play a series of matches from `start_state` and aggregate statistics.
///
/// Which engine takes First is drawn per game from `base_seed`.
pub fn play_engine_match_series<F1, F2>(
    start_state: &GameState,
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> EngineResult<MatchSeriesStats>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut side_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_first = side_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        debug!(game = i + 1, seed, player1_is_first, "series game starting");

        let mut player1 = player1_factory();
        let mut player2 = player2_factory();
        let result = if player1_is_first {
            play_engine_match(
                start_state.clone(),
                player1.as_mut(),
                player2.as_mut(),
                seed,
                &config.per_game,
            )?
        } else {
            play_engine_match(
                start_state.clone(),
                player2.as_mut(),
                player1.as_mut(),
                seed,
                &config.per_game,
            )?
        };

        let (p1_moves, p2_moves, p1_ns, p2_ns) = if player1_is_first {
            (
                result.first_move_count,
                result.second_move_count,
                result.first_total_time_ns,
                result.second_total_time_ns,
            )
        } else {
            (
                result.second_move_count,
                result.first_move_count,
                result.second_total_time_ns,
                result.first_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let winning_side = match result.outcome {
            MatchOutcome::FirstWin => Some(Player::First),
            MatchOutcome::SecondWin => Some(Player::Second),
            MatchOutcome::DrawMaxPlies => None,
        };
        let mapped = match winning_side {
            Some(side) => {
                let player = if (side == Player::First) == player1_is_first {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWin { player, side }
            }
            None => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
        };
        stats.outcomes.push(mapped);
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    let total_ns = stats
        .player1_total_time_ns
        .saturating_add(stats.player2_total_time_ns);
    let total_moves = stats.player1_moves.saturating_add(stats.player2_moves);
    stats.overall_avg_move_time_ms = avg_ns_per_move_ms(total_ns, total_moves);

    info!(report = %stats.report(), "series finished");
    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

/// Play between `min_plies` and `max_plies` uniformly random legal turns.
/// Stops early if a random shot decides the game.
fn apply_seeded_random_opening(
    mut state: GameState,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> (GameState, Vec<GeneratedMove>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut opening_moves = Vec::new();

    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    for _ in 0..target_plies {
        if state.is_terminal() {
            break;
        }
        let legal_moves = generate_legal_moves(&state, state.turn());
        if legal_moves.is_empty() {
            break;
        }
        let chosen = legal_moves[rng.random_range(0..legal_moves.len())];
        state.perform_turn(chosen.coord, chosen.mv, None);
        opening_moves.push(chosen);
    }

    (state, opening_moves)
}
