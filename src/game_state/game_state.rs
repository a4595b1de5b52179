//! Core board and game state representation.
//!
//! `Board` is the fixed 8x10 grid of cells. `GameState` wraps a validated
//! board together with the side to move and the (absorbing) winner flag.
//! Front-ends talk to the engine through the convenience methods here; the
//! rule logic itself lives in `move_generation` and `search`.

use std::fmt;

use tracing::debug;

use crate::errors::{LayoutError, LayoutResult};
use crate::game_state::laser_rules::{laser_home, LASER_VERTICAL};
use crate::game_state::laser_types::*;
use crate::move_generation::laser_simulator::{preview_laser, LaserTrace};
use crate::move_generation::turn_engine::{perform_turn, TurnOutcome};
use crate::search::minimax::{search, SearchResult};
use crate::utils::render_game_state::render_game_state;

/// Fixed-size grid of cells, indexed by `Coord`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLUMNS]; ROWS],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: [[Cell::Empty; COLUMNS]; ROWS],
        }
    }
}

impl Board {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Empty board except for both lasers on their home squares, pointing
    /// vertically into the board.
    pub fn with_lasers() -> Self {
        let mut board = Self::default();
        for player in Player::ALL {
            board.set(
                laser_home(player),
                Piece::new(player, PieceKind::Laser, LASER_VERTICAL).into(),
            );
        }
        board
    }

    /// Build a board from row-major configuration data, checking only its shape.
    pub fn from_rows(rows: &[Vec<Cell>]) -> LayoutResult<Self> {
        if rows.len() != ROWS {
            return Err(LayoutError::Shape {
                rows: rows.len(),
                columns: rows.first().map_or(0, Vec::len),
            });
        }
        let mut board = Self::default();
        for (r, row) in rows.iter().enumerate() {
            if row.len() != COLUMNS {
                return Err(LayoutError::Shape {
                    rows: rows.len(),
                    columns: row.len(),
                });
            }
            board.cells[r].copy_from_slice(row);
        }
        Ok(board)
    }

    #[inline]
    fn index(coord: Coord) -> (usize, usize) {
        assert!(coord.in_bounds(), "coordinate {coord} is off the board");
        (coord.row as usize, coord.col as usize)
    }

    /// Panics if `coord` is off the board.
    #[inline]
    pub fn get(&self, coord: Coord) -> Cell {
        let (r, c) = Self::index(coord);
        self.cells[r][c]
    }

    #[inline]
    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        self.get(coord).piece()
    }

    /// Panics if `coord` is off the board.
    #[inline]
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        let (r, c) = Self::index(coord);
        self.cells[r][c] = cell;
    }

    #[inline]
    pub fn clear(&mut self, coord: Coord) {
        self.set(coord, Cell::Empty);
    }

    #[inline]
    pub fn swap(&mut self, a: Coord, b: Coord) {
        let cell_a = self.get(a);
        self.set(a, self.get(b));
        self.set(b, cell_a);
    }

    pub fn rows(&self) -> &[[Cell; COLUMNS]; ROWS] {
        &self.cells
    }

    /// Squares holding `player`'s pieces, row-major.
    pub fn occupied_by(&self, player: Player) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(move |c| self.get(*c).owner() == Some(player))
    }

    pub fn count_pieces(&self, player: Player) -> usize {
        self.occupied_by(player).count()
    }

    pub fn find_king(&self, player: Player) -> Option<Coord> {
        Coord::all().find(|c| self.piece_at(*c) == Some(Piece::king(player)))
    }

    /// Check the layout invariants required to start a game.
    pub fn validate(&self) -> LayoutResult<()> {
        let mut kings = [0usize; 2];

        for coord in Coord::all() {
            let Some(piece) = self.piece_at(coord) else {
                continue;
            };
            if !piece.has_valid_orientation() {
                return Err(LayoutError::InvalidOrientation {
                    coord,
                    kind: piece.kind,
                    orientation: piece.orientation,
                });
            }
            match piece.kind {
                PieceKind::King => kings[piece.owner.index()] += 1,
                PieceKind::Laser if coord != laser_home(piece.owner) => {
                    return Err(LayoutError::StrayLaser { coord });
                }
                _ => {}
            }
        }

        for player in Player::ALL {
            let home = laser_home(player);
            match self.piece_at(home) {
                Some(Piece {
                    owner,
                    kind: PieceKind::Laser,
                    ..
                }) if owner == player => {}
                _ => {
                    return Err(LayoutError::MissingLaser {
                        player,
                        coord: home,
                    })
                }
            }
            let count = kings[player.index()];
            if count != 1 {
                return Err(LayoutError::KingCount { player, count });
            }
        }

        Ok(())
    }
}

/// Whether the game is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Won(Player),
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "No winner yet"),
            GameStatus::Won(Player::First) => write!(f, "First player wins"),
            GameStatus::Won(Player::Second) => write!(f, "Second player wins"),
        }
    }
}

/// A running game. Once `winner` is set it never changes again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) turn: Player,
    pub(crate) winner: Option<Player>,
}

impl GameState {
    /// Start a game from externally supplied layout data.
    pub fn new_game(layout: Board, starting_player: Player) -> LayoutResult<Self> {
        if let Err(err) = layout.validate() {
            debug!(%err, "rejected layout");
            return Err(err);
        }
        Ok(Self {
            board: layout,
            turn: starting_player,
            winner: None,
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Player {
        self.turn
    }

    #[inline]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(player) => GameStatus::Won(player),
            None => GameStatus::Ongoing,
        }
    }

    /// Move (or rotate) the piece on `coord`, then fire. `actor` overrides the
    /// side to move when supplied.
    pub fn perform_turn(&mut self, coord: Coord, mv: Move, actor: Option<Player>) -> TurnOutcome {
        perform_turn(self, coord, mv, actor)
    }

    /// Trace `player`'s beam without touching the game.
    pub fn preview_path(&self, player: Player) -> LaserTrace {
        preview_laser(self, player)
    }

    /// Suggest a move for `player` with the default heuristic weights.
    pub fn search(&self, depth: u8, player: Player) -> SearchResult {
        search(self, depth, player)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_game_state(self))
    }
}
