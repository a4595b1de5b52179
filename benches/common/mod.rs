use laser_chess::game_state::game_state::{Board, GameState};
use laser_chess::game_state::laser_types::{Coord, Piece, PieceKind, Player};

use PieceKind::{Defender, Deflector, King, Switch};
use Player::{First, Second};

/// The "Ace" opening setup: seven deflectors, two switches and two
/// defenders a side, lasers vertical.
const ACE: &[(i8, i8, Player, PieceKind, u8)] = &[
    (0, 4, Second, Defender, 3),
    (0, 5, Second, King, 0),
    (0, 6, Second, Defender, 3),
    (0, 7, Second, Deflector, 3),
    (1, 2, Second, Deflector, 2),
    (2, 3, First, Deflector, 1),
    (3, 0, Second, Deflector, 0),
    (3, 2, First, Deflector, 2),
    (3, 4, Second, Switch, 0),
    (3, 5, Second, Switch, 1),
    (3, 7, Second, Deflector, 3),
    (3, 9, First, Deflector, 1),
    (4, 0, Second, Deflector, 3),
    (4, 2, First, Deflector, 1),
    (4, 4, First, Switch, 1),
    (4, 5, First, Switch, 0),
    (4, 7, Second, Deflector, 0),
    (4, 9, First, Deflector, 2),
    (5, 6, Second, Deflector, 3),
    (6, 7, First, Deflector, 0),
    (7, 2, First, Deflector, 1),
    (7, 3, First, Defender, 1),
    (7, 4, First, King, 0),
    (7, 5, First, Defender, 1),
];

pub fn ace_game() -> GameState {
    let mut board = Board::with_lasers();
    for &(row, col, owner, kind, orientation) in ACE {
        board.set(Coord::new(row, col), Piece::new(owner, kind, orientation).into());
    }
    GameState::new_game(board, First).expect("ace layout is valid")
}
