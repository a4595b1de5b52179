//! Fixed rule data for the laser board.
//!
//! Home squares, firing directions, mirror reflection tables, defender shield
//! faces and the per-player no-entry squares. All of it is compile-time data
//! and is only ever read.

use crate::game_state::laser_types::{Coord, Direction, Player, COLUMNS, ROWS};

/// Laser orientation pointing along the home row.
pub const LASER_HORIZONTAL: u8 = 0;
/// Laser orientation pointing along the home column.
pub const LASER_VERTICAL: u8 = 1;

const N: Option<Direction> = Some(Direction::N);
const E: Option<Direction> = Some(Direction::E);
const S: Option<Direction> = Some(Direction::S);
const W: Option<Direction> = Some(Direction::W);

/// Outgoing direction for `[orientation][incoming cardinal index]`.
/// `None` means the beam struck the back of the mirror.
pub const DEFLECTOR_REFLECTIONS: [[Option<Direction>; 4]; 4] = [
    // incoming:  N     E     S     W
    /* NE */ [None, None, E, N],
    /* NW */ [None, N, W, None],
    /* SW */ [W, S, None, None],
    /* SE */ [E, None, None, S],
];

/// Outgoing direction for `[orientation][incoming cardinal index]`.
pub const SWITCH_REFLECTIONS: [[Direction; 4]; 2] = [
    /* NE-SW */ [Direction::W, Direction::S, Direction::E, Direction::N],
    /* NW-SE */ [Direction::E, Direction::N, Direction::W, Direction::S],
];

/// Direction each defender orientation's shield faces.
pub const DEFENDER_SHIELD_FACING: [Direction; 4] =
    [Direction::E, Direction::N, Direction::W, Direction::S];

/// Fixed square of `player`'s laser.
#[inline]
pub const fn laser_home(player: Player) -> Coord {
    match player {
        Player::First => Coord::new(ROWS as i8 - 1, COLUMNS as i8 - 1),
        Player::Second => Coord::new(0, 0),
    }
}

/// Initial beam direction for `player`'s laser in `orientation`.
#[inline]
pub fn laser_direction(player: Player, orientation: u8) -> Direction {
    match (player, orientation == LASER_HORIZONTAL) {
        (Player::First, true) => Direction::W,
        (Player::First, false) => Direction::N,
        (Player::Second, true) => Direction::E,
        (Player::Second, false) => Direction::S,
    }
}

#[inline]
pub fn deflector_reflection(orientation: u8, incoming: Direction) -> Option<Direction> {
    DEFLECTOR_REFLECTIONS[usize::from(orientation)][incoming.cardinal_index()]
}

#[inline]
pub fn switch_reflection(orientation: u8, incoming: Direction) -> Direction {
    SWITCH_REFLECTIONS[usize::from(orientation)][incoming.cardinal_index()]
}

/// A beam travelling into the shield is blocked without loss.
#[inline]
pub fn defender_blocks(orientation: u8, incoming: Direction) -> bool {
    DEFENDER_SHIELD_FACING[usize::from(orientation)] == incoming.opposite()
}

/// Squares `player` may never move a piece onto: the far column on the
/// opponent's laser side plus the two edge squares beside the own-side column.
#[inline]
pub fn is_no_entry_square(player: Player, coord: Coord) -> bool {
    let last_row = ROWS as i8 - 1;
    let (barred_col, flank_col) = match player {
        Player::First => (0, COLUMNS as i8 - 2),
        Player::Second => (COLUMNS as i8 - 1, 1),
    };
    coord.col == barred_col
        || (coord.col == flank_col && (coord.row == 0 || coord.row == last_row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn laser_homes_sit_in_opposite_corners() {
        assert_eq!(laser_home(Player::Second), Coord::new(0, 0));
        assert_eq!(laser_home(Player::First), Coord::new(7, 9));
    }

    #[test]
    fn lasers_fire_inwards() {
        assert_eq!(laser_direction(Player::Second, LASER_HORIZONTAL), Direction::E);
        assert_eq!(laser_direction(Player::Second, LASER_VERTICAL), Direction::S);
        assert_eq!(laser_direction(Player::First, LASER_HORIZONTAL), Direction::W);
        assert_eq!(laser_direction(Player::First, LASER_VERTICAL), Direction::N);
    }

    #[test]
    fn each_deflector_reflects_exactly_two_directions() {
        for orientation in 0..4u8 {
            let reflected = Direction::CARDINALS
                .iter()
                .filter(|d| deflector_reflection(orientation, **d).is_some())
                .count();
            assert_eq!(reflected, 2, "orientation {orientation}");
        }
    }

    #[test]
    fn switch_reflections_turn_ninety_degrees() {
        for orientation in 0..2u8 {
            for incoming in Direction::CARDINALS {
                let out = switch_reflection(orientation, incoming);
                assert_ne!(out, incoming);
                assert_ne!(out, incoming.opposite());
            }
        }
    }

    #[test]
    fn defender_blocks_only_on_shield_face() {
        // Shield facing east is hit by a beam travelling west.
        assert!(defender_blocks(0, Direction::W));
        assert!(!defender_blocks(0, Direction::E));
        assert!(!defender_blocks(0, Direction::N));
        // Shield facing north is hit by a beam travelling south.
        assert!(defender_blocks(1, Direction::S));
        assert!(!defender_blocks(1, Direction::N));
    }

    #[test]
    fn no_entry_squares_mirror_between_players() {
        for row in 0..ROWS as i8 {
            assert!(is_no_entry_square(Player::First, Coord::new(row, 0)));
            assert!(is_no_entry_square(Player::Second, Coord::new(row, 9)));
            assert!(!is_no_entry_square(Player::First, Coord::new(row, 9)));
            assert!(!is_no_entry_square(Player::Second, Coord::new(row, 0)));
        }
        assert!(is_no_entry_square(Player::First, Coord::new(0, 8)));
        assert!(is_no_entry_square(Player::First, Coord::new(7, 8)));
        assert!(!is_no_entry_square(Player::First, Coord::new(3, 8)));
        assert!(is_no_entry_square(Player::Second, Coord::new(0, 1)));
        assert!(is_no_entry_square(Player::Second, Coord::new(7, 1)));
        assert!(!is_no_entry_square(Player::Second, Coord::new(4, 1)));
    }
}
