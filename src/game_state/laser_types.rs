//! Core value types for the laser board: players, pieces, coordinates and moves.
//! Pieces are explicit `{owner, kind, orientation}` records; nothing here is packed.

/// Board height.
pub const ROWS: usize = 8;
/// Board width.
pub const COLUMNS: usize = 10;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    First,
    Second,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::First, Player::Second];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }

    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Sign of this player in First-positive scores.
    #[inline]
    pub const fn sign(self) -> f64 {
        match self {
            Player::First => 1.0,
            Player::Second => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Laser,
    Deflector,
    Switch,
    Defender,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 5] = [
        PieceKind::Laser,
        PieceKind::Deflector,
        PieceKind::Switch,
        PieceKind::Defender,
        PieceKind::King,
    ];

    /// Number of distinct orientations a piece of this kind can take.
    #[inline]
    pub const fn orientation_count(self) -> u8 {
        match self {
            PieceKind::Laser => 2,
            PieceKind::Deflector => 4,
            PieceKind::Switch => 2,
            PieceKind::Defender => 4,
            PieceKind::King => 1,
        }
    }
}

/// A single piece. `orientation` is always below `kind.orientation_count()`.
///
/// Orientation meanings:
/// - Laser: 0 horizontal, 1 vertical.
/// - Deflector: mirror facing 0 NE, 1 NW, 2 SW, 3 SE.
/// - Switch: 0 NE-SW diagonal, 1 NW-SE diagonal.
/// - Defender: shield facing 0 E, 1 N, 2 W, 3 S.
/// - King: always 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub owner: Player,
    pub kind: PieceKind,
    pub orientation: u8,
}

impl Piece {
    /// Panics if `orientation` is out of range for `kind`.
    #[inline]
    pub fn new(owner: Player, kind: PieceKind, orientation: u8) -> Self {
        assert!(
            orientation < kind.orientation_count(),
            "orientation {orientation} is invalid for {kind:?}"
        );
        Self {
            owner,
            kind,
            orientation,
        }
    }

    #[inline]
    pub fn king(owner: Player) -> Self {
        Self::new(owner, PieceKind::King, 0)
    }

    #[inline]
    pub fn has_valid_orientation(&self) -> bool {
        self.orientation < self.kind.orientation_count()
    }

    /// Same piece turned by `rotation`, wrapping modulo the orientation count.
    #[inline]
    pub fn rotated(self, rotation: Rotation) -> Self {
        let count = i16::from(self.kind.orientation_count());
        let next = (i16::from(self.orientation) + rotation.delta()).rem_euclid(count);
        Self {
            orientation: next as u8,
            ..self
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Cell {
    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    pub fn owner(self) -> Option<Player> {
        self.piece().map(|p| p.owner)
    }
}

impl From<Piece> for Cell {
    fn from(piece: Piece) -> Self {
        Cell::Occupied(piece)
    }
}

/// `(row, column)` with row 0 at the top (Second's laser side).
///
/// Signed so that stepping off the board is representable; use
/// [`Coord::in_bounds`] before indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.row >= 0 && (self.row as usize) < ROWS && self.col >= 0 && (self.col as usize) < COLUMNS
    }

    #[inline]
    pub const fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.offset();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Row-major iteration over every square.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..ROWS as i8).flat_map(|row| (0..COLUMNS as i8).map(move |col| Coord::new(row, col)))
    }

    /// Squared euclidean distance.
    #[inline]
    pub fn distance_squared(self, other: Coord) -> i32 {
        let dr = i32::from(self.row) - i32::from(other.row);
        let dc = i32::from(self.col) - i32::from(other.col);
        dr * dr + dc * dc
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Unit step on the grid. Beams only ever travel in the four cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    pub const CARDINALS: [Direction; 4] = [Direction::N, Direction::E, Direction::S, Direction::W];

    /// `(d_row, d_col)`; north is towards row 0.
    #[inline]
    pub const fn offset(self) -> (i8, i8) {
        match self {
            Direction::N => (-1, 0),
            Direction::NE => (-1, 1),
            Direction::E => (0, 1),
            Direction::SE => (1, 1),
            Direction::S => (1, 0),
            Direction::SW => (1, -1),
            Direction::W => (0, -1),
            Direction::NW => (-1, -1),
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::N => Direction::S,
            Direction::NE => Direction::SW,
            Direction::E => Direction::W,
            Direction::SE => Direction::NW,
            Direction::S => Direction::N,
            Direction::SW => Direction::NE,
            Direction::W => Direction::E,
            Direction::NW => Direction::SE,
        }
    }

    /// Index into the reflection tables. Panics on a diagonal.
    #[inline]
    pub fn cardinal_index(self) -> usize {
        match self {
            Direction::N => 0,
            Direction::E => 1,
            Direction::S => 2,
            Direction::W => 3,
            diagonal => panic!("beam cannot travel diagonally ({diagonal:?})"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    pub const ALL: [Rotation; 2] = [Rotation::Clockwise, Rotation::CounterClockwise];

    /// Orientation delta: clockwise is -1, counter-clockwise is +1.
    #[inline]
    pub const fn delta(self) -> i16 {
        match self {
            Rotation::Clockwise => -1,
            Rotation::CounterClockwise => 1,
        }
    }
}

/// One player action, applied to the piece on a chosen square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Relocate(Direction),
    Rotate(Rotation),
}

impl Move {
    /// Every move shape in enumeration order.
    pub const ALL: [Move; 10] = [
        Move::Relocate(Direction::N),
        Move::Relocate(Direction::NE),
        Move::Relocate(Direction::E),
        Move::Relocate(Direction::SE),
        Move::Relocate(Direction::S),
        Move::Relocate(Direction::SW),
        Move::Relocate(Direction::W),
        Move::Relocate(Direction::NW),
        Move::Rotate(Rotation::Clockwise),
        Move::Rotate(Rotation::CounterClockwise),
    ];
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Relocate(direction) => write!(f, "{direction:?}"),
            Move::Rotate(Rotation::Clockwise) => write!(f, "CW"),
            Move::Rotate(Rotation::CounterClockwise) => write!(f, "CCW"),
        }
    }
}
