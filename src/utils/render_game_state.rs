//! Terminal-oriented Unicode board renderer.
//!
//! One glyph per owner, kind and orientation so a position can be read back
//! by eye in tests, logs and diagnostics.

use crate::game_state::game_state::{Board, GameState};
use crate::game_state::laser_types::{Piece, PieceKind, Player, COLUMNS, ROWS};

pub const EMPTY_GLYPH: char = '⋅';

/// Render the board of `game_state`, row 0 at the top.
pub fn render_game_state(game_state: &GameState) -> String {
    render_board(game_state.board())
}

pub fn render_board(board: &Board) -> String {
    let mut out = String::with_capacity((ROWS + 1) * (2 * COLUMNS + 2) * 3);

    out.push(' ');
    for col in 0..COLUMNS {
        out.push(' ');
        out.push(char::from(b'0' + col as u8));
    }
    out.push('\n');

    for (row, cells) in board.rows().iter().enumerate() {
        out.push(char::from(b'0' + row as u8));
        for cell in cells {
            out.push(' ');
            out.push(cell.piece().map_or(EMPTY_GLYPH, piece_glyph));
        }
        if row + 1 < ROWS {
            out.push('\n');
        }
    }

    out
}

pub fn piece_glyph(piece: Piece) -> char {
    let o = usize::from(piece.orientation);
    match (piece.owner, piece.kind) {
        (Player::First, PieceKind::King) => '□',
        (Player::Second, PieceKind::King) => '■',
        (Player::First, PieceKind::Laser) => ['←', '↑'][o],
        (Player::Second, PieceKind::Laser) => ['→', '↓'][o],
        (Player::First, PieceKind::Deflector) => ['◺', '◿', '◹', '◸'][o],
        (Player::Second, PieceKind::Deflector) => ['◣', '◢', '◥', '◤'][o],
        (Player::First, PieceKind::Switch) => ['↘', '↙'][o],
        (Player::Second, PieceKind::Switch) => ['↖', '↗'][o],
        (Player::First, PieceKind::Defender) => ['◁', '▽', '▷', '△'][o],
        (Player::Second, PieceKind::Defender) => ['◀', '▼', '▶', '▲'][o],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::tests::game_with_corner_kings;

    #[test]
    fn corner_kings_render() {
        let game = game_with_corner_kings();
        let expected = [
            "  0 1 2 3 4 5 6 7 8 9",
            "0 ↓ ⋅ ⋅ ⋅ ⋅ ⋅ ⋅ ⋅ ⋅ ⋅",
            "1 ⋅ ■ ⋅ ⋅ ⋅ ⋅ ⋅ ⋅ ⋅ ⋅",
            "2 ⋅ ⋅ ⋅ ⋅ ⋅ ⋅ ⋅ ⋅ ⋅ ⋅",
            "3 ⋅ ⋅ ⋅ ⋅ ⋅ ⋅ ⋅ ⋅ ⋅ ⋅",
            "4 ⋅ ⋅ ⋅ ⋅ ⋅ ⋅ ⋅ ⋅ ⋅ ⋅",
            "5 ⋅ ⋅ ⋅ ⋅ ⋅ ⋅ ⋅ ⋅ ⋅ ⋅",
            "6 ⋅ ⋅ ⋅ ⋅ ⋅ ⋅ ⋅ ⋅ □ ⋅",
            "7 ⋅ ⋅ ⋅ ⋅ ⋅ ⋅ ⋅ ⋅ ⋅ ↑",
        ]
        .join("\n");
        assert_eq!(render_game_state(&game), expected);
        assert_eq!(game.to_string(), expected);
    }

    #[test]
    fn every_orientation_has_its_own_glyph() {
        for owner in Player::ALL {
            for kind in PieceKind::ALL {
                let glyphs: Vec<char> = (0..kind.orientation_count())
                    .map(|o| piece_glyph(Piece::new(owner, kind, o)))
                    .collect();
                let mut unique = glyphs.clone();
                unique.sort_unstable();
                unique.dedup();
                assert_eq!(unique.len(), glyphs.len(), "{owner:?} {kind:?}");
            }
        }
    }
}
