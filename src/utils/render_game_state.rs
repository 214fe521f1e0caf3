//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and
//! diagnostics in text environments.

use crate::board::board_location::BoardLocation;
use crate::game_state::game_state::GameState;
use crate::pieces::piece_types::{Piece, PieceColor, PieceKind};

/// Render the board to a Unicode string for terminal output, rank 8 at the
/// top.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in (1..=8i8).rev() {
        out.push(char::from(b'0' + row as u8));
        out.push(' ');

        for column in 1..=8i8 {
            match game_state.board.get(BoardLocation { row, column }) {
                Some(piece) => out.push(piece_to_unicode(&piece)),
                None => out.push('·'),
            }
            if column < 8 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + row as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: &Piece) -> char {
    match (piece.color, piece.kind) {
        (PieceColor::Light, PieceKind::Pawn) => '♙',
        (PieceColor::Light, PieceKind::Knight) => '♘',
        (PieceColor::Light, PieceKind::Bishop) => '♗',
        (PieceColor::Light, PieceKind::Rook) => '♖',
        (PieceColor::Light, PieceKind::Queen) => '♕',
        (PieceColor::Light, PieceKind::King) => '♔',
        (PieceColor::Dark, PieceKind::Pawn) => '♟',
        (PieceColor::Dark, PieceKind::Knight) => '♞',
        (PieceColor::Dark, PieceKind::Bishop) => '♝',
        (PieceColor::Dark, PieceKind::Rook) => '♜',
        (PieceColor::Dark, PieceKind::Queen) => '♛',
        (PieceColor::Dark, PieceKind::King) => '♚',
    }
}
