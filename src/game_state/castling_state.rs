//! The four independent castling rights and their FEN field codec.
//!
//! Rights are only ever revoked, never granted back, except by restoring a
//! full snapshot during undo.

use crate::board::board_location::BoardLocation;
use crate::board::chess_board::ChessBoard;
use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{LONG_ROOK_COLUMN, SHORT_ROOK_COLUMN};
use crate::pieces::piece_types::{PieceColor, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingState {
    pub light_short: bool,
    pub light_long: bool,
    pub dark_short: bool,
    pub dark_long: bool,
}

impl CastlingState {
    pub const fn all() -> Self {
        CastlingState {
            light_short: true,
            light_long: true,
            dark_short: true,
            dark_long: true,
        }
    }

    pub const fn none() -> Self {
        CastlingState {
            light_short: false,
            light_long: false,
            dark_short: false,
            dark_long: false,
        }
    }

    /// Parses the FEN castling field against the already-parsed board.
    ///
    /// A right is kept only when the implied rook actually stands on its
    /// corner; otherwise the character is dropped. Unknown characters fail
    /// the whole field.
    pub fn from_fen_field(field: &str, board: &ChessBoard) -> Result<Self, ChessErrors> {
        let mut state = CastlingState::none();
        if field == "-" {
            return Ok(state);
        }
        if field.is_empty() {
            return Err(ChessErrors::MalformedFen(
                "Castling field must be '-' or one or more of KQkq".to_owned(),
            ));
        }

        for ch in field.chars() {
            let (color, short) = match ch {
                'K' => (PieceColor::Light, true),
                'Q' => (PieceColor::Light, false),
                'k' => (PieceColor::Dark, true),
                'q' => (PieceColor::Dark, false),
                _ => {
                    return Err(ChessErrors::MalformedFen(format!(
                        "Invalid castling rights character: {ch}"
                    )))
                }
            };
            if rook_on_corner(board, color, short) {
                state.grant(color, short);
            }
        }

        Ok(state)
    }

    pub fn to_fen_field(&self) -> String {
        let mut field = String::new();
        if self.light_short {
            field.push('K');
        }
        if self.light_long {
            field.push('Q');
        }
        if self.dark_short {
            field.push('k');
        }
        if self.dark_long {
            field.push('q');
        }
        if field.is_empty() {
            field.push('-');
        }
        field
    }

    pub fn allows(&self, color: PieceColor, short: bool) -> bool {
        match (color, short) {
            (PieceColor::Light, true) => self.light_short,
            (PieceColor::Light, false) => self.light_long,
            (PieceColor::Dark, true) => self.dark_short,
            (PieceColor::Dark, false) => self.dark_long,
        }
    }

    fn grant(&mut self, color: PieceColor, short: bool) {
        match (color, short) {
            (PieceColor::Light, true) => self.light_short = true,
            (PieceColor::Light, false) => self.light_long = true,
            (PieceColor::Dark, true) => self.dark_short = true,
            (PieceColor::Dark, false) => self.dark_long = true,
        }
    }

    /// Permanently clears one right.
    pub fn revoke(&mut self, color: PieceColor, short: bool) {
        match (color, short) {
            (PieceColor::Light, true) => self.light_short = false,
            (PieceColor::Light, false) => self.light_long = false,
            (PieceColor::Dark, true) => self.dark_short = false,
            (PieceColor::Dark, false) => self.dark_long = false,
        }
    }

    /// Clears both rights of `color`; used on any king move.
    pub fn revoke_all(&mut self, color: PieceColor) {
        self.revoke(color, true);
        self.revoke(color, false);
    }
}

fn rook_on_corner(board: &ChessBoard, color: PieceColor, short: bool) -> bool {
    let column = if short {
        SHORT_ROOK_COLUMN
    } else {
        LONG_ROOK_COLUMN
    };
    let corner = BoardLocation {
        row: color.home_row(),
        column,
    };
    matches!(
        board.get(corner),
        Some(piece) if piece.color == color && piece.kind == PieceKind::Rook
    )
}

#[cfg(test)]
mod tests {
    use super::CastlingState;
    use crate::board::board_location::BoardLocation;
    use crate::board::chess_board::ChessBoard;
    use crate::pieces::piece_types::{Piece, PieceColor, PieceKind};

    fn board_with_corner_rooks() -> ChessBoard {
        let mut board = ChessBoard::new_empty();
        for (row, color) in [(1, PieceColor::Light), (8, PieceColor::Dark)] {
            for column in [1, 8] {
                board.set(
                    BoardLocation { row, column },
                    Some(Piece::new(color, PieceKind::Rook)),
                );
            }
        }
        board
    }

    #[test]
    fn fen_field_round_trip() {
        let board = board_with_corner_rooks();
        let state = CastlingState::from_fen_field("KQkq", &board).expect("KQkq should parse");
        assert_eq!(state, CastlingState::all());
        assert_eq!(state.to_fen_field(), "KQkq");
        assert_eq!(CastlingState::none().to_fen_field(), "-");
    }

    #[test]
    fn right_with_missing_rook_is_dropped() {
        let mut board = board_with_corner_rooks();
        board.set(BoardLocation { row: 1, column: 8 }, None);
        let state = CastlingState::from_fen_field("KQkq", &board).expect("field should parse");
        assert!(!state.light_short);
        assert!(state.light_long && state.dark_short && state.dark_long);
    }

    #[test]
    fn unknown_character_fails_the_field() {
        let board = board_with_corner_rooks();
        assert!(CastlingState::from_fen_field("KQxq", &board).is_err());
        assert!(CastlingState::from_fen_field("", &board).is_err());
    }

    #[test]
    fn revocation_is_one_way() {
        let mut state = CastlingState::all();
        state.revoke(PieceColor::Light, true);
        assert!(!state.allows(PieceColor::Light, true));
        assert!(state.allows(PieceColor::Light, false));
        state.revoke_all(PieceColor::Dark);
        assert_eq!(state.to_fen_field(), "Q");
    }
}
