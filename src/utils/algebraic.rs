//! Conversions between algebraic coordinates (e.g. "e4") and board
//! locations, reused by the FEN/SAN/PGN components.

use crate::board::board_location::BoardLocation;
use crate::chess_errors::ChessErrors;

/// Convert an algebraic square (for example "e4") to a board location.
#[inline]
pub fn algebraic_to_location(square: &str) -> Result<BoardLocation, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    Ok(BoardLocation {
        row: (rank - b'1' + 1) as i8,
        column: (file - b'a' + 1) as i8,
    })
}

/// Convert a board location to its algebraic square (for example "e4").
#[inline]
pub fn location_to_algebraic(location: BoardLocation) -> String {
    let file = char::from(b'a' + (location.column - 1) as u8);
    let rank = char::from(b'1' + (location.row - 1) as u8);
    format!("{file}{rank}")
}

/// The file letter of a column, used for pawn-capture SAN prefixes.
#[inline]
pub fn column_letter(column: i8) -> char {
    char::from(b'a' + (column - 1) as u8)
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_location, column_letter, location_to_algebraic};
    use crate::board::board_location::BoardLocation;

    #[test]
    fn round_trip_square_conversions() {
        let a1 = algebraic_to_location("a1").expect("a1 should parse");
        assert_eq!(a1, BoardLocation { row: 1, column: 1 });
        let h8 = algebraic_to_location("h8").expect("h8 should parse");
        assert_eq!(h8, BoardLocation { row: 8, column: 8 });
        assert_eq!(location_to_algebraic(a1), "a1");
        assert_eq!(location_to_algebraic(h8), "h8");
        assert_eq!(column_letter(5), 'e');
    }

    #[test]
    fn malformed_squares_are_rejected() {
        assert!(algebraic_to_location("").is_err());
        assert!(algebraic_to_location("e").is_err());
        assert!(algebraic_to_location("e44").is_err());
        assert!(algebraic_to_location("i4").is_err());
        assert!(algebraic_to_location("e9").is_err());
        assert!(algebraic_to_location("4e").is_err());
    }
}
