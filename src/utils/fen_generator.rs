//! GameState-to-FEN serializer.
//!
//! Exact inverse of the parser: consecutive empty squares are run-length
//! encoded, so eight empties in a rank come out as "8" and a decoded
//! position re-encodes to the original string.

use crate::board::board_location::BoardLocation;
use crate::game_state::game_state::GameState;
use crate::pieces::piece_types::PieceColor;
use crate::utils::algebraic::location_to_algebraic;

pub fn generate_fen(game_state: &GameState) -> String {
    let mut placement = String::new();

    for row in (1..=8i8).rev() {
        let mut empties = 0u8;
        for column in 1..=8i8 {
            match game_state.board.get(BoardLocation { row, column }) {
                Some(piece) => {
                    if empties > 0 {
                        placement.push(char::from(b'0' + empties));
                        empties = 0;
                    }
                    placement.push(piece.fen_char());
                }
                None => empties += 1,
            }
        }
        if empties > 0 {
            placement.push(char::from(b'0' + empties));
        }
        if row > 1 {
            placement.push('/');
        }
    }

    let side = match game_state.turn {
        PieceColor::Light => 'w',
        PieceColor::Dark => 'b',
    };
    let castling = game_state.castling.to_fen_field();
    let en_passant = game_state
        .en_passant
        .map(|ep| location_to_algebraic(ep.target))
        .unwrap_or_else(|| "-".to_owned());

    format!(
        "{placement} {side} {castling} {en_passant} {} {}",
        game_state.halfmove_clock, game_state.fullmove_number
    )
}
