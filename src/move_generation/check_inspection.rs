//! Check and attacked-square detection.
//!
//! Both scans walk the attacker's step catalog directly with castling
//! candidates excluded, which breaks the mutual dependency between castling
//! legality and check detection. Capture-only steps (pawn diagonals) count
//! as attacking their landing square even when it is empty; occupancy gates
//! whether a capture is playable, not whether the square is covered.

use crate::board::board_location::BoardLocation;
use crate::game_state::game_state::GameState;
use crate::pieces::piece_steps::steps_for;
use crate::pieces::piece_types::PieceColor;

/// Longest possible ray on an 8×8 board.
const MAX_RAY: i8 = 7;

/// Whether any piece of `by_color` covers `square`.
pub fn is_square_attacked(game: &GameState, square: BoardLocation, by_color: PieceColor) -> bool {
    for from in game.board.occupied_locations(by_color) {
        let piece = match game.board.get(from) {
            Some(piece) => piece,
            None => continue,
        };
        for step in steps_for(&piece) {
            // Pushes and castling candidates can never capture anything.
            if step.excludes_take {
                continue;
            }
            let limit = step.limit.map(|l| l as i8).unwrap_or(MAX_RAY);
            for repetition in 1..=limit {
                let target =
                    match from.offset_by(step.d_row * repetition, step.d_column * repetition) {
                        Ok(target) => target,
                        Err(_) => break,
                    };
                if target == square {
                    return true;
                }
                if game.board.get(target).is_some() {
                    break;
                }
            }
        }
    }
    false
}

/// Whether `color`'s king is attacked.
///
/// A position without that king is treated as "not in check": speculative
/// boards built during filtering may legitimately lack one.
pub fn is_king_in_check(game: &GameState, color: PieceColor) -> bool {
    match game.board.king_location(color) {
        Some(king_square) => is_square_attacked(game, king_square, color.opposite()),
        None => false,
    }
}
