//! Legal-move node counting for movegen validation.
//!
//! Walks every legal move to a fixed depth and counts leaf nodes. The known
//! reference counts make this the sharpest regression net over castling,
//! en passant, promotion, and check filtering.

use crate::chess_errors::ChessErrors;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_all_legal_moves;

pub fn perft(game: &GameState, depth: u8) -> Result<u64, ChessErrors> {
    if depth == 0 {
        return Ok(1);
    }

    let mut nodes = 0u64;
    for mv in generate_all_legal_moves(game) {
        let mut next = game.clone();
        next.make_move(&mv)?;
        nodes += perft(&next, depth - 1)?;
    }
    Ok(nodes)
}
