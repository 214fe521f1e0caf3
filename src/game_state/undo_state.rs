use crate::game_state::castling_state::CastlingState;
use crate::game_state::game_state::GameOutcome;
use crate::moves::chess_move::{ChessMove, EnPassantState};

/// Single undo record pushed by `make_move` and consumed by `undo_move`.
///
/// Snapshots the FULL pre-move castling state rather than the one right a
/// move happens to touch: restoring a partial record cannot guarantee an
/// exact rewind.
#[derive(Debug, Clone)]
pub struct UndoState {
    pub mv: ChessMove,

    pub prev_castling: CastlingState,
    pub prev_en_passant: Option<EnPassantState>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
    pub prev_in_check: bool,
    pub prev_outcome: GameOutcome,
}
