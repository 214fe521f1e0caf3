//! The playable game façade: live state plus branching history.
//!
//! `ChessGame` wires the proposal flow together — look up the matching
//! legal move, apply it, record it — and keeps the history cursor and the
//! live `GameState` in lockstep during undo/redo navigation. Undoing into
//! the past and playing a different move opens a variation; the earlier
//! continuation is kept as a sibling line.

use crate::board::board_location::BoardLocation;
use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::game_state::GameState;
use crate::history::move_tree::MoveTree;
use crate::moves::chess_move::ChessMove;
use crate::pieces::piece_types::PieceKind;

#[derive(Debug, Clone)]
pub struct ChessGame {
    pub state: GameState,
    pub move_tree: MoveTree,
    /// FEN the game started from; PGN export needs it for set-up games.
    pub initial_fen: String,
}

impl ChessGame {
    pub fn new_game() -> Self {
        ChessGame {
            state: GameState::new_game(),
            move_tree: MoveTree::new(),
            initial_fen: STARTING_POSITION_FEN.to_owned(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        let state = GameState::from_fen(fen)?;
        let initial_fen = state.get_fen();
        Ok(ChessGame {
            state,
            move_tree: MoveTree::new(),
            initial_fen,
        })
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        self.state.get_fen()
    }

    /// Proposes a move. On success the committed move (check/checkmate
    /// flags filled in) is recorded at the history cursor and returned;
    /// rejection leaves both state and history untouched.
    pub fn try_move(
        &mut self,
        from: BoardLocation,
        to: BoardLocation,
        promotion: Option<PieceKind>,
    ) -> Result<ChessMove, ChessErrors> {
        let committed = self.state.try_move(from, to, promotion)?;
        self.move_tree.add_move(committed.clone());
        Ok(committed)
    }

    /// Takes back the move under the cursor. `None` when already at the
    /// starting position.
    pub fn undo(&mut self) -> Option<ChessMove> {
        self.move_tree.cursor()?;
        let mv = self.state.undo_move().ok()?;
        self.move_tree.step_back();
        Some(mv)
    }

    /// Replays the main continuation from the cursor, if there is one.
    pub fn redo(&mut self) -> Option<ChessMove> {
        let next = self.move_tree.peek_forward()?;
        let mv = self.move_tree.node(next)?.mv.clone();
        let committed = self.state.apply_move(mv).ok()?;
        self.move_tree.step_forward();
        Some(committed)
    }
}

#[cfg(test)]
mod tests {
    use super::ChessGame;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::pieces::piece_types::PieceKind;
    use crate::utils::algebraic::algebraic_to_location;

    fn play(game: &mut ChessGame, from: &str, to: &str) {
        let from = algebraic_to_location(from).expect("from square should parse");
        let to = algebraic_to_location(to).expect("to square should parse");
        game.try_move(from, to, None).expect("move should be legal");
    }

    #[test]
    fn undo_redo_walk_the_main_line() {
        let mut game = ChessGame::new_game();
        play(&mut game, "e2", "e4");
        play(&mut game, "e7", "e5");
        let after_two = game.get_fen();

        let taken_back = game.undo().expect("one move to take back");
        assert_eq!(
            taken_back.to,
            algebraic_to_location("e5").expect("e5 should parse")
        );
        game.undo().expect("second move to take back");
        assert_eq!(game.get_fen(), STARTING_POSITION_FEN);
        assert!(game.undo().is_none());

        game.redo().expect("redo e4");
        game.redo().expect("redo e5");
        assert_eq!(game.get_fen(), after_two);
        assert!(game.redo().is_none());
    }

    #[test]
    fn playing_from_the_past_opens_a_variation() {
        let mut game = ChessGame::new_game();
        play(&mut game, "e2", "e4");
        play(&mut game, "e7", "e5");
        game.undo();

        // A different reply becomes a sibling, not a replacement.
        play(&mut game, "c7", "c5");
        let root = game.move_tree.main_line().next().expect("root move");
        assert_eq!(root.children.len(), 2);

        // The main line still carries the original reply.
        let line: Vec<_> = game.move_tree.main_line().collect();
        assert_eq!(line.len(), 2);
        assert_eq!(
            line[1].mv.to,
            algebraic_to_location("e5").expect("e5 should parse")
        );
    }

    #[test]
    fn promotion_round_trips_through_the_game() {
        let mut game = ChessGame::from_fen("r3k3/1P6/8/8/8/8/8/4K3 w - - 0 1")
            .expect("position should parse");
        let b7 = algebraic_to_location("b7").expect("b7 should parse");
        let a8 = algebraic_to_location("a8").expect("a8 should parse");
        let committed = game
            .try_move(b7, a8, Some(PieceKind::Queen))
            .expect("capturing promotion should be legal");
        assert!(committed.check);
        assert_eq!(committed.promotion, Some(PieceKind::Queen));

        game.undo().expect("promotion should take back");
        assert_eq!(game.get_fen(), game.initial_fen);
    }
}
