//! Seeded random playout harness for invariant testing.
//!
//! Drives full games by applying uniformly random legal moves until the
//! game ends or a ply cap is reached. Deterministic for a given seed, which
//! keeps failing playouts reproducible. There is no evaluation of any kind
//! here; this is validation machinery, not an opponent.

use rand::{rngs::StdRng, RngExt, SeedableRng};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_game::ChessGame;
use crate::game_state::game_state::GameOutcome;
use crate::move_generation::legal_move_generator::generate_all_legal_moves;
use crate::pieces::piece_types::PieceColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutOutcome {
    Checkmate { winner: PieceColor },
    Stalemate,
    /// The ply cap fired before the game ended.
    MaxPlies,
}

#[derive(Debug)]
pub struct PlayoutResult {
    pub game: ChessGame,
    pub outcome: PlayoutOutcome,
    pub plies: u16,
}

/// Plays random legal moves from the start position until the game ends or
/// `max_plies` moves have been made.
pub fn random_playout(seed: u64, max_plies: u16) -> Result<PlayoutResult, ChessErrors> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = ChessGame::new_game();
    let mut plies = 0u16;

    loop {
        match game.state.outcome {
            GameOutcome::Checkmate { winner } => {
                return Ok(PlayoutResult {
                    game,
                    outcome: PlayoutOutcome::Checkmate { winner },
                    plies,
                })
            }
            GameOutcome::Stalemate => {
                return Ok(PlayoutResult {
                    game,
                    outcome: PlayoutOutcome::Stalemate,
                    plies,
                })
            }
            GameOutcome::Ongoing => {}
        }
        if plies >= max_plies {
            return Ok(PlayoutResult {
                game,
                outcome: PlayoutOutcome::MaxPlies,
                plies,
            });
        }

        // An ongoing game always has at least one legal move.
        let moves = generate_all_legal_moves(&game.state);
        let choice = moves[rng.random_range(0..moves.len())].clone();
        game.try_move(choice.from, choice.to, choice.promotion)?;
        plies += 1;
    }
}
